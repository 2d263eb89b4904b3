//! Color conversions between hex, RGB, and HSL.

use serde::Serialize;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

// ── Parsing ─────────────────────────────────────────────────────────

/// Parse `#rrggbb` (leading `#` optional) into channels.
pub fn parse_hex(input: &str) -> Result<Rgb, ToolError> {
    let digits = input.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::Format {
            field: "hex color".to_string(),
            reason: "expected exactly 6 hex digits".to_string(),
        });
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|e| ToolError::Format {
            field: "hex color".to_string(),
            reason: e.to_string(),
        })
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Parse `r, g, b` (comma or space separated) into channels.
pub fn parse_rgb(input: &str) -> Result<Rgb, ToolError> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ToolError::Format {
            field: "rgb color".to_string(),
            reason: format!("expected 3 components, found {}", parts.len()),
        });
    };
    Ok(Rgb {
        r: parse_channel(r)?,
        g: parse_channel(g)?,
        b: parse_channel(b)?,
    })
}

fn parse_channel(raw: &str) -> Result<u8, ToolError> {
    raw.parse().map_err(|_| ToolError::Format {
        field: "rgb color".to_string(),
        reason: format!("channel '{raw}' is not an integer 0-255"),
    })
}

// ── Conversions ─────────────────────────────────────────────────────

pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta.abs() < f64::EPSILON {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: lightness * 100.0,
        };
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let hue = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    Hsl {
        h: hue * 60.0,
        s: saturation * 100.0,
        l: lightness * 100.0,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let hue = ((hsl.h % 360.0) + 360.0) % 360.0 / 360.0;
    let sat = (hsl.s / 100.0).clamp(0.0, 1.0);
    let light = (hsl.l / 100.0).clamp(0.0, 1.0);

    if sat.abs() < f64::EPSILON {
        let v = channel_from_unit(light);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if light < 0.5 {
        light * (1.0 + sat)
    } else {
        light + sat - light * sat
    };
    let p = 2.0 * light - q;
    Rgb {
        r: channel_from_unit(hue_to_unit(p, q, hue + 1.0 / 3.0)),
        g: channel_from_unit(hue_to_unit(p, q, hue)),
        b: channel_from_unit(hue_to_unit(p, q, hue - 1.0 / 3.0)),
    }
}

fn hue_to_unit(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_unit(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ── Combined rendering ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTriple {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

/// Parse either input form and render all three notations. A 6-digit
/// string with no separators is treated as hex.
pub fn convert(input: &str) -> Result<ColorTriple, ToolError> {
    let trimmed = input.trim();
    let bare_hex = trimmed.len() == 6 && trimmed.chars().all(|c| c.is_ascii_hexdigit());
    let rgb = if trimmed.starts_with('#') || bare_hex {
        parse_hex(trimmed)?
    } else {
        parse_rgb(trimmed)?
    };
    Ok(render_triple(rgb))
}

pub fn render_triple(rgb: Rgb) -> ColorTriple {
    let hsl = rgb_to_hsl(rgb);
    ColorTriple {
        hex: to_hex(rgb),
        rgb: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        hsl: format!("hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s, hsl.l),
    }
}
