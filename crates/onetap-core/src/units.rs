//! Unit conversions through a fixed base unit per category.
//!
//! Every category stores "units per base" factors, so a conversion is
//! one divide into the base followed by one multiply out of it.

use strum::Display;

use crate::error::ToolError;

// ── Length (base: meters) ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Feet,
    Inches,
    Centimeters,
    Kilometers,
    Miles,
}

impl LengthUnit {
    fn per_meter(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Feet => 3.280_84,
            Self::Inches => 39.370_1,
            Self::Centimeters => 100.0,
            Self::Kilometers => 0.001,
            Self::Miles => 0.000_621_371,
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value / from.per_meter() * to.per_meter()
}

// ── Weight (base: kilograms) ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WeightUnit {
    Kilograms,
    Grams,
    Pounds,
    Ounces,
    Stone,
}

impl WeightUnit {
    fn per_kilogram(self) -> f64 {
        match self {
            Self::Kilograms => 1.0,
            Self::Grams => 1000.0,
            Self::Pounds => 2.204_62,
            Self::Ounces => 35.274,
            Self::Stone => 0.157_473,
        }
    }
}

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    value / from.per_kilogram() * to.per_kilogram()
}

// ── Temperature ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Affine conversion routed through Celsius.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    };
    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    }
}

// ── Currency (base: USD, static demo rates) ─────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CurrencyUnit {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

impl CurrencyUnit {
    /// Fixed demonstration rates, not a market feed.
    fn per_usd(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Eur => 0.92,
            Self::Gbp => 0.79,
            Self::Jpy => 149.50,
            Self::Cad => 1.36,
            Self::Aud => 1.52,
        }
    }
}

pub fn convert_currency(value: f64, from: CurrencyUnit, to: CurrencyUnit) -> f64 {
    value / from.per_usd() * to.per_usd()
}

// ── File sizes ──────────────────────────────────────────────────────

const FILE_SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

/// Render a byte count with the largest unit that keeps the value at or
/// above 1, capped at TB, with two decimals.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn humanize_file_size(bytes: f64) -> Result<String, ToolError> {
    if !bytes.is_finite() || bytes < 0.0 {
        return Err(ToolError::Range {
            field: "bytes".to_string(),
            reason: "byte count must be a non-negative number".to_string(),
        });
    }
    if bytes < 1.0 {
        return Ok("0 Bytes".to_string());
    }
    let exponent = (bytes.ln() / 1024_f64.ln()).floor();
    let index = (exponent as usize).min(FILE_SIZE_UNITS.len() - 1);
    let scaled = bytes / 1024_f64.powi(i32::try_from(index).unwrap_or(0));
    Ok(format!("{scaled:.2} {}", FILE_SIZE_UNITS[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn meters_to_feet() {
        assert!(close(convert_length(1.0, LengthUnit::Meters, LengthUnit::Feet), 3.280_84));
    }

    #[test]
    fn length_identity_conversion() {
        assert!(close(convert_length(12.5, LengthUnit::Miles, LengthUnit::Miles), 12.5));
    }

    #[test]
    fn kilometers_to_miles() {
        assert!(close(
            convert_length(5.0, LengthUnit::Kilometers, LengthUnit::Miles),
            3.106_855,
        ));
    }

    #[test]
    fn kilograms_to_pounds() {
        assert!(close(convert_weight(1.0, WeightUnit::Kilograms, WeightUnit::Pounds), 2.204_62));
    }

    #[test]
    fn grams_to_ounces_round_trip() {
        let ounces = convert_weight(500.0, WeightUnit::Grams, WeightUnit::Ounces);
        let back = convert_weight(ounces, WeightUnit::Ounces, WeightUnit::Grams);
        assert!(close(back, 500.0));
    }

    #[test]
    fn freezing_point_in_fahrenheit() {
        assert!(close(
            convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            32.0,
        ));
    }

    #[test]
    fn boiling_point_in_kelvin() {
        assert!(close(
            convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
            373.15,
        ));
    }

    #[test]
    fn fahrenheit_to_celsius() {
        assert!(close(
            convert_temperature(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
            100.0,
        ));
    }

    #[test]
    fn usd_to_eur_uses_demo_rate() {
        assert!(close(convert_currency(100.0, CurrencyUnit::Usd, CurrencyUnit::Eur), 92.0));
    }

    #[test]
    fn cross_currency_routes_through_usd() {
        // 92 EUR -> 100 USD -> 14950 JPY
        assert!(close(
            convert_currency(92.0, CurrencyUnit::Eur, CurrencyUnit::Jpy),
            14_950.0,
        ));
    }

    #[test]
    fn file_size_picks_the_right_unit() {
        assert_eq!(humanize_file_size(0.0), Ok("0 Bytes".to_string()));
        assert_eq!(humanize_file_size(512.0), Ok("512.00 Bytes".to_string()));
        assert_eq!(humanize_file_size(1024.0), Ok("1.00 KB".to_string()));
        assert_eq!(humanize_file_size(1_572_864.0), Ok("1.50 MB".to_string()));
    }

    #[test]
    fn file_size_caps_at_terabytes() {
        let huge = 1024_f64.powi(5) * 3.0;
        assert_eq!(humanize_file_size(huge), Ok("3072.00 TB".to_string()));
    }

    #[test]
    fn file_size_rejects_negative_and_non_finite() {
        assert!(humanize_file_size(-1.0).is_err());
        assert!(humanize_file_size(f64::NAN).is_err());
        assert!(humanize_file_size(f64::INFINITY).is_err());
    }

    #[test]
    fn unit_display_names() {
        assert_eq!(LengthUnit::Kilometers.to_string(), "kilometers");
        assert_eq!(CurrencyUnit::Eur.to_string(), "EUR");
        assert_eq!(TemperatureUnit::Kelvin.to_string(), "kelvin");
    }
}
