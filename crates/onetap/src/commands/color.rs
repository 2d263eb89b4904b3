//! Color conversion command handlers.

use owo_colors::OwoColorize;

use onetap_core::color::{self, ColorTriple};

use crate::cli::{ColorArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn detail(t: &ColorTriple, colored: bool) -> String {
    let mut lines = Vec::new();
    if colored {
        if let Ok(rgb) = color::parse_hex(&t.hex) {
            let swatch = "      ".on_truecolor(rgb.r, rgb.g, rgb.b).to_string();
            lines.push(format!("Swatch: {swatch}"));
        }
    }
    lines.push(format!("Hex:    {}", t.hex));
    lines.push(format!("RGB:    {}", t.rgb));
    lines.push(format!("HSL:    {}", t.hsl));
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ColorArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let triple = color::convert(&args.value)?;
    let colored = output::should_color(&global.color_mode());
    let out = output::render_single(
        &global.output_format(),
        &triple,
        |t| detail(t, colored),
        |t| t.hex.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
