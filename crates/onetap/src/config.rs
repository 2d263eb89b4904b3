//! Glue between the config file and CLI flags.
//!
//! Loading and saving live in `onetap-config`; this module parses the
//! stored default strings into CLI enums and fills flags the user left
//! unset. Flags and environment variables always win over the file.

use clap::ValueEnum;

use onetap_config::Config;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Parse a stored output value ("table", "json", ...) into the CLI enum.
pub fn parse_output(value: &str) -> Result<OutputFormat, CliError> {
    OutputFormat::from_str(value, true).map_err(|_| CliError::Validation {
        field: "output".into(),
        reason: format!("unknown output format '{value}'"),
    })
}

/// Parse a stored color value ("auto", "always", "never") into the CLI enum.
pub fn parse_color(value: &str) -> Result<ColorMode, CliError> {
    ColorMode::from_str(value, true).map_err(|_| CliError::Validation {
        field: "color".into(),
        reason: format!("unknown color mode '{value}'"),
    })
}

/// Fill unset global flags from the configured defaults.
///
/// A hand-edited config file can hold anything, so unparseable values are
/// logged and skipped rather than failing the whole invocation.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        match parse_output(&cfg.defaults.output) {
            Ok(format) => global.output = Some(format),
            Err(err) => tracing::warn!("ignoring configured output default: {err}"),
        }
    }
    if global.color.is_none() {
        match parse_color(&cfg.defaults.color) {
            Ok(mode) => global.color = Some(mode),
            Err(err) => tracing::warn!("ignoring configured color default: {err}"),
        }
    }
}
