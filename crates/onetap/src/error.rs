//! CLI error types with miette diagnostics.
//!
//! Maps `ToolError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use onetap_core::ToolError;

/// Exit codes for scripting against the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const DECODE: i32 = 3;
    pub const PARSE: i32 = 4;
    pub const FORMAT: i32 = 5;
    pub const RANGE: i32 = 6;
    pub const NOT_FOUND: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Transformation ───────────────────────────────────────────────

    #[error("invalid {codec} input: {reason}")]
    #[diagnostic(
        code(onetap::decode),
        help("Check that the input was produced by the matching encoder.")
    )]
    Decode { codec: String, reason: String },

    #[error("cannot parse {format}: {reason}")]
    #[diagnostic(code(onetap::parse))]
    Parse { format: String, reason: String },

    #[error("malformed {field}: {reason}")]
    #[diagnostic(code(onetap::format))]
    Format { field: String, reason: String },

    #[error("{field} out of range: {reason}")]
    #[diagnostic(code(onetap::range))]
    Range { field: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(onetap::not_found),
        help("Run: onetap {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(onetap::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(onetap::config))]
    Config(#[from] onetap_config::ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Decode { .. } => exit_code::DECODE,
            Self::Parse { .. } => exit_code::PARSE,
            Self::Format { .. } => exit_code::FORMAT,
            Self::Range { .. } => exit_code::RANGE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ToolError → CliError mapping ─────────────────────────────────────

impl From<ToolError> for CliError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::Decode { codec, reason } => CliError::Decode { codec, reason },
            ToolError::Parse { format, reason } => CliError::Parse { format, reason },
            ToolError::Format { field, reason } => CliError::Format { field, reason },
            ToolError::Range { field, reason } => CliError::Range { field, reason },
        }
    }
}
