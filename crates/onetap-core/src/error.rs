// ── Tool Errors ──
//
// Every transformation in this crate fails through one of these four
// variants. The split mirrors what can actually go wrong with typed-in
// input: encoded data that does not decode, structured text that does
// not parse, a field whose shape is wrong, and a number outside the
// domain an operation accepts. Callers decide presentation and exit
// codes; this crate only reports what happened.

use thiserror::Error;

/// Unified error type for all transformation modules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Encoded input that cannot be decoded by the named codec.
    #[error("invalid {codec} input: {reason}")]
    Decode { codec: String, reason: String },

    /// Structured text (JSON, XML, expressions, dates) that does not parse.
    #[error("cannot parse {format}: {reason}")]
    Parse { format: String, reason: String },

    /// A field whose shape is wrong (bad token layout, bad color string).
    #[error("malformed {field}: {reason}")]
    Format { field: String, reason: String },

    /// A numeric argument outside the accepted domain.
    #[error("{field} out of range: {reason}")]
    Range { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_codec_and_reason() {
        let err = ToolError::Decode {
            codec: "Base64".into(),
            reason: "bad padding".into(),
        };
        assert_eq!(err.to_string(), "invalid Base64 input: bad padding");
    }

    #[test]
    fn display_includes_range_field() {
        let err = ToolError::Range {
            field: "length".into(),
            reason: "must be at least 1".into(),
        };
        assert_eq!(err.to_string(), "length out of range: must be at least 1");
    }
}
