//! Demo JSON Web Token helpers.
//!
//! The encoder produces a structurally valid token whose third segment
//! is an obscured constant, not an HMAC. Nothing here signs or verifies
//! anything -- these tokens are for inspecting the format, never for
//! authentication.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;

const DEMO_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;
const DEMO_SIGNATURE_TAG: &str = "demo-signature-not-secure";

/// Build `header.payload.signature` from a JSON payload. The signature
/// segment encodes a fixed marker string so decoded tokens are obviously
/// unsigned.
pub fn encode_demo(payload: &str) -> Result<String, ToolError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| ToolError::Parse {
        format: "JSON payload".to_string(),
        reason: e.to_string(),
    })?;
    let compact = serde_json::to_string(&value).map_err(|e| ToolError::Parse {
        format: "JSON payload".to_string(),
        reason: e.to_string(),
    })?;
    Ok(format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(DEMO_HEADER),
        URL_SAFE_NO_PAD.encode(compact),
        URL_SAFE_NO_PAD.encode(DEMO_SIGNATURE_TAG),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    /// Raw third segment; never verified.
    pub signature: String,
}

/// Split and decode without verifying. Header and payload must be
/// base64url-encoded JSON; the signature segment is kept opaque.
pub fn decode(token: &str) -> Result<DecodedToken, ToolError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(ToolError::Format {
            field: "token".to_string(),
            reason: format!("expected 3 dot-separated segments, found {}", segments.len()),
        });
    };
    Ok(DecodedToken {
        header: decode_json_segment(header, "token header")?,
        payload: decode_json_segment(payload, "token payload")?,
        signature: (*signature).to_string(),
    })
}

/// Accepts both padded and unpadded base64url segments.
fn decode_json_segment(segment: &str, field: &str) -> Result<Value, ToolError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| ToolError::Format {
            field: field.to_string(),
            reason: format!("invalid base64url: {e}"),
        })?;
    serde_json::from_slice(&bytes).map_err(|e| ToolError::Format {
        field: field.to_string(),
        reason: format!("not valid JSON: {e}"),
    })
}
