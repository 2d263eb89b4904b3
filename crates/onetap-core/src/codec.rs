//! Encode/decode pairs: Base64, URL percent-encoding, binary, hex, Morse.
//!
//! Binary and hex work per code point: values up to 0xFF render as one
//! byte-wide token, anything above renders wider and is rejected on
//! decode, so a failed round trip reports an error instead of mangling
//! the text.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Base64,
    Url,
    Binary,
    Hex,
    Morse,
}

impl Codec {
    fn label(self) -> &'static str {
        match self {
            Self::Base64 => "Base64",
            Self::Url => "URL",
            Self::Binary => "binary",
            Self::Hex => "hex",
            Self::Morse => "Morse",
        }
    }
}

// ── Encoding ────────────────────────────────────────────────────────

#[allow(clippy::unnecessary_wraps)]
pub fn encode(codec: Codec, input: &str) -> Result<String, ToolError> {
    Ok(match codec {
        Codec::Base64 => STANDARD.encode(input),
        Codec::Url => urlencoding::encode(input).into_owned(),
        Codec::Binary => per_code_point(input, |code| format!("{code:08b}")),
        Codec::Hex => per_code_point(input, |code| format!("{code:02x}")),
        Codec::Morse => morse_encode(input),
    })
}

fn per_code_point(input: &str, render: impl Fn(u32) -> String) -> String {
    input
        .chars()
        .map(|ch| render(u32::from(ch)))
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Decoding ────────────────────────────────────────────────────────

pub fn decode(codec: Codec, input: &str) -> Result<String, ToolError> {
    match codec {
        Codec::Base64 => decode_base64(input),
        Codec::Url => decode_url(input),
        Codec::Binary => decode_tokens(input, 2, Codec::Binary),
        Codec::Hex => decode_tokens(input, 16, Codec::Hex),
        Codec::Morse => Ok(morse_decode(input)),
    }
}

fn decode_base64(input: &str) -> Result<String, ToolError> {
    let bytes = STANDARD.decode(input.trim()).map_err(|e| ToolError::Decode {
        codec: Codec::Base64.label().to_string(),
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|_| ToolError::Decode {
        codec: Codec::Base64.label().to_string(),
        reason: "decoded bytes are not valid UTF-8".to_string(),
    })
}

fn decode_url(input: &str) -> Result<String, ToolError> {
    check_percent_sequences(input)?;
    urlencoding::decode(input)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| ToolError::Decode {
            codec: Codec::Url.label().to_string(),
            reason: "decoded bytes are not valid UTF-8".to_string(),
        })
}

/// Reject `%` signs that are not followed by two hex digits before
/// handing off to the (lenient) percent decoder.
fn check_percent_sequences(input: &str) -> Result<(), ToolError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while let Some(&byte) = bytes.get(i) {
        if byte == b'%' {
            let valid = matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            );
            if !valid {
                return Err(ToolError::Decode {
                    codec: Codec::Url.label().to_string(),
                    reason: format!("incomplete percent sequence at byte {i}"),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Decode whitespace-separated numeric tokens in the given radix, one
/// code point per token. Tokens above 0xFF are refused.
fn decode_tokens(input: &str, radix: u32, codec: Codec) -> Result<String, ToolError> {
    let mut out = String::new();
    for token in input.split_whitespace() {
        let code = u32::from_str_radix(token, radix).map_err(|_| ToolError::Format {
            field: format!("{} token", codec.label()),
            reason: format!("'{token}' is not a base-{radix} number"),
        })?;
        if code > 0xFF {
            return Err(ToolError::Format {
                field: format!("{} token", codec.label()),
                reason: format!("'{token}' exceeds one byte"),
            });
        }
        let ch = char::from_u32(code).ok_or_else(|| ToolError::Format {
            field: format!("{} token", codec.label()),
            reason: format!("'{token}' is not a valid character"),
        })?;
        out.push(ch);
    }
    Ok(out)
}

// ── Morse ───────────────────────────────────────────────────────────

/// International Morse for letters and digits; a word break maps to "/".
const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "/"),
];

/// Characters outside the table pass through unchanged.
fn morse_encode(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            let upper = ch.to_ascii_uppercase();
            MORSE_TABLE
                .iter()
                .find(|(letter, _)| *letter == upper)
                .map_or_else(|| ch.to_string(), |(_, code)| (*code).to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unrecognized tokens are kept literally so nothing is silently lost.
fn morse_decode(input: &str) -> String {
    input
        .split_whitespace()
        .map(|token| {
            MORSE_TABLE
                .iter()
                .find(|(_, code)| *code == token)
                .map_or_else(|| token.to_string(), |(letter, _)| letter.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trip() {
        assert_eq!(encode(Codec::Base64, "hello"), Ok("aGVsbG8=".to_string()));
        assert_eq!(decode(Codec::Base64, "aGVsbG8="), Ok("hello".to_string()));
    }

    #[test]
    fn base64_rejects_bad_alphabet() {
        let err = decode(Codec::Base64, "not!!valid");
        assert!(matches!(err, Err(ToolError::Decode { codec, .. }) if codec == "Base64"));
    }

    #[test]
    fn url_encodes_reserved_characters() {
        assert_eq!(
            encode(Codec::Url, "a b&c=d"),
            Ok("a%20b%26c%3Dd".to_string())
        );
    }

    #[test]
    fn url_decode_round_trip() {
        assert_eq!(decode(Codec::Url, "a%20b%26c"), Ok("a b&c".to_string()));
    }

    #[test]
    fn url_decode_rejects_truncated_percent() {
        assert!(decode(Codec::Url, "abc%2").is_err());
        assert!(decode(Codec::Url, "abc%zz").is_err());
        assert!(decode(Codec::Url, "abc%").is_err());
    }

    #[test]
    fn binary_encodes_one_token_per_character() {
        assert_eq!(
            encode(Codec::Binary, "Hi"),
            Ok("01001000 01101001".to_string())
        );
    }

    #[test]
    fn binary_decode_round_trip() {
        assert_eq!(decode(Codec::Binary, "01001000 01101001"), Ok("Hi".to_string()));
    }

    #[test]
    fn binary_decode_rejects_wide_tokens() {
        let err = decode(Codec::Binary, "100000000");
        assert!(matches!(err, Err(ToolError::Format { .. })));
    }

    #[test]
    fn binary_decode_rejects_non_binary_digits() {
        assert!(decode(Codec::Binary, "01001002").is_err());
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(encode(Codec::Hex, "Hi!"), Ok("48 69 21".to_string()));
        assert_eq!(decode(Codec::Hex, "48 69 21"), Ok("Hi!".to_string()));
    }

    #[test]
    fn hex_encodes_wide_code_points_beyond_one_byte() {
        assert_eq!(encode(Codec::Hex, "é"), Ok("e9".to_string()));
        assert_eq!(encode(Codec::Hex, "€"), Ok("20ac".to_string()));
    }

    #[test]
    fn hex_decode_rejects_tokens_beyond_one_byte() {
        assert!(decode(Codec::Hex, "20ac").is_err());
    }

    #[test]
    fn morse_encode_classic_distress_call() {
        assert_eq!(encode(Codec::Morse, "SOS"), Ok("... --- ...".to_string()));
    }

    #[test]
    fn morse_maps_spaces_to_slashes() {
        assert_eq!(
            encode(Codec::Morse, "HI YOU"),
            Ok(".... .. / -.-- --- ..-".to_string())
        );
        assert_eq!(decode(Codec::Morse, ".... .. / -.-- --- ..-"), Ok("HI YOU".to_string()));
    }

    #[test]
    fn morse_is_case_insensitive_on_encode() {
        assert_eq!(encode(Codec::Morse, "sos"), encode(Codec::Morse, "SOS"));
    }

    #[test]
    fn morse_passes_unknown_characters_through() {
        assert_eq!(encode(Codec::Morse, "A!"), Ok(".- !".to_string()));
        assert_eq!(decode(Codec::Morse, ".- !"), Ok("A!".to_string()));
    }
}
