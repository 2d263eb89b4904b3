//! Randomized generators: passwords, UUIDs, lorem text, slugs, random
//! numbers, HSL palettes, and image-service URL builders.

use rand::seq::SliceRandom;

use crate::error::ToolError;

// ── Passwords ───────────────────────────────────────────────────────

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*";

/// Union of all four character classes.
const PASSWORD_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

fn random_char(charset: &str) -> char {
    let bytes = charset.as_bytes();
    char::from(bytes[rand::random_range(0..bytes.len())])
}

/// Uniform draw over the full alphabet; no class is guaranteed.
pub fn password(length: usize) -> Result<String, ToolError> {
    if length == 0 {
        return Err(ToolError::Range {
            field: "length".to_string(),
            reason: "password length must be at least 1".to_string(),
        });
    }
    Ok((0..length).map(|_| random_char(PASSWORD_ALPHABET)).collect())
}

/// Guarantee at least one character from each class, then fill the rest
/// from the full alphabet and shuffle so the seeded characters do not
/// sit at fixed positions.
pub fn strong_password(length: usize) -> Result<String, ToolError> {
    if length < 4 {
        return Err(ToolError::Range {
            field: "length".to_string(),
            reason: "strong passwords need at least 4 characters, one per class".to_string(),
        });
    }
    let mut chars = vec![
        random_char(UPPERCASE),
        random_char(LOWERCASE),
        random_char(DIGITS),
        random_char(SYMBOLS),
    ];
    chars.extend((4..length).map(|_| random_char(PASSWORD_ALPHABET)));
    chars.shuffle(&mut rand::rng());
    Ok(chars.into_iter().collect())
}

// ── Identifiers ─────────────────────────────────────────────────────

pub fn uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ── Lorem ipsum ─────────────────────────────────────────────────────

const LOREM_WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

/// Sentences of 5 to 14 random words, first word capitalized, joined
/// with ". " and period-terminated.
pub fn lorem(sentences: usize) -> Result<String, ToolError> {
    if sentences == 0 {
        return Err(ToolError::Range {
            field: "sentences".to_string(),
            reason: "at least one sentence is required".to_string(),
        });
    }
    let mut out = String::new();
    for _ in 0..sentences {
        let word_count = rand::random_range(5..=14);
        for i in 0..word_count {
            let word = LOREM_WORDS[rand::random_range(0..LOREM_WORDS.len())];
            if i == 0 {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            } else {
                out.push(' ');
                out.push_str(word);
            }
        }
        out.push_str(". ");
    }
    Ok(out.trim_end().to_string())
}

// ── Slugs ───────────────────────────────────────────────────────────

/// Lowercase, keep ASCII alphanumerics, turn whitespace and hyphen runs
/// into single hyphens, and drop everything else. Never starts or ends
/// with a hyphen.
pub fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }
    out
}

// ── Random numbers ──────────────────────────────────────────────────

/// Uniform integer in the inclusive range [min, max].
pub fn random_number(min: i64, max: i64) -> Result<i64, ToolError> {
    if min > max {
        return Err(ToolError::Range {
            field: "bounds".to_string(),
            reason: format!("minimum {min} exceeds maximum {max}"),
        });
    }
    Ok(rand::random_range(min..=max))
}

// ── Color palettes ──────────────────────────────────────────────────

/// Five random HSL colors constrained to mid saturation and lightness
/// so every swatch stays legible.
pub fn palette() -> Vec<String> {
    (0..5)
        .map(|_| {
            let hue = rand::random_range(0..360);
            let saturation = rand::random_range(40..=70);
            let lightness = rand::random_range(45..=65);
            format!("hsl({hue}, {saturation}%, {lightness}%)")
        })
        .collect()
}

// ── Image-service URLs ──────────────────────────────────────────────

/// URL for a square QR code image rendered by api.qrserver.com.
pub fn qr_code_url(data: &str, size: u32) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size={size}x{size}&data={}",
        urlencoding::encode(data)
    )
}

/// URL for a Code 128 barcode image rendered by barcodeapi.org.
pub fn barcode_url(data: &str) -> String {
    format!("https://barcodeapi.org/api/128/{}", urlencoding::encode(data))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn password_has_requested_length() {
        assert_eq!(password(16).unwrap().chars().count(), 16);
        assert_eq!(password(1).unwrap().chars().count(), 1);
    }

    #[test]
    fn password_draws_from_union_alphabet_only() {
        let generated = password(200).unwrap();
        assert!(generated.chars().all(|c| PASSWORD_ALPHABET.contains(c)));
    }

    #[test]
    fn password_rejects_zero_length() {
        assert!(matches!(password(0), Err(ToolError::Range { .. })));
    }

    #[test]
    fn strong_password_contains_every_class() {
        for _ in 0..20 {
            let generated = strong_password(4).unwrap();
            assert_eq!(generated.chars().count(), 4);
            assert!(generated.chars().any(|c| UPPERCASE.contains(c)));
            assert!(generated.chars().any(|c| LOWERCASE.contains(c)));
            assert!(generated.chars().any(|c| DIGITS.contains(c)));
            assert!(generated.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn strong_password_rejects_lengths_below_four() {
        assert!(matches!(strong_password(3), Err(ToolError::Range { .. })));
    }

    #[test]
    fn uuid_is_version_four() {
        let id = uuid();
        assert_eq!(id.len(), 36);
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn uuids_are_unique() {
        assert_ne!(uuid(), uuid());
    }

    #[test]
    fn lorem_produces_requested_sentences() {
        let text = lorem(3).unwrap();
        assert_eq!(text.matches('.').count(), 3);
        assert!(text.ends_with('.'));
        assert!(!text.ends_with(' '));
    }

    #[test]
    fn lorem_sentences_start_capitalized() {
        let text = lorem(1).unwrap();
        let first = text.chars().next().unwrap();
        assert!(first.is_uppercase());
    }

    #[test]
    fn lorem_rejects_zero_sentences() {
        assert!(lorem(0).is_err());
    }

    #[test]
    fn slug_normalizes_punctuation_and_case() {
        assert_eq!(slug("Hello, World!"), "hello-world");
        assert_eq!(slug("  My --- Great  Post  "), "my-great-post");
    }

    #[test]
    fn slug_never_has_edge_hyphens() {
        assert_eq!(slug("--trimmed--"), "trimmed");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn random_number_stays_in_bounds() {
        for _ in 0..50 {
            let n = random_number(-3, 3).unwrap();
            assert!((-3..=3).contains(&n));
        }
    }

    #[test]
    fn random_number_accepts_degenerate_range() {
        assert_eq!(random_number(7, 7).unwrap(), 7);
    }

    #[test]
    fn random_number_rejects_inverted_bounds() {
        assert!(matches!(random_number(5, 1), Err(ToolError::Range { .. })));
    }

    #[test]
    fn palette_has_five_hsl_colors() {
        let colors = palette();
        assert_eq!(colors.len(), 5);
        for color in colors {
            assert!(color.starts_with("hsl("));
            assert!(color.ends_with("%)"));
        }
    }

    #[test]
    fn qr_url_percent_encodes_data() {
        assert_eq!(
            qr_code_url("hello world", 200),
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=hello%20world"
        );
    }

    #[test]
    fn barcode_url_percent_encodes_data() {
        assert_eq!(
            barcode_url("ITEM 42"),
            "https://barcodeapi.org/api/128/ITEM%2042"
        );
    }
}
