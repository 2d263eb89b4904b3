//! Text transforms: case styles, cleanup, line operations, statistics,
//! and pattern extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ── Case and cleanup transforms ─────────────────────────────────────

/// A text operation that always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    Upper,
    Lower,
    Title,
    Camel,
    Snake,
    Kebab,
    Reverse,
    CleanWhitespace,
    RemoveWhitespace,
    SortLines,
    DedupLines,
}

pub fn transform(op: TextOp, input: &str) -> String {
    match op {
        TextOp::Upper => input.to_uppercase(),
        TextOp::Lower => input.to_lowercase(),
        TextOp::Title => title_case(input),
        TextOp::Camel => camel_case(input),
        TextOp::Snake => delimited_case(input, '_'),
        TextOp::Kebab => delimited_case(input, '-'),
        TextOp::Reverse => input.chars().rev().collect(),
        TextOp::CleanWhitespace => input.split_whitespace().collect::<Vec<_>>().join(" "),
        TextOp::RemoveWhitespace => input.chars().filter(|c| !c.is_whitespace()).collect(),
        TextOp::SortLines => sort_lines(input),
        TextOp::DedupLines => dedup_lines(input),
    }
}

/// Uppercase the first character of each whitespace-delimited word and
/// lowercase the rest. Whitespace is preserved as-is.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Split into words at non-alphanumeric characters and at lower-to-upper
/// boundaries, so camelCase, snake_case, and kebab-case inputs all break
/// apart the same way.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if prev_lower && ch.is_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = ch.is_lowercase() || ch.is_numeric();
            current.push(ch);
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

fn delimited_case(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(input).iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&word.to_lowercase());
    }
    out
}

fn sort_lines(input: &str) -> String {
    let mut lines: Vec<&str> = input.lines().collect();
    lines.sort_unstable();
    lines.join("\n")
}

/// Remove duplicate lines, keeping the first occurrence of each.
fn dedup_lines(input: &str) -> String {
    let mut seen = HashSet::new();
    input
        .lines()
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Statistics ──────────────────────────────────────────────────────

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub chars_no_spaces: usize,
    pub lines: usize,
    pub paragraphs: usize,
}

pub fn stats(input: &str) -> TextStats {
    TextStats {
        words: input.split_whitespace().count(),
        chars: input.chars().count(),
        chars_no_spaces: input.chars().filter(|c| !c.is_whitespace()).count(),
        lines: input.lines().count(),
        paragraphs: PARAGRAPH_BREAK
            .split(input)
            .filter(|block| !block.trim().is_empty())
            .count(),
    }
}

// ── Pattern extraction ──────────────────────────────────────────────

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("valid url pattern"));

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractKind {
    Emails,
    Urls,
    Numbers,
}

/// All non-overlapping matches in input order. Duplicates are kept.
pub fn extract(kind: ExtractKind, input: &str) -> Vec<String> {
    let pattern = match kind {
        ExtractKind::Emails => &*EMAIL,
        ExtractKind::Urls => &*URL,
        ExtractKind::Numbers => &*NUMBER,
    };
    pattern
        .find_iter(input)
        .map(|found| found.as_str().to_string())
        .collect()
}
