//! Structured-text formatters: JSON, CSS, HTML entities, XML.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;
use serde_json::Value;

use crate::error::ToolError;

// ── JSON ────────────────────────────────────────────────────────────

fn parse_json(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|e| ToolError::Parse {
        format: "JSON".to_string(),
        reason: e.to_string(),
    })
}

/// Pretty-print with 2-space indentation.
pub fn format_json(input: &str) -> Result<String, ToolError> {
    let value = parse_json(input)?;
    serde_json::to_string_pretty(&value).map_err(|e| ToolError::Parse {
        format: "JSON".to_string(),
        reason: e.to_string(),
    })
}

pub fn minify_json(input: &str) -> Result<String, ToolError> {
    let value = parse_json(input)?;
    serde_json::to_string(&value).map_err(|e| ToolError::Parse {
        format: "JSON".to_string(),
        reason: e.to_string(),
    })
}

/// Check well-formedness and return a status line.
pub fn validate_json(input: &str) -> Result<String, ToolError> {
    parse_json(input)?;
    Ok("Valid JSON".to_string())
}

// ── CSS ─────────────────────────────────────────────────────────────

fn strip_css_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut prev = ' ';
            for inner in chars.by_ref() {
                if prev == '*' && inner == '/' {
                    break;
                }
                prev = inner;
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Strip comments, collapse whitespace runs, and drop spaces around the
/// structural characters `{` `}` `:` `;` `,`.
pub fn minify_css(input: &str) -> String {
    let stripped = strip_css_comments(input);
    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else if matches!(ch, '{' | '}' | ':' | ';' | ',') {
            pending_space = false;
            out.push(ch);
        } else {
            if pending_space && !out.ends_with(['{', '}', ':', ';', ',']) {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    if line.is_empty() {
        return;
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(line);
    out.push('\n');
}

/// Re-add the space a declaration lost in minification, on the first
/// colon only so `url(data:...)` values stay intact.
fn spaced_declaration(chunk: &str) -> String {
    match chunk.split_once(':') {
        Some((property, value)) => format!("{}: {}", property.trim_end(), value.trim_start()),
        None => chunk.to_string(),
    }
}

/// Expand CSS into one declaration per line with 2-space indent blocks.
/// Runs through [`minify_css`] first so any input layout normalizes.
pub fn format_css(input: &str) -> String {
    let minified = minify_css(input);
    let mut out = String::with_capacity(minified.len() * 2);
    let mut depth = 0usize;
    let mut chunk = String::new();
    for ch in minified.chars() {
        match ch {
            '{' => {
                push_line(&mut out, depth, &format!("{} {{", chunk.trim()));
                chunk.clear();
                depth += 1;
            }
            ';' => {
                push_line(&mut out, depth, &format!("{};", spaced_declaration(chunk.trim())));
                chunk.clear();
            }
            '}' => {
                if !chunk.trim().is_empty() {
                    push_line(&mut out, depth, &spaced_declaration(chunk.trim()));
                }
                chunk.clear();
                depth = depth.saturating_sub(1);
                push_line(&mut out, depth, "}");
            }
            _ => chunk.push(ch),
        }
    }
    if !chunk.trim().is_empty() {
        push_line(&mut out, depth, chunk.trim());
    }
    out.trim_end().to_string()
}

// ── HTML entities ───────────────────────────────────────────────────

/// Replacement pairs in escape order; `&` first so produced entities
/// are not escaped again.
const HTML_ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

pub fn escape_html(input: &str) -> String {
    let mut out = input.to_string();
    for (ch, entity) in HTML_ENTITIES {
        out = out.replace(*ch, entity);
    }
    out
}

/// Reverse of [`escape_html`]; `&amp;` unescapes last so doubly-escaped
/// text unwinds exactly one level.
pub fn unescape_html(input: &str) -> String {
    let mut out = input.to_string();
    for (ch, entity) in HTML_ENTITIES.iter().rev() {
        out = out.replace(entity, &ch.to_string());
    }
    out
}

// ── XML ─────────────────────────────────────────────────────────────

fn xml_error(reason: impl Into<String>) -> ToolError {
    ToolError::Parse {
        format: "XML".to_string(),
        reason: reason.into(),
    }
}

/// Parse and re-serialize, proving the input is well formed. Text nodes
/// are passed through untouched, so layout inside elements survives.
pub fn format_xml(input: &str) -> Result<String, ToolError> {
    let mut reader = Reader::from_str(input);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_element = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(event) => {
                match &event {
                    Event::Start(_) => {
                        depth += 1;
                        seen_element = true;
                    }
                    Event::End(_) => {
                        depth = depth
                            .checked_sub(1)
                            .ok_or_else(|| xml_error("closing tag without an open element"))?;
                    }
                    Event::Empty(_) => seen_element = true,
                    _ => {}
                }
                writer
                    .write_event(event)
                    .map_err(|e| xml_error(e.to_string()))?;
            }
            Err(e) => return Err(xml_error(e.to_string())),
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(xml_error("unclosed element at end of input"));
    }
    if !seen_element {
        return Err(xml_error("no element found"));
    }
    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn json_format_pretty_prints_with_two_spaces() {
        let formatted = format_json(r#"{"a":[1,2]}"#).unwrap();
        assert_eq!(formatted, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn json_minify_collapses_whitespace() {
        let minified = minify_json("{\n  \"a\": 1,\n  \"b\": [1, 2]\n}").unwrap();
        assert_eq!(minified, r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn json_validate_reports_status() {
        assert_eq!(validate_json("[1, 2, 3]").unwrap(), "Valid JSON");
    }

    #[test]
    fn json_rejects_malformed_input() {
        let err = format_json("{broken");
        assert!(matches!(err, Err(ToolError::Parse { format, .. }) if format == "JSON"));
    }

    #[test]
    fn css_minify_strips_comments_and_spaces() {
        assert_eq!(
            minify_css("/* note */ body {  color : red ; }"),
            "body{color:red;}"
        );
    }

    #[test]
    fn css_minify_keeps_selector_spaces() {
        assert_eq!(minify_css("div  p { margin : 0 auto ; }"), "div p{margin:0 auto;}");
    }

    #[test]
    fn css_format_expands_declarations() {
        assert_eq!(
            format_css("body{color:red;margin:0}"),
            "body {\n  color: red;\n  margin: 0\n}"
        );
    }

    #[test]
    fn css_format_nests_blocks() {
        insta::assert_snapshot!(format_css("@media screen{a{color:blue;}}"), @r"
        @media screen {
          a {
            color: blue;
          }
        }
        ");
    }

    #[test]
    fn css_round_trip_is_stable() {
        let pretty = format_css("a{b:c;}");
        assert_eq!(format_css(&pretty), pretty);
    }

    #[test]
    fn html_escape_covers_all_five_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn html_escape_does_not_double_escape_ampersands() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn html_unescape_round_trips() {
        let original = r#"<p class="x">a & b</p>"#;
        assert_eq!(unescape_html(&escape_html(original)), original);
    }

    #[test]
    fn xml_round_trips_well_formed_input() {
        let input = r#"<root attr="1"><child>text</child></root>"#;
        assert_eq!(format_xml(input).unwrap(), input);
    }

    #[test]
    fn xml_accepts_self_closing_elements() {
        assert!(format_xml("<a><b/></a>").is_ok());
    }

    #[test]
    fn xml_rejects_unclosed_elements() {
        assert!(matches!(
            format_xml("<a><b></a>"),
            Err(ToolError::Parse { format, .. }) if format == "XML"
        ));
    }

    #[test]
    fn xml_rejects_plain_text() {
        assert!(format_xml("just words").is_err());
    }
}
