//! Text transformation command handlers.

use tabled::Tabled;

use onetap_core::text::{self, ExtractKind, TextOp, TextStats};

use crate::cli::{CaseStyle, ExtractTarget, GlobalOpts, TextArgs, TextCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn map_case(style: &CaseStyle) -> TextOp {
    match style {
        CaseStyle::Upper => TextOp::Upper,
        CaseStyle::Lower => TextOp::Lower,
        CaseStyle::Title => TextOp::Title,
        CaseStyle::Camel => TextOp::Camel,
        CaseStyle::Snake => TextOp::Snake,
        CaseStyle::Kebab => TextOp::Kebab,
    }
}

fn map_extract(target: &ExtractTarget) -> ExtractKind {
    match target {
        ExtractTarget::Emails => ExtractKind::Emails,
        ExtractTarget::Urls => ExtractKind::Urls,
        ExtractTarget::Numbers => ExtractKind::Numbers,
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Match")]
    value: String,
}

// ── Stats views ─────────────────────────────────────────────────────

fn stats_detail(s: &TextStats) -> String {
    [
        format!("Words:          {}", s.words),
        format!("Characters:     {}", s.chars),
        format!("Without spaces: {}", s.chars_no_spaces),
        format!("Lines:          {}", s.lines),
        format!("Paragraphs:     {}", s.paragraphs),
    ]
    .join("\n")
}

fn stats_plain(s: &TextStats) -> String {
    [
        format!("words={}", s.words),
        format!("chars={}", s.chars),
        format!("chars_no_spaces={}", s.chars_no_spaces),
        format!("lines={}", s.lines),
        format!("paragraphs={}", s.paragraphs),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: TextArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        TextCommand::Case { style, text } => {
            let input = util::input_or_stdin(text)?;
            let out = text::transform(map_case(&style), &input);
            output::print_output(&output::render_text(&format, &out), global.quiet);
            Ok(())
        }

        TextCommand::Reverse { text } => {
            let input = util::input_or_stdin(text)?;
            let out = text::transform(TextOp::Reverse, &input);
            output::print_output(&output::render_text(&format, &out), global.quiet);
            Ok(())
        }

        TextCommand::Clean { all, text } => {
            let input = util::input_or_stdin(text)?;
            let op = if all {
                TextOp::RemoveWhitespace
            } else {
                TextOp::CleanWhitespace
            };
            let out = text::transform(op, &input);
            output::print_output(&output::render_text(&format, &out), global.quiet);
            Ok(())
        }

        TextCommand::Sort { unique, text } => {
            let input = util::input_or_stdin(text)?;
            let mut out = text::transform(TextOp::SortLines, &input);
            if unique {
                out = text::transform(TextOp::DedupLines, &out);
            }
            output::print_output(&output::render_text(&format, &out), global.quiet);
            Ok(())
        }

        TextCommand::Dedup { text } => {
            let input = util::input_or_stdin(text)?;
            let out = text::transform(TextOp::DedupLines, &input);
            output::print_output(&output::render_text(&format, &out), global.quiet);
            Ok(())
        }

        TextCommand::Stats { text } => {
            let input = util::input_or_stdin(text)?;
            let stats = text::stats(&input);
            let out = output::render_single(&format, &stats, stats_detail, stats_plain);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TextCommand::Extract { target, text } => {
            let input = util::input_or_stdin(text)?;
            let matches = text::extract(map_extract(&target), &input);
            let out = output::render_list(
                &format,
                &matches,
                |m| MatchRow { value: m.clone() },
                Clone::clone,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
