//! Structured document formatting command handlers.

use onetap_core::structured;

use crate::cli::{FormatArgs, FormatCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: FormatArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    let out = match args.command {
        FormatCommand::Json {
            minify,
            validate,
            text,
        } => {
            let input = util::input_or_stdin(text)?;
            if validate {
                structured::validate_json(&input)?
            } else if minify {
                structured::minify_json(&input)?
            } else {
                structured::format_json(&input)?
            }
        }

        FormatCommand::Css { minify, text } => {
            let input = util::input_or_stdin(text)?;
            if minify {
                structured::minify_css(&input)
            } else {
                structured::format_css(&input)
            }
        }

        FormatCommand::Html { unescape, text } => {
            let input = util::input_or_stdin(text)?;
            if unescape {
                structured::unescape_html(&input)
            } else {
                structured::escape_html(&input)
            }
        }

        FormatCommand::Xml { text } => {
            let input = util::input_or_stdin(text)?;
            structured::format_xml(&input)?
        }
    };

    output::print_output(&output::render_text(&format, &out), global.quiet);
    Ok(())
}
