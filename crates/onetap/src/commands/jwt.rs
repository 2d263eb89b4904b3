//! Demo JWT command handlers.

use onetap_core::token::{self, DecodedToken};

use crate::cli::{GlobalOpts, JwtArgs, JwtCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(t: &DecodedToken) -> String {
    format!(
        "Header:\n{}\n\nPayload:\n{}\n\nSignature: {}",
        output::render_json_pretty(&t.header),
        output::render_json_pretty(&t.payload),
        t.signature
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: JwtArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        JwtCommand::Encode { payload } => {
            let input = util::input_or_stdin(payload)?;
            let encoded = token::encode_demo(&input)?;
            output::print_output(&output::render_text(&format, &encoded), global.quiet);
            Ok(())
        }

        JwtCommand::Decode { token: raw } => {
            let input = util::input_or_stdin(raw)?;
            let decoded = token::decode(&input)?;
            let out = output::render_single(&format, &decoded, detail, |t| {
                output::render_json_compact(&t.payload)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
