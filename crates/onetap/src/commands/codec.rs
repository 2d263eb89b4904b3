//! Encode and decode command handlers.

use onetap_core::codec::{self, Codec};

use crate::cli::{CodecArgs, CodecKind, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

fn map_codec(kind: &CodecKind) -> Codec {
    match kind {
        CodecKind::Base64 => Codec::Base64,
        CodecKind::Url => Codec::Url,
        CodecKind::Binary => Codec::Binary,
        CodecKind::Hex => Codec::Hex,
        CodecKind::Morse => Codec::Morse,
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle_encode(args: CodecArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let input = util::input_or_stdin(args.text)?;
    let out = codec::encode(map_codec(&args.codec), &input)?;
    output::print_output(
        &output::render_text(&global.output_format(), &out),
        global.quiet,
    );
    Ok(())
}

pub fn handle_decode(args: CodecArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let input = util::input_or_stdin(args.text)?;
    let out = codec::decode(map_codec(&args.codec), &input)?;
    output::print_output(
        &output::render_text(&global.output_format(), &out),
        global.quiet,
    );
    Ok(())
}
