//! Digest command handlers.

use onetap_core::digest::{self, HashAlgorithm, HashResult};

use crate::cli::{DigestKind, GlobalOpts, HashArgs};
use crate::error::CliError;
use crate::output;

use super::util;

fn map_algorithm(kind: &DigestKind) -> HashAlgorithm {
    match kind {
        DigestKind::Sha1 => HashAlgorithm::Sha1,
        DigestKind::Sha256 => HashAlgorithm::Sha256,
        DigestKind::Sha512 => HashAlgorithm::Sha512,
    }
}

fn detail(r: &HashResult) -> String {
    [
        format!("Algorithm: {}", r.algorithm),
        format!("Digest:    {}", r.hex_digest),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: HashArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let input = util::input_or_stdin(args.text)?;
    let result = digest::hash(map_algorithm(&args.algorithm), &input);
    let out = output::render_single(&global.output_format(), &result, detail, |r| {
        r.hex_digest.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
