//! Generator command handlers.

use onetap_core::generate;

use crate::cli::{GenerateArgs, GenerateCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: GenerateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    let out = match args.command {
        GenerateCommand::Password { length, strong } => {
            if strong {
                generate::strong_password(length)?
            } else {
                generate::password(length)?
            }
        }

        GenerateCommand::Uuid { count } => {
            let ids: Vec<String> = (0..count).map(|_| generate::uuid()).collect();
            ids.join("\n")
        }

        GenerateCommand::Lorem { sentences } => generate::lorem(sentences)?,

        GenerateCommand::Slug { text } => {
            let input = util::input_or_stdin(text)?;
            generate::slug(&input)
        }

        GenerateCommand::Number { min, max } => generate::random_number(min, max)?.to_string(),

        GenerateCommand::Palette => generate::palette().join("\n"),

        GenerateCommand::Qr { data, size } => generate::qr_code_url(&data, size),

        GenerateCommand::Barcode { data } => generate::barcode_url(&data),
    };

    output::print_output(&output::render_text(&format, &out), global.quiet);
    Ok(())
}
