//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod calc;
pub mod codec;
pub mod color;
pub mod config_cmd;
pub mod convert;
pub mod date;
pub mod finance;
pub mod format;
pub mod generate;
pub mod hash;
pub mod jwt;
pub mod net;
pub mod text;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a parsed command to the appropriate handler.
pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Text(args) => text::handle(args, global),
        Command::Encode(args) => codec::handle_encode(args, global),
        Command::Decode(args) => codec::handle_decode(args, global),
        Command::Format(args) => format::handle(args, global),
        Command::Generate(args) => generate::handle(args, global),
        Command::Hash(args) => hash::handle(args, global),
        Command::Jwt(args) => jwt::handle(args, global),
        Command::Color(args) => color::handle(&args, global),
        Command::Convert(args) => convert::handle(args, global),
        Command::Date(args) => date::handle(args, global),
        Command::Finance(args) => finance::handle(args, global),
        Command::Net(args) => net::handle(args, global),
        Command::Calc(args) => calc::handle(&args, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
