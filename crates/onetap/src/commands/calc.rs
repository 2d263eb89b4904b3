//! Expression calculator command handler.

use onetap_core::calc;

use crate::cli::{CalcArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &CalcArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let value = calc::evaluate(&args.expression)?;
    output::print_output(
        &output::render_text(&global.output_format(), &value.to_string()),
        global.quiet,
    );
    Ok(())
}
