//! Financial calculator command handlers.

use onetap_core::finance::{self, CompoundResult, LoanResult, TipResult};

use crate::cli::{FinanceArgs, FinanceCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn compound_detail(r: &CompoundResult) -> String {
    [
        format!("Final amount:    {:.2}", r.final_amount),
        format!("Interest earned: {:.2}", r.interest_earned),
    ]
    .join("\n")
}

fn loan_detail(r: &LoanResult) -> String {
    [
        format!("Monthly payment: {:.2}", r.monthly_payment),
        format!("Total paid:      {:.2}", r.total_paid),
        format!("Total interest:  {:.2}", r.total_interest),
    ]
    .join("\n")
}

fn tip_detail(r: &TipResult) -> String {
    [
        format!("Tip:        {:.2}", r.tip_amount),
        format!("Total:      {:.2}", r.total),
        format!("Per person: {:.2}", r.per_person),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: FinanceArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        FinanceCommand::Compound {
            principal,
            rate,
            years,
            frequency,
        } => {
            let result = finance::compound_interest(principal, rate, frequency, years)?;
            let out = output::render_single(&format, &result, compound_detail, |r| {
                format!("{:.2}", r.final_amount)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FinanceCommand::Loan {
            principal,
            rate,
            years,
        } => {
            let result = finance::loan_payment(principal, rate, years)?;
            let out = output::render_single(&format, &result, loan_detail, |r| {
                format!("{:.2}", r.monthly_payment)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FinanceCommand::Tip {
            bill,
            percent,
            people,
        } => {
            let result = finance::tip(bill, percent, people)?;
            let out = output::render_single(&format, &result, tip_detail, |r| {
                format!("{:.2}", r.total)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FinanceCommand::Percentage { part, total } => {
            let result = finance::percentage(part, total)?;
            let rendered = format!("{result:.2}%");
            output::print_output(&output::render_text(&format, &rendered), global.quiet);
            Ok(())
        }
    }
}
