//! Date and time command handlers.

use chrono::Utc;

use onetap_core::datetime::{self, AgeInfo, DateBreakdown};

use crate::cli::{DateArgs, DateCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn breakdown_detail(b: &DateBreakdown) -> String {
    [
        format!("ISO 8601:  {}", b.iso),
        format!("UTC:       {}", b.utc),
        format!("Local:     {}", b.local),
        format!("Unix (s):  {}", b.unix_seconds),
        format!("Unix (ms): {}", b.unix_millis),
        format!("Relative:  {}", b.relative),
    ]
    .join("\n")
}

fn age_detail(a: &AgeInfo) -> String {
    [
        format!("Age:                 {} years", a.years),
        format!("Until next birthday: {} days", a.days_until_birthday),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: DateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        DateCommand::Show { instant } => {
            let now = Utc::now();
            let moment = match instant {
                Some(ref raw) => datetime::parse_instant(raw)?,
                None => now,
            };
            let breakdown = datetime::breakdown(moment, now);
            let out =
                output::render_single(&format, &breakdown, breakdown_detail, |b| b.iso.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DateCommand::Age { birth_date } => {
            let birth = datetime::parse_date(&birth_date)?;
            let info = datetime::age(birth, Utc::now().date_naive())?;
            let out = output::render_single(&format, &info, age_detail, |a| a.years.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DateCommand::Between { start, end } => {
            let days =
                datetime::days_between(datetime::parse_date(&start)?, datetime::parse_date(&end)?);
            output::print_output(
                &output::render_text(&format, &days.to_string()),
                global.quiet,
            );
            Ok(())
        }

        DateCommand::AddDays { date, days } => {
            let shifted = datetime::add_days(datetime::parse_date(&date)?, days)?;
            let rendered = shifted.format("%Y-%m-%d").to_string();
            output::print_output(&output::render_text(&format, &rendered), global.quiet);
            Ok(())
        }
    }
}
