//! Config subcommand handlers.

use onetap_config::{config_path, load_config_or_default, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let out = output::render_single(
                &format,
                &cfg,
                |c| toml::to_string_pretty(c).expect("serialization should not fail"),
                |c| c.defaults.output.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = load_config_or_default();
            match key.as_str() {
                "output" | "defaults.output" => {
                    config::parse_output(&value)?;
                    cfg.defaults.output = value;
                }
                "color" | "defaults.color" => {
                    config::parse_color(&value)?;
                    cfg.defaults.color = value;
                }
                other => {
                    return Err(CliError::Validation {
                        field: "key".into(),
                        reason: format!(
                            "unknown config key '{other}' (expected 'output' or 'color')"
                        ),
                    });
                }
            }
            save_config(&cfg)?;
            eprintln!("Updated {}", config_path().display());
            Ok(())
        }
    }
}
