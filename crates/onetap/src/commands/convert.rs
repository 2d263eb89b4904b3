//! Unit conversion command handlers.

use onetap_core::units::{self, CurrencyUnit, LengthUnit, TemperatureUnit, WeightUnit};

use crate::cli::{
    ConvertArgs, ConvertCommand, CurrencyUnitKind, GlobalOpts, LengthUnitKind,
    TemperatureUnitKind, WeightUnitKind,
};
use crate::error::CliError;
use crate::output;

fn map_length(unit: &LengthUnitKind) -> LengthUnit {
    match unit {
        LengthUnitKind::Meters => LengthUnit::Meters,
        LengthUnitKind::Feet => LengthUnit::Feet,
        LengthUnitKind::Inches => LengthUnit::Inches,
        LengthUnitKind::Centimeters => LengthUnit::Centimeters,
        LengthUnitKind::Kilometers => LengthUnit::Kilometers,
        LengthUnitKind::Miles => LengthUnit::Miles,
    }
}

fn map_weight(unit: &WeightUnitKind) -> WeightUnit {
    match unit {
        WeightUnitKind::Kilograms => WeightUnit::Kilograms,
        WeightUnitKind::Grams => WeightUnit::Grams,
        WeightUnitKind::Pounds => WeightUnit::Pounds,
        WeightUnitKind::Ounces => WeightUnit::Ounces,
        WeightUnitKind::Stone => WeightUnit::Stone,
    }
}

fn map_temperature(unit: &TemperatureUnitKind) -> TemperatureUnit {
    match unit {
        TemperatureUnitKind::Celsius => TemperatureUnit::Celsius,
        TemperatureUnitKind::Fahrenheit => TemperatureUnit::Fahrenheit,
        TemperatureUnitKind::Kelvin => TemperatureUnit::Kelvin,
    }
}

fn map_currency(unit: &CurrencyUnitKind) -> CurrencyUnit {
    match unit {
        CurrencyUnitKind::Usd => CurrencyUnit::Usd,
        CurrencyUnitKind::Eur => CurrencyUnit::Eur,
        CurrencyUnitKind::Gbp => CurrencyUnit::Gbp,
        CurrencyUnitKind::Jpy => CurrencyUnit::Jpy,
        CurrencyUnitKind::Cad => CurrencyUnit::Cad,
        CurrencyUnitKind::Aud => CurrencyUnit::Aud,
    }
}

// ── Result views ────────────────────────────────────────────────────

#[derive(serde::Serialize)]
struct Conversion {
    value: f64,
    from: String,
    to: String,
    result: f64,
    #[serde(skip)]
    precision: usize,
}

fn detail(c: &Conversion) -> String {
    format!("{} {} = {} {}", c.value, c.from, plain_value(c), c.to)
}

fn plain_value(c: &Conversion) -> String {
    format!("{:.p$}", c.result, p = c.precision)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConvertArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();

    let conv = match args.command {
        ConvertCommand::Length { value, from, to } => {
            let (from, to) = (map_length(&from), map_length(&to));
            Conversion {
                value,
                from: from.to_string(),
                to: to.to_string(),
                result: units::convert_length(value, from, to),
                precision: 6,
            }
        }

        ConvertCommand::Weight { value, from, to } => {
            let (from, to) = (map_weight(&from), map_weight(&to));
            Conversion {
                value,
                from: from.to_string(),
                to: to.to_string(),
                result: units::convert_weight(value, from, to),
                precision: 6,
            }
        }

        ConvertCommand::Temperature { value, from, to } => {
            let (from, to) = (map_temperature(&from), map_temperature(&to));
            Conversion {
                value,
                from: from.to_string(),
                to: to.to_string(),
                result: units::convert_temperature(value, from, to),
                precision: 2,
            }
        }

        ConvertCommand::Currency { value, from, to } => {
            let (from, to) = (map_currency(&from), map_currency(&to));
            Conversion {
                value,
                from: from.to_string(),
                to: to.to_string(),
                result: units::convert_currency(value, from, to),
                precision: 2,
            }
        }

        ConvertCommand::FileSize { bytes } => {
            let out = units::humanize_file_size(bytes)?;
            output::print_output(&output::render_text(&format, &out), global.quiet);
            return Ok(());
        }
    };

    let out = output::render_single(&format, &conv, detail, plain_value);
    output::print_output(&out, global.quiet);
    Ok(())
}
