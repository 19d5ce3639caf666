//! Soil Report CLI
//!
//! Assesses one soil sample from the command line and prints the report.
//!
//! Usage: soil_report <nitrogen> <phosphorus> <potassium> <moisture> [--json]
//!
//! Pass "" for a value to leave it blank. Invalid samples print the field
//! messages to stderr and exit with status 1.

use soil_advisor_rust::config::log_filter_from_env;
use soil_advisor_rust::formatters::{JsonFormatter, MarkdownFormatter};
use soil_advisor_rust::logging::init_tracing;
use soil_advisor_rust::{evaluate, SampleInput, SoilError};

const USAGE: &str = "usage: soil_report <nitrogen> <phosphorus> <potassium> <moisture> [--json]";

fn main() -> anyhow::Result<()> {
    init_tracing(&log_filter_from_env());

    match run(std::env::args().skip(1)) {
        Ok(out) => {
            print!("{}", out);
            Ok(())
        }
        Err(SoilError::Invalid(report)) => {
            eprint!("{}", MarkdownFormatter::format_errors(&report));
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse the arguments and render the report text
fn run<I>(args: I) -> Result<String, SoilError>
where
    I: IntoIterator<Item = String>,
{
    let mut json = false;
    let mut values = Vec::with_capacity(4);
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => return Ok(format!("{}\n", USAGE)),
            _ => values.push(arg),
        }
    }

    let [nitrogen, phosphorus, potassium, moisture]: [String; 4] = values
        .try_into()
        .map_err(|got: Vec<String>| {
            SoilError::usage(format!("expected 4 values, got {}\n{}", got.len(), USAGE))
        })?;

    let input = SampleInput::from_text(&nitrogen, &phosphorus, &potassium, &moisture);
    let assessment = evaluate(&input)?;

    if json {
        Ok(format!("{}\n", JsonFormatter::format(&assessment)?))
    } else {
        Ok(MarkdownFormatter::format(&assessment))
    }
}
