use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use readmit::{Decision, Field, Pipeline, RawValue, ReadmitModel};
use serde_json::{json, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "readmit",
    version,
    about = "Early readmission risk prediction for diabetic patients",
    long_about = "readmit classifies a diabetic patient's early-readmission risk\n\
        (within 30 days) from structured clinical attributes, using a\n\
        pre-trained model artifact.\n\n\
        EXAMPLES:\n\
        \n  readmit predict --model model.json patient.json\n\
        \n  readmit predict --model model.json --format json patient.json\n\
        \n  cat patient.json | readmit predict --model model.json"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one patient record
    #[command(
        about = "Classify one patient record",
        long_about = "Reads a flat JSON object of clinical field name to raw value\n\
            (label string or number), runs the encoding and inference pipeline,\n\
            and prints the risk category with its advisory."
    )]
    Predict(PredictArgs),
}

#[derive(Debug, Args, Clone)]
struct PredictArgs {
    /// Path to the pre-trained model artifact
    #[arg(long = "model", value_name = "FILE")]
    model: PathBuf,

    /// Patient JSON file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_name = "FORMAT", default_value = "text",
          value_parser = ["text", "json"])]
    format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match cli.command {
        Command::Predict(args) => run_predict(&args),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_predict(args: &PredictArgs) -> ExitCode {
    // A model that cannot be loaded is fatal: there is nothing to serve.
    let model = match ReadmitModel::load(&args.model) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let raw = match read_input(args.input.as_deref()).and_then(|text| parse_patient(&text)) {
        Ok(raw) => raw,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = Pipeline::new(&model);
    match pipeline.predict(&raw) {
        Ok(decision) => {
            let mode = if args.format == "json" {
                OutputMode::Json
            } else {
                OutputMode::Text
            };
            print_decision(&decision, mode);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|err| format!("cannot read '{}': {err}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("cannot read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

/// Parses the input boundary: a flat JSON object of field name to raw value.
fn parse_patient(text: &str) -> Result<HashMap<Field, RawValue>, String> {
    let value: JsonValue =
        serde_json::from_str(text).map_err(|err| format!("invalid patient JSON: {err}"))?;
    let object = value
        .as_object()
        .ok_or_else(|| "patient JSON must be a flat object".to_string())?;

    let mut raw = HashMap::with_capacity(object.len());
    for (name, entry) in object {
        let field: Field = name.parse().map_err(|err| format!("{err}"))?;
        let raw_value = match entry {
            JsonValue::String(label) => RawValue::Label(label.clone()),
            JsonValue::Number(num) => RawValue::Num(
                num.as_f64()
                    .ok_or_else(|| format!("field '{field}': number out of f64 range"))?,
            ),
            other => {
                return Err(format!(
                    "field '{field}': expected a label or number, got {other}"
                ))
            }
        };
        raw.insert(field, raw_value);
    }
    Ok(raw)
}

fn print_decision(decision: &Decision, mode: OutputMode) {
    match mode {
        OutputMode::Text => {
            println!("{}", decision.category);
            println!("{}", decision.advisory);
        }
        OutputMode::Json => {
            let out = json!({
                "category": decision.category.code(),
                "advisory": decision.advisory,
            });
            println!("{out}");
        }
    }
}
