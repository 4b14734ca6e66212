mod args;
mod error;

use std::fs::{self, File};
use std::path::Path;
use std::process::ExitCode;

use atomic_form::{Form, FormHooks, FormSchema, SubmitOutcome};
use clap::Parser;
use formdom::{SubmitEvent, dispatch_change_by_name};
use serde_json::{Map, Value, json};
use simplelog::{Config, WriteLogger};

use args::Cli;
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(SubmitOutcome::Submitted) => ExitCode::SUCCESS,
        Ok(SubmitOutcome::Rejected) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    match &cli.log {
        Some(path) => {
            let log_file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(cli.level(), Config::default(), log_file)?;
        }
        None => WriteLogger::init(cli.level(), Config::default(), std::io::stderr())?,
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<SubmitOutcome, CliError> {
    let schema = FormSchema::from_json(&read(&cli.schema)?)?;
    let values = read_values(&cli.values)?;

    let mut hooks = FormHooks::new()
        .do_submit(|data, _| print_json(&json!({"status": "submitted", "data": data})))
        .after_validation(|result| print_json(&json!({"status": "rejected", "result": result})));
    if let Some(initial_data) = schema.initial_data.clone() {
        hooks = hooks.initial_data(initial_data);
    }

    let mut form = Form::with_config(schema.config.clone(), hooks);
    let mut root = form.render(schema.build()?);
    form.update(&mut root);

    for (identifier, value) in values {
        if !dispatch_change_by_name(&mut root, &identifier, value) {
            log::warn!("[cli] no field named '{identifier}' in {}", cli.schema.display());
        }
    }
    if form.needs_update() {
        form.update(&mut root);
    }

    let mut event = SubmitEvent::targeted(root.id.clone());
    Ok(form.submit(&root, &mut event)?)
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_values(path: &Path) -> Result<Map<String, Value>, CliError> {
    let values: Value = serde_json::from_str(&read(path)?).map_err(|source| CliError::Values {
        path: path.to_path_buf(),
        source,
    })?;
    match values {
        Value::Object(values) => Ok(values),
        _ => Err(CliError::ValuesNotObject {
            path: path.to_path_buf(),
        }),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("[cli] failed to render output: {e}"),
    }
}
