//! CLI argument definitions using clap
//!
//! atomic-form <schema.json> <values.json> [--log <file>] [--verbose]

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

/// Fill a declared form with values, then validate and submit it
#[derive(Parser, Debug)]
#[command(name = "atomic-form")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Form schema (fields, validators, initial data)
    pub schema: PathBuf,

    /// Flat JSON object mapping field identifiers to raw values
    pub values: PathBuf,

    /// Write the log to this file instead of stderr
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Log every state change and phase transition
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}
