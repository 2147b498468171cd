//! Command-line entry point: classify a parade of random animals.
//!
//! # Usage
//!
//! ```bash
//! mallard        # classify ten random animals
//! mallard 23     # classify twenty-three
//! ```
//!
//! Exits non-zero on usage errors (extra arguments, counts that fail
//! to parse) and on report output failures.

use std::io::{self, Write};
use std::process::ExitCode;

use mallard::animals::standard_catalog;
use mallard::engine::{parse_count, run, RunConfig, DEFAULT_COUNT};

const USAGE: &str = "usage: mallard [COUNT]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        eprintln!("mallard: expected at most one argument");
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    let count = match args.get(1) {
        None => DEFAULT_COUNT,
        Some(raw) => match parse_count(raw) {
            Ok(count) => count,
            Err(err) => {
                eprintln!("mallard: {err}");
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        },
    };

    let catalog = standard_catalog();
    let config = RunConfig {
        count,
        ..RunConfig::default()
    };

    let mut out = io::stdout().lock();
    match run(&catalog, config, &mut out) {
        Ok(_) => match out.flush() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("mallard: report output failed: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("mallard: {err}");
            ExitCode::FAILURE
        }
    }
}
