//! Check a name and date of birth the way the prediction page would.
//!
//! The values are typed into an in-memory copy of the page keystroke by
//! keystroke, real-time validation is allowed to settle, and then the
//! form is submitted.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use astroform::display::displayed_errors;
use astroform::page::page_for;
use astroform::prelude::*;
use formdom::Event;
use log::{LevelFilter, debug};
use simplelog::{Config, WriteLogger};

const USAGE: &str = "Usage: astroform [-v] [--config <file.json>] <name> <date-of-birth>";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    verbose: bool,
    name: String,
    dob: String,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut config = None;
    let mut verbose = false;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-c" | "--config" => {
                let path = args.next().ok_or("--config needs a file path")?;
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown option '{flag}'"));
            }
            _ => positional.push(arg),
        }
    }

    let [name, dob]: [String; 2] = positional
        .try_into()
        .map_err(|_| "Expected a name and a date of birth".to_string())?;

    Ok(Args {
        config,
        verbose,
        name,
        dob,
    })
}

fn describe(state: &FieldState) -> &str {
    match state {
        FieldState::Untouched => "-",
        FieldState::Valid => "ok",
        FieldState::Invalid(message) => message,
    }
}

async fn run(args: Args) -> Result<bool, FormError> {
    let config = match &args.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    debug!("Using {config:?}");

    simulate(&config, &args.name, &args.dob).await
}

/// Type both values into a page laid out per `config`, then submit it.
///
/// Returns whether the submission went ahead.
async fn simulate(config: &FormConfig, name: &str, dob: &str) -> Result<bool, FormError> {
    let document = Arc::new(Mutex::new(page_for(config)?));
    let mut form = FormController::attach(Arc::clone(&document), config)?;

    for (id, text) in [(&config.name_id, name), (&config.dob_id, dob)] {
        let mut value = String::new();
        for c in text.chars() {
            value.push(c);
            form.handle_event(&Event::input(id.as_str(), value.as_str()));
        }
    }

    // Let both debounce timers run out.
    tokio::time::sleep(config.debounce().saturating_mul(2)).await;
    for kind in FieldKind::ALL {
        println!("{:<5} {}", kind.field_name(), describe(&form.field_state(kind)));
    }

    let outcome = form.handle_event(&Event::submit(config.form_id.as_str()));
    let errors = {
        let doc = document.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        displayed_errors(&doc)
    };

    match outcome {
        EventOutcome::Continue => println!("submit: allowed"),
        EventOutcome::Prevented => {
            println!("submit: prevented");
            for error in errors {
                println!("  {error}");
            }
        }
    }

    Ok(outcome == EventOutcome::Continue)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = WriteLogger::init(level, Config::default(), std::io::stderr()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
