//! Command-line interface for Expressio
//!
//! Runs an interactive session by default, or evaluates the expressions
//! given with `--eval` and exits.

mod batch;
mod cli;
mod history;
mod messages;
mod preferences;
mod render;
mod repl;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Args;
use preferences::Preferences;
use repl::Session;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let mut preferences = Preferences::load_or_create(&args.preferences)?;
    if let Some(language) = args.language {
        preferences.language = language;
    }

    let mut session = Session::new(preferences, args.preferences);
    session.set_trace(args.trace);

    if args.eval.is_empty() {
        repl::run(&mut session)?;
        return Ok(ExitCode::SUCCESS);
    }

    let stdout = std::io::stdout();
    let succeeded = batch::run_batch(&mut session, &args.eval, &mut stdout.lock())?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
