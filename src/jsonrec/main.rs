use clap::Parser;
use jsonrec::api::perform;
use jsonrec::error::Result;
use std::io::{self, Write};

mod args;
mod cli;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let parsed = Cli::parse_from(args::normalize(std::env::args_os()));
    cli::logging::init(parsed.verbose);

    let arguments = parsed.into_arguments();
    tracing::debug!(supplied = ?arguments.supplied(), "collected arguments");

    let output = perform(&arguments)?;
    let bytes = cli::render::render(output)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}
