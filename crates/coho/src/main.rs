mod commands;
mod config;
mod error;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::commands::Commands;
use crate::config::CohoConfig;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "coho")]
#[command(about = "Publish Cordova packages to npm", long_about = None)]
struct Cli {
    /// Directory holding the repository checkouts (default: current directory)
    #[arg(long = "root", short = 'C', global = true)]
    root: Option<PathBuf>,

    /// Log debug details
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            if let Err(e) = write_help(&err, &mut io::stdout().lock()) {
                eprintln!("error: failed to print help: {e}");
            }
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };

    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let root = resolve_root(cli.root)?;
    let config = CohoConfig::load(&root)?;
    cli.command.execute(&root, &config)
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match root {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn write_help(help: &clap::Error, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", help.render())?;
    out.flush()
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
