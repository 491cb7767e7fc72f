//! Mime type settings exporter CLI.

use clap::Parser;
use mts_cli::cli::{Cli, Command};
use mts_cli::logging::init_logging;

mod commands;
mod summary;

use crate::commands::{run_export, run_kinds, run_show};
use crate::summary::print_export_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Export(args) => run_export(args).map(|summary| print_export_summary(&summary)),
        Command::Show(args) => run_show(args),
        Command::Kinds(args) => run_kinds(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
