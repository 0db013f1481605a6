//! Medic Control - diagnose tool error output from the command line.

use clap::Parser;
use medic_common::MedicError;
use medicctl::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    medicctl::logging::init(cli.verbose);

    match medicctl::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("medicctl: {:#}", err);
            match err.downcast_ref::<MedicError>() {
                Some(MedicError::InvalidInput(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
