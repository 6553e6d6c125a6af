//! `elixir` binary entry point.

use clap::Parser;
use std::process::ExitCode;

use elixir_cli::cli::Cli;
use elixir_cli::{init_tracing, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.exit_message());
            ExitCode::FAILURE
        }
    }
}
