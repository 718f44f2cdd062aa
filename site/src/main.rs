use clap::Parser;
use std::process::ExitCode;
use voidrose_site::{Cli, init_tracing, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[voidrose] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
