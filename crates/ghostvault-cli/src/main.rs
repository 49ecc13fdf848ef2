use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = ghostvault_core::Result<T>;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(cmd) => cmd.run(),
        Commands::Reveal(cmd) => cmd.run(),
        Commands::Scan(cmd) => cmd.run(),
    };

    if let Err(e) = result {
        log::debug!("command failed: {e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
