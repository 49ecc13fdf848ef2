use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Reveal(reveal::RevealArgs),
    Scan(scan::ScanArgs),
}
