use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Reveals a hidden message from a carrier file
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Carrier file that contains the hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Write the revealed message to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output: Option<PathBuf>,

    /// Password used to decrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password on a hidden interactive prompt
    #[arg(long, conflicts_with = "password")]
    pub prompt_password: bool,
}

impl RevealArgs {
    pub fn run(self) -> CliResult<()> {
        let password = super::resolve_password(self.password, self.prompt_password)?;
        let message = ghostvault_core::commands::reveal(&self.media, password)?;

        match self.output {
            Some(path) => {
                fs::write(&path, &message)?;
                println!("Message extracted and saved to {}", path.display());
            }
            None => println!("{message}"),
        }
        Ok(())
    }
}
