use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a secret message in PNG/JPEG images and WAV audio files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Media file such as PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// The carrier with the hidden message will be stored as this file.
    /// Images are always written as PNG, so give it a .png name.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The secret text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Password used to encrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password on a hidden interactive prompt
    #[arg(long, conflicts_with = "password")]
    pub prompt_password: bool,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let password = super::resolve_password(self.password, self.prompt_password)?;
        ghostvault_core::commands::hide(&self.media, &self.write_to_file, &self.message, password)?;
        println!(
            "Message successfully hidden in {}",
            self.write_to_file.display()
        );
        Ok(())
    }
}
