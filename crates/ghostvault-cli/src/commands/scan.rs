use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Scans a carrier file for a hidden payload without extracting it
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Carrier file to scan
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,
}

impl ScanArgs {
    pub fn run(self) -> CliResult<()> {
        match ghostvault_core::commands::scan(&self.media)? {
            Some(report) if report.looks_encrypted => {
                println!("Hidden content detected, it appears to be encrypted.");
            }
            Some(_) => {
                println!("Hidden content detected.");
            }
            None => {
                println!("No hidden message found in this file.");
            }
        }
        Ok(())
    }
}
