//! `assetpull man` – print the roff man page.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use std::io;

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(())
}
