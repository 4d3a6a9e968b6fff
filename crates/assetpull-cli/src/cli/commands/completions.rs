//! `assetpull completions <shell>` – print shell completions.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use std::io;

pub fn run_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "assetpull", &mut io::stdout());
    Ok(())
}
