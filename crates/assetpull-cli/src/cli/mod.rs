//! CLI for the assetpull static-asset fetcher.

mod commands;

use anyhow::Result;
use assetpull_core::config::{self, FetchConfig};
use assetpull_core::dest_dir::DirPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_fetch, run_list, run_man};

/// Top-level CLI. With no subcommand, behaves like `assetpull fetch`.
#[derive(Debug, Parser)]
#[command(name = "assetpull")]
#[command(about = "Download a fixed list of static assets from one host", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/assetpull/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every manifest entry into the destination directory (default).
    Fetch(FetchArgs),

    /// Print the manifest, one filename per line.
    List {
        /// Plain-text manifest file (one name per line, `#` comments).
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Print shell completions to stdout.
    Completions {
        shell: clap_complete::Shell,
    },

    /// Print the roff man page to stdout.
    Man,
}

/// Overrides applied on top of the config file for one fetch run.
#[derive(Debug, Clone, Default, Args)]
pub struct FetchArgs {
    /// URL prefix each filename is appended to.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Destination directory (created non-recursively).
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Plain-text manifest file instead of the built-in list.
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Reuse the destination directory if it already exists, overwriting files.
    #[arg(long)]
    pub reuse_dir: bool,

    /// Connect timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Whole-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();

        match cli.command {
            None => run_fetch(load_config(config_path)?, &FetchArgs::default())?,
            Some(CliCommand::Fetch(args)) => run_fetch(load_config(config_path)?, &args)?,
            Some(CliCommand::List { manifest }) => {
                run_list(&load_config(config_path)?, manifest.as_deref())?
            }
            Some(CliCommand::Completions { shell }) => run_completions(shell)?,
            Some(CliCommand::Man) => run_man()?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<FetchConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl FetchArgs {
    /// Applies the flags that were given; everything else keeps its config value.
    pub fn apply(&self, mut cfg: FetchConfig) -> FetchConfig {
        if let Some(url) = &self.base_url {
            cfg.base_url = url.clone();
        }
        if let Some(dest) = &self.dest {
            cfg.dest_dir = dest.clone();
        }
        if let Some(manifest) = &self.manifest {
            cfg.manifest = Some(manifest.clone());
        }
        if self.reuse_dir {
            cfg.dir_policy = DirPolicy::ReuseIfDirectory;
        }
        if self.connect_timeout.is_some() {
            cfg.connect_timeout_secs = self.connect_timeout;
        }
        if self.timeout.is_some() {
            cfg.timeout_secs = self.timeout;
        }
        cfg
    }
}

#[cfg(test)]
mod tests;
