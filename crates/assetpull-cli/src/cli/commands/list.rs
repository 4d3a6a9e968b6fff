//! `assetpull list` – print the manifest that `fetch` would use.

use anyhow::Result;
use assetpull_core::config::FetchConfig;
use assetpull_core::Manifest;
use std::path::Path;

pub fn run_list(cfg: &FetchConfig, manifest: Option<&Path>) -> Result<()> {
    let manifest = match manifest {
        Some(path) => Manifest::load(path)?,
        None => cfg.load_manifest()?,
    };
    for name in manifest.iter() {
        println!("{name}");
    }
    Ok(())
}
