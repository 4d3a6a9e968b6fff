//! `assetpull fetch` – download every manifest entry, stopping at the first failure.

use crate::cli::FetchArgs;
use anyhow::{Context, Result};
use assetpull_core::config::FetchConfig;
use assetpull_core::AssetFetcher;

pub fn run_fetch(cfg: FetchConfig, args: &FetchArgs) -> Result<()> {
    let cfg = args.apply(cfg);
    let manifest = cfg.load_manifest()?;
    let fetcher = AssetFetcher::from_config(&cfg);
    tracing::debug!(
        "fetch: base_url={} dest={} policy={} entries={}",
        fetcher.base_url(),
        fetcher.dest_dir().display(),
        fetcher.options().dir_policy.as_str(),
        manifest.len()
    );

    fetcher.run(&manifest).with_context(|| {
        format!(
            "fetching {} into {}",
            fetcher.base_url(),
            fetcher.dest_dir().display()
        )
    })?;

    println!(
        "Fetched {} files into {}",
        manifest.len(),
        fetcher.dest_dir().display()
    );
    Ok(())
}
