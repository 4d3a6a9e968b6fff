//! Sequential bulk fetcher.
//!
//! Creates the destination directory, then GETs `base_url + name` for each
//! manifest entry in order and writes the body to `dest_dir/name`. The first
//! failure ends the run; files already written stay where they are.

use crate::config::FetchConfig;
use crate::dest_dir::{self, DirPolicy};
use crate::error::{FetchError, TransferError};
use crate::manifest::Manifest;
use crate::transfer::{self, HttpOptions};
use crate::url_model;
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for a run that are not the base URL, manifest, or destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub dir_policy: DirPolicy,
    pub http: HttpOptions,
}

impl From<&FetchConfig> for FetchOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            dir_policy: cfg.dir_policy,
            http: cfg.http_options(),
        }
    }
}

/// Fetches every manifest entry into `dest_dir`, stopping at the first failure.
///
/// Order of effects:
/// 1. `base_url` is validated (nothing touched on failure).
/// 2. `dest_dir` is created per `options.dir_policy`.
/// 3. One blocking GET per entry, in manifest order; each body is written only
///    after a 2xx status, truncating any existing file of that name.
pub fn fetch_all(
    base_url: &str,
    manifest: &Manifest,
    dest_dir: &Path,
    options: &FetchOptions,
) -> Result<(), FetchError> {
    url_model::validate_base_url(base_url).map_err(|source| FetchError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        source,
    })?;

    dest_dir::prepare(dest_dir, options.dir_policy)?;

    tracing::info!(
        "fetching {} assets from {} into {}",
        manifest.len(),
        base_url,
        dest_dir.display()
    );

    for filename in manifest.iter() {
        fetch_one(base_url, filename, dest_dir, &options.http)?;
    }

    tracing::info!("fetched {} assets into {}", manifest.len(), dest_dir.display());
    Ok(())
}

fn fetch_one(
    base_url: &str,
    filename: &str,
    dest_dir: &Path,
    http: &HttpOptions,
) -> Result<(), FetchError> {
    let fetch_err = |url: &str, source: TransferError| FetchError::Fetch {
        filename: filename.to_string(),
        url: url.to_string(),
        source,
    };

    let url = url_model::asset_url(base_url, filename)
        .map_err(|source| fetch_err(&format!("{}{}", base_url, filename), source))?;
    tracing::debug!("GET {}", url);

    let body = transfer::get(&url, http).map_err(|source| {
        tracing::warn!("{} failed: {}", url, source);
        fetch_err(&url, source)
    })?;

    let path = dest_dir.join(filename);
    fs::write(&path, &body).map_err(|source| FetchError::Write {
        filename: filename.to_string(),
        path: path.clone(),
        source,
    })?;

    tracing::info!("saved {} ({} bytes)", path.display(), body.len());
    Ok(())
}

/// Base URL, destination and options bundled once at startup.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    base_url: String,
    dest_dir: PathBuf,
    options: FetchOptions,
}

impl AssetFetcher {
    pub fn new(
        base_url: impl Into<String>,
        dest_dir: impl Into<PathBuf>,
        options: FetchOptions,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            dest_dir: dest_dir.into(),
            options,
        }
    }

    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self::new(cfg.base_url.clone(), cfg.dest_dir.clone(), FetchOptions::from(cfg))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn run(&self, manifest: &Manifest) -> Result<(), FetchError> {
        fetch_all(&self.base_url, manifest, &self.dest_dir, &self.options)
    }
}
