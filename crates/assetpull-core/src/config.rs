use anyhow::{Context, Result};
use crate::dest_dir::DirPolicy;
use crate::manifest::Manifest;
use crate::transfer::HttpOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the built-in asset set.
pub const DEFAULT_BASE_URL: &str = "https://monstermash.zone/imgs/";

/// Destination directory, relative to the working directory.
pub const DEFAULT_DEST_DIR: &str = "imgs";

/// Global configuration loaded from `~/.config/assetpull/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Prefix each manifest entry is appended to.
    pub base_url: String,
    /// Directory receiving all assets (flat, no subfolders).
    pub dest_dir: PathBuf,
    /// Behavior when `dest_dir` already exists.
    #[serde(default)]
    pub dir_policy: DirPolicy,
    /// Optional manifest file; if missing, the built-in list is used.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    /// Optional connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional whole-request timeout in seconds (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            dir_policy: DirPolicy::FailIfExists,
            manifest: None,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl FetchConfig {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    /// The manifest file if one is configured, otherwise the built-in list.
    pub fn load_manifest(&self) -> Result<Manifest> {
        match &self.manifest {
            Some(path) => Ok(Manifest::load(path)?),
            None => Ok(Manifest::builtin()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("assetpull")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
