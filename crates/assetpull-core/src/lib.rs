pub mod config;
pub mod logging;

pub mod dest_dir;
pub mod error;
pub mod fetcher;
pub mod manifest;
pub mod transfer;
pub mod url_model;

pub use error::{FetchError, TransferError};
pub use fetcher::{fetch_all, AssetFetcher, FetchOptions};
pub use manifest::Manifest;
