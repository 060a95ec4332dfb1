use anyhow::Result as _Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImgmashError {
    #[error("Settings not found: {path} (run `imgmash init --images-dir <dir>` first)")]
    SettingsNotFound { path: String },

    #[error("Image directory not found: {path}")]
    ImageDirNotFound { path: String },

    #[error("At least two images are required, found {found}")]
    CatalogTooSmall { found: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = _Result<T, ImgmashError>;
