//! Application configuration loaded from TOML.
//!
//! ```text
//! catalog_path = "data/ciclos_sanitarios.json"
//!
//! [pdf]
//! paper_size = "a4"
//! font_size = 10
//!
//! [pdf.margins]
//! bottom = 6.35
//!
//! [pdf.fonts]
//! family = "LiberationSans"
//! search_dirs = ["/usr/share/fonts/truetype/liberation"]
//! ```

use crate::error::{ConfigError, Result};
use crate::render::PdfConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration, built once at process start.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pdf: PdfConfig,
    /// Catalog JSON file; the embedded dataset is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()).into())
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }
}
