//! Export settings management
//!
//! Settings are stored as JSON. Missing fields take their defaults, and a
//! file that cannot be parsed is ignored in favour of the defaults.

use crate::pdf::PdfExportOptions;
use crate::Result;
use layout_engine::PageGeometry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory for exported files, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "exports";

/// Configuration for onboarding PDF exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    /// Page size and margins
    pub page: PageGeometry,
    /// Directory exported files are written to
    pub output_dir: PathBuf,
    /// PDF metadata and compression
    pub pdf: PdfExportOptions,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pdf: PdfExportOptions::default(),
        }
    }
}

impl ExportSettings {
    /// Load settings from `path`
    ///
    /// A missing file yields the defaults. So does a file that fails to
    /// parse, after logging a warning. Other I/O failures are returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<ExportSettings>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
