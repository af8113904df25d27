//! Error types for catalog operations.

use std::path::PathBuf;

use assistant_core::TemplateDefect;
use thiserror::Error;

/// Errors that can occur while loading or registering templates.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Template failed its structural check.
    #[error("Invalid template '{id}': {defect}")]
    InvalidTemplate {
        id: String,
        #[source]
        defect: TemplateDefect,
    },

    /// Template file failed its structural check.
    #[error("Invalid template '{id}' in {}: {defect}", .path.display())]
    InvalidFile {
        path: PathBuf,
        id: String,
        #[source]
        defect: TemplateDefect,
    },

    /// Template JSON could not be parsed.
    #[error("Failed to parse template {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Template directory or file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
