//! Loading the page's dropzone configuration.
//!
//! The config ships embedded in the binary as `dropzone.json`, in the
//! camelCase shape accepted by [`DropzoneOptions`]. Any field may be
//! omitted to keep its default.

use dropzone_core::{ConfigError, DropzoneConfig, DropzoneOptions};

/// Configuration embedded at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("../dropzone.json");

/// Errors that can occur while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// The JSON could not be parsed into options.
    #[error("failed to parse dropzone config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The options parsed but describe unusable limits.
    #[error("invalid dropzone config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parse and validate a JSON configuration.
///
/// # Errors
///
/// Returns [`ConfigLoadError::Parse`] for malformed JSON or wrongly
/// typed fields, and [`ConfigLoadError::Invalid`] for zero limits or an
/// empty type list.
pub fn load_config(json: &str) -> Result<DropzoneConfig, ConfigLoadError> {
    let options: DropzoneOptions = serde_json::from_str(json)?;
    Ok(DropzoneConfig::from_options(options)?)
}
