//! Core data types for the dropzone.

use serde::{Deserialize, Serialize};

use crate::size;

/// Default per-file size limit: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of files accepted in one batch.
pub const DEFAULT_MAX_FILES: usize = 10;

/// MIME types accepted when the caller does not override them.
pub const DEFAULT_ACCEPTED_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "video/mp4",
    "video/quicktime",
    "application/pdf",
];

/// A file the user dragged or picked, not yet validated.
///
/// The handle itself is owned by the host environment. The core only
/// reads the three attributes validation needs.
pub trait CandidateFile {
    /// File name as reported by the host, without any path.
    fn name(&self) -> &str;

    /// Declared MIME type. Empty when the host could not determine one.
    fn declared_type(&self) -> &str;

    /// Size of the file content in bytes.
    fn size_bytes(&self) -> u64;
}

/// Caller overrides for [`DropzoneConfig`].
///
/// Every field is optional; missing fields keep their defaults when
/// merged by [`DropzoneConfig::from_options`]. Deserializes from the
/// camelCase JSON shape `{ "maxFileSize", "maxFiles", "acceptedTypes" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropzoneOptions {
    /// Per-file size limit in bytes.
    pub max_file_size: Option<u64>,
    /// Maximum number of files in one batch.
    pub max_files: Option<usize>,
    /// Allow-list of MIME types.
    pub accepted_types: Option<Vec<String>>,
}

/// Errors produced when merging [`DropzoneOptions`] into a config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `max_files` was zero.
    #[error("max_files must be greater than zero")]
    ZeroMaxFiles,

    /// `max_file_size` was zero.
    #[error("max_file_size must be greater than zero")]
    ZeroMaxFileSize,

    /// The accepted type list was empty, so nothing could ever be accepted.
    #[error("accepted_types must contain at least one MIME type")]
    NoAcceptedTypes,
}

/// Immutable validation limits for one dropzone.
///
/// Built once at construction from defaults plus caller overrides and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropzoneConfig {
    max_file_size: u64,
    max_files: usize,
    accepted_types: Vec<String>,
}

impl DropzoneConfig {
    /// Merge caller overrides over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxFiles`] or
    /// [`ConfigError::ZeroMaxFileSize`] for zero limits, and
    /// [`ConfigError::NoAcceptedTypes`] for an empty allow-list.
    pub fn from_options(options: DropzoneOptions) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            max_file_size: options.max_file_size.unwrap_or(defaults.max_file_size),
            max_files: options.max_files.unwrap_or(defaults.max_files),
            accepted_types: options.accepted_types.unwrap_or(defaults.accepted_types),
        };

        if config.max_files == 0 {
            return Err(ConfigError::ZeroMaxFiles);
        }
        if config.max_file_size == 0 {
            return Err(ConfigError::ZeroMaxFileSize);
        }
        if config.accepted_types.is_empty() {
            return Err(ConfigError::NoAcceptedTypes);
        }
        Ok(config)
    }

    /// Per-file size limit in bytes.
    #[must_use]
    pub const fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Maximum number of files in one batch.
    #[must_use]
    pub const fn max_files(&self) -> usize {
        self.max_files
    }

    /// The MIME allow-list, in the order it was configured.
    #[must_use]
    pub fn accepted_types(&self) -> &[String] {
        &self.accepted_types
    }

    /// Whether a picker for this config should allow multiple selection.
    #[must_use]
    pub const fn allows_multiple(&self) -> bool {
        self.max_files > 1
    }
}

impl Default for DropzoneConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
            accepted_types: DEFAULT_ACCEPTED_TYPES
                .iter()
                .map(|&t| t.to_owned())
                .collect(),
        }
    }
}

/// Why a candidate (or a whole batch) was not accepted.
///
/// The `Display` text is the human-readable message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// More files were offered than `max_files` allows. The whole batch
    /// is rejected.
    #[error("up to {max_files} files can be uploaded at once")]
    BatchTooLarge {
        /// The configured limit.
        max_files: usize,
    },

    /// The declared MIME type is not in the allow-list.
    #[error("{name}: unsupported format")]
    UnsupportedType {
        /// Offending file name.
        name: String,
        /// The type the host reported for it.
        declared_type: String,
    },

    /// The file is larger than `max_file_size`.
    #[error("{name}: file exceeds the size limit (max {limit_mb}MB)")]
    TooLarge {
        /// Offending file name.
        name: String,
        /// Actual size in bytes.
        size_bytes: u64,
        /// The limit in whole megabytes, rounded.
        limit_mb: u64,
    },

    /// Something unexpected went wrong while preparing the batch.
    #[error("an error occurred while processing the files")]
    ProcessingFault,
}

impl Rejection {
    /// Build a [`Rejection::TooLarge`] for a file over `limit_bytes`.
    pub(crate) fn too_large(name: &str, size_bytes: u64, limit_bytes: u64) -> Self {
        Self::TooLarge {
            name: name.to_owned(),
            size_bytes,
            limit_mb: size::whole_mebibytes(limit_bytes),
        }
    }
}

/// Observable state of one dropzone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropzoneState<F> {
    /// Files accepted by the most recent successful batch.
    pub files: Vec<F>,
    /// Whether a drag is currently hovering over the drop target.
    pub is_drag_active: bool,
    /// Most recent error message, if any.
    pub error: Option<String>,
    /// True only while a batch is being validated.
    pub is_loading: bool,
}

impl<F> Default for DropzoneState<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            is_drag_active: false,
            error: None,
            is_loading: false,
        }
    }
}
