//! Browser file handles.
//!
//! Files reach the dropzone from two places: Dioxus drag events
//! (`FileData`) and the temporary picker input (`web_sys::File`).
//! [`BrowserFile`] normalizes both into one shape with the metadata
//! read up front, so validation never touches the browser.

use std::fmt;

use dioxus::html::FileData;
use dropzone_core::CandidateFile;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur when reading a browser file.
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The browser reported a size that is not a whole, non-negative
    /// number of bytes.
    #[error("invalid file size reported by the browser: {0}")]
    InvalidSize(f64),
}

impl From<JsValue> for FileReadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Where the file content lives.
#[derive(Clone)]
pub enum FileContent {
    /// Delivered by a Dioxus drag event.
    Dropped(FileData),
    /// Chosen in the temporary picker input.
    Picked(web_sys::File),
}

/// A file offered by the user, with its metadata captured.
#[derive(Clone)]
pub struct BrowserFile {
    name: String,
    declared_type: String,
    size_bytes: u64,
    content: FileContent,
}

impl BrowserFile {
    /// Wrap a file from a Dioxus drag event.
    #[must_use]
    pub fn from_file_data(file: FileData) -> Self {
        Self {
            name: file.name(),
            declared_type: file.content_type().unwrap_or_default(),
            size_bytes: file.size(),
            content: FileContent::Dropped(file),
        }
    }

    /// Wrap a file from an `<input type="file">` selection.
    ///
    /// # Errors
    ///
    /// Returns [`FileReadError::InvalidSize`] if the browser reports a
    /// size that cannot be a byte count.
    pub fn from_web_file(file: web_sys::File) -> Result<Self, FileReadError> {
        Ok(Self {
            name: file.name(),
            declared_type: file.type_(),
            size_bytes: size_from_js(file.size())?,
            content: FileContent::Picked(file),
        })
    }

    /// Which source produced this file.
    #[must_use]
    pub const fn content(&self) -> &FileContent {
        &self.content
    }

    /// Read the whole file content.
    ///
    /// # Errors
    ///
    /// Returns [`FileReadError::JsError`] if the browser fails to read
    /// the file (e.g., it was deleted or permission was revoked).
    #[allow(clippy::future_not_send)] // WASM is single-threaded; File is !Send
    pub async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        match &self.content {
            FileContent::Dropped(file) => file
                .read_bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| FileReadError::JsError(format!("{e}"))),
            FileContent::Picked(file) => {
                let buffer = JsFuture::from(file.array_buffer()).await?;
                Ok(js_sys::Uint8Array::new(&buffer).to_vec())
            }
        }
    }
}

impl CandidateFile for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

impl fmt::Debug for BrowserFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.content {
            FileContent::Dropped(_) => "dropped",
            FileContent::Picked(_) => "picked",
        };
        f.debug_struct("BrowserFile")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("size_bytes", &self.size_bytes)
            .field("source", &source)
            .finish()
    }
}

/// Convert a JS `Blob.size` (an `f64`) to a byte count.
///
/// # Errors
///
/// Returns [`FileReadError::InvalidSize`] for NaN, infinite, negative,
/// fractional, or larger-than-2^53 values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range checked first
pub fn size_from_js(size: f64) -> Result<u64, FileReadError> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if !size.is_finite() || size < 0.0 || size.fract() > 0.0 || size > MAX_SAFE_INTEGER {
        return Err(FileReadError::InvalidSize(size));
    }
    Ok(size as u64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn whole_sizes_convert() {
        assert_eq!(size_from_js(0.0).unwrap(), 0);
        assert_eq!(size_from_js(10_485_760.0).unwrap(), 10_485_760);
    }

    #[test]
    fn nonsensical_sizes_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -1.0, 1.5, 1e20] {
            assert!(
                matches!(size_from_js(bad), Err(FileReadError::InvalidSize(_))),
                "size {bad} should be rejected"
            );
        }
    }
}
