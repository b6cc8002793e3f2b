//! dropzone-io: Browser I/O and Dioxus component library.
//!
//! Adapts Dioxus drag events and a temporary file-picker input to the
//! `dropzone-core` selection controller, reads file content, and
//! provides the drop target, file list, and error banner components.

pub mod components;
pub mod drag;
pub mod file;
pub mod hooks;
pub mod picker;

pub use components::{Dropzone, DropzonePlaceholder, ErrorBanner, FileList};
pub use file::{BrowserFile, FileReadError};
pub use hooks::use_dropzone;
pub use picker::PickerError;
