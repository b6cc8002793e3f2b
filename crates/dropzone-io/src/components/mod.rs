//! Dioxus UI components for dropzone.
//!
//! Provides the drop target with its default placeholder, the accepted
//! file list, and the error banner. All three share one
//! [`FileSelection`](dropzone_core::FileSelection) signal.

mod dropzone;
mod error_banner;
mod file_list;

pub use dropzone::{Dropzone, DropzonePlaceholder};
pub use error_banner::ErrorBanner;
pub use file_list::FileList;
