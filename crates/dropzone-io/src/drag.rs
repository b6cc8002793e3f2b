//! Adapter from Dioxus drag events to the selection controller.

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use dropzone_core::DragInput;

use crate::file::BrowserFile;

/// Borrowed view of a Dioxus [`DragEvent`] for [`DragInput`].
pub struct BrowserDrag<'a>(pub &'a DragEvent);

impl DragInput for BrowserDrag<'_> {
    type File = BrowserFile;

    fn suppress_default(&self) {
        self.0.prevent_default();
        self.0.stop_propagation();
    }

    fn show_copy_effect(&self) {
        self.0.data_transfer().set_drop_effect("copy");
    }

    fn dropped_files(&self) -> Vec<BrowserFile> {
        self.0
            .files()
            .into_iter()
            .map(BrowserFile::from_file_data)
            .collect()
    }
}
