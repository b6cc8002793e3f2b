//! Dioxus hook owning a [`FileSelection`] for one widget.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use dropzone_core::{DropzoneConfig, FileSelection, SelectionCallbacks};

use crate::file::BrowserFile;

/// Create the selection controller for a dropzone and keep it alive for
/// the component's lifetime.
///
/// The returned signal is shared with [`Dropzone`](crate::Dropzone),
/// [`FileList`](crate::FileList), and [`ErrorBanner`](crate::ErrorBanner).
/// Writing through it re-renders every reader.
///
/// `on_files_change` and `on_error` run while the controller is
/// borrowed mutably, so they must not read the returned signal.
/// The config is captured on first render; later values are ignored.
pub fn use_dropzone(
    config: DropzoneConfig,
    on_files_change: Option<EventHandler<Vec<BrowserFile>>>,
    on_error: Option<EventHandler<String>>,
) -> Signal<FileSelection<BrowserFile>> {
    use_signal(move || {
        let mut callbacks = SelectionCallbacks::new();
        if let Some(handler) = on_files_change {
            callbacks = callbacks.on_files_change(move |files: &[BrowserFile]| {
                handler.call(files.to_vec());
            });
        }
        if let Some(handler) = on_error {
            callbacks = callbacks.on_error(move |message| handler.call(message.to_owned()));
        }

        let mut selection = FileSelection::new(config, callbacks);
        selection.subscribe(|state| {
            debug!(
                files = state.files.len(),
                drag_active = state.is_drag_active,
                loading = state.is_loading,
                error = state.error.as_deref(),
                "dropzone state changed"
            );
        });
        selection
    })
}
