//! Dismissable error message for the dropzone.

use dioxus::prelude::*;
use dropzone_core::FileSelection;

use crate::file::BrowserFile;

/// Props for the [`ErrorBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    /// Controller created by [`use_dropzone`](crate::use_dropzone).
    selection: Signal<FileSelection<BrowserFile>>,
}

/// Shows the most recent validation error with a dismiss button.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    let mut selection = props.selection;
    let error = selection.read().error().map(str::to_owned);

    rsx! {
        if let Some(message) = error {
            div {
                class: "flex items-start justify-between gap-4 bg-(--error-bg) border border-(--error-border) rounded p-3",
                p { class: "text-(--text-error) text-sm", "{message}" }
                button {
                    class: "text-sm text-(--text-error) cursor-pointer",
                    aria_label: "Dismiss error",
                    onclick: move |_| selection.write().clear_error(),
                    "×"
                }
            }
        }
    }
}
