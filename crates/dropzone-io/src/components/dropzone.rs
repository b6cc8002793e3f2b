//! Drop target component with drag-and-drop and click-to-pick.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdCloudUpload;
use dropzone_core::{CandidateFile, FileSelection};

use crate::drag::BrowserDrag;
use crate::file::BrowserFile;
use crate::picker;

/// Props for the [`Dropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    /// Controller created by [`use_dropzone`](crate::use_dropzone).
    selection: Signal<FileSelection<BrowserFile>>,
    /// Placeholder shown while no file is accepted.
    children: Element,
}

/// A drop target that also opens the file picker when clicked.
///
/// The border turns solid while a drag hovers over it. While no files
/// are accepted it renders `children`; afterwards it lists the accepted
/// file names.
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    let mut selection = props.selection;

    let open_picker = move |_: MouseEvent| {
        let request = selection.peek().picker_request();
        spawn(async move {
            match picker::pick_files(&request).await {
                Ok(outcome) => selection.write().on_picker_completed(outcome),
                Err(e) => {
                    warn!("file picker failed: {e}");
                    selection.write().report_processing_fault();
                }
            }
        });
    };

    let (active, names) = {
        let current = selection.read();
        (current.is_drag_active(), joined_names(current.files()))
    };

    rsx! {
        div {
            class: root_class(active),
            aria_label: "Upload files",
            ondragenter: move |evt| selection.write().on_drag_enter(&BrowserDrag(&evt)),
            ondragleave: move |evt| selection.write().on_drag_leave(&BrowserDrag(&evt)),
            ondragover: move |evt| selection.peek().on_drag_over(&BrowserDrag(&evt)),
            ondrop: move |evt| selection.write().on_drop(&BrowserDrag(&evt)),
            onclick: open_picker,

            // Children must not receive pointer events, or every child
            // boundary fires its own enter/leave pair.
            div { class: "flex flex-col items-center justify-center gap-2 pointer-events-none",
                if names.is_empty() {
                    {props.children}
                } else {
                    div { class: "text-[var(--text)] break-all", "{names}" }
                }
            }
        }
    }
}

/// Default placeholder: an upload icon and a short caption.
#[component]
pub fn DropzonePlaceholder() -> Element {
    rsx! {
        Icon { width: 40, height: 40, icon: LdCloudUpload }
        span { class: "text-[var(--text-secondary)]", "Upload from your device" }
    }
}

/// Container classes for the idle and drag-active states.
fn root_class(active: bool) -> &'static str {
    if active {
        "border-4 border-solid border-blue-400 rounded-lg grid place-items-center p-20 cursor-pointer"
    } else {
        "border-4 border-dotted border-[var(--border-muted)] rounded-lg grid place-items-center p-20 cursor-pointer"
    }
}

/// Accepted file names as one display string.
fn joined_names<F: CandidateFile>(files: &[F]) -> String {
    files
        .iter()
        .map(CandidateFile::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl CandidateFile for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn declared_type(&self) -> &str {
            "image/png"
        }
        fn size_bytes(&self) -> u64 {
            0
        }
    }

    #[test]
    fn names_are_joined_in_order() {
        assert_eq!(joined_names(&[Named("b.png"), Named("a.png")]), "b.png, a.png");
        assert_eq!(joined_names::<Named>(&[]), "");
    }

    #[test]
    fn active_border_is_solid() {
        assert!(root_class(true).contains("border-solid"));
        assert!(root_class(false).contains("border-dotted"));
    }
}
