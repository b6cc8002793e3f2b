//! List of accepted files with per-file removal.

use dioxus::prelude::*;
use dropzone_core::{CandidateFile, FileSelection, format_size};

use crate::file::BrowserFile;

/// Props for the [`FileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    /// Controller created by [`use_dropzone`](crate::use_dropzone).
    selection: Signal<FileSelection<BrowserFile>>,
}

/// Accepted files with name, type, and size, a remove button on each
/// row, and a "Clear all" button. Renders nothing while empty.
#[component]
pub fn FileList(props: FileListProps) -> Element {
    let mut selection = props.selection;

    let rows: Vec<(String, String, String)> = selection
        .read()
        .files()
        .iter()
        .map(|file| {
            (
                file.name().to_owned(),
                file.declared_type().to_owned(),
                format_size(file.size_bytes()),
            )
        })
        .collect();

    if rows.is_empty() {
        return rsx! {};
    }

    let count = rows.len();
    let limit = selection.read().max_files();

    rsx! {
        div { class: "flex flex-col gap-2",
            div { class: "flex items-center justify-between",
                h3 { class: "text-sm font-semibold text-[var(--text-heading)]",
                    "Selected files ({count}/{limit})"
                }
                button {
                    class: "px-3 py-1 text-sm rounded bg-[var(--btn-secondary)] hover:bg-[var(--btn-secondary-hover)] cursor-pointer",
                    onclick: move |_| selection.write().clear_files(),
                    "Clear all"
                }
            }
            ul { class: "flex flex-col gap-1",
                for (index, (name, mime, size)) in rows.into_iter().enumerate() {
                    li {
                        key: "{index}-{name}",
                        class: "flex items-center justify-between gap-4 px-3 py-2 rounded bg-[var(--surface)]",
                        div { class: "flex flex-col min-w-0",
                            span { class: "truncate", "{name}" }
                            span { class: "text-xs text-[var(--muted)]", "{mime} · {size}" }
                        }
                        button {
                            class: "text-sm text-[var(--text-error)] hover:underline cursor-pointer",
                            aria_label: "Remove {name}",
                            onclick: move |_| {
                                selection.write().remove_file(index);
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
