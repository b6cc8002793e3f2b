mod config;

use dioxus::logger::tracing::{Level, info, warn};
use dioxus::prelude::*;
use dropzone_core::{CandidateFile, DropzoneConfig, format_size};
use dropzone_io::{BrowserFile, Dropzone, DropzonePlaceholder, ErrorBanner, FileList, use_dropzone};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        web_sys::console::warn_1(&format!("failed to initialize logger: {e}").into());
    }
    dioxus::launch(app);
}

/// Load the embedded config, falling back to defaults when it is unusable.
fn page_config() -> DropzoneConfig {
    config::load_config(config::EMBEDDED_CONFIG).unwrap_or_else(|e| {
        warn!("{e}; using default limits");
        DropzoneConfig::default()
    })
}

/// Root application component.
///
/// Owns the dropzone controller and wires the drop target, the error
/// banner, and the accepted file list to it.
fn app() -> Element {
    let config = use_hook(page_config);
    let mut status = use_signal(|| Option::<String>::None);

    // --- Callbacks ---
    // These run while the controller is borrowed, so they only touch
    // `status`, never the selection signal.
    let on_files_change = use_callback(move |files: Vec<BrowserFile>| {
        let total: u64 = files.iter().map(CandidateFile::size_bytes).sum();
        info!(count = files.len(), total_bytes = total, "accepted files changed");

        if files.is_empty() {
            status.set(None);
            return;
        }
        status.set(Some(format!(
            "{} file(s) ready, {}",
            files.len(),
            format_size(total)
        )));

        // Read the content once to confirm every file is still readable.
        spawn(async move {
            let mut read = 0_usize;
            for file in &files {
                match file.read_bytes().await {
                    Ok(bytes) => read += bytes.len(),
                    Err(e) => warn!("failed to read {}: {e}", file.name()),
                }
            }
            info!(bytes = read, "finished reading accepted files");
        });
    });
    let on_error = use_callback(move |message: String| {
        warn!("dropzone rejected files: {message}");
        status.set(None);
    });

    let selection = use_dropzone(config.clone(), Some(on_files_change), Some(on_error));

    let accepted = config.accepted_types().join(", ");
    let max_size = format_size(config.max_file_size());
    let max_files = config.max_files();

    // --- Layout ---
    rsx! {
        // Tailwind CSS utilities, compiled in the browser.
        script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }

        // Theme colors as CSS variables, with a dark variant.
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-(--bg) text-(--text) flex flex-col",
            header { class: "px-6 py-4 border-b border-(--border)",
                h1 { class: "text-2xl font-bold", "dropzone" }
                p { class: "text-(--muted) text-sm",
                    "Drag files onto the target or click it to choose files"
                }
            }

            div { class: "flex-1 flex flex-col gap-4 p-6 max-w-3xl w-full mx-auto",
                Dropzone { selection,
                    DropzonePlaceholder {}
                }

                p { class: "text-(--muted) text-sm",
                    "Up to {max_files} files, {max_size} each. Accepted: {accepted}"
                }

                ErrorBanner { selection }

                if let Some(ref message) = status() {
                    p { class: "text-(--text-success) text-sm", "{message}" }
                }

                FileList { selection }
            }
        }
    }
}
