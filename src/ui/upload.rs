use dioxus::prelude::*;

use crate::state::upload::{UploadSession, UploadStatus};
use crate::ui::actions;

#[component]
pub fn Upload(session: Signal<UploadSession>) -> Element {
    let status = session.read().status().clone();
    let mut dragging = use_signal(|| false);

    rsx! {
        div { class: "upload-page",
            div { class: "upload-card",
                h1 { class: "upload-title", "Supplier Rate Analyzer" }
                p { class: "subtitle",
                    "Upload your CSV to visualize quotes and generate insights instantly."
                }
                if let UploadStatus::Pending { file_name } = &status {
                    div { class: "upload-pending", id: "upload-pending",
                        div { class: "spinner" }
                        p { class: "pending-label", "Crunching the numbers..." }
                        p { class: "pending-file", "{file_name}" }
                    }
                } else {
                    div {
                        class: if dragging() { "drop-zone active" } else { "drop-zone" },
                        id: "drop-zone",
                        ondragover: move |evt: DragEvent| {
                            evt.prevent_default();
                            dragging.set(true);
                        },
                        ondragleave: move |_| dragging.set(false),
                        ondrop: move |evt: DragEvent| {
                            evt.prevent_default();
                            dragging.set(false);
                            let dropped = evt.files().map(|engine| engine.files()).unwrap_or_default();
                            if let Some(path) = actions::dropped_path(dropped) {
                                spawn(async move {
                                    actions::load_path(session, path).await;
                                });
                            }
                        },
                        button {
                            class: "upload-btn",
                            id: "btn-upload",
                            onclick: move |_| {
                                spawn(async move {
                                    actions::open_file(session).await;
                                });
                            },
                            if dragging() { "Drop it like it's hot!" } else { "Click to upload or drag & drop" }
                        }
                        p { class: "upload-hint", "Supported format: .CSV" }
                    }
                }
                if let UploadStatus::Error(message) = &status {
                    div { class: "error-message", id: "upload-error", "{message}" }
                }
            }
        }
    }
}
