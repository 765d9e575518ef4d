use dioxus::prelude::*;

use crate::state::sorter::SortDirection;
use crate::state::upload::UploadSession;
use crate::ui::actions;

#[component]
pub fn Toolbar(session: Signal<UploadSession>) -> Element {
    let snapshot = session.read().clone();
    let file_name = snapshot.file_name().unwrap_or_default().to_string();
    let Some(table) = snapshot.table() else {
        return rsx! {};
    };

    let hidden_count = table.column_state().hidden().len();
    let sort_label = table.sort_state().column.as_ref().map(|column| {
        let direction = match table.sort_state().direction {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        };
        format!("Sorted by {column} ({direction})")
    });

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-back",
                    onclick: move |_| {
                        let mut session = session;
                        session.with_mut(|state| state.clear());
                    },
                    "\u{2190} Upload another file"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-reset",
                    onclick: move |_| actions::reset_view(session),
                    "\u{21BA} Reset View"
                }
            }
            div { class: "toolbar-separator" }

            div { class: "toolbar-info",
                if let Some(label) = sort_label {
                    span { class: "toolbar-label", id: "label-sort", "{label}" }
                }
                if hidden_count > 0 {
                    span { class: "toolbar-label", id: "label-hidden", "{hidden_count} hidden" }
                }
                if !file_name.is_empty() {
                    span { class: "file-path", "{file_name}" }
                }
            }
        }
    }
}
