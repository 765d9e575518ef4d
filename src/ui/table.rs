use dioxus::prelude::*;

use crate::state::data_model::{ColumnKind, Row};
use crate::state::diff;
use crate::state::heat_map::CellColor;
use crate::state::sorter::{SortDirection, SortState};
use crate::state::table_state::{CellView, TableState};
use crate::state::upload::UploadSession;
use crate::ui::actions;

/// Columns render at a fixed width, so pinned offsets are a multiple of it.
const COLUMN_WIDTH_PX: usize = 150;

#[component]
pub fn Table(session: Signal<UploadSession>) -> Element {
    let Some(table) = session.read().table().cloned() else {
        return rsx! {
            p { class: "empty-message", id: "empty-message", "No data loaded." }
        };
    };

    let columns = table.visible_columns();
    let frozen_index = table.frozen_index();
    let sort = table.sort_state().clone();
    let rows: Vec<Row> = table.sorted_rows().into_iter().cloned().collect();

    rsx! {
        div { class: "table-container", id: "table-container",
            table {
                thead {
                    tr {
                        for (index, col) in columns.iter().enumerate() {
                            th {
                                key: "{col}",
                                class: header_class(&table, index, frozen_index),
                                id: format!("col-{}", sanitize_id(col)),
                                style: pinned_style(table.is_pinned(index), index, None),
                                div { class: "header-cell",
                                    span { class: "header-label", "{col}" }
                                    div { class: "header-actions",
                                        button {
                                            class: sort_button_class(&sort, col),
                                            title: "Sort",
                                            onclick: {
                                                let col_name = col.clone();
                                                move |_| actions::toggle_sort(session, &col_name)
                                            },
                                            "{sort_icon(&sort, col)}"
                                        }
                                        button {
                                            class: if table.is_pinned(index) { "header-btn active" } else { "header-btn" },
                                            title: if is_boundary(index, frozen_index) { "Unfreeze" } else { "Freeze up to here" },
                                            onclick: {
                                                let col_name = col.clone();
                                                move |_| actions::freeze_column(session, &col_name)
                                            },
                                            "\u{2744}"
                                        }
                                        button {
                                            class: "header-btn header-btn-hide",
                                            title: "Hide Column",
                                            onclick: {
                                                let col_name = col.clone();
                                                move |_| actions::hide_column(session, &col_name)
                                            },
                                            "\u{2715}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (row_index, row) in rows.iter().enumerate() {
                        tr {
                            key: "{row_index}",
                            class: if row_index % 2 == 0 { "even" } else { "odd" },
                            for (col_index, col) in columns.iter().enumerate() {
                                {render_cell(&table, row, col, col_index, frozen_index)}
                            }
                        }
                    }
                }
            }
        }
        div { class: "table-footer", id: "row-count", "{table.row_count()} rows loaded." }
    }
}

fn render_cell(
    table: &TableState,
    row: &Row,
    column: &str,
    index: usize,
    frozen_index: isize,
) -> Element {
    let view = table.cell_view(row, column);
    let kind = ColumnKind::classify(column);
    let mut class = if kind.is_numeric() { "cell numeric" } else { "cell" }.to_string();
    if is_boundary(index, frozen_index) {
        class.push_str(" frozen-boundary");
    }
    let style = pinned_style(table.is_pinned(index), index, Some(&view));

    if kind.is_supplier_rate() {
        return rsx! {
            td { class: "{class}", style: "{style}",
                div { class: "rate-cell",
                    span { class: "rate-value", "{view.text}" }
                    if let Some(change) = view.diff.as_deref() {
                        span {
                            class: if diff::is_increase(change) { "rate-diff above" } else { "rate-diff below" },
                            "{diff::diff_label(change)}"
                        }
                    }
                }
            }
        };
    }

    rsx! {
        td { class: "{class}", style: "{style}", "{view.text}" }
    }
}

fn header_class(table: &TableState, index: usize, frozen_index: isize) -> String {
    let mut class = String::from("header");
    if table.is_pinned(index) {
        class.push_str(" pinned");
    }
    if is_boundary(index, frozen_index) {
        class.push_str(" frozen-boundary");
    }
    class
}

/// Sticky positioning for pinned cells plus the heat-map background.
fn pinned_style(pinned: bool, index: usize, view: Option<&CellView>) -> String {
    let mut style = String::new();
    if pinned {
        style.push_str(&format!(
            "position: sticky; left: {}px; z-index: 5;",
            index * COLUMN_WIDTH_PX
        ));
    }
    if let Some(CellView {
        background: color @ CellColor::Hsl { .. },
        ..
    }) = view
    {
        style.push_str(&format!(" background-color: {color};"));
    }
    style
}

fn is_boundary(index: usize, frozen_index: isize) -> bool {
    isize::try_from(index).is_ok_and(|idx| idx == frozen_index)
}

fn sort_button_class(sort: &SortState, column: &str) -> &'static str {
    if sort.is_sorted_by(column) {
        "header-btn active"
    } else {
        "header-btn"
    }
}

fn sort_icon(sort: &SortState, column: &str) -> &'static str {
    if !sort.is_sorted_by(column) {
        return "\u{21C5}";
    }
    match sort.direction {
        SortDirection::Asc => "\u{2191}",
        SortDirection::Desc => "\u{2193}",
    }
}

fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
