use log::debug;

use crate::state::column_state::ColumnState;
use crate::state::data_model::{ColumnKind, Dataset, Row, ESTIMATED_RATE};
use crate::state::diff;
use crate::state::heat_map::{self, CellColor};
use crate::state::sorter::{self, SortState};

/// What the renderer needs for one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    pub text: String,
    pub background: CellColor,
    pub diff: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TableState {
    dataset: Dataset,
    columns: ColumnState,
    arrangement: Vec<usize>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let arrangement = (0..dataset.len()).collect();
        Self {
            dataset,
            columns: ColumnState::default(),
            arrangement,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn column_state(&self) -> &ColumnState {
        &self.columns
    }

    pub fn sort_state(&self) -> &SortState {
        self.columns.sort()
    }

    pub fn row_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn hide_column(&mut self, column: &str) -> bool {
        let next = self.columns.hide_column(column);
        self.swap_columns(next)
    }

    pub fn freeze_column(&mut self, column: &str) -> bool {
        let next = self.columns.freeze_column(column);
        self.swap_columns(next)
    }

    /// Re-sorts the current arrangement, so ties keep the order they had
    /// after the previous sort.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        let next = self.columns.toggle_sort(column);
        self.arrangement = sorter::sort_indices(self.dataset.rows(), &self.arrangement, next.sort());
        self.swap_columns(next)
    }

    pub fn reset(&mut self) -> bool {
        self.arrangement = (0..self.dataset.len()).collect();
        let next = self.columns.reset();
        self.swap_columns(next)
    }

    pub fn visible_columns(&self) -> Vec<String> {
        self.columns.visible_columns(self.dataset.columns())
    }

    pub fn frozen_index(&self) -> isize {
        self.columns.frozen_index(&self.visible_columns())
    }

    /// Whether the column at `visible_index` is pinned during horizontal scroll.
    pub fn is_pinned(&self, visible_index: usize) -> bool {
        isize::try_from(visible_index).is_ok_and(|idx| idx <= self.frozen_index())
    }

    pub fn sorted_rows(&self) -> Vec<&Row> {
        self.arrangement
            .iter()
            .filter_map(|idx| self.dataset.rows().get(*idx))
            .collect()
    }

    pub fn cell_view(&self, row: &Row, column: &str) -> CellView {
        let text = row.get(column).cloned().unwrap_or_default();
        if !ColumnKind::classify(column).is_supplier_rate() {
            return CellView {
                text,
                background: CellColor::Transparent,
                diff: None,
            };
        }

        let background = heat_map::cell_color(row, column);
        let diff = row
            .get(ESTIMATED_RATE)
            .and_then(|estimated| diff::percent_diff(estimated, &text));
        CellView {
            text,
            background,
            diff,
        }
    }

    fn swap_columns(&mut self, next: ColumnState) -> bool {
        if next == self.columns {
            return false;
        }
        debug!("column state {:?} -> {:?}", self.columns, next);
        self.columns = next;
        true
    }
}
