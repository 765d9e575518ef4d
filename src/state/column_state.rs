use std::collections::BTreeSet;

use crate::state::sorter::SortState;

/// Hidden columns, the frozen boundary and the sort key, taken together.
///
/// Every operation returns a new snapshot; callers swap it in and can detect
/// a no-op by comparing against the previous value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnState {
    hidden: BTreeSet<String>,
    frozen: Option<String>,
    sort: SortState,
}

impl ColumnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden(&self) -> &BTreeSet<String> {
        &self.hidden
    }

    pub fn is_hidden(&self, column: &str) -> bool {
        self.hidden.contains(column)
    }

    pub fn frozen(&self) -> Option<&str> {
        self.frozen.as_deref()
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Hiding the frozen boundary also unfreezes it.
    pub fn hide_column(&self, column: &str) -> Self {
        let mut next = self.clone();
        next.hidden.insert(column.to_string());
        if next.frozen.as_deref() == Some(column) {
            next.frozen = None;
        }
        next
    }

    /// Toggles `column` as the single frozen boundary.
    pub fn freeze_column(&self, column: &str) -> Self {
        let mut next = self.clone();
        next.frozen = if self.frozen.as_deref() == Some(column) {
            None
        } else {
            Some(column.to_string())
        };
        next
    }

    pub fn toggle_sort(&self, column: &str) -> Self {
        Self {
            sort: self.sort.toggled(column),
            ..self.clone()
        }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// `columns` in their original order, minus the hidden ones.
    pub fn visible_columns(&self, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .filter(|col| !self.hidden.contains(col.as_str()))
            .cloned()
            .collect()
    }

    /// Position of the frozen boundary among `visible`, or -1.
    pub fn frozen_index(&self, visible: &[String]) -> isize {
        self.frozen
            .as_deref()
            .and_then(|frozen| visible.iter().position(|col| col == frozen))
            .and_then(|idx| isize::try_from(idx).ok())
            .unwrap_or(-1)
    }
}
