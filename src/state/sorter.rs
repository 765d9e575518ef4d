use std::cmp::Ordering;

use crate::state::data_model::{clean_number, Row};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: &str, direction: SortDirection) -> Self {
        Self {
            column: Some(column.to_string()),
            direction,
        }
    }

    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }

    /// Same column flips the direction; any other column starts ascending.
    pub fn toggled(&self, column: &str) -> Self {
        let direction = if self.is_sorted_by(column) {
            self.direction.flipped()
        } else {
            SortDirection::Asc
        };
        Self::by(column, direction)
    }
}

/// Rows ordered by `sort`, or in their given order when no column is set.
pub fn sorted_view<'a>(rows: &'a [Row], sort: &SortState) -> Vec<&'a Row> {
    let order: Vec<usize> = (0..rows.len()).collect();
    sort_indices(rows, &order, sort)
        .into_iter()
        .filter_map(|idx| rows.get(idx))
        .collect()
}

/// Stable-sorts `order` (indices into `rows`) so ties keep their position
/// from the arrangement passed in.
pub fn sort_indices(rows: &[Row], order: &[usize], sort: &SortState) -> Vec<usize> {
    let mut sorted = order.to_vec();
    let Some(column) = sort.column.as_deref() else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let left = rows.get(*a).and_then(|row| row.get(column));
        let right = rows.get(*b).and_then(|row| row.get(column));
        compare_cells(left.map(String::as_str), right.map(String::as_str), sort.direction)
    });
    sorted
}

/// Numeric when both sides clean to a number, otherwise ordinal on the raw
/// text. Numbers rank ahead of text, and a missing cell always sorts last
/// whatever the direction, so the comparison stays a total order.
pub fn compare_cells(left: Option<&str>, right: Option<&str>, direction: SortDirection) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => direction.apply(compare_present(left, right)),
    }
}

fn compare_present(left: &str, right: &str) -> Ordering {
    match (clean_number(left), clean_number(right)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.cmp(right),
    }
}
