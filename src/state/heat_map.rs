use std::fmt;

use crate::state::data_model::{clean_number, ColumnKind, Row};

const SATURATION: f64 = 85.0;
const LIGHTNESS: f64 = 80.0;
const CHEAPEST_HUE: f64 = 130.0;

/// Background for a cell. `Transparent` means the cell is not heat-mapped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellColor {
    Transparent,
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

impl CellColor {
    /// Shown when every quote in the row is the same price.
    pub const NEUTRAL: Self = Self::Hsl {
        hue: 60.0,
        saturation: 85.0,
        lightness: 85.0,
    };

    pub fn hue(&self) -> Option<f64> {
        match self {
            Self::Transparent => None,
            Self::Hsl { hue, .. } => Some(*hue),
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => write!(f, "transparent"),
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowStats {
    pub min: f64,
    pub max: f64,
}

/// Cheapest and dearest positive supplier quote in `row`.
///
/// Zero and unparsable quotes are left out of the range entirely; a row with
/// no positive quote reports `0..0`.
pub fn row_stats(row: &Row) -> RowStats {
    let quotes = row
        .iter()
        .filter(|(column, _)| ColumnKind::classify(column).is_supplier_rate())
        .map(|(_, value)| clean_number(value).unwrap_or(0.0))
        .filter(|value| *value > 0.0);

    quotes
        .fold(None, |range: Option<RowStats>, value| {
            Some(match range {
                None => RowStats {
                    min: value,
                    max: value,
                },
                Some(RowStats { min, max }) => RowStats {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
        .unwrap_or_default()
}

/// Maps `value` within `min..=max` onto a green (cheap) to red (expensive)
/// hue. Absent or NaN inputs give [`CellColor::Transparent`].
pub fn color_for(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> CellColor {
    let (Some(value), Some(min), Some(max)) = (value, min, max) else {
        return CellColor::Transparent;
    };
    if value.is_nan() || min.is_nan() || max.is_nan() {
        return CellColor::Transparent;
    }

    let span = max - min;
    if span == 0.0 {
        return CellColor::NEUTRAL;
    }

    // Zero quotes sit below the row range and land past green, on a blue hue.
    let ratio = (value - min) / span;
    CellColor::Hsl {
        hue: (1.0 - ratio) * CHEAPEST_HUE,
        saturation: SATURATION,
        lightness: LIGHTNESS,
    }
}

/// Heat-map color for one cell of `row`, or `Transparent` for columns that are
/// not supplier rates or whose value does not parse.
pub fn cell_color(row: &Row, column: &str) -> CellColor {
    if !ColumnKind::classify(column).is_supplier_rate() {
        return CellColor::Transparent;
    }
    let Some(value) = row.get(column).and_then(|text| clean_number(text)) else {
        return CellColor::Transparent;
    };
    let stats = row_stats(row);
    color_for(Some(value), Some(stats.min), Some(stats.max))
}
