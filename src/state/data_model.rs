use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

pub type Row = BTreeMap<String, String>;

pub const ITEM_CODE: &str = "Item Code";
pub const MATERIAL: &str = "Material";
pub const QUANTITY: &str = "Quantity";
pub const ESTIMATED_RATE: &str = "Estimated Rate";

/// A loaded upload: header order plus the parsed rows. Immutable once built.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut seen = std::collections::BTreeSet::new();
        let columns = columns
            .into_iter()
            .filter(|col| seen.insert(col.clone()))
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Identifier,
    Quantity,
    EstimatedRate,
    SupplierRate(u32),
    Other,
}

impl ColumnKind {
    pub fn classify(name: &str) -> Self {
        match name {
            ITEM_CODE | MATERIAL => Self::Identifier,
            QUANTITY => Self::Quantity,
            ESTIMATED_RATE => Self::EstimatedRate,
            _ => supplier_index(name).map_or(Self::Other, Self::SupplierRate),
        }
    }

    pub fn is_supplier_rate(self) -> bool {
        matches!(self, Self::SupplierRate(_))
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Quantity | Self::EstimatedRate | Self::SupplierRate(_)
        )
    }
}

fn supplier_index(name: &str) -> Option<u32> {
    let captures = supplier_pattern().captures(name)?;
    let index: u32 = captures.get(1)?.as_str().parse().ok()?;
    (index > 0).then_some(index)
}

fn supplier_pattern() -> &'static Regex {
    SUPPLIER_PATTERN
        .get_or_init(|| Regex::new(r"^Supplier (\d+) \(Rate\)$").expect("Hardcode regex pattern"))
}

static SUPPLIER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Drops currency symbols, separators and anything else outside `[0-9.-]`,
/// then reads the longest leading decimal number from what is left.
///
/// `"$1,250.50"` becomes `1250.5`, `"12-3"` becomes `12`, `"abc"` is `None`.
pub fn clean_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    leading_float(&cleaned)
}

fn leading_float(text: &str) -> Option<f64> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let int_part = rest.get(..int_len)?;
    let frac_part = rest
        .get(int_len..)?
        .strip_prefix('.')
        .map(|tail| {
            let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
            tail.get(..frac_len).unwrap_or_default()
        })
        .unwrap_or_default();

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    let sign = if negative { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float_accepts_trailing_dot() {
        assert_eq!(leading_float("5."), Some(5.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("-.5"), Some(-0.5));
    }

    #[test]
    fn leading_float_rejects_sign_or_dot_alone() {
        assert_eq!(leading_float("-"), None);
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("-."), None);
        assert_eq!(leading_float(""), None);
    }

    #[test]
    fn leading_float_stops_at_second_dot() {
        assert_eq!(leading_float("1.2.3"), Some(1.2));
        assert_eq!(leading_float("--1"), None);
    }
}
