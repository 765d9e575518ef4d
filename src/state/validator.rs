use thiserror::Error;

use crate::state::data_model::Row;

/// Headers every upload must carry, spelled exactly as expected in the file.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Item Code",
    "Material",
    "Quantity",
    "Estimated Rate",
    "Supplier 1 (Rate)",
    "Supplier 2 (Rate)",
    "Supplier 3 (Rate)",
    "Supplier 4 (Rate)",
    "Supplier 5 (Rate)",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the file contains no data rows")]
    Empty,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Checks the first row against [`REQUIRED_COLUMNS`]. Later rows are not
/// inspected; the whole dataset passes or fails together.
pub fn validate_rows(rows: &[Row]) -> Result<(), ValidationError> {
    let first = rows.first().ok_or(ValidationError::Empty)?;
    let missing = missing_columns(first.keys().map(String::as_str));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingColumns(missing))
    }
}

/// Required headers absent from `headers`, in declaration order.
pub fn missing_columns<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let present: Vec<&str> = headers.into_iter().collect();
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.contains(required))
        .map(|required| required.to_string())
        .collect()
}
