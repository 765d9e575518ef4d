use std::path::Path;

use rategrid::io::csv_io::{self, UploadError};
use rategrid::state::validator::ValidationError;

fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("tests").join("data").join(name)
}

#[test]
fn test_load_csv_keeps_header_order() {
    let dataset = csv_io::load_csv(&fixture("quotes.csv")).unwrap();
    assert_eq!(
        dataset.columns(),
        [
            "Item Code",
            "Material",
            "Quantity",
            "Estimated Rate",
            "Supplier 1 (Rate)",
            "Supplier 2 (Rate)",
            "Supplier 3 (Rate)",
            "Supplier 4 (Rate)",
            "Supplier 5 (Rate)",
        ]
    );
}

#[test]
fn test_load_csv_skips_blank_lines_and_keeps_raw_text() {
    let dataset = csv_io::load_csv(&fixture("quotes.csv")).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.rows()[1]["Estimated Rate"], "$1,000");
    assert_eq!(dataset.rows()[3]["Item Code"], "IC-004");
}

#[test]
fn test_load_csv_missing_supplier_is_format_error() {
    let err = csv_io::load_csv(&fixture("missing_supplier3.csv")).unwrap_err();
    match err {
        UploadError::Format(ValidationError::MissingColumns(missing)) => {
            assert_eq!(missing, vec!["Supplier 3 (Rate)".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_csv_header_only_is_format_error() {
    let err = csv_io::load_csv(&fixture("header_only.csv")).unwrap_err();
    assert!(matches!(err, UploadError::Format(ValidationError::Empty)));
    assert!(err.to_string().starts_with("Invalid CSV format"));
}

#[test]
fn test_load_csv_extra_columns_and_short_rows() {
    let dataset = csv_io::load_csv(&fixture("extra_columns.csv")).unwrap();
    assert!(dataset.columns().contains(&"Notes".to_string()));
    assert!(dataset.columns().contains(&"Supplier 6 (Rate)".to_string()));

    let short = &dataset.rows()[1];
    assert_eq!(short["Supplier 2 (Rate)"], "$6");
    assert!(!short.contains_key("Supplier 3 (Rate)"));
    assert!(!short.contains_key("Notes"));
}

#[test]
fn test_load_csv_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.xlsx");
    std::fs::write(&path, "Item Code\n1\n").unwrap();

    let err = csv_io::load_csv(&path).unwrap_err();
    assert!(matches!(err, UploadError::FileType));
    assert_eq!(err.to_string(), "Please upload a valid CSV file");
}

#[test]
fn test_check_file_type_ignores_extension_case() {
    assert!(csv_io::check_file_type(Path::new("QUOTES.CSV")).is_ok());
    assert!(csv_io::check_file_type(Path::new("quotes")).is_err());
}

#[test]
fn test_load_csv_file_not_found() {
    let path = Path::new("/nonexistent/path/quotes.csv");
    let err = csv_io::load_csv(path).unwrap_err();
    assert!(matches!(err, UploadError::Io(_)));
}

#[test]
fn test_parse_csv_invalid_utf8_is_parse_error() {
    let mut bytes = b"Item Code,Material\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);

    let err = csv_io::parse_csv(bytes.as_slice()).unwrap_err();
    assert!(matches!(err, UploadError::Parse(_)));
}

#[test]
fn test_parse_csv_duplicate_header_keeps_first_value() {
    let input = "Item Code,Material,Quantity,Estimated Rate,Supplier 1 (Rate),Supplier 2 (Rate),\
Supplier 3 (Rate),Supplier 4 (Rate),Supplier 5 (Rate),Material\n\
A,Steel,1,2,3,4,5,6,7,Copper\n";

    let dataset = csv_io::parse_csv(input.as_bytes()).unwrap();
    assert_eq!(dataset.rows()[0]["Material"], "Steel");
    assert_eq!(
        dataset.columns().iter().filter(|c| *c == "Material").count(),
        1
    );
}
