use std::path::Path;

use rategrid::io::csv_io;
use rategrid::state::upload::{UploadSession, UploadStatus};

fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("tests").join("data").join(name)
}

#[test]
fn test_new_session_is_empty() {
    let session = UploadSession::new();
    assert_eq!(session.status(), &UploadStatus::Empty);
    assert!(session.table().is_none());
}

#[test]
fn test_begin_refuses_while_pending() {
    let mut session = UploadSession::new();
    assert!(session.begin("a.csv"));
    assert!(session.is_pending());
    assert!(!session.begin("b.csv"));
    assert_eq!(session.file_name(), Some("a.csv"));
}

#[test]
fn test_successful_upload_becomes_valid() {
    let mut session = UploadSession::new();
    session.begin("quotes.csv");
    session.finish(csv_io::load_csv(&fixture("quotes.csv")));

    assert_eq!(
        session.status(),
        &UploadStatus::Valid {
            file_name: "quotes.csv".to_string()
        }
    );
    assert_eq!(session.table().map(|t| t.row_count()), Some(4));
}

#[test]
fn test_failed_upload_reports_message_and_allows_retry() {
    let mut session = UploadSession::new();
    session.begin("missing_supplier3.csv");
    session.finish(csv_io::load_csv(&fixture("missing_supplier3.csv")));

    let message = session.error_message().unwrap();
    assert!(message.starts_with("Invalid CSV format"));
    assert!(message.contains("Supplier 3 (Rate)"));
    assert!(session.table().is_none());

    assert!(session.begin("quotes.csv"));
    session.finish(csv_io::load_csv(&fixture("quotes.csv")));
    assert!(session.table().is_some());
    assert_eq!(session.error_message(), None);
}

#[test]
fn test_clear_returns_to_empty() {
    let mut session = UploadSession::new();
    session.begin("quotes.csv");
    session.finish(csv_io::load_csv(&fixture("quotes.csv")));
    session.clear();

    assert_eq!(session.status(), &UploadStatus::Empty);
    assert!(session.table().is_none());
}

#[test]
fn test_view_changes_stay_valid() {
    let mut session = UploadSession::new();
    session.begin("quotes.csv");
    session.finish(csv_io::load_csv(&fixture("quotes.csv")));

    let table = session.table_mut().unwrap();
    table.toggle_sort("Quantity");
    table.hide_column("Material");
    table.reset();

    assert!(matches!(session.status(), UploadStatus::Valid { .. }));
}

#[test]
fn test_worker_failure_message() {
    let mut session = UploadSession::new();
    session.begin("quotes.csv");
    session.finish_with_message(Err("Failed to parse CSV: worker panicked".to_string()));
    assert_eq!(
        session.status(),
        &UploadStatus::Error("Failed to parse CSV: worker panicked".to_string())
    );
}
