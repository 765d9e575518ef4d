use dioxus::prelude::*;
use std::path::{Path, PathBuf};

use crate::io::csv_io;
use crate::state::upload::UploadSession;

pub async fn open_file(session: Signal<UploadSession>) {
    if session.read().is_pending() {
        return;
    }

    let task = rfd::AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        load_path(session, handle.path().to_path_buf()).await;
    }
}

/// Parses `path` off the UI thread and hands the outcome to the session.
pub async fn load_path(mut session: Signal<UploadSession>, path: PathBuf) {
    let file_name = display_name(&path);
    if !session.with_mut(|state| state.begin(&file_name)) {
        return;
    }

    let result = tokio::task::spawn_blocking(move || csv_io::load_csv(&path)).await;
    session.with_mut(|state| match result {
        Ok(result) => state.finish(result),
        Err(err) => state.finish_with_message(Err(format!("Failed to parse CSV: {err}"))),
    });
}

/// Only the first of several dropped files is loaded.
pub fn dropped_path(files: Vec<String>) -> Option<PathBuf> {
    files
        .into_iter()
        .find(|name| !name.trim().is_empty())
        .map(PathBuf::from)
}

pub fn reset_view(mut session: Signal<UploadSession>) {
    session.with_mut(|state| {
        if let Some(table) = state.table_mut() {
            table.reset();
        }
    });
}

pub fn toggle_sort(mut session: Signal<UploadSession>, column: &str) {
    session.with_mut(|state| {
        if let Some(table) = state.table_mut() {
            table.toggle_sort(column);
        }
    });
}

pub fn freeze_column(mut session: Signal<UploadSession>, column: &str) {
    session.with_mut(|state| {
        if let Some(table) = state.table_mut() {
            table.freeze_column(column);
        }
    });
}

pub fn hide_column(mut session: Signal<UploadSession>, column: &str) {
    session.with_mut(|state| {
        if let Some(table) = state.table_mut() {
            table.hide_column(column);
        }
    });
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
