use log::{info, warn};

use crate::io::csv_io::UploadError;
use crate::state::data_model::Dataset;
use crate::state::table_state::TableState;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Empty,
    Pending {
        file_name: String,
    },
    Valid {
        file_name: String,
    },
    Error(String),
}

/// Tracks one upload attempt at a time and owns the table once it loads.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct UploadSession {
    status: UploadStatus,
    table: Option<TableState>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, UploadStatus::Pending { .. })
    }

    pub fn table(&self) -> Option<&TableState> {
        self.table.as_ref()
    }

    pub fn table_mut(&mut self) -> Option<&mut TableState> {
        self.table.as_mut()
    }

    pub fn file_name(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Pending { file_name } | UploadStatus::Valid { file_name } => {
                Some(file_name.as_str())
            }
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Starts an attempt. Refused while another one is still pending.
    pub fn begin(&mut self, file_name: &str) -> bool {
        if self.is_pending() {
            return false;
        }
        self.status = UploadStatus::Pending {
            file_name: file_name.to_string(),
        };
        true
    }

    pub fn finish(&mut self, result: Result<Dataset, UploadError>) {
        self.finish_with_message(result.map_err(|err| err.to_string()));
    }

    /// Like [`finish`](Self::finish) for failures that never produced an
    /// [`UploadError`], such as a crashed worker.
    pub fn finish_with_message(&mut self, result: Result<Dataset, String>) {
        let file_name = match std::mem::take(&mut self.status) {
            UploadStatus::Pending { file_name } => file_name,
            _ => String::new(),
        };
        match result {
            Ok(dataset) => {
                info!(
                    "loaded {file_name}: {} rows across {} columns",
                    dataset.len(),
                    dataset.columns().len()
                );
                self.table = Some(TableState::from_dataset(dataset));
                self.status = UploadStatus::Valid { file_name };
            }
            Err(message) => {
                warn!("upload of {file_name} rejected: {message}");
                self.table = None;
                self.status = UploadStatus::Error(message);
            }
        }
    }

    pub fn clear(&mut self) {
        self.table = None;
        self.status = UploadStatus::Empty;
    }
}
