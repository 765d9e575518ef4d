use std::path::PathBuf;

use dioxus::logger::tracing::Level;

pub const OPEN_VAR: &str = "RATEGRID_OPEN";
pub const LOG_VAR: &str = "RATEGRID_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// CSV loaded as soon as the window opens.
    pub open_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            open_path: None,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unknown log levels fall back to `info`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let open_path = lookup(OPEN_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let log_level = lookup(LOG_VAR)
            .and_then(|value| value.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);
        Self {
            open_path,
            log_level,
        }
    }
}
