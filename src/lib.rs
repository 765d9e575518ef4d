pub mod config;
pub mod io;
pub mod state;
#[cfg(feature = "desktop")]
pub mod ui;
