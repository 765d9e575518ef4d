pub mod actions;
pub mod app;
pub mod table;
pub mod toolbar;
pub mod upload;
