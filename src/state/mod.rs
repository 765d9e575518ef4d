pub mod column_state;
pub mod data_model;
pub mod diff;
pub mod heat_map;
pub mod sorter;
pub mod table_state;
pub mod upload;
pub mod validator;
