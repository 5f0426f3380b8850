pub mod offline;
pub mod script;
