pub mod actor;
pub mod entry;
pub mod status;
