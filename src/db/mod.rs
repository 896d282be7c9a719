pub mod initialize;
pub mod log;
pub mod pool;
pub mod schema;
pub mod store;
