pub mod clock;
pub mod identity;
pub mod log;
pub mod report;
pub mod session;
pub mod worked;
