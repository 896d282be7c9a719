pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod session;
pub mod status;
