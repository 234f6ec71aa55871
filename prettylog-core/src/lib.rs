pub mod access_log;
pub mod cli;
pub mod config;
pub mod ctx;
pub mod format;
pub mod handler;
pub mod logging;
