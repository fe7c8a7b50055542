// Linkstat Library - Public API

// Re-export error types
pub mod error;
pub use error::{LinkstatError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::MonitorConfig;

// Initialize logging
//
// Off unless RUST_LOG is set: anything written to stderr would land on top of
// the dashboard.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Off)
        .parse_default_env()
        .init();
}
