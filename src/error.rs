use std::io;
use thiserror::Error;

/// Custom error type for linkstat
#[derive(Error, Debug)]
pub enum LinkstatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot resolve '{host}': {reason}")]
    Resolve { host: String, reason: String },

    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for linkstat
pub type Result<T> = std::result::Result<T, LinkstatError>;

impl LinkstatError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LinkstatError::Config(msg.into())
    }

    /// Create a resolution error for `host`
    pub fn resolve<H: Into<String>, S: Into<String>>(host: H, reason: S) -> Self {
        LinkstatError::Resolve {
            host: host.into(),
            reason: reason.into(),
        }
    }

    pub fn tui<S: Into<String>>(msg: S) -> Self {
        LinkstatError::Tui(msg.into())
    }
}
