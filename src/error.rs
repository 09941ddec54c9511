//! Error types and handling infrastructure for watchlist.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary wraps these with `anyhow` for top-level context.
//!
//! Note that most list operations never fail: stale record ids and blank titles are
//! silent no-ops. Errors are reserved for terminal I/O, configuration, and ratings
//! outside the selectable range.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for watchlist operations.
#[derive(Error, Debug)]
pub enum WatchlistError {
    /// Terminal I/O failures (raw mode, alternate screen, event polling)
    #[error("Terminal operation failed: {message}")]
    TerminalError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be located, read or parsed
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Explicit configuration path does not exist
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Rating outside the selectable 1..=5 range
    #[error("Invalid rating {value}: expected a value between 1 and 5")]
    InvalidRating { value: u8 },
}

/// Standard Result type for watchlist operations.
pub type Result<T> = std::result::Result<T, WatchlistError>;

impl WatchlistError {
    /// Create a TerminalError from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::TerminalError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for WatchlistError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::Interrupted => Self::TerminalError {
                message: "Interrupted".to_string(),
                source: err,
            },
            std::io::ErrorKind::Unsupported => Self::TerminalError {
                message: "Terminal not supported".to_string(),
                source: err,
            },
            _ => Self::TerminalError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let rating = WatchlistError::InvalidRating { value: 7 };
        assert_eq!(
            rating.to_string(),
            "Invalid rating 7: expected a value between 1 and 5"
        );

        let missing = WatchlistError::ConfigNotFound {
            path: PathBuf::from("/tmp/watchlist.toml"),
        };
        assert_eq!(
            missing.to_string(),
            "Configuration file not found: /tmp/watchlist.toml"
        );

        let config = WatchlistError::config("bad theme");
        assert_eq!(config.to_string(), "Configuration error: bad theme");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            WatchlistError::invalid_argument("--theme"),
            WatchlistError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Unsupported, "no tty");
        let err: WatchlistError = io_err.into();

        match err {
            WatchlistError::TerminalError { message, .. } => {
                assert_eq!(message, "Terminal not supported");
            }
            _ => panic!("Expected TerminalError variant"),
        }
    }
}
