//! # watchlist - Terminal Movie Watch List
//!
//! A small full-screen terminal application for keeping a list of movies to watch,
//! each with a 1–5 star rating and a free-text review note. Everything lives in memory
//! for the duration of the session.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`list`] - The list controller, the single owner of all records
//! - [`input`] - Terminal event collection and focus-aware key bindings
//! - [`render`] - Record views, the render coordinator and the ratatui terminal UI
//! - [`config`] - Presentation settings loaded from an optional TOML file
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;
pub mod list;

// Subsystems
pub mod input;
pub mod render;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, WatchlistError};

// Public API surface for external usage
pub use app::Application;
pub use config::AppConfig;
pub use list::{ListController, Rating, Record, RecordId};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
