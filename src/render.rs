//! Rendering subsystem.
//!
//! Hosts the render coordinator that applies input actions to the list, the pure record
//! views, and the terminal UI that draws them.

pub mod protocol;
pub mod service;
pub mod ui;
pub mod views;

pub use protocol::RecordEvent;
pub use service::RenderService;
pub use views::{RatingView, RecordView};
