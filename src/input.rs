//! Input subsystem.
//!
//! Raw terminal events are collected on a dedicated thread and mapped to focus-aware
//! actions before they reach the render coordinator.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than
// reaching into submodules.
pub use raw::{RawInputCollector, RawInputEvent};
pub use service::{InputAction, InputService, KeyMap};
