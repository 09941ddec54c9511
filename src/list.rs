//! In-memory watch list state.
//!
//! [`ListController`] is the single source of truth for the list of records and the
//! pending draft title. Views never mutate records directly; they emit events that the
//! controller applies.

pub mod controller;
pub mod record;

pub use controller::ListController;
pub use record::{Rating, Record, RecordId};
