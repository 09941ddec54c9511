//! Protocol definitions shared between the record views and the list controller.
//!
//! Views never touch records. They describe what the user asked for with a
//! [`RecordEvent`] and the controller decides what that means for the list.

use crate::list::RecordId;

/// Events raised by a record view, addressed to the record they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    /// Remove control activated.
    Remove(RecordId),
    /// Star position selected; `value` is the 1-based position.
    RatingChanged { id: RecordId, value: u8 },
    /// Note field edited; `text` is the complete new note.
    NoteChanged { id: RecordId, text: String },
}

