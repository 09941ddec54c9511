//! Record entity and its value types.

use crate::error::{Result, WatchlistError};
use std::fmt;

/// Opaque identifier of a record, unique for the lifetime of its controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Star rating in the range 0..=5, where 0 means "unrated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    /// Number of selectable star positions.
    pub const MAX: u8 = 5;

    pub const UNRATED: Rating = Rating(0);

    /// Build a rating the user can select (1..=5).
    ///
    /// Zero is rejected as well: once rated, a record cannot go back to unrated.
    pub fn selectable(value: u8) -> Result<Self> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(WatchlistError::InvalidRating { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }
}

/// One watch-list entry.
///
/// `id` and `title` are fixed at creation. `rating` and `note` change only through
/// [`ListController`](crate::list::ListController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    title: String,
    rating: Rating,
    note: String,
}

impl Record {
    pub(crate) fn new(id: RecordId, title: String) -> Self {
        Self {
            id,
            title,
            rating: Rating::UNRATED,
            note: String::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub(crate) fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    pub(crate) fn set_note(&mut self, note: String) {
        self.note = note;
    }
}
