use crate::error::Result;
use crate::list::record::{Rating, Record, RecordId};
use crate::render::protocol::RecordEvent;
use log::{debug, trace};

/// Owner of the watch list and the pending draft title.
///
/// Every mutation goes through one of the methods below. Each successful change bumps
/// [`revision`](Self::revision) so the render loop can tell when a redraw is due
/// without diffing the list.
#[derive(Debug)]
pub struct ListController {
    records: Vec<Record>,
    draft: String,
    next_id: u64,
    revision: u64,
}

impl ListController {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: String::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Display index of the record with `id`.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current draft title, exactly as typed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the draft title verbatim.
    pub fn set_draft_title(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.draft {
            self.draft = text;
            self.bump();
        }
    }

    /// Append a record built from the draft title and clear the draft.
    ///
    /// A draft that is blank after trimming is ignored and left in place. The title is
    /// stored untrimmed.
    pub fn add_record(&mut self) -> Option<RecordId> {
        if self.draft.trim().is_empty() {
            trace!("ignoring add with blank draft {:?}", self.draft);
            return None;
        }

        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        let title = std::mem::take(&mut self.draft);
        debug!("adding record {} {:?}", id, title);
        self.records.push(Record::new(id, title));
        self.bump();
        Some(id)
    }

    /// Remove the record with `id`. Returns false when it was already gone.
    pub fn remove_record(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        if removed {
            debug!("removed record {}", id);
            self.bump();
        } else {
            trace!("remove of unknown record {}", id);
        }
        removed
    }

    /// Set the rating of the record with `id`.
    ///
    /// Values outside 1..=5 are rejected before any record is touched. An unknown id
    /// yields `Ok(false)`.
    pub fn set_rating(&mut self, id: RecordId, value: u8) -> Result<bool> {
        let rating = Rating::selectable(value)?;
        let Some(record) = self.record_mut(id) else {
            trace!("rating for unknown record {}", id);
            return Ok(false);
        };
        if record.rating() != rating {
            record.set_rating(rating);
            debug!("record {} rated {}", id, value);
            self.bump();
        }
        Ok(true)
    }

    /// Replace the note of the record with `id` verbatim.
    pub fn set_note(&mut self, id: RecordId, text: impl Into<String>) -> bool {
        let text = text.into();
        let Some(record) = self.record_mut(id) else {
            trace!("note for unknown record {}", id);
            return false;
        };
        if record.note() != text {
            record.set_note(text);
            debug!("record {} note updated", id);
            self.bump();
        }
        true
    }

    /// Apply an event emitted by a record view.
    pub fn apply(&mut self, event: RecordEvent) -> Result<bool> {
        match event {
            RecordEvent::Remove(id) => Ok(self.remove_record(id)),
            RecordEvent::RatingChanged { id, value } => self.set_rating(id, value),
            RecordEvent::NoteChanged { id, text } => Ok(self.set_note(id, text)),
        }
    }

    fn record_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for ListController {
    fn default() -> Self {
        Self::new()
    }
}
