//! UI state management structures
//!
//! This module contains presentation state only: which widget has focus, which card is
//! selected, and what the status line says. Records themselves live in the
//! [`ListController`](crate::list::ListController).

use crate::list::RecordId;

/// Part of the screen that receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The "add movie" text field
    #[default]
    Draft,
    /// Browsing the list of cards
    List,
    /// Editing the note of one record
    Note(RecordId),
}

impl Focus {
    /// Check if this focus accepts free text input
    pub fn accepts_text(&self) -> bool {
        matches!(self, Focus::Draft | Focus::Note(_))
    }

    /// Short key help shown on the status line
    pub fn key_help(&self) -> &'static str {
        match self {
            Focus::Draft => "Enter add | Tab list | Ctrl-C quit",
            Focus::List => {
                "j/k move | 1-5 rate | e note | x remove | a add | + add draft | q quit"
            }
            Focus::Note(_) => "Esc done | Enter newline | Ctrl-C quit",
        }
    }
}

/// Viewport state for rendering
#[derive(Debug)]
pub struct ViewState {
    /// Widget receiving keys
    pub focus: Focus,

    /// Index of the selected card, None when the list is empty
    pub selected: Option<usize>,

    /// Status line content
    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,

    dirty: bool,
}

impl ViewState {
    /// Create a new view state with the draft field focused
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            focus: Focus::Draft,
            selected: None,
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
            dirty: true,
        }
    }

    /// Move focus, marking the view for redraw when it changes
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.dirty = true;
        }
    }

    /// Select the card at `index`, clamped to a list of `len` cards
    pub fn select(&mut self, index: usize, len: usize) {
        let selected = if len == 0 {
            None
        } else {
            Some(index.min(len - 1))
        };
        if self.selected != selected {
            self.selected = selected;
            self.dirty = true;
        }
    }

    /// Move the selection by `delta` cards within a list of `len` cards
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        let current = self.selected.unwrap_or(0);
        let target = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize)
        };
        self.select(target, len);
    }

    /// Keep the selection valid after the list changed length
    pub fn clamp_selection(&mut self, len: usize) {
        let index = self.selected.unwrap_or(0);
        self.select(index, len);
    }

    /// Update terminal dimensions
    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            self.dirty = true;
        }
        changed
    }

    /// Set a temporary status message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.status_line.set_message(message.into());
        self.dirty = true;
    }

    /// Clear the status message if one is showing
    pub fn clear_message(&mut self) {
        if self.status_line.message.is_some() {
            self.status_line.clear_message();
            self.dirty = true;
        }
    }

    /// Take the redraw flag, resetting it
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self, record_count: usize) -> String {
        self.status_line
            .format_status_line(record_count, self.focus.key_help())
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    /// Create a new status line
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Clear any temporary message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the status line for display
    pub fn format_status_line(&self, record_count: usize, help: &str) -> String {
        let count = match record_count {
            1 => "1 movie".to_string(),
            n => format!("{} movies", n),
        };
        match self.message {
            Some(ref message) => format!("{} | {}", count, message),
            None => format!("{} | {}", count, help),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_creation() {
        let mut state = ViewState::new(80, 24);
        assert_eq!(state.focus, Focus::Draft);
        assert_eq!(state.selected, None);
        assert_eq!(state.viewport_width, 80);
        assert_eq!(state.viewport_height, 24);
        assert!(state.take_dirty());
        assert!(!state.take_dirty());
    }

    #[test]
    fn test_selection_clamps() {
        let mut state = ViewState::new(80, 24);

        state.select(5, 3);
        assert_eq!(state.selected, Some(2));

        state.move_selection(-10, 3);
        assert_eq!(state.selected, Some(0));

        state.move_selection(1, 3);
        assert_eq!(state.selected, Some(1));

        state.clamp_selection(1);
        assert_eq!(state.selected, Some(0));

        state.clamp_selection(0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_focus() {
        assert!(Focus::Draft.accepts_text());
        assert!(!Focus::List.accepts_text());

        let mut state = ViewState::new(80, 24);
        state.take_dirty();
        state.set_focus(Focus::Draft);
        assert!(!state.take_dirty());
        state.set_focus(Focus::List);
        assert!(state.take_dirty());
    }

    #[test]
    fn test_status_line_format() {
        let mut status = StatusLine::new();
        assert_eq!(status.format_status_line(0, "help"), "0 movies | help");
        assert_eq!(status.format_status_line(1, "help"), "1 movie | help");

        status.set_message("Invalid rating".to_string());
        assert_eq!(
            status.format_status_line(2, "help"),
            "2 movies | Invalid rating"
        );

        status.clear_message();
        assert_eq!(status.format_status_line(2, "help"), "2 movies | help");
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = ViewState::new(80, 24);
        state.take_dirty();

        assert!(!state.update_terminal_size(80, 24));
        assert!(!state.take_dirty());

        assert!(state.update_terminal_size(120, 30));
        assert_eq!(state.viewport_width, 120);
        assert_eq!(state.viewport_height, 30);
        assert!(state.take_dirty());
    }
}
