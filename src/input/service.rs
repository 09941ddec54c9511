//! High-level input service.
//!
//! Consumes raw events and maps them, according to the current [`Focus`], to
//! domain-level `InputAction`s that the render coordinator consumes.

use crate::input::raw::RawInputEvent;
use crate::render::ui::Focus;
use log::trace;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level input actions emitted by the input service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Type a character into the focused text field.
    InsertChar(char),
    /// Insert a block of text (paste) into the focused text field.
    InsertText(String),
    /// Delete the last character of the focused text field.
    DeleteChar,
    /// Add a record from the draft title.
    SubmitDraft,
    FocusDraft,
    FocusList,
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Select star position 1..=5 on the selected card.
    Rate(u8),
    RemoveSelected,
    /// Start editing the note of the selected card.
    EditNote,
    FinishNote,
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
}

/// Focus-aware key bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap;

impl KeyMap {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, focus: Focus, key_event: KeyEvent) -> InputAction {
        let modifiers = key_event.modifiers;
        if key_event.code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return InputAction::Quit;
        }
        let plain = !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match focus {
            Focus::Draft => match key_event.code {
                KeyCode::Enter => InputAction::SubmitDraft,
                KeyCode::Backspace => InputAction::DeleteChar,
                KeyCode::Tab | KeyCode::Esc | KeyCode::Down => InputAction::FocusList,
                KeyCode::Char(ch) if plain => InputAction::InsertChar(ch),
                _ => InputAction::NoAction,
            },
            Focus::List => match key_event.code {
                KeyCode::Up => InputAction::SelectPrevious,
                KeyCode::Down => InputAction::SelectNext,
                KeyCode::Home => InputAction::SelectFirst,
                KeyCode::End => InputAction::SelectLast,
                KeyCode::Delete => InputAction::RemoveSelected,
                KeyCode::Enter => InputAction::EditNote,
                KeyCode::Tab => InputAction::FocusDraft,
                KeyCode::Char(ch) if plain => match ch {
                    'k' => InputAction::SelectPrevious,
                    'j' => InputAction::SelectNext,
                    'g' => InputAction::SelectFirst,
                    'G' => InputAction::SelectLast,
                    '1'..='5' => InputAction::Rate(ch as u8 - b'0'),
                    'x' => InputAction::RemoveSelected,
                    'e' => InputAction::EditNote,
                    'a' | 'i' => InputAction::FocusDraft,
                    '+' => InputAction::SubmitDraft,
                    'q' => InputAction::Quit,
                    _ => InputAction::NoAction,
                },
                _ => InputAction::NoAction,
            },
            Focus::Note(_) => match key_event.code {
                KeyCode::Esc | KeyCode::Tab => InputAction::FinishNote,
                KeyCode::Enter => InputAction::InsertChar('\n'),
                KeyCode::Backspace => InputAction::DeleteChar,
                KeyCode::Char(ch) if plain => InputAction::InsertChar(ch),
                _ => InputAction::NoAction,
            },
        }
    }
}

/// Service responsible for producing high-level `InputAction`s from raw events.
#[derive(Debug, Default)]
pub struct InputService {
    key_map: KeyMap,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            key_map: KeyMap::new(),
        }
    }

    /// Map one raw event. Returns None when the event means nothing in this focus.
    pub fn process_event(&self, focus: Focus, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.key_map.handle_key_event(focus, key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Paste(text) if focus.accepts_text() => InputAction::InsertText(text),
            RawInputEvent::Paste(_) => InputAction::NoAction,
        };

        match action {
            InputAction::NoAction => {
                trace!("ignored input in {:?}", focus);
                None
            }
            _ => Some(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListController;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn note_focus() -> Focus {
        let mut controller = ListController::new();
        controller.set_draft_title("Memento");
        Focus::Note(controller.add_record().unwrap())
    }

    #[test]
    fn draft_focus_types_text() {
        let keys = KeyMap::new();
        assert_eq!(
            keys.handle_key_event(Focus::Draft, key(KeyCode::Char('q'))),
            InputAction::InsertChar('q')
        );
        assert_eq!(
            keys.handle_key_event(Focus::Draft, key(KeyCode::Enter)),
            InputAction::SubmitDraft
        );
        assert_eq!(
            keys.handle_key_event(Focus::Draft, key(KeyCode::Tab)),
            InputAction::FocusList
        );
        assert_eq!(
            keys.handle_key_event(
                Focus::Draft,
                KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)
            ),
            InputAction::InsertChar('A')
        );
    }

    #[test]
    fn list_focus_navigates_and_rates() {
        let keys = KeyMap::new();
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Char('j'))),
            InputAction::SelectNext
        );
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Up)),
            InputAction::SelectPrevious
        );
        for (ch, value) in [('1', 1), ('3', 3), ('5', 5)] {
            assert_eq!(
                keys.handle_key_event(Focus::List, key(KeyCode::Char(ch))),
                InputAction::Rate(value)
            );
        }
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Char('0'))),
            InputAction::NoAction
        );
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Char('6'))),
            InputAction::NoAction
        );
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Char('x'))),
            InputAction::RemoveSelected
        );
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Char('+'))),
            InputAction::SubmitDraft
        );
        assert_eq!(
            keys.handle_key_event(Focus::List, key(KeyCode::Char('q'))),
            InputAction::Quit
        );
    }

    #[test]
    fn note_focus_inserts_newlines() {
        let keys = KeyMap::new();
        let focus = note_focus();
        assert_eq!(
            keys.handle_key_event(focus, key(KeyCode::Enter)),
            InputAction::InsertChar('\n')
        );
        assert_eq!(
            keys.handle_key_event(focus, key(KeyCode::Char('x'))),
            InputAction::InsertChar('x')
        );
        assert_eq!(
            keys.handle_key_event(focus, key(KeyCode::Esc)),
            InputAction::FinishNote
        );
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let keys = KeyMap::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [Focus::Draft, Focus::List, note_focus()] {
            assert_eq!(keys.handle_key_event(focus, ctrl_c), InputAction::Quit);
        }
    }

    #[test]
    fn service_filters_no_actions() {
        let service = InputService::new();
        assert_eq!(
            service.process_event(Focus::List, RawInputEvent::Key(key(KeyCode::Char('z')))),
            None
        );
        assert_eq!(
            service.process_event(Focus::List, RawInputEvent::Paste("x".to_string())),
            None
        );
        assert_eq!(
            service.process_event(Focus::Draft, RawInputEvent::Paste("Up".to_string())),
            Some(InputAction::InsertText("Up".to_string()))
        );
        assert_eq!(
            service.process_event(
                Focus::Draft,
                RawInputEvent::Resize {
                    width: 90,
                    height: 30
                }
            ),
            Some(InputAction::Resize {
                width: 90,
                height: 30
            })
        );
    }
}
