//! Low-level input collection: crossterm polling and translation into primitive events
//! that the higher-level input service can consume.

use crate::error::{Result, WatchlistError};
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Bracketed paste, delivered as one block of text.
    Paste(String),
}

impl RawInputEvent {
    /// Translate a crossterm event, dropping the ones the list has no use for
    /// (mouse, focus changes, key releases and repeats).
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Some(RawInputEvent::Key(key_event))
            }
            Event::Resize(width, height) => Some(RawInputEvent::Resize { width, height }),
            Event::Paste(text) => Some(RawInputEvent::Paste(text)),
            _ => None,
        }
    }
}

/// Collector that polls crossterm for events.
#[derive(Debug)]
pub struct RawInputCollector {
    poll_timeout: Duration,
}

impl RawInputCollector {
    pub fn with_timeout(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Retrieve the next raw input event, blocking up to the poll timeout.
    pub fn poll_event(&mut self) -> Result<Option<RawInputEvent>> {
        let ready = event::poll(self.poll_timeout)
            .map_err(|e| WatchlistError::terminal("event poll failed", e))?;
        if !ready {
            return Ok(None);
        }

        let event = event::read().map_err(|e| WatchlistError::terminal("event read failed", e))?;
        Ok(RawInputEvent::from_event(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{
        KeyCode, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind,
    };

    #[test]
    fn key_presses_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(
            RawInputEvent::from_event(Event::Key(key)),
            Some(RawInputEvent::Key(key))
        );
    }

    #[test]
    fn key_releases_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(RawInputEvent::from_event(Event::Key(release)), None);
    }

    #[test]
    fn resize_and_paste_are_forwarded() {
        assert_eq!(
            RawInputEvent::from_event(Event::Resize(100, 40)),
            Some(RawInputEvent::Resize {
                width: 100,
                height: 40
            })
        );
        assert_eq!(
            RawInputEvent::from_event(Event::Paste("Blade Runner".to_string())),
            Some(RawInputEvent::Paste("Blade Runner".to_string()))
        );
    }

    #[test]
    fn mouse_events_are_ignored() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(RawInputEvent::from_event(mouse), None);
    }
}
