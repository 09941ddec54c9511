//! Render coordination.
//!
//! [`RenderService`] owns the list controller and the view state. It is the one place
//! where input actions turn into controller operations, always through the record
//! views, and it decides when the screen needs to be redrawn.

use crate::error::Result;
use crate::input::InputAction;
use crate::list::{ListController, Record};
use crate::render::ui::{Focus, ViewState};
use crate::render::views::{CardHints, RecordView};
use log::debug;

/// Tracks the list and its presentation across input actions.
#[derive(Debug)]
pub struct RenderService {
    controller: ListController,
    view_state: ViewState,
    rendered_revision: Option<u64>,
}

impl RenderService {
    pub fn new(view_state: ViewState) -> Self {
        Self::with_controller(ListController::new(), view_state)
    }

    pub fn with_controller(controller: ListController, view_state: ViewState) -> Self {
        Self {
            controller,
            view_state,
            rendered_revision: None,
        }
    }

    pub fn controller(&self) -> &ListController {
        &self.controller
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// True when the list or the view changed since the last [`mark_rendered`].
    ///
    /// [`mark_rendered`]: Self::mark_rendered
    pub fn needs_render(&mut self) -> bool {
        let list_changed = self.rendered_revision != Some(self.controller.revision());
        let view_changed = self.view_state.take_dirty();
        list_changed || view_changed
    }

    pub fn mark_rendered(&mut self) {
        self.rendered_revision = Some(self.controller.revision());
    }

    /// Apply one action. Returns false when the application should quit.
    pub fn process_action(&mut self, action: InputAction) -> Result<bool> {
        if !matches!(action, InputAction::Resize { .. }) {
            self.view_state.clear_message();
        }

        match action {
            InputAction::Quit => return Ok(false),
            InputAction::InsertChar(ch) => self.edit_text(|text| text.push(ch)),
            InputAction::InsertText(mut pasted) => {
                // The title field is a single line.
                if self.view_state.focus == Focus::Draft {
                    pasted.retain(|ch| !matches!(ch, '\r' | '\n'));
                }
                self.edit_text(|text| text.push_str(&pasted))
            }
            InputAction::DeleteChar => self.edit_text(|text| {
                text.pop();
            }),
            InputAction::SubmitDraft => {
                if let Some(id) = self.controller.add_record() {
                    if let Some(index) = self.controller.position(id) {
                        self.view_state.select(index, self.controller.len());
                    }
                }
            }
            InputAction::FocusDraft => self.view_state.set_focus(Focus::Draft),
            InputAction::FocusList => {
                self.view_state.clamp_selection(self.controller.len());
                self.view_state.set_focus(Focus::List);
            }
            InputAction::SelectPrevious => {
                self.view_state.move_selection(-1, self.controller.len())
            }
            InputAction::SelectNext => self.view_state.move_selection(1, self.controller.len()),
            InputAction::SelectFirst => self.view_state.select(0, self.controller.len()),
            InputAction::SelectLast => {
                let len = self.controller.len();
                self.view_state.select(len.saturating_sub(1), len);
            }
            InputAction::Rate(position) => {
                if let Some(event) = self.selected_view().and_then(|view| view.rate(position)) {
                    if let Err(err) = self.controller.apply(event) {
                        self.view_state.set_message(err.to_string());
                    }
                }
            }
            InputAction::RemoveSelected => {
                if let Some(event) = self.selected_view().map(|view| view.remove()) {
                    self.controller.apply(event)?;
                    self.view_state.clamp_selection(self.controller.len());
                }
            }
            InputAction::EditNote => {
                if let Some(record) = self.selected_record() {
                    let id = record.id();
                    debug!("editing note of record {}", id);
                    self.view_state.set_focus(Focus::Note(id));
                }
            }
            InputAction::FinishNote => self.view_state.set_focus(Focus::List),
            InputAction::Resize { width, height } => {
                self.view_state.update_terminal_size(width, height);
            }
            InputAction::NoAction => {}
        }
        Ok(true)
    }

    /// Card hints for the record at `index`.
    pub fn card_hints(&self, index: usize, record: &Record) -> CardHints {
        card_hints(&self.view_state, index, record)
    }

    fn selected_record(&self) -> Option<&Record> {
        self.view_state
            .selected
            .and_then(|index| self.controller.records().get(index))
    }

    fn selected_view(&self) -> Option<RecordView<'_>> {
        let index = self.view_state.selected?;
        let record = self.controller.records().get(index)?;
        Some(RecordView::new(record, self.card_hints(index, record)))
    }

    /// Apply `edit` to the full text of the focused field and hand the result to the
    /// controller. Keys in list focus never reach here.
    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.view_state.focus {
            Focus::Draft => {
                let mut text = self.controller.draft().to_string();
                edit(&mut text);
                self.controller.set_draft_title(text);
            }
            Focus::Note(id) => {
                let Some(record) = self.controller.get(id) else {
                    // Record vanished under the editor.
                    self.view_state.set_focus(Focus::List);
                    return;
                };
                let mut text = record.note().to_string();
                edit(&mut text);
                let index = self.controller.position(id).unwrap_or_default();
                let event = RecordView::new(record, self.card_hints(index, record))
                    .note_changed(text);
                if let Err(err) = self.controller.apply(event) {
                    self.view_state.set_message(err.to_string());
                }
            }
            Focus::List => {}
        }
    }
}

/// Presentation hints for one card given the current view state.
pub fn card_hints(view_state: &ViewState, index: usize, record: &Record) -> CardHints {
    CardHints {
        selected: view_state.focus != Focus::Draft && view_state.selected == Some(index),
        editing_note: view_state.focus == Focus::Note(record.id()),
    }
}
