//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui
//! for a cross-platform terminal interface. It only reads the list controller; every
//! change to the list goes through the render service.

use crate::error::{Result, WatchlistError};
use crate::list::ListController;
use crate::render::service::card_hints;
use crate::render::ui::{ColorTheme, Focus, UIRenderer, ViewState};
use crate::render::views::{tail_to_width, visible_range, RecordView};
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const INPUT_CURSOR: &str = "▏";

/// User-facing texts that can be overridden from the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub heading: String,
    pub placeholder: String,
    pub draft_hint: String,
    pub note_hint: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            heading: "Movie Watch List".to_string(),
            placeholder: "No movies yet. Add a movie".to_string(),
            draft_hint: "Enter movie title...".to_string(),
            note_hint: "Add your review here...".to_string(),
        }
    }
}

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    labels: Labels,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme and labels
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default(), Labels::default())
    }

    /// Create terminal UI with custom theme and labels
    pub fn with_theme(theme: ColorTheme, labels: Labels) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
            labels,
        })
    }
}

/// Draw the whole screen into `frame`.
pub fn draw(
    frame: &mut Frame,
    controller: &ListController,
    view_state: &ViewState,
    theme: &ColorTheme,
    labels: &Labels,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let heading = Paragraph::new(Span::styled(labels.heading.as_str(), theme.heading))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    render_draft(frame, chunks[1], controller, view_state, theme, labels);
    render_records(frame, chunks[2], controller, view_state, theme, labels);
    render_status(frame, chunks[3], controller, view_state, theme);
}

fn render_draft(
    frame: &mut Frame,
    area: Rect,
    controller: &ListController,
    view_state: &ViewState,
    theme: &ColorTheme,
    labels: &Labels,
) {
    let focused = view_state.focus == Focus::Draft;
    let border_style = if focused {
        theme.focus_border
    } else {
        theme.border
    };

    // Keep the end of a long title and the cursor in view.
    let cursor_width = usize::from(focused);
    let inner = usize::from(area.width.saturating_sub(2));
    let visible = tail_to_width(controller.draft(), inner.saturating_sub(cursor_width));

    let mut spans = Vec::new();
    if !visible.is_empty() {
        spans.push(Span::raw(visible));
    }
    if focused {
        spans.push(Span::raw(INPUT_CURSOR));
    }
    if controller.draft().is_empty() {
        spans.push(Span::styled(labels.draft_hint.as_str(), theme.placeholder));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Add Movie ")
        .title(Title::from(" Enter to add ").alignment(Alignment::Right));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_records(
    frame: &mut Frame,
    area: Rect,
    controller: &ListController,
    view_state: &ViewState,
    theme: &ColorTheme,
    labels: &Labels,
) {
    if controller.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(labels.placeholder.as_str(), theme.placeholder)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
        frame.render_widget(placeholder, area);
        return;
    }

    let views: Vec<RecordView> = controller
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| RecordView::new(record, card_hints(view_state, index, record)))
        .collect();
    let heights: Vec<u16> = views.iter().map(|view| view.height(area.width)).collect();
    let selected = view_state.selected.unwrap_or(0);

    let mut y = area.y;
    let bottom = area.y.saturating_add(area.height);
    for index in visible_range(&heights, selected, area.height) {
        if y >= bottom {
            break;
        }
        let height = heights[index].min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        frame.render_widget(
            views[index].widget(theme, area.width, labels.note_hint.as_str()),
            card_area,
        );
        y += height;
    }
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    controller: &ListController,
    view_state: &ViewState,
    theme: &ColorTheme,
) {
    let fg = if view_state.status_line.message.is_some() {
        theme.error_text
    } else {
        theme.status_fg
    };
    let status_style = Style::default().bg(theme.status_bg).fg(fg);
    let status =
        Paragraph::new(view_state.format_status_line(controller.len())).style(status_style);
    frame.render_widget(status, area);
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, controller: &ListController, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            let labels = &self.labels;
            terminal
                .draw(|frame| draw(frame, controller, view_state, theme, labels))
                .map_err(|e| WatchlistError::terminal("draw failed", e))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn screen_text(controller: &ListController, view_state: &ViewState) -> Vec<String> {
        let backend = TestBackend::new(view_state.viewport_width, view_state.viewport_height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        let labels = Labels::default();
        terminal
            .draw(|frame| draw(frame, controller, view_state, &theme, &labels))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new().unwrap();
        assert!(ui.terminal.is_none());
        assert_eq!(ui.theme.status_bg, Color::Blue);
        assert_eq!(ui.labels.heading, "Movie Watch List");

        let ui = TerminalUI::with_theme(ColorTheme::monochrome(), Labels::default()).unwrap();
        assert_eq!(ui.theme.status_bg, Color::Black);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let controller = ListController::new();
        let view_state = ViewState::new(60, 12);
        let rows = screen_text(&controller, &view_state);

        assert!(contains(&rows, "Movie Watch List"));
        assert!(contains(&rows, "Enter movie title..."));
        assert!(contains(&rows, "No movies yet. Add a movie"));
        assert!(contains(&rows, "0 movies"));
    }

    #[test]
    fn records_render_as_cards() {
        let mut controller = ListController::new();
        controller.set_draft_title("Dune");
        let id = controller.add_record().unwrap();
        controller.set_rating(id, 4).unwrap();
        controller.set_note(id, "great");
        controller.set_draft_title("Alien");
        controller.add_record();

        let mut view_state = ViewState::new(60, 16);
        view_state.set_focus(Focus::List);
        view_state.select(0, controller.len());
        let rows = screen_text(&controller, &view_state);

        assert!(!contains(&rows, "No movies yet"));
        assert!(contains(&rows, "Dune"));
        assert!(contains(&rows, "Rating: ★★★★☆  4/5"));
        assert!(contains(&rows, "great"));
        assert!(contains(&rows, "Alien"));
        assert!(contains(&rows, "Rating: ☆☆☆☆☆  unrated"));
        assert!(contains(&rows, "Add your review here..."));
        assert!(contains(&rows, "✕"));
        assert!(contains(&rows, "2 movies"));
    }

    #[test]
    fn selection_scrolls_into_view() {
        let mut controller = ListController::new();
        for title in ["One", "Two", "Three", "Four", "Five"] {
            controller.set_draft_title(title);
            controller.add_record();
        }

        let mut view_state = ViewState::new(40, 14);
        view_state.set_focus(Focus::List);
        view_state.select(4, controller.len());
        let rows = screen_text(&controller, &view_state);

        assert!(contains(&rows, "Five"));
        assert!(!contains(&rows, "One"));
    }

    #[test]
    fn wide_character_notes_wrap_inside_the_card() {
        let mut controller = ListController::new();
        controller.set_draft_title("Tokyo");
        let id = controller.add_record().unwrap();
        controller.set_note(id, "日本語の映画ですAB");

        let view_state = ViewState::new(12, 14);
        let rows = screen_text(&controller, &view_state);

        assert!(contains(&rows, "画"));
        assert!(contains(&rows, "AB"));
        assert!(contains(&rows, "unrated"));
    }

    #[test]
    fn long_draft_scrolls_to_the_cursor() {
        let mut controller = ListController::new();
        controller.set_draft_title("The Good, the Bad and the Ugly");

        let view_state = ViewState::new(20, 8);
        let rows = screen_text(&controller, &view_state);
        assert!(contains(&rows, "the Ugly▏"));
        assert!(!contains(&rows, "The Good"));
    }

    #[test]
    fn placeholder_wraps_on_narrow_screens() {
        let controller = ListController::new();
        let view_state = ViewState::new(16, 10);
        let rows = screen_text(&controller, &view_state);
        assert!(contains(&rows, "No movies yet."));
        assert!(contains(&rows, "Add a movie"));
    }

    #[test]
    fn status_line_shows_messages() {
        let controller = ListController::new();
        let mut view_state = ViewState::new(60, 10);
        view_state.set_message("Invalid rating 9: expected a value between 1 and 5");
        let rows = screen_text(&controller, &view_state);
        assert!(contains(&rows, "0 movies | Invalid rating 9"));
    }
}
