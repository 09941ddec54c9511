//! Pure record presenters.
//!
//! [`RecordView`] and [`RatingView`] are rebuilt from the controller state on every
//! frame. They hold borrowed data only and report user intent as [`RecordEvent`]s.

use crate::list::{Rating, Record};
use crate::render::protocol::RecordEvent;
use crate::render::ui::ColorTheme;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const FILLED_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";
const RATING_LABEL: &str = "Rating:";
const REMOVE_MARKER: &str = " ✕ ";
const NOTE_CURSOR: &str = "▏";

/// Render state of a single star position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    Filled,
    Empty,
}

/// Blank columns placed before each rating segment when it shares a row with the
/// previous one: label, stars, summary.
const SEGMENT_GAPS: [usize; 3] = [0, 1, 2];

/// Five-position star selector bound to one rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingView {
    rating: Rating,
}

impl RatingView {
    pub fn new(rating: Rating) -> Self {
        Self { rating }
    }

    /// State of positions 1 through 5, in order.
    pub fn positions(&self) -> [StarState; Rating::MAX as usize] {
        let mut states = [StarState::Empty; Rating::MAX as usize];
        for (index, state) in states.iter_mut().enumerate() {
            if (index as u8) < self.rating.value() {
                *state = StarState::Filled;
            }
        }
        states
    }

    /// "unrated" or "n/5".
    pub fn summary(&self) -> String {
        if self.rating.is_rated() {
            format!("{}/{}", self.rating.value(), Rating::MAX)
        } else {
            "unrated".to_string()
        }
    }

    /// Value to emit when `position` is selected. Positions outside 1..=5 emit nothing.
    pub fn select(&self, position: u8) -> Option<u8> {
        (1..=Rating::MAX).contains(&position).then_some(position)
    }

    /// Rating rows for a card `width` columns wide.
    ///
    /// The label, the stars and the summary stay on one row when they fit and move to
    /// rows of their own otherwise.
    pub fn lines(&self, theme: &ColorTheme, width: usize) -> Vec<Line<'static>> {
        self.rows(width)
            .into_iter()
            .map(|row| {
                let mut spans = Vec::new();
                for segment in row.clone() {
                    if segment > row.start {
                        spans.push(Span::raw(" ".repeat(SEGMENT_GAPS[segment])));
                    }
                    match segment {
                        0 => spans.push(Span::styled(RATING_LABEL, theme.rating_text)),
                        1 => spans.extend(self.positions().into_iter().map(|state| match state {
                            StarState::Filled => Span::styled(FILLED_STAR, theme.star_filled),
                            StarState::Empty => Span::styled(EMPTY_STAR, theme.star_empty),
                        })),
                        _ => spans.push(Span::styled(self.summary(), theme.rating_text)),
                    }
                }
                Line::from(spans)
            })
            .collect()
    }

    pub fn row_count(&self, width: usize) -> usize {
        self.rows(width).len()
    }

    fn rows(&self, width: usize) -> Vec<Range<usize>> {
        let widths = [
            RATING_LABEL.width(),
            FILLED_STAR.width() * usize::from(Rating::MAX),
            self.summary().width(),
        ];

        let mut rows = Vec::new();
        let mut start = 0;
        let mut used = 0;
        for (segment, segment_width) in widths.iter().enumerate() {
            if segment > start && used + SEGMENT_GAPS[segment] + segment_width > width {
                rows.push(start..segment);
                start = segment;
                used = 0;
            }
            if segment > start {
                used += SEGMENT_GAPS[segment];
            }
            used += segment_width;
        }
        rows.push(start..widths.len());
        rows
    }
}

/// Presentation hints passed down from the view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHints {
    pub selected: bool,
    pub editing_note: bool,
}

/// One card: title, remove marker, rating line and note body.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    record: &'a Record,
    hints: CardHints,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a Record, hints: CardHints) -> Self {
        Self { record, hints }
    }

    pub fn rating_view(&self) -> RatingView {
        RatingView::new(self.record.rating())
    }

    pub fn remove(&self) -> RecordEvent {
        RecordEvent::Remove(self.record.id())
    }

    pub fn rate(&self, position: u8) -> Option<RecordEvent> {
        self.rating_view()
            .select(position)
            .map(|value| RecordEvent::RatingChanged {
                id: self.record.id(),
                value,
            })
    }

    /// `text` is the whole note after the edit.
    pub fn note_changed(&self, text: impl Into<String>) -> RecordEvent {
        RecordEvent::NoteChanged {
            id: self.record.id(),
            text: text.into(),
        }
    }

    /// Rows the card needs at `width` columns, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let inner = inner_width(width);
        let rating_rows = self.rating_view().row_count(inner);
        let note_rows = self.note_rows(inner).len().max(1);
        (rating_rows + note_rows + 2).min(usize::from(u16::MAX)) as u16
    }

    /// Bordered card; `note_hint` shows in place of an empty note.
    pub fn widget<'b>(
        &self,
        theme: &ColorTheme,
        width: u16,
        note_hint: &'b str,
    ) -> Paragraph<'b>
    where
        'a: 'b,
    {
        let record = self.record;
        let border_style = if self.hints.selected {
            theme.focus_border
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(record.title(), theme.title))
            .title(
                Title::from(Span::styled(REMOVE_MARKER, theme.remove_marker))
                    .alignment(Alignment::Right),
            );

        let inner = inner_width(width);
        let mut lines: Vec<Line<'b>> = self.rating_view().lines(theme, inner);
        let rows = self.note_rows(inner);
        if rows.is_empty() {
            lines.push(Line::from(Span::styled(note_hint, theme.placeholder)));
        } else {
            lines.extend(rows.into_iter().map(Line::from));
        }

        Paragraph::new(lines).block(block)
    }

    /// Note split into display rows, with the edit cursor appended while editing.
    fn note_rows(&self, width: usize) -> Vec<String> {
        let note = self.record.note();
        if note.is_empty() && !self.hints.editing_note {
            return Vec::new();
        }
        let mut text = note.to_string();
        if self.hints.editing_note {
            text.push_str(NOTE_CURSOR);
        }
        wrap_to_width(&text, width)
    }
}

fn inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(2)).max(1)
}

/// Split on newlines, then break rows wider than `width` display columns.
///
/// Graphemes are never split. One wider than `width` gets a row of its own.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for grapheme in line.graphemes(true) {
            let glyph_width = grapheme.width();
            if !row.is_empty() && used + glyph_width > width {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push_str(grapheme);
            used += glyph_width;
        }
        rows.push(row);
    }
    rows
}

/// Longest suffix of `text` that fits in `width` display columns.
pub fn tail_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (offset, grapheme) in text.grapheme_indices(true).rev() {
        used += grapheme.width();
        if used > width {
            break;
        }
        start = offset;
    }
    &text[start..]
}

/// Range of cards to draw so that `selected` is visible within `available` rows.
///
/// Cards are laid out top to bottom starting from the returned start index. The
/// selected card is always included, even when it alone overflows the area.
pub fn visible_range(heights: &[u16], selected: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let selected = selected.min(heights.len() - 1);
    let available = u32::from(available);

    let mut start = selected;
    let mut used = u32::from(heights[selected]);
    while start > 0 && used + u32::from(heights[start - 1]) <= available {
        start -= 1;
        used += u32::from(heights[start]);
    }

    let mut end = selected + 1;
    while end < heights.len() && used < available {
        used += u32::from(heights[end]);
        end += 1;
    }
    start..end
}
