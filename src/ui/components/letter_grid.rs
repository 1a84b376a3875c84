use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::puzzle::layout::{GridLayout, Slot};
use crate::puzzle::session::PuzzleSession;
use crate::ui::theme::Theme;

/// Sizes used to lay out the grid, picked to fit the available width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u16,
    pub height: u16,
    pub gap: u16,
    pub space: u16,
}

const BOXED: CellMetrics = CellMetrics {
    width: 5,
    height: 3,
    gap: 1,
    space: 3,
};

const COMPACT: CellMetrics = CellMetrics {
    width: 3,
    height: 1,
    gap: 0,
    space: 1,
};

pub const WIDEN_HINT: &str = "Widen the terminal to see every letter";

impl CellMetrics {
    fn row_width(&self, slots: &[Slot]) -> u16 {
        let spaces = slots.iter().filter(|s| **s == Slot::Space).count() as u16;
        let letters = slots.len() as u16 - spaces;
        letters * self.width
            + spaces * self.space
            + (slots.len() as u16).saturating_sub(1) * self.gap
    }

    fn total_width(&self, layout: &GridLayout) -> u16 {
        self.row_width(layout.slots())
    }

    /// Boxed cells when they fit, with one spare row above for the bounce.
    pub fn for_area(layout: &GridLayout, area: Rect) -> Self {
        if area.height > BOXED.height && BOXED.total_width(layout) <= area.width {
            BOXED
        } else {
            COMPACT
        }
    }
}

/// Split the slots into rows no wider than `width`. Rows break at word
/// spaces; a word longer than a row is split across rows.
fn wrap_rows(layout: &GridLayout, metrics: CellMetrics, width: u16) -> Vec<Vec<Slot>> {
    if metrics.total_width(layout) <= width {
        return vec![layout.slots().to_vec()];
    }

    let pitch = metrics.width + metrics.gap;
    let per_row = usize::from((width.saturating_add(metrics.gap) / pitch).max(1));
    let mut rows = Vec::new();
    let mut current: Vec<Slot> = Vec::new();

    for word in layout.slots().split(|s| *s == Slot::Space) {
        for chunk in word.chunks(per_row) {
            let mut candidate = current.clone();
            if !candidate.is_empty() {
                candidate.push(Slot::Space);
            }
            candidate.extend_from_slice(chunk);
            if metrics.row_width(&candidate) <= width {
                current = candidate;
            } else {
                if !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                }
                current = chunk.to_vec();
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Resting position of every visible letter cell, keyed by solution index.
/// Cells that do not fit inside `area` are left out.
pub fn cell_rects(layout: &GridLayout, area: Rect) -> Vec<(usize, Rect)> {
    let metrics = CellMetrics::for_area(layout, area);
    let rows = wrap_rows(layout, metrics, area.width);
    // One spare row above each line of cells for the bounce.
    let line_height = metrics.height + 1;
    let total_height = rows.len() as u16 * line_height;
    let mut y = area.y + area.height.saturating_sub(total_height) / 2 + 1;

    let mut rects = Vec::with_capacity(layout.letter_count());
    for row in &rows {
        let mut x = area.x + area.width.saturating_sub(metrics.row_width(row)) / 2;
        for slot in row {
            match slot {
                Slot::Letter(i) => {
                    let rect = Rect::new(x, y, metrics.width, metrics.height);
                    if rect.bottom() <= area.bottom() && rect.right() <= area.right() {
                        rects.push((*i, rect));
                    }
                    x += metrics.width + metrics.gap;
                }
                Slot::Space => x += metrics.space + metrics.gap,
            }
        }
        y = y.saturating_add(line_height);
    }
    rects
}

pub struct LetterGrid<'a> {
    session: &'a PuzzleSession,
    theme: &'a Theme,
    shake_offset: i16,
}

impl<'a> LetterGrid<'a> {
    pub fn new(session: &'a PuzzleSession, theme: &'a Theme) -> Self {
        Self {
            session,
            theme,
            shake_offset: 0,
        }
    }

    /// Horizontal displacement while the grid is shaking.
    pub fn shake_offset(mut self, offset: i16) -> Self {
        self.shake_offset = offset;
        self
    }
}

impl Widget for LetterGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let layout = self.session.layout();
        let metrics = CellMetrics::for_area(layout, area);
        let feedback = self.session.feedback();
        let rects = cell_rects(layout, area);

        if rects.len() < layout.letter_count() {
            let alignment = if WIDEN_HINT.len() as u16 <= area.width {
                Alignment::Center
            } else {
                Alignment::Left
            };
            Line::styled(WIDEN_HINT, Style::default().fg(colors.muted()))
                .alignment(alignment)
                .render(Rect::new(area.x, area.y, area.width, area.height.min(1)), buf);
        }

        for (i, rest) in rects {
            let mut rect = rest;
            rect.x = rect.x.saturating_add_signed(self.shake_offset);
            if feedback.is_bouncing(i) {
                rect.y = rect.y.saturating_sub(1);
            }
            let rect = rect.intersection(area);
            if rect.is_empty() {
                continue;
            }

            let letter = self.session.cell(i);
            let is_active = i == self.session.focus();

            let (border, text) = if is_active {
                (
                    Style::default().fg(colors.cell_active_bg()),
                    Style::default()
                        .fg(colors.cell_active_fg())
                        .bg(colors.cell_active_bg())
                        .add_modifier(Modifier::BOLD),
                )
            } else if letter.is_some() {
                (
                    Style::default().fg(colors.cell_filled()),
                    Style::default()
                        .fg(colors.cell_filled())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(colors.cell_empty()),
                    Style::default().fg(colors.cell_empty()),
                )
            };

            let glyph = letter.map(String::from).unwrap_or_else(|| " ".to_string());
            if metrics == BOXED {
                Paragraph::new(glyph)
                    .alignment(Alignment::Center)
                    .style(text)
                    .block(Block::bordered().border_style(border))
                    .render(rect, buf);
            } else {
                Line::from(vec![
                    Span::styled("[", border),
                    Span::styled(glyph, text),
                    Span::styled("]", border),
                ])
                .render(rect, buf);
            }
        }
    }
}
