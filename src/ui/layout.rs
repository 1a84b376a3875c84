use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the puzzle view, top to bottom.
pub struct PuzzleLayout {
    pub header: Rect,
    pub meta: Rect,
    pub clue: Rect,
    pub grid: Rect,
    pub keyboard: Rect,
    pub check: Rect,
    pub footer: Rect,
}

impl PuzzleLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(4),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            meta: vertical[1],
            clue: vertical[2],
            grid: vertical[3],
            keyboard: vertical[4],
            check: centered_width(20, vertical[5]),
            footer: vertical[6],
        }
    }
}

/// A slice of `area` at most `width` wide, centred horizontally.
pub fn centered_width(width: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 10;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

/// True if the terminal cell at (`column`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
