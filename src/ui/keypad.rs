use ratatui::layout::Rect;

/// Anything on screen that can be tapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Key(char),
    Backspace,
    Check,
    Cell(usize),
    Back,
    Info,
    Menu,
    CloseVideo,
}

pub const KEY_ROWS: [&[char]; 3] = [
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M'],
];

const ROW_OFFSETS: [u16; 3] = [0, 2, 4];
/// Row 3 of the cursor grid is the check button.
const CHECK_ROW: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard-driven selection over the virtual keys and the check button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeypadCursor {
    pub row: usize,
    pub col: usize,
}

fn row_len(row: usize) -> usize {
    match row {
        // The bottom letter row ends with backspace.
        2 => KEY_ROWS[2].len() + 1,
        CHECK_ROW => 1,
        r => KEY_ROWS[r].len(),
    }
}

impl KeypadCursor {
    pub fn control(&self) -> Control {
        if self.row == CHECK_ROW {
            return Control::Check;
        }
        match KEY_ROWS[self.row].get(self.col) {
            Some(&ch) => Control::Key(ch),
            None => Control::Backspace,
        }
    }

    pub fn apply(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Left => {
                let len = row_len(self.row);
                self.col = (self.col + len - 1) % len;
            }
            CursorMove::Right => {
                self.col = (self.col + 1) % row_len(self.row);
            }
            CursorMove::Up => {
                self.row = self.row.saturating_sub(1);
                self.col = self.col.min(row_len(self.row) - 1);
            }
            CursorMove::Down => {
                self.row = (self.row + 1).min(CHECK_ROW);
                self.col = self.col.min(row_len(self.row) - 1);
            }
        }
    }
}

/// Width of one key cell: `[ Q ]` when the keyboard fits, `[Q]` otherwise.
pub fn key_width(available: u16) -> Option<u16> {
    let widest_row = KEY_ROWS[0].len() as u16;
    if available >= widest_row * 5 {
        Some(5)
    } else if available >= widest_row * 3 {
        Some(3)
    } else {
        None
    }
}

/// Screen rectangles for each virtual key inside the keyboard's inner area.
pub fn key_rects(inner: Rect) -> Vec<(Control, Rect)> {
    let Some(width) = key_width(inner.width) else {
        return Vec::new();
    };
    let offset_scale = if width == 5 { 1 } else { 0 };
    let full_row = KEY_ROWS[0].len() as u16 * width;
    let left = inner.x + (inner.width - full_row) / 2;

    let mut rects = Vec::new();
    for (row_idx, row) in KEY_ROWS.iter().enumerate() {
        if row_idx as u16 >= inner.height {
            break;
        }
        let y = inner.y + row_idx as u16;
        let x0 = left + ROW_OFFSETS[row_idx] * offset_scale;
        let controls = row
            .iter()
            .map(|&ch| Control::Key(ch))
            .chain((row_idx == 2).then_some(Control::Backspace));
        for (col_idx, control) in controls.enumerate() {
            let x = x0 + col_idx as u16 * width;
            if x + width > inner.x + inner.width {
                break;
            }
            rects.push((control, Rect::new(x, y, width, 1)));
        }
    }
    rects
}
