use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::ui::keypad::{self, Control};
use crate::ui::theme::Theme;

const BACKSPACE_GLYPH: &str = "\u{232b}";

pub struct VirtualKeyboard<'a> {
    pub selected: Option<Control>,
    pub theme: &'a Theme,
}

impl<'a> VirtualKeyboard<'a> {
    pub fn new(selected: Option<Control>, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

pub fn inner_area(area: Rect) -> Rect {
    Block::bordered().inner(area)
}

fn key_label(control: Control, width: u16) -> String {
    let glyph = match control {
        Control::Key(ch) => ch.to_string(),
        _ => BACKSPACE_GLYPH.to_string(),
    };
    if width >= 5 {
        format!("[ {glyph} ]")
    } else {
        format!("[{glyph}]")
    }
}

impl Widget for VirtualKeyboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Keyboard ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        for (control, rect) in keypad::key_rects(inner) {
            let style = if self.selected == Some(control) {
                Style::default()
                    .fg(colors.key_selected_fg())
                    .bg(colors.key_selected_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.key_fg()).bg(colors.key_bg())
            };
            buf.set_string(rect.x, rect.y, key_label(control, rect.width), style);
        }
    }
}
