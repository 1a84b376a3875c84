use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::ui::keypad::Control;
use crate::ui::theme::Theme;

const BUTTON_WIDTH: u16 = 3;

pub struct Header<'a> {
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

/// Back on the left; info and menu on the right.
pub fn button_rects(area: Rect) -> Vec<(Control, Rect)> {
    if area.width < BUTTON_WIDTH * 3 || area.height == 0 {
        return Vec::new();
    }
    let right = area.x + area.width;
    vec![
        (Control::Back, Rect::new(area.x, area.y, BUTTON_WIDTH, 1)),
        (
            Control::Info,
            Rect::new(right - BUTTON_WIDTH * 2, area.y, BUTTON_WIDTH, 1),
        ),
        (
            Control::Menu,
            Rect::new(right - BUTTON_WIDTH, area.y, BUTTON_WIDTH, 1),
        ),
    ]
}

fn button_label(control: Control) -> &'static str {
    match control {
        Control::Back => " \u{2039} ",
        Control::Info => " i ",
        _ => " \u{2261} ",
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let base = Style::default().fg(colors.header_fg()).bg(colors.header_bg());
        Block::default().style(base).render(area, buf);

        let title_width = self.title.chars().count() as u16;
        let title_x = area.x + area.width.saturating_sub(title_width) / 2;
        buf.set_string(
            title_x,
            area.y,
            self.title,
            base.add_modifier(Modifier::BOLD),
        );

        for (control, rect) in button_rects(area) {
            buf.set_string(
                rect.x,
                rect.y,
                button_label(control),
                base.fg(colors.accent()).add_modifier(Modifier::BOLD),
            );
        }
    }
}
