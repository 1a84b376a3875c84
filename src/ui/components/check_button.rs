use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Enabled only once every cell holds a letter.
pub struct CheckButton<'a> {
    enabled: bool,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> CheckButton<'a> {
    pub fn new(enabled: bool, selected: bool, theme: &'a Theme) -> Self {
        Self {
            enabled,
            selected,
            theme,
        }
    }
}

impl Widget for CheckButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let (fg, bg) = if self.enabled {
            (colors.button_enabled_fg(), colors.button_enabled_bg())
        } else {
            (colors.button_disabled_fg(), colors.button_disabled_bg())
        };
        let border = if self.selected {
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(bg)
        };
        let mut label = Style::default().fg(fg).bg(bg);
        if self.enabled {
            label = label.add_modifier(Modifier::BOLD);
        }

        Paragraph::new("Check")
            .alignment(Alignment::Center)
            .style(label)
            .block(Block::bordered().border_style(border))
            .render(area, buf);
    }
}
