use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::puzzle::feedback::{Toast, ToastKind};
use crate::ui::theme::Theme;

pub struct ToastView<'a> {
    toast: &'a Toast,
    theme: &'a Theme,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }
}

/// A three-row box sized to the message, centred in `area`.
pub fn toast_rect(message: &str, area: Rect) -> Rect {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let bg = match self.toast.kind {
            ToastKind::Info => colors.info(),
            ToastKind::Success => colors.success(),
            ToastKind::Error => colors.error(),
        };

        let rect = toast_rect(&self.toast.message, area);
        Clear.render(rect, buf);
        Paragraph::new(self.toast.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.bg()).bg(bg).add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_style(Style::default().fg(bg)))
            .render(rect, buf);
    }
}
