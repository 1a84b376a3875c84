use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::puzzle::feedback::VideoOverlay;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

const CLOSE_LABEL: &str = "[\u{00d7}]";

/// Full-screen dimmed backdrop with the player panel in the middle.
pub struct VideoOverlayView<'a> {
    overlay: &'a VideoOverlay,
    theme: &'a Theme,
}

impl<'a> VideoOverlayView<'a> {
    pub fn new(overlay: &'a VideoOverlay, theme: &'a Theme) -> Self {
        Self { overlay, theme }
    }
}

pub fn panel_rect(area: Rect) -> Rect {
    centered_rect(90, 60, area)
}

/// The close control sits on the panel's top border, right-aligned.
pub fn close_rect(area: Rect) -> Rect {
    let panel = panel_rect(area);
    let width = CLOSE_LABEL.chars().count() as u16;
    Rect::new(
        (panel.x + panel.width).saturating_sub(width + 2),
        panel.y,
        width,
        1,
    )
}

impl Widget for VideoOverlayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        Block::default()
            .style(Style::default().bg(colors.overlay_bg()))
            .render(area, buf);

        let panel = panel_rect(area);
        let block = Block::bordered()
            .title(" Reward ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "\u{25b6} Your reward video is ready",
                Style::default().fg(colors.success()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.overlay.embed_url.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("video id: {}", self.overlay.video_id),
                Style::default().fg(colors.muted()),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(panel, buf);

        let close = close_rect(area);
        buf.set_string(
            close.x,
            close.y,
            CLOSE_LABEL,
            Style::default()
                .fg(colors.bg())
                .bg(colors.fg())
                .add_modifier(Modifier::BOLD),
        );
    }
}
