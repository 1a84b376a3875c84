use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::puzzle::session::PuzzleSession;
use crate::ui::theme::Theme;

/// Date and author lines above the clue.
pub struct PuzzleMeta<'a> {
    session: &'a PuzzleSession,
    theme: &'a Theme,
}

impl<'a> PuzzleMeta<'a> {
    pub fn new(session: &'a PuzzleSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

impl Widget for PuzzleMeta<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines = vec![
            Line::from(Span::styled(
                self.session.config().date.as_str(),
                Style::default().fg(colors.muted()),
            )),
            Line::from(Span::styled(
                self.session.byline(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::ITALIC),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

pub struct CluePanel<'a> {
    session: &'a PuzzleSession,
    theme: &'a Theme,
}

impl<'a> CluePanel<'a> {
    pub fn new(session: &'a PuzzleSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

impl Widget for CluePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Clue ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(Line::from(Span::styled(
            self.session.clue_line(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::config::PuzzleConfig;

    fn screen(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_clue_includes_length() {
        let theme = Theme::default();
        let session = PuzzleSession::new(PuzzleConfig {
            solution: "ICECREAM".to_string(),
            clue: "Frozen dessert".to_string(),
            word_breaks: vec![3],
            ..PuzzleConfig::default()
        });
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        CluePanel::new(&session, &theme).render(area, &mut buf);
        assert!(screen(&buf).contains("Frozen dessert (8)"));
    }

    #[test]
    fn test_meta_shows_date_and_author() {
        let theme = Theme::default();
        let session = PuzzleSession::new(PuzzleConfig::default());
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        PuzzleMeta::new(&session, &theme).render(area, &mut buf);
        let text = screen(&buf);
        assert!(text.contains("27 June, 2025"));
        assert!(text.contains("By William Snow"));
    }
}
