// ABOUTME: Top header bar with product title and tagline

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// Header component. Purely presentational.
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    /// Height the header needs, including its bottom border
    pub fn height() -> u16 {
        3
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "SaaS Builder",
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  ·  Build Your Next SaaS Project with AI",
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
            Line::from(Span::styled(
                "Generate production-ready applications instantly, powered by advanced AI",
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
            )),
        ];

        let header = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(DARK_BG)),
            );
        frame.render_widget(header, area);
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
