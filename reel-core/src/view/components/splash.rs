//! src/view/components/splash.rs
//! ============================================================================
//! # Splash: Startup Screen
//!
//! Shown for a few seconds at startup (any key skips it), then the list
//! takes over.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::view::theme;

pub struct Splash;

impl Splash {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line<'_>> = vec![
            Line::from(Span::styled(
                "reel",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to the movies.",
                Style::default().fg(theme::BACKDROP),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(theme::COMMENT),
            )),
        ];

        let center: Rect = Self::centered_rect(40, 30, area);
        let para = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
        frame.render_widget(para, center);
    }

    /// Centers a rectangle of the given percent width/height inside area.
    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1]);

        horizontal[1]
    }
}
