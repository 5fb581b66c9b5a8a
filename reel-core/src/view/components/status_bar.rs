//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Persistent Status/Error Display
//!
//! Bottom line of every screen: the current activity (or last error) on the
//! left, list counters on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::app_state::{AppState, Screen};
use crate::view::theme;

/// Braille spinner, advanced by the tick action while anything loads.
pub const SPINNER_FRAMES: [&str; 9] = ["⠁", "⠃", "⠇", "⠧", "⠷", "⠿", "⠻", "⠹", "⠸"];

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let spinner: &str = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];

        let (msg, style) = if app.list.refreshing {
            (
                format!("{spinner} Refreshing…"),
                Style::default().fg(theme::ACCENT),
            )
        } else if app.list.loading {
            (
                format!("{spinner} Loading…"),
                Style::default().fg(theme::ACCENT),
            )
        } else if let Some(ref err) = app.last_error {
            (
                format!("Error: {err}"),
                Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
            )
        } else if let Some(ref status) = app.last_status {
            (status.clone(), Style::default().fg(theme::GREEN))
        } else {
            (
                Self::hint(app.screen).to_string(),
                Style::default().fg(theme::COMMENT),
            )
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let left = Paragraph::new(Line::from(Span::styled(format!(" {msg}"), style)))
            .alignment(Alignment::Left);

        let right_text: String = format!(
            "{} movies · page {} · {} col ",
            app.list.movies.len(),
            app.list.page,
            app.list.columns,
        );
        let right = Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(theme::COMMENT),
        )))
        .alignment(Alignment::Right);

        frame.render_widget(left, chunks[0]);
        frame.render_widget(right, chunks[1]);
    }

    fn hint(screen: Screen) -> &'static str {
        match screen {
            Screen::Splash => "",
            Screen::Browse => "↑/↓ browse · Enter details · Ctrl+R refresh · Esc quit",
            Screen::Detail => "↑/↓ scroll · Esc back",
        }
    }
}
