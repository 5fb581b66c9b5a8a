//! src/view/components/search_bar.rs
//! ============================================================================
//! # SearchBar: Always-Focused Search Input
//!
//! Echoes the raw input immediately; the committed (debounced) query is what
//! actually filtered the list and is shown dimmed on the right when the two
//! differ.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let input: &str = &app.list.search_input;

        let mut spans: Vec<Span<'_>> = Vec::with_capacity(3);
        if input.is_empty() {
            spans.push(Span::styled(
                "Search by movie title",
                Style::default().fg(theme::COMMENT),
            ));
        } else {
            spans.push(Span::raw(input));
        }
        spans.push(Span::styled("▏", Style::default().fg(theme::ACCENT)));

        if app.list.query != app.list.search_input && !app.list.query.is_empty() {
            spans.push(Span::styled(
                format!("   (showing: {})", app.list.query),
                Style::default()
                    .fg(theme::COMMENT)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let para = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::COMMENT)),
        );
        frame.render_widget(para, area);
    }
}
