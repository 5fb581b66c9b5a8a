//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! Draws whichever screen owns the terminal. Each draw cycle lays out the
//! screen's chunks and delegates to the components; state is read-only here.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::app_state::{AppState, Screen};
use crate::view::components::{
    detail_panel::DetailPanel, movie_grid::MovieGrid, search_bar::SearchBar, splash::Splash,
    status_bar::StatusBar,
};
use crate::view::theme;

pub struct View;

impl View {
    /// Draws the full UI for one frame; called in the `terminal.draw(|frame| ...)` callback.
    pub fn redraw(frame: &mut Frame<'_>, app: &AppState) {
        match app.screen {
            Screen::Splash => Splash::render(frame, frame.area()),
            Screen::Browse => Self::render_browse(frame, app),
            Screen::Detail => Self::render_detail(frame, app),
        }
    }

    fn render_browse(frame: &mut Frame<'_>, app: &AppState) {
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(3), // search field
                Constraint::Min(4),    // movie grid
                Constraint::Length(1), // status bar
            ])
            .split(frame.area())
            .to_vec();

        Self::render_header(frame, "Movies", chunks[0]);
        SearchBar::render(frame, app, chunks[1]);
        MovieGrid::render(frame, app, chunks[2]);
        StatusBar::render(frame, app, chunks[3]);
    }

    fn render_detail(frame: &mut Frame<'_>, app: &AppState) {
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(4),    // detail panel
                Constraint::Length(1), // status bar
            ])
            .split(frame.area())
            .to_vec();

        Self::render_header(frame, "Movie Details", chunks[0]);
        DetailPanel::render(frame, app, chunks[1]);
        StatusBar::render(frame, app, chunks[2]);
    }

    fn render_header(frame: &mut Frame<'_>, title: &str, area: Rect) {
        let header = Paragraph::new(Line::from(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Left);
        frame.render_widget(header, area);
    }
}
