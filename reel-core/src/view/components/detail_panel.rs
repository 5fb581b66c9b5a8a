//! src/view/components/detail_panel.rs
//! ============================================================================
//! # DetailPanel: Single-Movie Detail View
//!
//! Spinner while the one fetch is outstanding, a static "not available"
//! message if it failed, otherwise the full record, scrollable.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::api::movie::Movie;
use crate::model::app_state::AppState;
use crate::model::detail_state::DetailStatus;
use crate::view::components::status_bar::SPINNER_FRAMES;
use crate::view::theme;

pub struct DetailPanel;

impl DetailPanel {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::COMMENT));

        match &app.detail.status {
            DetailStatus::Idle | DetailStatus::Loading => {
                let spinner: &str = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
                let para = Paragraph::new(format!("{spinner} Loading…"))
                    .style(Style::default().fg(theme::ACCENT))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(para, area);
            }
            DetailStatus::Unavailable => {
                let para = Paragraph::new("Movie details not available")
                    .style(Style::default().fg(theme::COMMENT))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(para, area);
            }
            DetailStatus::Loaded(movie) => {
                let para = Paragraph::new(Text::from(Self::movie_lines(movie)))
                    .block(block)
                    .wrap(Wrap { trim: true })
                    .scroll((app.detail.scroll, 0));
                frame.render_widget(para, area);
            }
        }
    }

    fn movie_lines(movie: &Movie) -> Vec<Line<'_>> {
        let mut lines: Vec<Line<'_>> = vec![
            Line::from(Span::styled(
                movie.display_title(),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(ref plot) = movie.plot {
            lines.push(Line::from(plot.clone()));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Movie Information",
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let mut field = |label: &str, value: Option<String>| {
            if let Some(value) = value {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(theme::COMMENT)),
                    Span::raw(value),
                ]));
            }
        };

        field("Release Year", movie.year.map(|y| y.to_string()));
        field("Rating", movie.rating.map(|r| format!("{r:.1}")));
        field(
            "Genre",
            (!movie.genre.is_empty()).then(|| movie.genre.join(", ")),
        );
        field("Director", movie.director.clone());
        field(
            "Actors",
            (!movie.actors.is_empty()).then(|| movie.actors.join(", ")),
        );
        field("Runtime", movie.runtime.map(|m| format!("{m} min")));
        field("Awards", movie.awards.clone());
        field("Country", movie.country.clone());
        field("Language", movie.language.clone());
        field("Box Office", movie.box_office.clone());
        field("Production", movie.production.clone());
        field("Website", movie.website.clone());
        field("Poster", movie.poster.clone());

        lines
    }
}
