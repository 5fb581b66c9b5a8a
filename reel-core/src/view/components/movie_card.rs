//! src/view/components/movie_card.rs
//! ============================================================================
//! # MovieCard: Reusable List-Item Card
//!
//! One movie as a bordered card: title and year on the first line, rating on
//! the second, then the plot truncated to the remaining space. The selected
//! card gets the accent border.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::api::movie::Movie;
use crate::view::theme;

pub struct MovieCard;

impl MovieCard {
    /// Card height in cells: border (2) + title + rating + two plot lines.
    pub const HEIGHT: u16 = 6;

    pub fn render(frame: &mut Frame<'_>, movie: &Movie, selected: bool, area: Rect) {
        let border_style: Style = if selected {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::COMMENT)
        };

        let mut title_spans: Vec<Span<'_>> = vec![Span::styled(
            movie.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(year) = movie.year {
            title_spans.push(Span::styled(
                format!("  ({year})"),
                Style::default().fg(theme::COMMENT),
            ));
        }

        let mut lines: Vec<Line<'_>> = vec![Line::from(title_spans)];

        let mut meta_spans: Vec<Span<'_>> = Vec::with_capacity(2);
        if let Some(rating) = movie.rating {
            meta_spans.push(Span::styled(
                format!("★ {rating:.1}"),
                Style::default().fg(theme::YELLOW),
            ));
        }
        if !movie.genre.is_empty() {
            meta_spans.push(Span::styled(
                format!("  {}", movie.genre.join(", ")),
                Style::default().fg(theme::COMMENT),
            ));
        }
        lines.push(Line::from(meta_spans));

        if let Some(ref plot) = movie.plot {
            lines.push(Line::from(plot.clone()));
        }

        let para = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }
}
