//! src/view/components/movie_grid.rs
//! ============================================================================
//! # MovieGrid: Responsive Card Grid
//!
//! Lays the movie cards out in one or two columns (the controller decides,
//! from the terminal dimensions) and keeps the selected card in view. The
//! window scrolls by whole card rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::model::app_state::AppState;
use crate::view::components::movie_card::MovieCard;
use crate::view::theme;

pub struct MovieGrid;

impl MovieGrid {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let list = &app.list;

        if list.movies.is_empty() {
            let msg: &str = if list.loading {
                "Fetching movies…"
            } else if !list.query.is_empty() {
                "No movies match your search."
            } else {
                "No movies loaded. Press Ctrl+R to try again."
            };
            let para = Paragraph::new(msg)
                .style(Style::default().fg(theme::COMMENT))
                .alignment(Alignment::Center);
            frame.render_widget(para, area);
            return;
        }

        let columns: usize = list.columns.max(1) as usize;
        let grid_rows_visible: usize = (area.height / MovieCard::HEIGHT).max(1) as usize;
        let total_rows: usize = list.movies.len().div_ceil(columns);

        // Scroll window: keep the selected card's row in view.
        let selected_row: usize = list.selected.unwrap_or(0) / columns;
        let first_row: usize = selected_row.saturating_sub(grid_rows_visible - 1);
        let visible_rows: usize = grid_rows_visible.min(total_rows - first_row);

        let row_constraints: Vec<Constraint> = (0..visible_rows)
            .map(|_| Constraint::Length(MovieCard::HEIGHT))
            .collect();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        let column_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();

        for (row_offset, row_area) in row_areas.iter().enumerate() {
            let row: usize = first_row + row_offset;
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(column_constraints.clone())
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let idx: usize = row * columns + col;
                let Some(movie) = list.movies.get(idx) else {
                    break;
                };
                MovieCard::render(frame, movie, list.selected == Some(idx), *cell);
            }
        }
    }
}
