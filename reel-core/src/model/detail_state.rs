//! src/model/detail_state.rs
//! ============================================================================
//! # DetailState: Movie Detail Screen State
//!
//! The detail screen fetches its movie independently of the list: one call
//! per opened id, a loading state until it resolves, and a terminal
//! "not available" state on any failure. Never retried automatically.

use crate::api::movie::Movie;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    /// No detail screen has been opened yet.
    Idle,
    /// The single `get_movie` call is outstanding.
    Loading,
    Loaded(Box<Movie>),
    /// Terminal: the fetch failed or the record was missing.
    Unavailable,
}

#[derive(Debug)]
pub struct DetailState {
    pub movie_id: Option<u64>,
    pub status: DetailStatus,
    /// Vertical scroll offset of the detail panel.
    pub scroll: u16,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            movie_id: None,
            status: DetailStatus::Idle,
            scroll: 0,
        }
    }

    /// Entering the screen for `id`: loading until the fetch resolves.
    pub fn begin(&mut self, id: u64) {
        self.movie_id = Some(id);
        self.status = DetailStatus::Loading;
        self.scroll = 0;
    }

    /// The fetch for `id` resolved. A result for an id we already navigated
    /// away from is ignored.
    pub fn finish(&mut self, id: u64, movie: Option<Movie>) {
        if self.movie_id != Some(id) {
            return;
        }
        self.status = match movie {
            Some(movie) => DetailStatus::Loaded(Box::new(movie)),
            None => DetailStatus::Unavailable,
        };
    }

    /// Leaving the screen; the next open starts from scratch.
    pub fn reset(&mut self) {
        self.movie_id = None;
        self.status = DetailStatus::Idle;
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}
