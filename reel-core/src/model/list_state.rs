//! src/model/list_state.rs
//! ============================================================================
//! # ListState: Movie List Controller State
//!
//! Owns everything the list screen needs to decide *what* to fetch and *how*
//! to merge the result: raw and committed search text, page number, the
//! loaded movies, the in-flight guard, the refresh flag, and the column
//! count. All decisions live here as pure methods so they are testable
//! without a terminal or a network.
//!
//! ## Request discipline
//! - At most one list request is in flight; `loading` gates.
//! - A search commit or refresh that arrives mid-flight parks in `pending`
//!   (one slot, last write wins) and is issued when the current request
//!   completes. `load_more` mid-flight is a plain no-op.
//! - Every issued request carries a monotonically increasing sequence
//!   number; a completion that is not the latest issued is discarded.

use tracing::{debug, warn};

use crate::api::client::PageRequest;
use crate::api::movie::Movie;

/// What a fetch should do once it lands: wipe the list or extend it, and
/// whether it represents a refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    pub page: u32,
    pub query: String,
    pub replace: bool,
    pub refresh: bool,
}

/// A fetch that has actually been issued: the spec plus its sequence number.
/// Handed to the spawned task so the completion can identify itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedFetch {
    pub seq: u64,
    pub page: u32,
    pub query: String,
    pub replace: bool,
}

impl IssuedFetch {
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            query: self.query.clone(),
        }
    }
}

/// State of the movie list screen.
#[derive(Debug)]
pub struct ListState {
    /// Loaded movies; insertion order is display order.
    pub movies: Vec<Movie>,
    /// Current/last-requested page, 1-based.
    pub page: u32,
    /// Raw search text, echoed in the input field before the debounce fires.
    pub search_input: String,
    /// Last committed (debounced) search text.
    pub query: String,
    /// In-flight guard: true while a list request is outstanding.
    pub loading: bool,
    /// True across a refresh cycle.
    pub refreshing: bool,
    /// 1 or 2, derived from terminal dimensions.
    pub columns: u16,
    /// List cursor.
    pub selected: Option<usize>,
    /// Sequence number of the most recently issued request.
    issued_seq: u64,
    /// Fetch requested while one was in flight; issued on completion.
    pending: Option<FetchSpec>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            page: 1,
            search_input: String::new(),
            query: String::new(),
            loading: false,
            refreshing: false,
            columns: 1,
            selected: None,
            issued_seq: 0,
            pending: None,
        }
    }

    // --- User intents -----------------------------------------------------

    /// Store raw input for immediate echo. The debounce timer around the
    /// commit is the caller's concern.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// A debounced search text becomes the active query: back to page 1,
    /// replace semantics. Returns the fetch to submit.
    pub fn commit_search(&mut self, text: impl Into<String>) -> FetchSpec {
        self.query = text.into();
        self.page = 1;
        FetchSpec {
            page: 1,
            query: self.query.clone(),
            replace: true,
            refresh: false,
        }
    }

    /// Refresh: page 1 with the current query, replace regardless of query.
    pub fn begin_refresh(&mut self) -> FetchSpec {
        self.page = 1;
        FetchSpec {
            page: 1,
            query: self.query.clone(),
            replace: true,
            refresh: true,
        }
    }

    /// Load the next page, append semantics. `None` when search results are
    /// displayed (pagination and search are mutually exclusive) or while a
    /// fetch is in flight.
    pub fn request_load_more(&mut self) -> Option<FetchSpec> {
        if !self.query.is_empty() || self.loading {
            return None;
        }
        self.page += 1;
        Some(FetchSpec {
            page: self.page,
            query: String::new(),
            replace: false,
            refresh: false,
        })
    }

    /// Dimension change: two columns in landscape, one in portrait.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.columns = if width > height { 2 } else { 1 };
    }

    // --- Request sequencing -----------------------------------------------

    /// Hand a fetch to the serializer. Issues it immediately when idle;
    /// otherwise parks it in the pending slot (last write wins) to be
    /// issued when the in-flight request completes.
    pub fn submit(&mut self, spec: FetchSpec) -> Option<IssuedFetch> {
        if self.loading {
            debug!("fetch requested mid-flight, deferring: {spec:?}");
            self.pending = Some(spec);
            return None;
        }
        Some(self.issue(spec))
    }

    fn issue(&mut self, spec: FetchSpec) -> IssuedFetch {
        self.issued_seq += 1;
        self.loading = true;
        self.refreshing = spec.refresh;
        debug!(
            "issuing list fetch #{}: page={} query={:?} replace={}",
            self.issued_seq, spec.page, spec.query, spec.replace
        );
        IssuedFetch {
            seq: self.issued_seq,
            page: spec.page,
            query: spec.query,
            replace: spec.replace,
        }
    }

    /// A fetch finished. Merges the result, clears the guards, and returns
    /// the parked fetch, if any, for the caller to submit next. A completion
    /// that is not the latest issued request is discarded whole: its payload
    /// must not land, and the guards still belong to the newer request.
    pub fn complete(
        &mut self,
        seq: u64,
        replace: bool,
        outcome: Result<Vec<Movie>, String>,
    ) -> Option<FetchSpec> {
        if seq != self.issued_seq {
            warn!(
                "discarding stale list response #{seq} (latest issued is #{})",
                self.issued_seq
            );
            return None;
        }

        self.loading = false;
        self.refreshing = false;

        match outcome {
            Ok(movies) => self.merge(movies, replace),
            Err(err) => warn!("list fetch #{seq} failed: {err}"),
        }

        self.pending.take()
    }

    fn merge(&mut self, movies: Vec<Movie>, replace: bool) {
        debug!("merging {} movie(s), replace={replace}", movies.len());
        if replace {
            self.movies = movies;
            self.selected = if self.movies.is_empty() { None } else { Some(0) };
        } else {
            self.movies.extend(movies);
            if self.selected.is_none() && !self.movies.is_empty() {
                self.selected = Some(0);
            }
        }
    }

    // --- Selection --------------------------------------------------------

    pub fn move_selection_up(&mut self) {
        if !self.movies.is_empty() {
            self.selected = Some(self.selected.map_or(0, |s| s.saturating_sub(1)));
        }
    }

    /// Move down. Returns true when the cursor was already on the last row,
    /// the end-of-list intent that drives load-more.
    pub fn move_selection_down(&mut self) -> bool {
        if self.movies.is_empty() {
            return false;
        }
        let last: usize = self.movies.len() - 1;
        match self.selected {
            Some(s) if s >= last => true,
            Some(s) => {
                self.selected = Some(s + 1);
                false
            }
            None => {
                self.selected = Some(0);
                false
            }
        }
    }

    /// The movie under the cursor, for opening the detail screen.
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected.and_then(|idx| self.movies.get(idx))
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> Movie {
        serde_json::from_value(serde_json::json!({ "id": id, "title": format!("m{id}") }))
            .expect("test movie decodes")
    }

    fn complete_ok(state: &mut ListState, fetch: &IssuedFetch, ids: &[u64]) -> Option<FetchSpec> {
        state.complete(
            fetch.seq,
            fetch.replace,
            Ok(ids.iter().copied().map(movie).collect()),
        )
    }

    #[test]
    fn load_more_appends_and_increments_page() {
        let mut state = ListState::new();
        let first = state
            .submit(state_spec_page1())
            .expect("idle state issues immediately");
        complete_ok(&mut state, &first, &[1, 2]);

        let more = state.request_load_more().expect("empty query paginates");
        assert_eq!(more.page, 2);
        assert!(!more.replace);
        let issued = state.submit(more).expect("idle again");
        complete_ok(&mut state, &issued, &[3]);

        let ids: Vec<u64> = state.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.page, 2);
        assert!(!state.loading);
    }

    #[test]
    fn load_more_is_noop_during_search() {
        let mut state = ListState::new();
        let spec = state.commit_search("Matrix");
        let fetch = state.submit(spec).unwrap();
        complete_ok(&mut state, &fetch, &[4]);

        assert_eq!(state.request_load_more(), None);
        assert_eq!(state.page, 1);
        assert_eq!(state.movies.len(), 1);
    }

    #[test]
    fn load_more_is_noop_while_loading() {
        let mut state = ListState::new();
        let _inflight = state.submit(state_spec_page1()).unwrap();

        assert_eq!(state.request_load_more(), None);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn refresh_replaces_even_with_empty_query() {
        let mut state = ListState::new();
        let first = state.submit(state_spec_page1()).unwrap();
        complete_ok(&mut state, &first, &[1, 2, 3]);

        let refresh = state.begin_refresh();
        assert!(refresh.replace);
        let issued = state.submit(refresh).unwrap();
        assert!(state.refreshing);
        complete_ok(&mut state, &issued, &[9]);

        let ids: Vec<u64> = state.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![9]);
        assert!(!state.refreshing);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn commit_search_resets_page_and_replaces() {
        let mut state = ListState::new();
        let first = state.submit(state_spec_page1()).unwrap();
        complete_ok(&mut state, &first, &[1, 2]);
        let more = state.request_load_more().expect("page 2 allowed");
        let issued = state.submit(more).unwrap();
        complete_ok(&mut state, &issued, &[3]);
        assert_eq!(state.page, 2);

        let spec = state.commit_search("Matrix");
        assert_eq!(spec.page, 1);
        assert!(spec.replace);
        assert_eq!(state.page, 1);
        let issued = state.submit(spec).unwrap();
        complete_ok(&mut state, &issued, &[4]);

        let ids: Vec<u64> = state.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn mid_flight_requests_defer_and_last_write_wins() {
        let mut state = ListState::new();
        let inflight = state.submit(state_spec_page1()).unwrap();

        let early = state.commit_search("Mat");
        assert_eq!(state.submit(early), None);
        let late = state.commit_search("Matrix");
        assert_eq!(state.submit(late), None);

        let parked = complete_ok(&mut state, &inflight, &[1]).expect("pending slot filled");
        assert_eq!(parked.query, "Matrix");

        let issued = state.submit(parked).expect("issued after completion");
        assert_eq!(issued.seq, 2);
        assert!(state.loading);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = ListState::new();
        let first = state.submit(state_spec_page1()).unwrap();
        complete_ok(&mut state, &first, &[1]);
        let second = state.submit(state_spec_page1()).unwrap();
        assert_eq!(second.seq, 2);

        let parked = state.complete(first.seq, true, Ok(vec![movie(99)]));
        assert_eq!(parked, None);
        let ids: Vec<u64> = state.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1], "stale payload must not land");
        assert!(state.loading, "guard still belongs to request #2");
    }

    #[test]
    fn failure_leaves_movies_unchanged_and_clears_guards() {
        let mut state = ListState::new();
        let first = state.submit(state_spec_page1()).unwrap();
        complete_ok(&mut state, &first, &[1, 2]);

        let more = state.request_load_more().unwrap();
        let issued = state.submit(more).unwrap();
        state.complete(issued.seq, issued.replace, Err("HTTP 500".to_string()));

        assert_eq!(state.movies.len(), 2);
        assert!(!state.loading);
        assert!(!state.refreshing);
    }

    #[test]
    fn resize_drives_column_count() {
        let mut state = ListState::new();
        state.on_resize(800, 400);
        assert_eq!(state.columns, 2);
        state.on_resize(400, 800);
        assert_eq!(state.columns, 1);
    }

    #[test]
    fn selection_reports_end_of_list() {
        let mut state = ListState::new();
        let fetch = state.submit(state_spec_page1()).unwrap();
        complete_ok(&mut state, &fetch, &[1, 2]);

        assert_eq!(state.selected, Some(0));
        assert!(!state.move_selection_down());
        assert!(state.move_selection_down(), "cursor on last row");
        assert_eq!(state.selected_movie().map(|m| m.id), Some(2));
    }

    // helpers ---------------------------------------------------------------

    fn state_spec_page1() -> FetchSpec {
        FetchSpec {
            page: 1,
            query: String::new(),
            replace: true,
            refresh: false,
        }
    }
}
