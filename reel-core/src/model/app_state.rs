//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Application State and Orchestration
//!
//! `AppState` unifies the state of all three screens and mediates between
//! user intent, timing, and the API client: it arms the search debounce,
//! serializes list fetches through `ListState`, runs the independent detail
//! fetch, and carries the navigation position. Mutation happens only in
//! `Controller::dispatch_action`, so a plain `&mut self` API is enough;
//! the one `Arc<Mutex<_>>` around the whole struct is the only lock.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::client::MovieApiClient;
use crate::api::movie::Movie;
use crate::config::Config;
use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::detail_state::{DetailState, DetailStatus};
use crate::model::list_state::{FetchSpec, ListState};
use crate::tasks::{fetch_task, timer_task};
use crate::util::debounce::Debouncer;

/// Which screen owns the terminal right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Browse,
    Detail,
}

/// Core application state struct.
pub struct AppState {
    pub config: Arc<Config>,
    pub api: Arc<MovieApiClient>,
    pub screen: Screen,
    pub list: ListState,
    pub detail: DetailState,
    pub debounce: Debouncer,
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub redraw: bool,
    pub last_error: Option<String>,
    pub last_status: Option<String>,
    /// Advances on ticks while something is loading; drives the spinner.
    pub spinner_frame: usize,
}

impl AppState {
    /// Construct a new, ready-to-use AppState on the splash screen.
    pub fn new(
        config: Arc<Config>,
        api: Arc<MovieApiClient>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let debounce: Debouncer = Debouncer::new(config.debounce);
        Self {
            config,
            api,
            screen: Screen::Splash,
            list: ListState::new(),
            detail: DetailState::new(),
            debounce,
            action_tx,
            redraw: true,
            last_error: None,
            last_status: None,
            spinner_frame: 0,
        }
    }

    // --- Status plumbing --------------------------------------------------

    /// Set the latest error message (shown in the status bar).
    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg_str: String = msg.into();
        error!("Setting error: {}", msg_str);
        self.last_error = Some(msg_str);
        self.redraw = true;
    }

    /// Set the latest info/status message (shown in the status bar).
    pub fn set_status(&mut self, msg: impl Into<String>) {
        let msg_str: String = msg.into();
        info!("Setting status: {}", msg_str);
        self.last_status = Some(msg_str);
        self.redraw = true;
    }

    // --- Navigation -------------------------------------------------------

    /// Splash is over: show the list and fire the mount fetch (page 1,
    /// empty query). A second `EnterBrowse` (timer after a keypress skip)
    /// is a no-op.
    pub fn enter_browse(&mut self) {
        if self.screen != Screen::Splash {
            return;
        }
        info!("Entering movie list");
        self.screen = Screen::Browse;
        let spec: FetchSpec = self.list.commit_search(String::new());
        self.submit_list_fetch(spec);
        self.redraw = true;
    }

    /// Navigate to the detail screen and start its one fetch.
    pub fn open_detail(&mut self, id: u64) {
        info!("Opening details for movie {id}");
        self.screen = Screen::Detail;
        self.detail.begin(id);
        fetch_task::spawn_detail_fetch(self.api.clone(), id, self.action_tx.clone());
        self.redraw = true;
    }

    /// Back to the list. List state survives the round trip untouched.
    pub fn close_detail(&mut self) {
        self.screen = Screen::Browse;
        self.detail.reset();
        self.redraw = true;
    }

    // --- List controller operations ---------------------------------------

    /// Raw search input changed: echo immediately, re-arm the debounce.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text: String = text.into();
        self.list.set_search_input(text.clone());
        let ticket: u64 = self.debounce.arm();
        timer_task::spawn_debounce_timer(
            self.debounce.delay(),
            text,
            ticket,
            self.action_tx.clone(),
        );
        self.redraw = true;
    }

    /// A debounce timer fired. Only the most recent ticket commits; stale
    /// timers (superseded by later keystrokes) are refused here.
    pub fn commit_search(&mut self, text: String, ticket: u64) {
        if !self.debounce.is_current(ticket) {
            debug!("ignoring superseded debounce ticket {ticket}");
            return;
        }
        let spec: FetchSpec = self.list.commit_search(text);
        self.submit_list_fetch(spec);
    }

    /// Reload page 1 with the current query, replacing the list.
    pub fn refresh(&mut self) {
        let spec: FetchSpec = self.list.begin_refresh();
        self.submit_list_fetch(spec);
    }

    /// Next page when the end of the unfiltered list is reached.
    pub fn load_more(&mut self) {
        if let Some(spec) = self.list.request_load_more() {
            self.submit_list_fetch(spec);
        }
    }

    /// Terminal dimensions changed (also fired once at startup).
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.list.on_resize(width, height);
        self.redraw = true;
    }

    fn submit_list_fetch(&mut self, spec: FetchSpec) {
        if let Some(issued) = self.list.submit(spec) {
            fetch_task::spawn_list_fetch(self.api.clone(), issued, self.action_tx.clone());
        }
        self.redraw = true;
    }

    /// A list fetch completed: merge (or absorb the failure), then issue
    /// whatever was parked while the request was in flight.
    pub fn finish_list_fetch(
        &mut self,
        seq: u64,
        replace: bool,
        outcome: Result<Vec<Movie>, AppError>,
    ) {
        let was_refresh: bool = self.list.refreshing;
        let outcome: Result<Vec<Movie>, String> = match outcome {
            Ok(movies) => {
                self.last_error = None;
                if was_refresh {
                    self.set_status("List refreshed");
                }
                Ok(movies)
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err.to_string())
            }
        };

        if let Some(pending) = self.list.complete(seq, replace, outcome) {
            self.submit_list_fetch(pending);
        }
        self.redraw = true;
    }

    /// The detail fetch completed. Any failure lands in the terminal
    /// "not available" state; nothing retries.
    pub fn finish_detail_fetch(&mut self, id: u64, outcome: Result<Movie, AppError>) {
        match outcome {
            Ok(movie) => self.detail.finish(id, Some(movie)),
            Err(err) => {
                warn!("detail fetch for movie {id} failed: {err}");
                self.detail.finish(id, None);
            }
        }
        self.redraw = true;
    }

    /// Periodic tick: animate the spinner while anything is loading.
    pub fn tick(&mut self) {
        if self.list.loading || self.detail.status == DetailStatus::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.redraw = true;
        }
    }

    /// Ask the event loop to shut the application down.
    pub fn request_quit(&self) {
        let _ = self.action_tx.send(Action::Quit);
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("screen", &self.screen)
            .field("list", &self.list)
            .field("detail", &self.detail)
            .field("last_error", &self.last_error)
            .field("last_status", &self.last_status)
            .field("redraw", &self.redraw)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state(api_base: &str) -> (AppState, mpsc::UnboundedReceiver<Action>) {
        let config = Arc::new(Config {
            api_base: api_base.to_string(),
            debounce: Duration::from_millis(500),
            splash_duration: Duration::from_secs(3),
        });
        let api = Arc::new(MovieApiClient::new(api_base));
        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
        (AppState::new(config, api, action_tx), action_rx)
    }

    /// Apply fetch-completion actions until the channel is drained.
    fn drain(state: &mut AppState, rx: &mut mpsc::UnboundedReceiver<Action>) {
        while let Ok(action) = rx.try_recv() {
            apply(state, action);
        }
    }

    fn apply(state: &mut AppState, action: Action) {
        match action {
            Action::CommitSearch { text, ticket } => state.commit_search(text, ticket),
            Action::ListPage {
                seq,
                replace,
                outcome,
            } => state.finish_list_fetch(seq, replace, outcome),
            Action::DetailLoaded { id, outcome } => state.finish_detail_fetch(id, outcome),
            other => panic!("unexpected action in test: {other:?}"),
        }
    }

    async fn recv(rx: &mut mpsc::UnboundedReceiver<Action>) -> Action {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("action within timeout")
            .expect("channel open")
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keystrokes_commit_only_the_last_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (mut state, mut rx) = test_state(&server.uri());
        state.screen = Screen::Browse;

        state.set_search_text("M");
        state.set_search_text("Ma");
        state.set_search_text("Mat");
        assert_eq!(state.list.search_input, "Mat", "raw input echoes at once");
        assert_eq!(state.list.query, "", "nothing committed inside the window");

        // Let every debounce timer fire (paused clock auto-advances).
        tokio::time::sleep(Duration::from_millis(600)).await;

        let mut commits: u32 = 0;
        while let Ok(action) = rx.try_recv() {
            if matches!(action, Action::CommitSearch { .. }) {
                commits += 1;
            }
            apply(&mut state, action);
        }
        assert_eq!(commits, 3, "every timer fires; staleness is decided on apply");
        assert_eq!(state.list.query, "Mat", "only the last text commits");
        assert!(state.list.loading, "exactly one fetch went out");
    }

    #[tokio::test]
    async fn mount_fetch_then_load_more_failure_keeps_movies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param("page", "1"))
            .and(query_param_is_missing("search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "id": 1, "title": "The Matrix", "year": 1999 }])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (mut state, mut rx) = test_state(&server.uri());

        state.enter_browse();
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.list.loading);

        let action = recv(&mut rx).await;
        apply(&mut state, action);
        assert_eq!(state.list.movies.len(), 1);
        assert_eq!(state.list.movies[0].id, 1);
        assert!(!state.list.loading);

        state.load_more();
        assert_eq!(state.list.page, 2);
        let action = recv(&mut rx).await;
        apply(&mut state, action);

        assert_eq!(state.list.movies.len(), 1, "failed page must not land");
        assert!(!state.list.loading);
        assert!(state.last_error.is_some(), "status bar surfaces the failure");
    }

    #[tokio::test]
    async fn committed_search_replaces_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param_is_missing("search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "title": "A" }, { "id": 2, "title": "B" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param("search", "Matrix"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "id": 4, "title": "The Matrix" }])),
            )
            .mount(&server)
            .await;

        let (mut state, mut rx) = test_state(&server.uri());
        state.enter_browse();
        let action = recv(&mut rx).await;
        apply(&mut state, action);
        assert_eq!(state.list.movies.len(), 2);

        let ticket = state.debounce.arm();
        state.commit_search("Matrix".to_string(), ticket);
        let action = recv(&mut rx).await;
        apply(&mut state, action);

        let ids: Vec<u64> = state.list.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4], "search replaces, never appends");
        assert_eq!(state.list.page, 1);
    }

    #[tokio::test]
    async fn detail_404_is_terminal_not_available() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (mut state, mut rx) = test_state(&server.uri());
        state.screen = Screen::Browse;

        state.open_detail(9);
        assert_eq!(state.screen, Screen::Detail);
        assert_eq!(state.detail.status, DetailStatus::Loading);

        let action = recv(&mut rx).await;
        apply(&mut state, action);
        assert_eq!(state.detail.status, DetailStatus::Unavailable);

        // No retry: the channel stays quiet.
        tokio::time::sleep(Duration::from_millis(50)).await;
        drain(&mut state, &mut rx);
        assert_eq!(state.detail.status, DetailStatus::Unavailable);
    }

    #[tokio::test]
    async fn back_from_detail_preserves_list_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "id": 1, "title": "A" }, { "id": 2, "title": "B" }])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movies/2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 2, "title": "B" })),
            )
            .mount(&server)
            .await;

        let (mut state, mut rx) = test_state(&server.uri());
        state.enter_browse();
        let action = recv(&mut rx).await;
        apply(&mut state, action);
        state.list.move_selection_down();

        state.open_detail(2);
        let action = recv(&mut rx).await;
        apply(&mut state, action);
        state.close_detail();

        assert_eq!(state.screen, Screen::Browse);
        assert_eq!(state.list.movies.len(), 2, "list survives the round trip");
        assert_eq!(state.list.selected, Some(1), "cursor position survives too");
        assert_eq!(state.detail.status, DetailStatus::Idle);
    }
}
