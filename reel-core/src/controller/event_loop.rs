//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Async Event Loop
//!
//! The Controller merges three event sources into one action stream: the
//! terminal (crossterm's async `EventStream`), the internal action channel
//! (fetch completions, timers), and a periodic spinner tick. `dispatch_action`
//! is the only place application state is mutated.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::{Mutex, mpsc};
use tokio::time::{Interval, interval};
use tracing::warn;

use crate::controller::actions::Action;
use crate::model::app_state::{AppState, Screen};

/// Spinner animation cadence. Only causes redraws while something loads.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

pub struct Controller {
    pub app: Arc<Mutex<AppState>>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    events: EventStream,
    tick: Interval,
}

impl Controller {
    pub fn new(app: Arc<Mutex<AppState>>, action_rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self {
            app,
            action_rx,
            events: EventStream::new(),
            tick: interval(TICK_INTERVAL),
        }
    }

    /// Wait for the next action from any source. Returns `None` when every
    /// source has closed (terminal stream ended and all senders dropped).
    pub async fn next_action(&mut self) -> Option<Action> {
        loop {
            tokio::select! {
                maybe_action = self.action_rx.recv() => {
                    return maybe_action;
                }

                maybe_event = self.events.next() => {
                    match maybe_event {
                        Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            return Some(Action::Key(key));
                        }
                        Some(Ok(TermEvent::Resize(width, height))) => {
                            return Some(Action::Resize(width, height));
                        }
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            warn!("terminal event error: {e}");
                            continue;
                        }
                        None => return None,
                    }
                }

                _ = self.tick.tick() => {
                    return Some(Action::Tick);
                }
            }
        }
    }

    /// Apply one action to the application state.
    pub async fn dispatch_action(&mut self, action: Action) {
        let mut app = self.app.lock().await;
        match action {
            Action::Key(key) => Self::handle_key(&mut app, key),
            Action::Resize(width, height) => app.on_resize(width, height),
            Action::Tick => app.tick(),
            Action::EnterBrowse => app.enter_browse(),
            Action::CommitSearch { text, ticket } => app.commit_search(text, ticket),
            Action::ListPage {
                seq,
                replace,
                outcome,
            } => app.finish_list_fetch(seq, replace, outcome),
            Action::DetailLoaded { id, outcome } => app.finish_detail_fetch(id, outcome),
            // Quit never reaches dispatch; the main loop breaks on it first.
            Action::Quit => {}
        }
    }

    /// Per-screen key handling. Printable keys on the list screen belong to
    /// the search field, so quitting from there is Esc (with an empty
    /// search) or Ctrl+C.
    fn handle_key(app: &mut AppState, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.request_quit();
            return;
        }

        match app.screen {
            Screen::Splash => app.enter_browse(),

            Screen::Browse => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => {
                    if app.list.search_input.is_empty() {
                        app.request_quit();
                    } else {
                        app.set_search_text(String::new());
                    }
                }
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => app.refresh(),
                (KeyCode::F(5), _) => app.refresh(),
                (KeyCode::Up, _) => {
                    app.list.move_selection_up();
                    app.redraw = true;
                }
                (KeyCode::Down, _) => {
                    // Pushing past the last row is the end-of-list intent.
                    if app.list.move_selection_down() {
                        app.load_more();
                    }
                    app.redraw = true;
                }
                (KeyCode::Enter, _) => {
                    if let Some(id) = app.list.selected_movie().map(|m| m.id) {
                        app.open_detail(id);
                    }
                }
                (KeyCode::Backspace, _) => {
                    let mut text: String = app.list.search_input.clone();
                    if text.pop().is_some() {
                        app.set_search_text(text);
                    }
                }
                (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                    let mut text: String = app.list.search_input.clone();
                    text.push(c);
                    app.set_search_text(text);
                }
                _ => {}
            },

            Screen::Detail => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => app.close_detail(),
                KeyCode::Up => {
                    app.detail.scroll_up();
                    app.redraw = true;
                }
                KeyCode::Down => {
                    app.detail.scroll_down();
                    app.redraw = true;
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MovieApiClient;
    use crate::config::Config;

    fn browse_state() -> (AppState, mpsc::UnboundedReceiver<Action>) {
        let config = Arc::new(Config::default());
        let api = Arc::new(MovieApiClient::new("http://127.0.0.1:9"));
        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
        let mut state = AppState::new(config, api, action_tx);
        state.screen = Screen::Browse;
        (state, action_rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn typing_feeds_the_search_input() {
        let (mut state, _rx) = browse_state();

        Controller::handle_key(&mut state, press(KeyCode::Char('M')));
        Controller::handle_key(&mut state, press(KeyCode::Char('a')));
        Controller::handle_key(&mut state, press(KeyCode::Backspace));

        assert_eq!(state.list.search_input, "M");
        assert_eq!(state.list.query, "", "commits only after the debounce");
    }

    #[tokio::test]
    async fn esc_clears_search_before_quitting() {
        let (mut state, mut rx) = browse_state();

        Controller::handle_key(&mut state, press(KeyCode::Char('x')));
        Controller::handle_key(&mut state, press(KeyCode::Esc));
        assert_eq!(state.list.search_input, "", "first Esc clears");
        assert!(rx.try_recv().is_err(), "no quit yet");

        Controller::handle_key(&mut state, press(KeyCode::Esc));
        assert!(
            matches!(rx.try_recv(), Ok(Action::Quit)),
            "second Esc quits"
        );
    }

    #[tokio::test]
    async fn any_key_skips_the_splash() {
        let (mut state, _rx) = browse_state();
        state.screen = Screen::Splash;

        Controller::handle_key(&mut state, press(KeyCode::Char(' ')));
        assert_eq!(state.screen, Screen::Browse);
    }
}
