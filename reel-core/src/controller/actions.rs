//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all user inputs and internal
//! events the application responds to: raw terminal events, navigation,
//! debounce commits, and fetch completions. This gives the `Controller` a
//! single interface to process.

use crossterm::event::KeyEvent;

use crate::api::movie::Movie;
use crate::error::AppError;

/// A high-level action for the event loop to dispatch.
#[derive(Debug)]
pub enum Action {
    /// A keyboard event.
    Key(KeyEvent),
    /// A terminal resize event (width, height in cells).
    Resize(u16, u16),
    /// Periodic tick for spinner animation.
    Tick,
    /// Quit the application.
    Quit,
    /// Leave the splash screen for the movie list (timer or keypress).
    EnterBrowse,
    /// The debounce interval elapsed for `text`; commit it as the query if
    /// the ticket is still the most recent one handed out.
    CommitSearch { text: String, ticket: u64 },
    /// A list fetch completed.
    ListPage {
        seq: u64,
        replace: bool,
        outcome: Result<Vec<Movie>, AppError>,
    },
    /// The detail fetch completed.
    DetailLoaded {
        id: u64,
        outcome: Result<Movie, AppError>,
    },
}
