//! src/tasks/timer_task.rs
//! ============================================================================
//! # Timer Tasks: Debounce and Splash One-Shots
//!
//! One-shot sleeps that resolve into actions. The debounce timer is never
//! cancelled: it always fires, and the state layer refuses commits whose
//! ticket has been superseded (see `util::debounce`). The splash timer ends
//! the splash screen unless a keypress already did.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tracing::trace;

use crate::controller::actions::Action;

/// After `delay` of quiescence, propose `text` as the committed query.
pub fn spawn_debounce_timer(
    delay: Duration,
    text: String,
    ticket: u64,
    action_tx: UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        sleep(delay).await;
        trace!("debounce timer fired for ticket {ticket}");
        let _ = action_tx.send(Action::CommitSearch { text, ticket });
    });
}

/// After `delay`, move from the splash screen to the movie list.
pub fn spawn_splash_timer(delay: Duration, action_tx: UnboundedSender<Action>) {
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = action_tx.send(Action::EnterBrowse);
    });
}
