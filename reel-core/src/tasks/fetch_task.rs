//! src/tasks/fetch_task.rs
//! ============================================================================
//! # Fetch Tasks: Background API Calls
//!
//! Fire-and-forget tokio tasks wrapping the two API calls. Each task reports
//! its outcome back to the event loop as an `Action`; the state layer decides
//! what to do with it. Failures travel in the outcome; nothing is retried
//! here.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::api::client::MovieApiClient;
use crate::controller::actions::Action;
use crate::model::list_state::IssuedFetch;

/// Run `list_movies` for an issued fetch and send the outcome back tagged
/// with the fetch's sequence number.
pub fn spawn_list_fetch(
    api: Arc<MovieApiClient>,
    fetch: IssuedFetch,
    action_tx: UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        let request = fetch.page_request();
        let outcome = api.list_movies(&request).await;
        debug!(
            "list fetch #{} finished (ok={})",
            fetch.seq,
            outcome.is_ok()
        );
        let _ = action_tx.send(Action::ListPage {
            seq: fetch.seq,
            replace: fetch.replace,
            outcome,
        });
    });
}

/// Run `get_movie` for the detail screen and send the outcome back tagged
/// with the movie id.
pub fn spawn_detail_fetch(api: Arc<MovieApiClient>, id: u64, action_tx: UnboundedSender<Action>) {
    tokio::spawn(async move {
        let outcome = api.get_movie(id).await;
        debug!("detail fetch for movie {id} finished (ok={})", outcome.is_ok());
        let _ = action_tx.send(Action::DetailLoaded { id, outcome });
    });
}
