//! lib.rs — Library Entry for the Movie Browser TUI
//! ------------------------------------------------
//! Explicitly exposes the api, model, controller, view, and task modules.
//! Only re-export what should be public at the crate root.

/// --- Error handling (unified error type for the app) ---
pub mod error;

/// --- Configuration: API endpoint, timings ---
pub mod config;

/// --- Movie REST API: records and HTTP client ---
pub mod api {
    pub mod client;
    pub mod movie;
}

/// --- Controller/event loop (async event handling) ---
pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::Controller;
}

/// --- State/data models ---
pub mod model {
    pub mod app_state;
    pub mod detail_state;
    pub mod list_state;
}

/// --- UI rendering: all view logic and components ---
pub mod view {
    pub mod theme;
    pub mod ui; // main UI orchestrator
    pub mod components {
        pub mod detail_panel;
        pub mod movie_card;
        pub mod movie_grid;
        pub mod search_bar;
        pub mod splash;
        pub mod status_bar;
    }
    pub use components::*;
    pub use ui::*;
}

/// --- Background/async tasks ---
pub mod tasks {
    pub mod fetch_task;
    pub mod timer_task;
}

/// --- Utilities ---
pub mod util {
    pub mod debounce;
}

pub mod logging;
pub use logging::Logger;

/// --- Crate-level re-exports for the most important types ---
pub use api::{client::MovieApiClient, movie::Movie};
pub use error::AppError;
pub use model::{
    app_state::{AppState, Screen},
    detail_state::DetailState,
    list_state::ListState,
};
