//! src/main.rs
//! ============================================================================
//! # Movie Browser TUI Application Entry Point
//!
//! An async terminal movie browser built with ratatui and tokio: a paginated,
//! searchable movie list and a detail view, fed by a public REST API.

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend as Backend};
use tokio::{
    signal,
    sync::{Mutex, MutexGuard, Notify, mpsc},
};
use tracing::{error, info, warn};

use reel_core::{
    Logger,
    api::client::MovieApiClient,
    config::Config,
    controller::{actions::Action, event_loop::Controller},
    model::app_state::AppState,
    tasks::timer_task,
    view::ui::View,
};

type AppTerminal = Terminal<Backend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup panic handler early
    setup_panic_handler();

    let app: App = App::new()
        .await
        .context("Failed to initialize application")?;

    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

/// Application runtime configuration and state
struct App {
    terminal: AppTerminal,
    controller: Controller,
    state: Arc<Mutex<AppState>>,
    shutdown: Arc<Notify>,
}

impl App {
    /// Initialize the application with all necessary components
    async fn new() -> Result<Self> {
        // Initialize logging first
        Logger::init_tracing();
        info!("Starting movie browser TUI");

        // Setup terminal
        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;

        // Load configuration
        let config: Arc<Config> = Arc::new(Config::load().await.unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }));

        let api: Arc<MovieApiClient> = Arc::new(MovieApiClient::new(config.api_base.clone()));

        // Create the action channel and application state
        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
        let state: Arc<Mutex<AppState>> = Arc::new(Mutex::new(AppState::new(
            config.clone(),
            api,
            action_tx.clone(),
        )));

        // Initialize controller
        let controller: Controller = Controller::new(state.clone(), action_rx);

        // Setup shutdown notification
        let shutdown: Arc<Notify> = Arc::new(Notify::new());

        // Seed the initial dimensions (the resize event only fires on change)
        let size = terminal.size().context("Failed to read terminal size")?;
        {
            let mut state: MutexGuard<'_, AppState> = state.lock().await;
            state.on_resize(size.width, size.height);
        }

        // The splash hands over to the list when this fires (or on a keypress)
        timer_task::spawn_splash_timer(config.splash_duration, action_tx);

        info!("Application initialization complete");

        Ok(Self {
            terminal,
            controller,
            state,
            shutdown,
        })
    }

    /// Run the main application event loop
    async fn run(mut self) -> Result<()> {
        // Setup graceful shutdown handler
        self.setup_shutdown_handler();

        info!("Starting main event loop");

        loop {
            // Render UI if needed
            self.render().await?;

            // Wait for next event
            let action: Action = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_action = self.controller.next_action() => {
                    match maybe_action {
                        Some(action) => action,
                        None => {
                            info!("Controller stream ended");
                            break;
                        }
                    }
                }
            };

            // Handle quit action
            if matches!(action, Action::Quit) {
                info!("Quit action received");
                break;
            }

            // Dispatch action to controller
            self.controller.dispatch_action(action).await;
        }

        info!("Main event loop ended");
        Ok(())
    }

    /// Render the UI if a redraw is needed
    async fn render(&mut self) -> Result<()> {
        let mut state: MutexGuard<'_, AppState> = self.state.lock().await;

        if state.redraw {
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    View::redraw(frame, &state);
                })
                .context("Failed to draw terminal")?;

            state.redraw = false;
        }

        Ok(())
    }

    /// Setup signal handlers for graceful shutdown
    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C signal");
                    shutdown.notify_one();
                }
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            error!("Failed to cleanup terminal: {}", e);
        }
    }
}

/// Initialize terminal in raw mode with alternate screen
fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend: Backend<Stdout> = Backend::new(stdout);
    let terminal: AppTerminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restore terminal to normal mode
fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Setup panic handler for graceful terminal restoration
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
