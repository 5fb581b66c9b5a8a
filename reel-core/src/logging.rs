use std::{fs, path::Path};

use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`.
    ///
    /// Logs go to a daily-rolling file under `logs/` only. The terminal is
    /// owned by the TUI while the app runs, so there is no stderr layer.
    pub fn init_tracing() {
        // create logs/ if missing
        let log_dir: &Path = Path::new("logs");
        fs::create_dir_all(log_dir).expect("cannot create logs dir");

        // daily rolling file appender → logs/reel-YYYY-MM-DD.log
        let file: RollingFileAppender = daily("logs", "reel");

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()));

        tracing_subscriber::registry().with(file_layer).init();
    }
}
