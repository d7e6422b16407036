//! Logging capability handed to the tour constructor.
//!
//! The constructor never touches a global logger on its own; callers pass a
//! `TourLog` if they want progress messages. `TracingLog` forwards to
//! `tracing`, and any `Fn(Level, &str)` closure works too.

use tracing::Level;

pub trait TourLog {
    fn log(&self, level: Level, message: &str);
}

/// Forwards to `tracing` events under the `dubins_tsp::tour` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl TourLog for TracingLog {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "dubins_tsp::tour", "{message}"),
            Level::WARN => tracing::warn!(target: "dubins_tsp::tour", "{message}"),
            Level::INFO => tracing::info!(target: "dubins_tsp::tour", "{message}"),
            Level::DEBUG => tracing::debug!(target: "dubins_tsp::tour", "{message}"),
            _ => tracing::trace!(target: "dubins_tsp::tour", "{message}"),
        }
    }
}

impl<F: Fn(Level, &str)> TourLog for F {
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}
