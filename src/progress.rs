//! Spinner display for remote operations

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a blocking remote operation runs.
///
/// Draws to stderr and stays silent when stderr is not a terminal, so
/// orchestrators capturing output see nothing extra.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Swap the message while keeping the spinner running
    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Stop and erase the spinner line
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}
