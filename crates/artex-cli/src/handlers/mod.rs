//! Command handlers.

pub mod browse;
pub mod departments;
pub mod search;
pub mod show;
pub mod surprise;

use indicatif::ProgressBar;
use std::time::Duration;

/// Spinner shown while a catalog round trip is in flight.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
