pub mod attend;
pub mod auth;
pub mod dashboard;
pub mod delete;
pub mod explore;
pub mod host;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use planitout_core::session::SessionStore;
use planitout_core::storage::KeyValueStore;

/// Spinner shown while a remote fetch is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(80));
    bar
}

/// Print a page's tips the first time it is visited, then remember that.
pub fn show_tips_once<S: KeyValueStore>(
    session: &mut SessionStore<S>,
    key: &str,
    tips: &[(&str, &str)],
) {
    if session.has_seen_tips(key) {
        return;
    }

    for (title, description) in tips {
        println!("{} {}", title.bold(), description.dimmed());
    }
    println!();

    session.mark_tips_seen(key);
}
