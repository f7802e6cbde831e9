use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use planitout_core::catalog::EventCatalog;
use planitout_core::filter::filter_events;
use planitout_core::session::SessionStore;
use planitout_core::storage::KeyValueStore;
use planitout_core::table::{EventFilter, EventTable};

use crate::render;

const EXPLORE_TIPS_KEY: &str = "has_seen_explore_tips";

const EXPLORE_TIPS: &[(&str, &str)] = &[
    ("Scroll & Discover", "Explore events that match your vibe."),
    ("Pick your jam", "Search by keyword, filter by location."),
    ("Show up", "Found one? Lock it in with `planitout attend <id>`."),
];

pub async fn run<S: KeyValueStore, T: EventTable>(
    session: &mut SessionStore<S>,
    catalog: &EventCatalog<T>,
    search: &str,
    location: &str,
) -> Result<()> {
    super::show_tips_once(session, EXPLORE_TIPS_KEY, EXPLORE_TIPS);

    let spinner = super::spinner("Loading events...");
    let events = catalog.load_events(EventFilter::upcoming(Utc::now())).await;
    spinner.finish_and_clear();

    let filtered = filter_events(&events, search, location);

    if filtered.is_empty() {
        println!("{}", "No events found. Try adjusting your filters.".dimmed());
        return Ok(());
    }

    render::print_event_list(&filtered, &session.attended_event_ids());

    Ok(())
}
