//! Free-text search over the catalog.

use crate::event::Event;

/// Narrow `events` to those matching both filters, preserving input order.
///
/// `query` matches against title or description, `location_query` against
/// location. Matching is case-insensitive substring containment, and an
/// empty input matches everything for its dimension. Both apply together
/// when both are non-empty.
pub fn filter_events(events: &[Event], query: &str, location_query: &str) -> Vec<Event> {
    let query = query.to_lowercase();
    let location_query = location_query.to_lowercase();

    events
        .iter()
        .filter(|event| {
            query.is_empty()
                || event.title.to_lowercase().contains(&query)
                || event.description.to_lowercase().contains(&query)
        })
        .filter(|event| {
            location_query.is_empty() || event.location.to_lowercase().contains(&location_query)
        })
        .cloned()
        .collect()
}
