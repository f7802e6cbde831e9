//! Attending/hosting projections.
//!
//! Both are pure joins of the loaded catalog against session state,
//! recomputed on every call. Neither the catalog nor the attendance set
//! emits invalidation signals, so nothing here may cache across reads.

use crate::event::Event;

/// Catalog events the user is attending, in catalog order.
///
/// Attendance entries are weak references: an id whose event is no longer
/// in the catalog (deleted remotely since it was attended) is dropped
/// silently rather than treated as corruption.
pub fn attending_events(events: &[Event], attended_ids: &[String]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| attended_ids.iter().any(|id| *id == event.id))
        .cloned()
        .collect()
}

/// Catalog events hosted by `host_email`, in catalog order.
///
/// No session email means no hosted events.
pub fn hosting_events(events: &[Event], host_email: Option<&str>) -> Vec<Event> {
    let Some(email) = host_email else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| event.host_email == email)
        .cloned()
        .collect()
}
