use anyhow::Result;
use owo_colors::OwoColorize;
use planitout_core::catalog::EventCatalog;
use planitout_core::session::SessionStore;
use planitout_core::storage::KeyValueStore;
use planitout_core::table::{EventFilter, EventTable};

/// Add an event to the attendance list.
///
/// The id must exist in the loaded catalog before it is recorded.
pub async fn attend<S: KeyValueStore, T: EventTable>(
    session: &mut SessionStore<S>,
    catalog: &EventCatalog<T>,
    event_id: &str,
) -> Result<()> {
    if !session.is_logged_in() {
        anyhow::bail!("Please login to attend events");
    }

    let spinner = super::spinner("Loading events...");
    let events = catalog.load_events(EventFilter::all()).await;
    spinner.finish_and_clear();

    let Some(event) = events.iter().find(|event| event.id == event_id) else {
        anyhow::bail!("No event with id '{event_id}'. Run `planitout explore` to see ids.");
    };

    session.add_attended_event(&event.id);
    println!("{}", format!("You're attending {}!", event.title).green());

    Ok(())
}

/// Drop an event from the attendance list. Removing an id that isn't
/// there is a no-op, so no catalog round-trip is needed.
pub fn unattend<S: KeyValueStore>(session: &mut SessionStore<S>, event_id: &str) -> Result<()> {
    session.remove_attended_event(event_id);
    println!("Removed from your events");

    Ok(())
}
