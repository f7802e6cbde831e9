use anyhow::Result;
use owo_colors::OwoColorize;
use planitout_core::catalog::EventCatalog;
use planitout_core::reconcile::{attending_events, hosting_events};
use planitout_core::session::SessionStore;
use planitout_core::storage::KeyValueStore;
use planitout_core::table::{EventFilter, EventTable};

use crate::render;

pub async fn run<S: KeyValueStore, T: EventTable>(
    session: &SessionStore<S>,
    catalog: &EventCatalog<T>,
) -> Result<()> {
    if !session.is_logged_in() {
        anyhow::bail!("Please login to see your dashboard");
    }

    let spinner = super::spinner("Loading your events...");
    // The dashboard looks at everything, past events included
    let events = catalog.load_events(EventFilter::all()).await;
    spinner.finish_and_clear();

    let attended_ids = session.attended_event_ids();
    let email = session.user_email();

    let attending = attending_events(&events, &attended_ids);
    let hosting = hosting_events(&events, email.as_deref());

    println!("{}", "Attending".bold().underline());
    if attending.is_empty() {
        println!("{}", "You haven't joined any events yet".dimmed());
        println!("{}", "Find one with `planitout explore`".dimmed());
    } else {
        render::print_event_list(&attending, &attended_ids);
    }

    println!();
    println!("{}", "Hosting".bold().underline());
    if hosting.is_empty() {
        println!("{}", "You haven't created any events yet".dimmed());
        println!("{}", "Host your first with `planitout host`".dimmed());
    } else {
        render::print_event_list(&hosting, &attended_ids);
    }

    Ok(())
}
