use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use planitout_core::catalog::EventCatalog;
use planitout_core::table::EventTable;

pub async fn run<T: EventTable>(
    catalog: &EventCatalog<T>,
    event_id: &str,
    yes: bool,
) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this event? This action can't be undone.")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    catalog.delete_event(event_id).await?;
    println!("{}", "Event deleted successfully".green());

    Ok(())
}
