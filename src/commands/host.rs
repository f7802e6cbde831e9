use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use planitout_core::catalog::EventCatalog;
use planitout_core::event::{DEFAULT_MAX_PARTICIPANTS, EventDraft};
use planitout_core::session::SessionStore;
use planitout_core::storage::KeyValueStore;
use planitout_core::table::EventTable;

const HOST_TIPS_KEY: &str = "has_seen_host_tips";

const HOST_TIPS: &[(&str, &str)] = &[
    ("Plan an event", "Let that beast out. Not literally."),
    ("Add the details", "Title, date, location, people."),
    ("Let's do it then", "Create an event like never before."),
];

/// Flag values from the command line; anything missing is prompted for.
pub struct Fields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub max_participants: Option<u32>,
    pub image_url: Option<String>,
}

pub async fn run<S: KeyValueStore, T: EventTable>(
    session: &mut SessionStore<S>,
    catalog: &EventCatalog<T>,
    fields: Fields,
) -> Result<()> {
    if !session.is_logged_in() {
        anyhow::bail!("Please login to host events");
    }

    super::show_tips_once(session, HOST_TIPS_KEY, HOST_TIPS);

    let interactive = fields.title.is_none()
        || fields.description.is_none()
        || fields.location.is_none()
        || fields.date.is_none()
        || fields.time.is_none();

    let draft = EventDraft {
        title: required(fields.title, "  Title")?,
        description: required(fields.description, "  Description")?,
        location: required(fields.location, "  Location")?,
        date: required(fields.date, "  Date (YYYY-MM-DD)")?,
        time: required(fields.time, "  Start time (HH:MM)")?,
        max_participants: match fields.max_participants {
            Some(max) => Some(max),
            None if interactive => Some(
                Input::new()
                    .with_prompt("  Max participants")
                    .default(DEFAULT_MAX_PARTICIPANTS)
                    .interact_text()?,
            ),
            None => None,
        },
        image_url: match fields.image_url {
            Some(url) => Some(url),
            None if interactive => {
                let url: String = Input::new()
                    .with_prompt("  Image URL (skip)")
                    .default(String::new())
                    .show_default(false)
                    .interact_text()?;
                if url.is_empty() { None } else { Some(url) }
            }
            None => None,
        },
    };

    let host_email = session.user_email();
    let event = catalog.create_event(&draft, host_email.as_deref()).await?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());
    println!("  Run `planitout explore` to see it listed.");

    Ok(())
}

/// Use the flag value if given, otherwise prompt.
fn required(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}
