mod client;
mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planitout_core::catalog::EventCatalog;
use planitout_core::session::SessionStore;

use crate::client::RestTable;
use crate::config::GlobalConfig;
use crate::store::FileStore;

#[derive(Parser)]
#[command(name = "planitout")]
#[command(about = "Browse, host, and attend local events from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with your email (any password is accepted for now)
    Login { email: String },

    /// Log out and clear your attendance list
    Logout,

    /// Browse upcoming events
    Explore {
        /// Free-text search over titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Substring filter over locations
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Mark an event as attending
    Attend { event_id: String },

    /// Drop an event from your attending list
    Unattend { event_id: String },

    /// Host a new event (missing details are prompted for)
    Host {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// Maximum number of participants (default 20)
        #[arg(long)]
        max_participants: Option<u32>,

        /// Image URL (optional)
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Show the events you're attending and hosting
    Dashboard,

    /// Delete one of your events
    Delete {
        event_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = SessionStore::new(FileStore::open());

    match cli.command {
        Commands::Login { email } => commands::auth::login(&mut session, &email),
        Commands::Logout => commands::auth::logout(&mut session),
        Commands::Explore { search, location } => {
            commands::explore::run(
                &mut session,
                &catalog()?,
                search.as_deref().unwrap_or(""),
                location.as_deref().unwrap_or(""),
            )
            .await
        }
        Commands::Attend { event_id } => {
            commands::attend::attend(&mut session, &catalog()?, &event_id).await
        }
        Commands::Unattend { event_id } => commands::attend::unattend(&mut session, &event_id),
        Commands::Host {
            title,
            description,
            location,
            date,
            time,
            max_participants,
            image_url,
        } => {
            let fields = commands::host::Fields {
                title,
                description,
                location,
                date,
                time,
                max_participants,
                image_url,
            };
            commands::host::run(&mut session, &catalog()?, fields).await
        }
        Commands::Dashboard => commands::dashboard::run(&session, &catalog()?).await,
        Commands::Delete { event_id, yes } => {
            commands::delete::run(&catalog()?, &event_id, yes).await
        }
    }
}

fn catalog() -> Result<EventCatalog<RestTable>> {
    let config = GlobalConfig::load()?;
    Ok(EventCatalog::new(RestTable::new(&config)?))
}
