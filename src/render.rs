//! Terminal rendering for catalog output.
//!
//! The browser frontend shows events as image cards; here each event
//! becomes a small block of colored text.

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;
use planitout_core::event::Event;

/// Extension trait for rendering core types with colors.
pub trait Render {
    fn render(&self, attended: bool) -> String;
}

impl Render for Event {
    fn render(&self, attended: bool) -> String {
        let mut lines = Vec::new();

        let title = if attended {
            format!("{} {}", self.title.bold(), "✓ attending".green())
        } else {
            self.title.bold().to_string()
        };
        lines.push(title);

        let mut place = self.location.clone();
        if let Some(distance) = &self.distance {
            place.push_str(" · ");
            place.push_str(distance);
        }
        lines.push(format!("  {place}"));

        lines.push(format!(
            "  {} · {} / {} attending",
            format_date_label(&self.date),
            self.current_participants,
            self.max_participants
        ));

        let byline = format!("hosted by {} · id {}", self.host_email, self.id);
        lines.push(format!("  {}", byline.dimmed()));

        lines.join("\n")
    }
}

/// Print a list of event cards separated by blank lines.
pub fn print_event_list(events: &[Event], attended_ids: &[String]) {
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let attended = attended_ids.iter().any(|id| *id == event.id);
        println!("{}", event.render(attended));
    }
}

/// Format a start timestamp as a human-readable label
/// (e.g. "Today 18:00", "Tomorrow 09:30", "Wed Feb 25 18:00").
pub fn format_date_label(date: &DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    let today = Local::now().date_naive();
    let diff = (local.date_naive() - today).num_days();

    let day = match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => local.format("%a %b %-d").to_string(),
    };

    format!("{} {}", day, local.format("%H:%M"))
}
