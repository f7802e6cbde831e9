//! Event types shared across the PlanItout ecosystem.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanItOutError, PlanItOutResult};

/// Reserved id prefix for the built-in sample events.
pub const SAMPLE_ID_PREFIX: &str = "sample-";

/// Capacity used when the host doesn't specify one.
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 20;

/// Image used when the host doesn't provide one.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1492684223066-81342ee5ff30";

/// Host address used when no session email is available.
pub const FALLBACK_HOST_EMAIL: &str = "host@planitout.com";

/// A single event, shaped like a row of the remote `events` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Start timestamp
    pub date: DateTime<Utc>,
    pub max_participants: u32,
    pub current_participants: u32,
    pub image_url: String,
    pub host_email: String,
    /// Display-only "how far away" label, attached at load time.
    /// Never stored remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl Event {
    /// Whether this is one of the built-in sample events.
    ///
    /// Sample events are demo fixtures: they exist only in this process
    /// and can never be deleted.
    pub fn is_sample(&self) -> bool {
        self.id.starts_with(SAMPLE_ID_PREFIX)
    }
}

/// Host-form input for a new event, before validation and defaults.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
    /// Wall-clock start time, "HH:MM"
    pub time: String,
    pub max_participants: Option<u32>,
    pub image_url: Option<String>,
}

impl EventDraft {
    /// Check that every required field is present.
    pub fn validate(&self) -> PlanItOutResult<()> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
            ("date", &self.date),
            ("time", &self.time),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PlanItOutError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Combine the `date` and `time` fields into a single start timestamp.
    pub fn start_timestamp(&self) -> PlanItOutResult<DateTime<Utc>> {
        let combined = format!("{}T{}", self.date, self.time);

        let naive = NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M")
            .map_err(|_| {
                PlanItOutError::Validation(format!("invalid date/time: \"{combined}\""))
            })?;

        Ok(naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_draft() -> EventDraft {
        EventDraft {
            title: "X".to_string(),
            description: "Y".to_string(),
            location: "Z".to_string(),
            date: "2025-01-01".to_string(),
            time: "10:00".to_string(),
            max_participants: None,
            image_url: None,
        }
    }

    // --- validate ---

    #[test]
    fn validate_accepts_full_draft() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let draft = EventDraft {
            title: String::new(),
            time: String::new(),
            ..full_draft()
        };

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, PlanItOutError::Validation(_)));
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("time"));
    }

    // --- start_timestamp ---

    #[test]
    fn start_timestamp_combines_date_and_time() {
        let ts = full_draft().start_timestamp().unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn start_timestamp_rejects_garbage() {
        let draft = EventDraft {
            date: "next tuesday".to_string(),
            ..full_draft()
        };
        assert!(matches!(
            draft.start_timestamp(),
            Err(PlanItOutError::Validation(_))
        ));
    }

    // --- is_sample ---

    #[test]
    fn sample_prefix_is_recognized() {
        let mut event = crate::samples::sample_events().remove(0);
        assert!(event.is_sample());

        event.id = "b2c9f0aa-1111-2222-3333-444455556666".to_string();
        assert!(!event.is_sample());
    }
}
