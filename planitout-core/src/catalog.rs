//! The unified event catalog: sample fixtures plus remote rows.

use uuid::Uuid;

use crate::error::{PlanItOutError, PlanItOutResult};
use crate::event::{
    DEFAULT_MAX_PARTICIPANTS, Event, EventDraft, FALLBACK_HOST_EMAIL, FALLBACK_IMAGE_URL,
    SAMPLE_ID_PREFIX,
};
use crate::samples::{random_distance, sample_events};
use crate::table::{EventFilter, EventTable};

/// Merges the fixed sample list with rows from the remote table, and owns
/// creation and deletion of remote rows.
pub struct EventCatalog<T: EventTable> {
    table: T,
    samples: Vec<Event>,
}

impl<T: EventTable> EventCatalog<T> {
    pub fn new(table: T) -> Self {
        EventCatalog {
            table,
            samples: sample_events(),
        }
    }

    /// The sample subset, in declaration order.
    pub fn samples(&self) -> &[Event] {
        &self.samples
    }

    /// Load the combined catalog: samples first, in declaration order, then
    /// remote rows ordered by start timestamp. Samples are never re-sorted
    /// into the remote rows, whatever their dates.
    ///
    /// A remote failure degrades to the sample list alone, so the catalog
    /// is always available.
    pub async fn load_events(&self, filter: EventFilter) -> Vec<Event> {
        let remote = match self.table.select(filter).await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("loading remote events failed, showing samples only: {e}");
                return self.samples.clone();
            }
        };

        let mut events = self.samples.clone();
        events.extend(remote.into_iter().map(|mut event| {
            event.distance.get_or_insert_with(random_distance);
            event
        }));
        events
    }

    /// Validate a draft, fill in defaults, and insert it as a new remote row.
    ///
    /// `host_email` is the current session email, if any; without one the
    /// row is attributed to the fallback host address.
    pub async fn create_event(
        &self,
        draft: &EventDraft,
        host_email: Option<&str>,
    ) -> PlanItOutResult<Event> {
        draft.validate()?;
        let date = draft.start_timestamp()?;

        let row = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            location: draft.location.clone(),
            date,
            max_participants: draft.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS),
            current_participants: 0,
            image_url: draft
                .image_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
            host_email: host_email.unwrap_or(FALLBACK_HOST_EMAIL).to_string(),
            distance: None,
        };

        self.table.insert(&row).await
    }

    /// Delete a remote row by id.
    ///
    /// Sample ids are rejected before any I/O happens.
    pub async fn delete_event(&self, id: &str) -> PlanItOutResult<()> {
        if id.starts_with(SAMPLE_ID_PREFIX) {
            return Err(PlanItOutError::Policy(
                "Cannot delete sample events".to_string(),
            ));
        }

        self.table.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MemoryTable;
    use chrono::{Duration, TimeZone, Utc};

    fn remote_row(id: &str, days_from_now: i64) -> Event {
        Event {
            id: id.to_string(),
            title: format!("event {id}"),
            description: "somewhere out there".to_string(),
            location: "Town Hall".to_string(),
            date: Utc::now() + Duration::days(days_from_now),
            max_participants: 40,
            current_participants: 3,
            image_url: "https://example.com/image.jpg".to_string(),
            host_email: "b@x.com".to_string(),
            distance: None,
        }
    }

    fn draft() -> EventDraft {
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

    /// A table whose every operation fails, for degraded-mode tests.
    struct DownTable;

    impl EventTable for DownTable {
        async fn select(&self, _filter: EventFilter) -> PlanItOutResult<Vec<Event>> {
            Err(PlanItOutError::RemoteFetch("connection refused".to_string()))
        }

        async fn insert(&self, _row: &Event) -> PlanItOutResult<Event> {
            Err(PlanItOutError::RemoteWrite("connection refused".to_string()))
        }

        async fn delete(&self, _id: &str) -> PlanItOutResult<()> {
            Err(PlanItOutError::RemoteWrite("connection refused".to_string()))
        }
    }

    // --- load_events ---

    #[tokio::test]
    async fn empty_remote_yields_samples_in_declared_order() {
        let catalog = EventCatalog::new(MemoryTable::new());

        let events = catalog.load_events(EventFilter::all()).await;
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["sample-1", "sample-2", "sample-3", "sample-4", "sample-5", "sample-6"]
        );
    }

    #[tokio::test]
    async fn remote_rows_follow_samples_sorted_by_date() {
        // "early" starts before every sample; it must still come after them
        let table = MemoryTable::with_rows(vec![remote_row("late", 30), remote_row("early", 0)]);
        let catalog = EventCatalog::new(table);

        let events = catalog.load_events(EventFilter::all()).await;
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["sample-1", "sample-2", "sample-3", "sample-4", "sample-5", "sample-6", "early", "late"]
        );
    }

    #[tokio::test]
    async fn remote_rows_get_a_distance_label() {
        let table = MemoryTable::with_rows(vec![remote_row("r1", 3)]);
        let catalog = EventCatalog::new(table);

        let events = catalog.load_events(EventFilter::all()).await;
        let remote = events.iter().find(|e| e.id == "r1").unwrap();
        assert!(remote.distance.as_deref().unwrap().ends_with("km away"));
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_samples() {
        let catalog = EventCatalog::new(DownTable);

        let events = catalog.load_events(EventFilter::all()).await;
        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| e.is_sample()));
    }

    // --- create_event ---

    #[tokio::test]
    async fn create_applies_defaults() {
        let catalog = EventCatalog::new(MemoryTable::new());

        let created = catalog.create_event(&draft(), None).await.unwrap();
        assert_eq!(created.max_participants, 20);
        assert_eq!(created.current_participants, 0);
        assert_eq!(created.image_url, FALLBACK_IMAGE_URL);
        assert_eq!(created.host_email, "host@planitout.com");
        assert_eq!(
            created.date,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
        );
        assert!(!created.is_sample());
    }

    #[tokio::test]
    async fn create_uses_session_email_as_host() {
        let catalog = EventCatalog::new(MemoryTable::new());

        let created = catalog.create_event(&draft(), Some("a@x.com")).await.unwrap();
        assert_eq!(created.host_email, "a@x.com");
    }

    #[tokio::test]
    async fn created_event_appears_on_next_load() {
        let catalog = EventCatalog::new(MemoryTable::new());
        let created = catalog.create_event(&draft(), None).await.unwrap();

        let events = catalog.load_events(EventFilter::all()).await;
        assert_eq!(events.len(), 7);
        assert_eq!(events[6].id, created.id);
        assert_eq!(
            events[6].date,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn create_rejects_incomplete_draft_without_writing() {
        let catalog = EventCatalog::new(MemoryTable::new());
        let incomplete = EventDraft {
            location: String::new(),
            ..draft()
        };

        let err = catalog.create_event(&incomplete, None).await.unwrap_err();
        assert!(matches!(err, PlanItOutError::Validation(_)));

        // nothing was inserted
        assert_eq!(catalog.load_events(EventFilter::all()).await.len(), 6);
    }

    #[tokio::test]
    async fn create_surfaces_remote_rejection() {
        let catalog = EventCatalog::new(DownTable);

        let err = catalog.create_event(&draft(), None).await.unwrap_err();
        assert!(matches!(err, PlanItOutError::RemoteWrite(_)));
    }

    // --- delete_event ---

    #[tokio::test]
    async fn delete_rejects_sample_ids() {
        let catalog = EventCatalog::new(MemoryTable::new());

        let err = catalog.delete_event("sample-1").await.unwrap_err();
        assert!(matches!(err, PlanItOutError::Policy(_)));

        // the sample list is untouched
        assert_eq!(catalog.samples().len(), 6);
        assert_eq!(catalog.load_events(EventFilter::all()).await.len(), 6);
    }

    #[tokio::test]
    async fn delete_removes_remote_row() {
        let table = MemoryTable::with_rows(vec![remote_row("r1", 3)]);
        let catalog = EventCatalog::new(table);

        catalog.delete_event("r1").await.unwrap();
        assert_eq!(catalog.load_events(EventFilter::all()).await.len(), 6);
    }

    #[tokio::test]
    async fn delete_missing_row_is_a_remote_write_error() {
        let catalog = EventCatalog::new(MemoryTable::new());

        let err = catalog.delete_event("nope").await.unwrap_err();
        assert!(matches!(err, PlanItOutError::RemoteWrite(_)));
    }
}
