//! Remote table access.
//!
//! The catalog depends only on this CRUD contract against a table of
//! event rows; which service actually backs it is a frontend concern.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::{PlanItOutError, PlanItOutResult};
use crate::event::Event;

/// Row filter for [`EventTable::select`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter {
    /// Only rows starting at or after this instant.
    pub starting_after: Option<DateTime<Utc>>,
}

impl EventFilter {
    /// Match every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only rows starting at or after `after`.
    pub fn upcoming(after: DateTime<Utc>) -> Self {
        EventFilter {
            starting_after: Some(after),
        }
    }
}

/// CRUD contract for the remote `events` table.
#[allow(async_fn_in_trait)]
pub trait EventTable {
    /// Fetch rows matching `filter`, ordered by start timestamp ascending.
    async fn select(&self, filter: EventFilter) -> PlanItOutResult<Vec<Event>>;

    /// Insert one row and return the stored representation.
    async fn insert(&self, row: &Event) -> PlanItOutResult<Event>;

    /// Delete the row with the given id. Fails if no such row exists.
    async fn delete(&self, id: &str) -> PlanItOutResult<()>;
}

/// In-memory table. Used in tests and anywhere persistence isn't wanted.
#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: Mutex<Vec<Event>>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Event>) -> Self {
        MemoryTable {
            rows: Mutex::new(rows),
        }
    }
}

impl EventTable for MemoryTable {
    async fn select(&self, filter: EventFilter) -> PlanItOutResult<Vec<Event>> {
        let mut rows: Vec<Event> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.starting_after.is_none_or(|after| row.date >= after))
            .cloned()
            .collect();

        rows.sort_by_key(|row| row.date);
        Ok(rows)
    }

    async fn insert(&self, row: &Event) -> PlanItOutResult<Event> {
        self.rows.lock().unwrap().push(row.clone());
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> PlanItOutResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);

        if rows.len() == before {
            return Err(PlanItOutError::RemoteWrite(format!("no event with id {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn row(id: &str, days_from_now: i64) -> Event {
        Event {
            id: id.to_string(),
            title: format!("event {id}"),
            description: String::new(),
            location: String::new(),
            date: Utc::now() + Duration::days(days_from_now),
            max_participants: 20,
            current_participants: 0,
            image_url: String::new(),
            host_email: "host@planitout.com".to_string(),
            distance: None,
        }
    }

    #[tokio::test]
    async fn select_sorts_by_start_ascending() {
        let table = MemoryTable::with_rows(vec![row("b", 9), row("a", 2), row("c", 5)]);

        let rows = table.select(EventFilter::all()).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[tokio::test]
    async fn select_honors_starting_after() {
        let table = MemoryTable::with_rows(vec![row("past", -3), row("soon", 1)]);

        let rows = table.select(EventFilter::upcoming(Utc::now())).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["soon"]);
    }

    #[tokio::test]
    async fn delete_missing_row_is_an_error() {
        let table = MemoryTable::with_rows(vec![row("a", 1)]);

        table.delete("a").await.unwrap();
        let err = table.delete("a").await.unwrap_err();
        assert!(matches!(err, PlanItOutError::RemoteWrite(_)));
    }
}
