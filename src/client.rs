//! REST client for the remote `events` table.
//!
//! Speaks the PostgREST dialect used by hosted Supabase projects: rows
//! live at `/rest/v1/events`, filters and ordering travel as query
//! parameters, and the anon key rides along as both `apikey` header and
//! bearer token.

use std::time::Duration;

use planitout_core::error::{PlanItOutError, PlanItOutResult};
use planitout_core::event::Event;
use planitout_core::table::{EventFilter, EventTable};

use crate::config::GlobalConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `EventTable` implementation over the remote REST endpoint.
pub struct RestTable {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestTable {
    pub fn new(config: &GlobalConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(RestTable {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn events_url(&self) -> String {
        format!("{}/rest/v1/events", self.base_url)
    }
}

impl EventTable for RestTable {
    async fn select(&self, filter: EventFilter) -> PlanItOutResult<Vec<Event>> {
        let mut request = self
            .http
            .get(self.events_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*"), ("order", "date.asc")]);

        if let Some(after) = filter.starting_after {
            request = request.query(&[("date", format!("gte.{}", after.to_rfc3339()))]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PlanItOutError::RemoteFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PlanItOutError::RemoteFetch(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PlanItOutError::RemoteFetch(e.to_string()))
    }

    async fn insert(&self, row: &Event) -> PlanItOutResult<Event> {
        let response = self
            .http
            .post(self.events_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(|e| PlanItOutError::RemoteWrite(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PlanItOutError::RemoteWrite(format!(
                "server returned {}",
                response.status()
            )));
        }

        // PostgREST returns the inserted rows as an array
        let mut rows: Vec<Event> = response
            .json()
            .await
            .map_err(|e| PlanItOutError::RemoteWrite(e.to_string()))?;

        rows.pop()
            .ok_or_else(|| PlanItOutError::RemoteWrite("insert returned no rows".to_string()))
    }

    async fn delete(&self, id: &str) -> PlanItOutResult<()> {
        let response = self
            .http
            .delete(self.events_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| PlanItOutError::RemoteWrite(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PlanItOutError::RemoteWrite(format!(
                "server returned {}",
                response.status()
            )));
        }

        // With return=representation a delete that matched nothing comes
        // back as an empty array; treat that as a missing row.
        let deleted: Vec<Event> = response
            .json()
            .await
            .map_err(|e| PlanItOutError::RemoteWrite(e.to_string()))?;

        if deleted.is_empty() {
            return Err(PlanItOutError::RemoteWrite(format!("no event with id {id}")));
        }

        Ok(())
    }
}
