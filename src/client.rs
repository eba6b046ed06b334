//! HTTP client for the event API

use std::time::Duration;

use eventdesk_core::Event;
use eventdesk_core::error::TransportError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the event list endpoint
pub struct Client {
    http: reqwest::Client,
    events_url: String,
}

impl Client {
    pub fn new(events_url: impl Into<String>) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("eventdesk/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            http,
            events_url: events_url.into(),
        })
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<Event>, TransportError> {
        tracing::debug!(url = %self.events_url, "fetching events");

        let resp = self
            .http
            .get(&self.events_url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: self.events_url.clone(),
            });
        }

        let events: Vec<Event> = resp
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        tracing::debug!(count = events.len(), "fetched events");

        Ok(events)
    }
}
