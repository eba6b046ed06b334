pub mod config;
pub mod edit;
pub mod list;
pub mod schedule;
pub mod show;

use anyhow::{Context, Result};
use eventdesk_core::Event;
use eventdesk_core::config::Settings;
use eventdesk_core::edit::{EditModel, EditPage, PageMsg};
use eventdesk_core::error::TransportError;
use eventdesk_core::session::Session;

use crate::client::Client;
use crate::utils::tui::with_spinner;

/// Common context for commands, built once per invocation.
pub struct AppContext {
    pub settings: Settings,
    pub session: Session,
    pub client: Client,
}

impl AppContext {
    pub fn new(settings: Settings) -> Result<Self> {
        let session = settings.session()?;
        let client = Client::new(settings.events_url())
            .context("Failed to set up HTTP client")?;

        Ok(Self {
            settings,
            session,
            client,
        })
    }

    /// Fetch the full event list, showing a spinner while waiting.
    pub async fn fetch_events(&self) -> Result<Vec<Event>, TransportError> {
        let message = format!("Fetching events from {}", self.settings.api_url);
        with_spinner(message, self.client.list_events()).await
    }

    /// Fetch the event list and open the event with `raw_id` for editing.
    pub async fn open(&self, raw_id: &str) -> Result<EditModel> {
        let page = EditPage::init(raw_id, self.session.clone());
        let fetched = self.fetch_events().await;

        match page.update(PageMsg::Fetched(fetched)) {
            EditPage::Editing(model) => {
                tracing::info!(id = %model.id, name = %model.event.name, "opened event");
                Ok(model)
            }
            EditPage::Failed(error) => Err(error.into()),
            EditPage::Loading { raw_id, .. } => {
                anyhow::bail!("Event '{}' did not finish loading", raw_id)
            }
        }
    }
}
