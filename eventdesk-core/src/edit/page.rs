use crate::edit::{EditModel, EditMsg};
use crate::error::{LoadError, TransportError};
use crate::event::{Event, EventId};
use crate::session::Session;

/// Pick the event with the given raw id out of a fetched collection.
pub fn select_event(raw_id: &str, events: Vec<Event>) -> Result<Event, LoadError> {
    let id: EventId = raw_id
        .parse()
        .map_err(|_| LoadError::InvalidId(raw_id.to_string()))?;

    events
        .into_iter()
        .find(|event| event.id == id)
        .ok_or_else(|| LoadError::InvalidId(raw_id.to_string()))
}

/// Turn the result of fetching the event list into an edit session.
pub fn load(
    raw_id: &str,
    session: Session,
    fetched: Result<Vec<Event>, TransportError>,
) -> Result<EditModel, LoadError> {
    let event = select_event(raw_id, fetched?)?;
    Ok(EditModel::new(session, event))
}

/// Messages driving an [`EditPage`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageMsg {
    /// The event list fetch finished
    Fetched(Result<Vec<Event>, TransportError>),
    Edit(EditMsg),
}

/// The edit page: waiting for the fetch, showing a load error, or editing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditPage {
    Loading { raw_id: String, session: Session },
    Failed(LoadError),
    Editing(EditModel),
}

impl EditPage {
    pub fn init(raw_id: impl Into<String>, session: Session) -> Self {
        EditPage::Loading {
            raw_id: raw_id.into(),
            session,
        }
    }

    pub fn update(self, msg: PageMsg) -> Self {
        match (self, msg) {
            (EditPage::Loading { raw_id, session }, PageMsg::Fetched(fetched)) => {
                match load(&raw_id, session, fetched) {
                    Ok(model) => EditPage::Editing(model),
                    Err(error) => {
                        tracing::warn!(%raw_id, %error, "failed to load event");
                        EditPage::Failed(error)
                    }
                }
            }
            (EditPage::Editing(model), PageMsg::Edit(msg)) => EditPage::Editing(model.update(msg)),
            (page, msg) => {
                tracing::debug!(?msg, "message does not apply to current page state");
                page
            }
        }
    }

    pub fn model(&self) -> Option<&EditModel> {
        match self {
            EditPage::Editing(model) => Some(model),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            EditPage::Failed(error) => Some(error),
            _ => None,
        }
    }
}
