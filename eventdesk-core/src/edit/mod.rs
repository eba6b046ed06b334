//! The event edit form.
//!
//! An edit session starts with [`load`] (or the [`EditPage`] state machine
//! fed with the fetch result) and then evolves through [`EditModel::update`].
//! Every update consumes the model and returns the next one; the JSON
//! preview is derived from the model on demand, so it can never go stale.

mod occurrence;
mod page;

pub use occurrence::OccurrenceMsg;
pub use page::{EditPage, PageMsg, load, select_event};

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{Event, EventId, Occurrence};
use crate::session::Session;

/// State of an edit session that has loaded its event.
#[derive(Debug, Clone, PartialEq)]
pub struct EditModel {
    pub session: Session,
    pub id: EventId,
    pub event: Event,
}

/// Field-level edit actions.
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    SetName(String),
    SetTeaser(String),
    SetDescription(String),
    /// Edit the occurrence at the given index
    Occurrence(usize, OccurrenceMsg),
    AddOccurrence(Occurrence),
    RemoveOccurrence(usize),
}

impl EditModel {
    pub fn new(session: Session, event: Event) -> Self {
        EditModel {
            session,
            id: event.id,
            event,
        }
    }

    pub fn update(self, msg: EditMsg) -> Self {
        let EditModel { session, id, event } = self;

        let event = match msg {
            EditMsg::SetName(name) => Event { name, ..event },
            EditMsg::SetTeaser(teaser) => Event { teaser, ..event },
            EditMsg::SetDescription(description) => Event {
                description,
                ..event
            },
            EditMsg::Occurrence(index, msg) => {
                let mut occurrences = event.occurrences;
                match occurrences.get_mut(index) {
                    Some(occurrence) => *occurrence = msg.apply(occurrence.clone()),
                    None => tracing::debug!(index, "ignoring edit of missing occurrence"),
                }
                Event {
                    occurrences,
                    ..event
                }
            }
            EditMsg::AddOccurrence(occurrence) => {
                let mut occurrences = event.occurrences;
                occurrences.push(occurrence);
                Event {
                    occurrences,
                    ..event
                }
            }
            EditMsg::RemoveOccurrence(index) => {
                let mut occurrences = event.occurrences;
                if index < occurrences.len() {
                    occurrences.remove(index);
                } else {
                    tracing::debug!(index, "ignoring removal of missing occurrence");
                }
                Event {
                    occurrences,
                    ..event
                }
            }
        };

        EditModel { session, id, event }
    }

    /// Apply a sequence of messages in order.
    pub fn update_all(self, msgs: impl IntoIterator<Item = EditMsg>) -> Self {
        msgs.into_iter().fold(self, EditModel::update)
    }

    /// Pretty-printed JSON of the event as currently edited.
    pub fn preview(&self) -> EventDeskResult<String> {
        serde_json::to_string_pretty(&self.event)
            .map_err(|e| EventDeskError::Serialization(e.to_string()))
    }
}
