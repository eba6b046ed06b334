//! Timezone and clock context for an edit session.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EventDeskError, EventDeskResult};

/// The context an event is viewed and edited in.
///
/// Occurrence start times are stored as local wall-clock times; the session
/// timezone decides which instant they denote.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub timezone: Tz,
    /// Fixed clock, used instead of the system clock when set
    now: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(timezone: Tz) -> Self {
        Session {
            timezone,
            now: None,
        }
    }

    /// Build a session from an IANA timezone name such as "Europe/Berlin".
    pub fn from_timezone_name(name: &str) -> EventDeskResult<Self> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| EventDeskError::Config(format!("Unknown timezone '{name}'")))?;
        Ok(Self::new(timezone))
    }

    /// Pin the session clock to a fixed instant.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Current wall-clock time in the session timezone.
    pub fn now_local(&self) -> NaiveDateTime {
        self.now().with_timezone(&self.timezone).naive_local()
    }

    /// Resolve a local wall-clock time to an instant.
    ///
    /// Ambiguous times (DST fall-back) resolve to the earlier instant; times
    /// skipped by a DST jump have no instant and yield `None`.
    pub fn localize(&self, local: NaiveDateTime) -> Option<DateTime<Tz>> {
        self.timezone.from_local_datetime(&local).earliest()
    }
}
