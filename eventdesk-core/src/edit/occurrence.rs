use chrono::NaiveDateTime;

use crate::event::{Location, Occurrence};

/// Formats accepted for a start time, as typed into a datetime-local field.
const START_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Edit actions on a single occurrence.
///
/// Raw text input is carried as typed; input that does not parse leaves the
/// occurrence unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum OccurrenceMsg {
    /// Minutes, as typed
    SetDuration(String),
    /// Start, as typed
    SetStart(String),
    SetLocation(Location),
}

impl OccurrenceMsg {
    pub fn apply(self, occurrence: Occurrence) -> Occurrence {
        match self {
            OccurrenceMsg::SetDuration(raw) => match raw.trim().parse::<u32>() {
                Ok(duration) => Occurrence {
                    duration,
                    ..occurrence
                },
                Err(_) => {
                    tracing::debug!(input = %raw, "ignoring non-numeric duration");
                    occurrence
                }
            },
            OccurrenceMsg::SetStart(raw) => match parse_start(&raw) {
                Some(start) => Occurrence { start, ..occurrence },
                None => {
                    tracing::debug!(input = %raw, "ignoring unparsable start");
                    occurrence
                }
            },
            OccurrenceMsg::SetLocation(location) => Occurrence {
                location,
                ..occurrence
            },
        }
    }
}

fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    START_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::tests::occurrence;
    use uuid::Uuid;

    #[test]
    fn duration_accepts_padded_numbers() {
        let updated = OccurrenceMsg::SetDuration(" 45 ".to_string()).apply(occurrence(1, 20, 180));
        assert_eq!(updated.duration, 45);
    }

    #[test]
    fn negative_or_empty_duration_is_ignored() {
        for input in ["-5", "", "1.5"] {
            let updated =
                OccurrenceMsg::SetDuration(input.to_string()).apply(occurrence(1, 20, 180));
            assert_eq!(updated.duration, 180, "input {input:?}");
        }
    }

    #[test]
    fn start_accepts_datetime_local_format() {
        let updated =
            OccurrenceMsg::SetStart("2019-04-12T19:30".to_string()).apply(occurrence(1, 20, 180));

        assert_eq!(updated.start.to_string(), "2019-04-12 19:30:00");
        assert_eq!(updated.duration, 180);
    }

    #[test]
    fn unparsable_start_is_ignored() {
        let before = occurrence(1, 20, 180);
        let updated = OccurrenceMsg::SetStart("next friday".to_string()).apply(before.clone());
        assert_eq!(updated, before);
    }

    #[test]
    fn location_is_replaced() {
        let location = Location {
            id: Uuid::new_v4(),
            name: "Frankenberger Park".to_string(),
            address: String::new(),
        };
        let updated =
            OccurrenceMsg::SetLocation(location.clone()).apply(occurrence(1, 20, 180));

        assert_eq!(updated.location, location);
    }
}
