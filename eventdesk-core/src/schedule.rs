//! Occurrences of many events laid out as a day-by-day schedule.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::event::{Event, Occurrence};
use crate::session::Session;

/// Number of occurrences listed per event in an event overview
pub const OCCURRENCE_PREVIEW_LENGTH: usize = 5;

/// Which occurrences make it into a schedule.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceFilter {
    /// Occurrences ending before this local time are dropped
    from: Option<NaiveDateTime>,
}

impl OccurrenceFilter {
    pub fn all() -> Self {
        OccurrenceFilter { from: None }
    }

    /// Occurrences that have not ended yet, as seen from the session.
    pub fn upcoming(session: &Session) -> Self {
        OccurrenceFilter {
            from: Some(session.now_local()),
        }
    }

    pub fn accepts(&self, occurrence: &Occurrence) -> bool {
        self.from.is_none_or(|from| occurrence.end() >= from)
    }
}

/// An occurrence together with the event it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledOccurrence<'a> {
    pub event: &'a Event,
    pub occurrence: &'a Occurrence,
}

#[derive(Debug, Clone)]
pub struct ScheduleDay<'a> {
    pub date: NaiveDate,
    pub entries: Vec<ScheduledOccurrence<'a>>,
}

/// Group all accepted occurrences by start date, earliest day first.
///
/// Entries within a day are ordered by start time; ties keep the order of
/// `events`.
pub fn occurrences_by_date<'a>(
    events: &'a [Event],
    filter: &OccurrenceFilter,
) -> Vec<ScheduleDay<'a>> {
    let mut days: BTreeMap<NaiveDate, Vec<ScheduledOccurrence<'a>>> = BTreeMap::new();

    for event in events {
        for occurrence in event.occurrences.iter().filter(|o| filter.accepts(o)) {
            days.entry(occurrence.start.date())
                .or_default()
                .push(ScheduledOccurrence { event, occurrence });
        }
    }

    days.into_iter()
        .map(|(date, mut entries)| {
            entries.sort_by_key(|entry| entry.occurrence.start);
            ScheduleDay { date, entries }
        })
        .collect()
}

/// The first few accepted occurrences of an event and how many accepted ones
/// were left out.
pub fn preview_occurrences<'a>(
    event: &'a Event,
    filter: &OccurrenceFilter,
) -> (Vec<&'a Occurrence>, usize) {
    let mut accepted: Vec<&Occurrence> = event
        .occurrences
        .iter()
        .filter(|o| filter.accepts(o))
        .collect();
    accepted.sort_by_key(|o| o.start);

    let remaining = accepted.len().saturating_sub(OCCURRENCE_PREVIEW_LENGTH);
    accepted.truncate(OCCURRENCE_PREVIEW_LENGTH);
    (accepted, remaining)
}

/// Short German date, e.g. "Fr, 01.03."
pub fn format_date(date: NaiveDate) -> String {
    format!("{}, {}", format_weekday(date.weekday()), date.format("%d.%m."))
}

pub fn format_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::tests::{event, occurrence};
    use chrono::{TimeZone, Utc};

    #[test]
    fn groups_by_day_in_order() {
        let events = vec![
            event("Course", vec![occurrence(8, 19, 60), occurrence(1, 19, 60)]),
            event("Social", vec![occurrence(1, 18, 60)]),
        ];

        let days = occurrences_by_date(&events, &OccurrenceFilter::all());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
        let names: Vec<_> = days[0].entries.iter().map(|e| e.event.name.as_str()).collect();
        assert_eq!(names, ["Social", "Course"]);
        assert_eq!(days[1].entries.len(), 1);
    }

    #[test]
    fn upcoming_drops_finished_occurrences() {
        // 2019-03-05 12:00 in Berlin
        let now = Utc.with_ymd_and_hms(2019, 3, 5, 11, 0, 0).unwrap();
        let session = Session::new(chrono_tz::Europe::Berlin).with_now(now);
        let events = vec![event(
            "Course",
            vec![occurrence(1, 19, 60), occurrence(5, 11, 90), occurrence(8, 19, 60)],
        )];

        let days = occurrences_by_date(&events, &OccurrenceFilter::upcoming(&session));
        let dates: Vec<_> = days.iter().map(|d| format_date(d.date)).collect();

        assert_eq!(dates, ["Di, 05.03.", "Fr, 08.03."]);
    }

    #[test]
    fn preview_reports_overflow() {
        let occurrences = (1..=7).map(|day| occurrence(day, 19, 60)).collect();
        let event = event("Course", occurrences);

        let (shown, remaining) = preview_occurrences(&event, &OccurrenceFilter::all());

        assert_eq!(shown.len(), OCCURRENCE_PREVIEW_LENGTH);
        assert_eq!(remaining, 2);
    }

    #[test]
    fn preview_skips_past_occurrences() {
        // 2019-03-20 12:00 in Berlin
        let now = Utc.with_ymd_and_hms(2019, 3, 20, 11, 0, 0).unwrap();
        let session = Session::new(chrono_tz::Europe::Berlin).with_now(now);
        let mut occurrences: Vec<_> = (1..=7).map(|day| occurrence(day, 19, 60)).collect();
        occurrences.push(occurrence(27, 19, 60));
        let event = event("Course", occurrences);

        let (shown, remaining) = preview_occurrences(&event, &OccurrenceFilter::upcoming(&session));

        let dates: Vec<_> = shown.iter().map(|o| format_date(o.start.date())).collect();
        assert_eq!(dates, ["Mi, 27.03."]);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn preview_is_ordered_by_start() {
        let event = event("Course", vec![occurrence(8, 19, 60), occurrence(1, 19, 60)]);

        let (shown, _) = preview_occurrences(&event, &OccurrenceFilter::all());

        assert_eq!(shown[0].start.date(), NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
    }

    #[test]
    fn formats_german_weekdays() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
        assert_eq!(format_date(date), "So, 03.03.");
    }
}
