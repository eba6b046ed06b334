//! TUI rendering traits for eventdesk types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventdesk-core types using owo_colors.

use eventdesk_core::schedule::{OccurrenceFilter, ScheduleDay, format_date, preview_occurrences};
use eventdesk_core::session::Session;
use eventdesk_core::{Event, Occurrence};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Occurrence {
    fn render(&self) -> String {
        format!(
            "{} {}-{} {} ({} min)",
            format_date(self.start.date()),
            self.start.format("%H:%M"),
            self.end().format("%H:%M"),
            self.location.name,
            self.duration
        )
    }
}

/// Overview of an event: header with the occurrence count, then a preview of
/// the occurrences `filter` accepts.
pub fn render_event(event: &Event, filter: &OccurrenceFilter) -> String {
    let count = match event.occurrences.len() {
        1 => "1 occurrence".to_string(),
        n => format!("{} occurrences", n),
    };
    let mut lines = vec![format!(
        "{} {} {}",
        event.name.bold(),
        event.id.dimmed(),
        format!("({})", count).dimmed()
    )];

    if !event.teaser.is_empty() {
        lines.push(format!("   {}", event.teaser));
    }

    let (shown, remaining) = preview_occurrences(event, filter);
    for occurrence in shown {
        lines.push(format!("   {}", occurrence.render()));
    }
    if remaining > 0 {
        lines.push(format!("   {}", format!("(+ {} more)", remaining).dimmed()));
    }

    lines.join("\n")
}

impl Render for ScheduleDay<'_> {
    fn render(&self) -> String {
        let mut lines = vec![format_date(self.date).bold().to_string()];

        for entry in &self.entries {
            lines.push(format!(
                "  {} {} {}",
                entry.occurrence.start.format("%H:%M"),
                entry.event.name,
                format!("@ {}", entry.occurrence.location.name).dimmed()
            ));
        }

        lines.join("\n")
    }
}

/// Numbered occurrence list used by the interactive editor.
pub fn render_occurrence_list(event: &Event, session: &Session) -> String {
    if event.occurrences.is_empty() {
        return "   No occurrences".dimmed().to_string();
    }

    event
        .occurrences
        .iter()
        .enumerate()
        .map(|(index, occurrence)| {
            let offset = session
                .localize(occurrence.start)
                .map(|dt| dt.format("%Z").to_string())
                .unwrap_or_else(|| "?".to_string());
            format!(
                "   [{}] {} {}",
                index,
                occurrence.render(),
                offset.dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render field-by-field differences between the loaded and the edited event
pub fn render_changes(old: &Event, new: &Event) -> Vec<String> {
    let mut lines = Vec::new();

    if old.name != new.name {
        lines.push(render_field_diff("name", &old.name, &new.name));
    }
    if old.teaser != new.teaser {
        lines.push(render_field_diff("teaser", &old.teaser, &new.teaser));
    }
    if old.description != new.description {
        lines.push(render_field_diff("description", &old.description, &new.description));
    }

    // Matched by content, not position
    let mut matched = vec![false; old.occurrences.len()];
    let mut added = Vec::new();
    for (index, occurrence) in new.occurrences.iter().enumerate() {
        let found = (0..old.occurrences.len())
            .find(|&i| !matched[i] && old.occurrences[i] == *occurrence);
        match found {
            Some(i) => matched[i] = true,
            None => added.push((index, occurrence)),
        }
    }
    let mut removed = old
        .occurrences
        .iter()
        .zip(&matched)
        .filter(|(_, matched)| !**matched)
        .map(|(occurrence, _)| occurrence);

    // Leftovers on both sides pair up as edits
    let mut added = added.into_iter();
    loop {
        match (removed.next(), added.next()) {
            (Some(before), Some((index, after))) => lines.push(render_field_diff(
                &format!("occurrences[{index}]"),
                &before.render(),
                &after.render(),
            )),
            (Some(before), None) => {
                lines.push(format!("{} {}", "-".red(), before.render().red()));
            }
            (None, Some((_, after))) => {
                lines.push(format!("{} {}", "+".green(), after.render().green()));
            }
            (None, None) => break,
        }
    }

    lines
}

fn render_field_diff(field: &str, old: &str, new: &str) -> String {
    let old = if old.is_empty() { "(empty)" } else { old };
    let new = if new.is_empty() { "(empty)" } else { new };
    format!("{}: {} → {}", field.dimmed(), old.red(), new.green())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use eventdesk_core::edit::{EditModel, EditMsg, OccurrenceMsg};
    use eventdesk_core::EventId;

    fn event() -> Event {
        let json = r#"{
            "id": "6f1c2a9e-3b0e-4a53-9d5c-1f1b8c3f5e21",
            "name": "Social Dance",
            "occurrences": [
                {
                    "start": "2019-03-01T20:00:00",
                    "duration": 180,
                    "location": {"id": "0b8f4a52-6f0e-4f7e-8a0e-5d1e8b2b7c11", "name": "Musikbunker"}
                }
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn occurrence_shows_time_span() {
        let rendered = event().occurrences[0].render();
        assert_eq!(rendered, "Fr, 01.03. 20:00-23:00 Musikbunker (180 min)");
    }

    #[test]
    fn unchanged_event_has_no_changes() {
        let event = event();
        assert!(render_changes(&event, &event).is_empty());
    }

    #[test]
    fn changes_list_each_edited_field() {
        let before = event();
        let session = Session::new(chrono_tz::Europe::Berlin);
        let mut extra = before.occurrences[0].clone();
        extra.start += chrono::Duration::weeks(1);
        let after = EditModel::new(session, before.clone())
            .update_all([
                EditMsg::SetName("Lindy Night".to_string()),
                EditMsg::Occurrence(0, OccurrenceMsg::SetDuration("120".to_string())),
                EditMsg::AddOccurrence(extra),
            ])
            .event;

        let changes = render_changes(&before, &after);

        assert_eq!(changes.len(), 3);
        assert!(changes[0].contains("Lindy Night"));
        assert!(changes[1].contains("120 min"));
        assert!(changes[2].contains("Fr, 08.03."));
    }

    #[test]
    fn removing_an_occurrence_reports_only_that_one() {
        let mut before = event();
        let first = before.occurrences[0].clone();
        for weeks in 1..3 {
            let mut later = first.clone();
            later.start += chrono::Duration::weeks(weeks);
            before.occurrences.push(later);
        }
        let session = Session::new(chrono_tz::Europe::Berlin);
        let after = EditModel::new(session, before.clone())
            .update(EditMsg::RemoveOccurrence(0))
            .event;

        let changes = render_changes(&before, &after);

        assert_eq!(changes.len(), 1);
        assert!(changes[0].contains("Fr, 01.03."));
        assert!(!changes[0].contains("→"));
    }

    #[test]
    fn overview_counts_all_but_previews_upcoming() {
        let mut event = event();
        let mut later = event.occurrences[0].clone();
        later.start += chrono::Duration::weeks(4);
        event.occurrences.push(later);
        // 2019-03-20 12:00 in Berlin
        let now = Utc.with_ymd_and_hms(2019, 3, 20, 11, 0, 0).unwrap();
        let session = Session::new(chrono_tz::Europe::Berlin).with_now(now);

        let rendered = render_event(&event, &OccurrenceFilter::upcoming(&session));

        assert!(rendered.contains("2 occurrences"));
        assert!(rendered.contains("Fr, 29.03."));
        assert!(!rendered.contains("Fr, 01.03."));
    }

    #[test]
    fn empty_occurrence_list_is_called_out() {
        let event = Event {
            id: EventId::new(),
            name: "Workshop".to_string(),
            teaser: String::new(),
            description: String::new(),
            occurrences: Vec::new(),
        };
        let session = Session::new(chrono_tz::Europe::Berlin);

        assert!(render_occurrence_list(&event, &session).contains("No occurrences"));
    }
}
