use anyhow::Result;
use chrono::Duration;
use dialoguer::{Input, Select};
use eventdesk_core::Occurrence;
use eventdesk_core::edit::{EditModel, EditMsg, OccurrenceMsg};
use owo_colors::OwoColorize;

use super::AppContext;
use crate::render::{Render, render_changes, render_occurrence_list};

/// Edits requested on the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EditArgs {
    pub name: Option<String>,
    pub teaser: Option<String>,
    pub description: Option<String>,
    pub durations: Vec<(usize, String)>,
    pub starts: Vec<(usize, String)>,
    pub remove: Vec<usize>,
}

impl EditArgs {
    pub fn is_empty(&self) -> bool {
        *self == EditArgs::default()
    }

    /// Messages for the requested edits.
    ///
    /// Removals come last, highest index first, so every index refers to the
    /// occurrence list as loaded.
    pub fn messages(self) -> Vec<EditMsg> {
        let mut msgs = Vec::new();

        if let Some(name) = self.name {
            msgs.push(EditMsg::SetName(name));
        }
        if let Some(teaser) = self.teaser {
            msgs.push(EditMsg::SetTeaser(teaser));
        }
        if let Some(description) = self.description {
            msgs.push(EditMsg::SetDescription(description));
        }
        for (index, minutes) in self.durations {
            msgs.push(EditMsg::Occurrence(index, OccurrenceMsg::SetDuration(minutes)));
        }
        for (index, start) in self.starts {
            msgs.push(EditMsg::Occurrence(index, OccurrenceMsg::SetStart(start)));
        }

        let mut remove = self.remove;
        remove.sort_unstable_by(|a, b| b.cmp(a));
        remove.dedup();
        msgs.extend(remove.into_iter().map(EditMsg::RemoveOccurrence));

        msgs
    }
}

/// Parse `INDEX=VALUE` as used by `--duration` and `--start`.
pub fn parse_indexed(s: &str) -> Result<(usize, String), String> {
    let (index, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected INDEX=VALUE, got '{}'", s))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid occurrence index '{}'", index))?;
    Ok((index, value.to_string()))
}

pub async fn run(ctx: &AppContext, id: &str, args: EditArgs) -> Result<()> {
    let model = ctx.open(id).await?;
    let loaded = model.event.clone();

    let model = if args.is_empty() {
        interactive(model)?
    } else {
        model.update_all(args.messages())
    };

    let changes = render_changes(&loaded, &model.event);
    if changes.is_empty() {
        eprintln!("{}", "No changes".dimmed());
    } else {
        eprintln!("{}", "Changes".bold());
        for line in changes {
            eprintln!("  {}", line);
        }
    }

    println!("{}", model.preview()?);

    Ok(())
}

const ACTIONS: &[&str] = &[
    "Name",
    "Teaser",
    "Description",
    "Occurrence duration",
    "Occurrence start",
    "Add occurrence (one week after the last)",
    "Remove occurrence",
    "Done",
];

/// Prompt for edits until the user picks "Done".
fn interactive(mut model: EditModel) -> Result<EditModel> {
    loop {
        eprintln!("\n{}", model.preview()?.dimmed());
        eprintln!("{}", render_occurrence_list(&model.event, &model.session));

        let action = Select::new()
            .with_prompt("Edit")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        let msg = match action {
            0 => EditMsg::SetName(prompt_text("Name", &model.event.name)?),
            1 => EditMsg::SetTeaser(prompt_text("Teaser", &model.event.teaser)?),
            2 => EditMsg::SetDescription(prompt_text("Description", &model.event.description)?),
            3 | 4 => {
                let Some(index) = pick_occurrence(&model)? else {
                    continue;
                };
                let current = &model.event.occurrences[index];
                let sub = if action == 3 {
                    OccurrenceMsg::SetDuration(prompt_text(
                        "Duration (minutes)",
                        &current.duration.to_string(),
                    )?)
                } else {
                    OccurrenceMsg::SetStart(prompt_text(
                        "Start (YYYY-MM-DDTHH:MM)",
                        &current.start.format("%Y-%m-%dT%H:%M").to_string(),
                    )?)
                };
                EditMsg::Occurrence(index, sub)
            }
            5 => match model.event.occurrences.last() {
                Some(last) => EditMsg::AddOccurrence(week_after(last)),
                None => {
                    eprintln!("{}", "Nothing to copy: the event has no occurrences".yellow());
                    continue;
                }
            },
            6 => {
                let Some(index) = pick_occurrence(&model)? else {
                    continue;
                };
                EditMsg::RemoveOccurrence(index)
            }
            _ => return Ok(model),
        };

        model = model.update(msg);
    }
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn pick_occurrence(model: &EditModel) -> Result<Option<usize>> {
    if model.event.occurrences.is_empty() {
        eprintln!("{}", "The event has no occurrences".yellow());
        return Ok(None);
    }

    let items: Vec<String> = model.event.occurrences.iter().map(|o| o.render()).collect();
    let index = Select::new()
        .with_prompt("Occurrence")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(index))
}

fn week_after(occurrence: &Occurrence) -> Occurrence {
    Occurrence {
        start: occurrence.start + Duration::weeks(1),
        ..occurrence.clone()
    }
}
