use anyhow::Result;
use eventdesk_core::schedule::OccurrenceFilter;
use owo_colors::OwoColorize;

use super::AppContext;
use crate::render::render_event;

pub async fn run(ctx: &AppContext, all: bool) -> Result<()> {
    let mut events = ctx.fetch_events().await?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let filter = if all {
        OccurrenceFilter::all()
    } else {
        OccurrenceFilter::upcoming(&ctx.session)
    };

    for event in &events {
        println!("{}\n", render_event(event, &filter));
    }

    println!("{}", format!("{} events", events.len()).dimmed());

    Ok(())
}
