use anyhow::Result;
use eventdesk_core::schedule::{OccurrenceFilter, occurrences_by_date};
use owo_colors::OwoColorize;

use super::AppContext;
use crate::render::Render;

pub async fn run(ctx: &AppContext, all: bool) -> Result<()> {
    let events = ctx.fetch_events().await?;

    let filter = if all {
        OccurrenceFilter::all()
    } else {
        OccurrenceFilter::upcoming(&ctx.session)
    };

    let days = occurrences_by_date(&events, &filter);

    if days.is_empty() {
        println!("{}", "No occurrences scheduled".dimmed());
        return Ok(());
    }

    let rendered: Vec<String> = days.iter().map(|day| day.render()).collect();
    println!("{}", rendered.join("\n\n"));

    Ok(())
}
