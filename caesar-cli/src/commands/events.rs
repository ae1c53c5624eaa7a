use anyhow::Result;
use caesar_core::config::CaesarConfig;
use caesar_core::event::NewEvent;
use caesar_core::store::{EventStore, FileStore};
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn list(store: &FileStore) -> Result<()> {
    let events = store.list_events().await?;

    if events.is_empty() {
        println!("{}", "No events yet".dimmed());
        println!();
        println!("Create one with:\n  caesar event new \"Caesar evening\" --date 2025-03-20");
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    Ok(())
}

pub async fn create(
    store: &FileStore,
    config: &CaesarConfig,
    title: String,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let defaults = NewEvent::with_defaults(today);

    let form = NewEvent {
        title,
        date: date.unwrap_or(defaults.date),
        start_hour: start.unwrap_or_else(|| config.default_start_hour.clone()),
        end_hour: end.unwrap_or_else(|| config.default_end_hour.clone()),
    };
    let draft = form.validate()?;

    if let Some(existing) = store.get_by_date(draft.date).await? {
        println!(
            "{}",
            format!(
                "  Note: '{}' is already planned on {}; its timeline stays the one shown",
                existing.title, draft.date
            )
            .yellow()
        );
    }

    let event = store.create_event(draft).await?;
    println!("{}", format!("  Created: {}", event.title).green());
    println!("  {}", event.render());

    Ok(())
}

pub async fn delete(store: &FileStore, id: &str) -> Result<()> {
    let event = store
        .list_events()
        .await?
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow::anyhow!("No event with id '{}'", id))?;

    store.delete_event(id).await?;
    println!("{}", format!("  Deleted: {}", event.title).red());

    Ok(())
}

