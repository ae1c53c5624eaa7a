use anyhow::Result;
use caesar_core::config::CaesarConfig;
use caesar_core::grid::TimelineGrid;
use caesar_core::store::FileStore;
use owo_colors::OwoColorize;

use crate::commands::parse_date;
use crate::render::render_timeline;

pub async fn run(store: &FileStore, config: &CaesarConfig, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let grid = TimelineGrid::load(store, date, &config.presenter).await?;

    if grid.event().is_none() {
        println!("{}", format!("No event on {}", date).dimmed());
        return Ok(());
    }

    for line in render_timeline(&grid) {
        println!("{}", line);
    }

    Ok(())
}
