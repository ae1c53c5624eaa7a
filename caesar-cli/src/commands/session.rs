use anyhow::{Context, Result};
use caesar_core::config::CaesarConfig;
use caesar_core::error::CaesarError;
use caesar_core::grid::{PointerDown, TimelineGrid};
use caesar_core::persist::{Notifier, submit_session};
use caesar_core::session::SessionType;
use caesar_core::store::FileStore;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::commands::{parse_date, resolve_room, slot_index};
use crate::render::{Render, render_session_details};

pub struct NewSessionArgs {
    pub date: String,
    pub room: String,
    pub from: String,
    pub to: Option<String>,
    pub name: Option<String>,
    pub abstract_text: Option<String>,
    pub session_type: Option<String>,
}

/// Prints store failures in red; the command has already moved on.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("  {}", message.red());
    }
}

async fn load_grid(store: &FileStore, config: &CaesarConfig, date: &str) -> Result<TimelineGrid> {
    let date = parse_date(date)?;
    let grid = TimelineGrid::load(store, date, &config.presenter).await?;

    if grid.event().is_none() {
        return Err(CaesarError::EventNotFound(date.to_string()).into());
    }

    Ok(grid)
}

pub async fn create(store: FileStore, config: &CaesarConfig, args: NewSessionArgs) -> Result<()> {
    if config.presenter.is_empty() {
        println!(
            "{}",
            "  Tip: set `presenter` in your caesar config to sign your sessions".dimmed()
        );
    }

    let mut grid = load_grid(&store, config, &args.date).await?;
    let room = resolve_room(grid.rooms(), &args.room)?.clone();

    let from = slot_index(&grid, &args.from)?;
    let to = match &args.to {
        Some(to) => slot_index(&grid, to)?,
        None => from,
    };
    debug!(room = %room.id, from, to, "resolved session slots");

    if grid.pointer_down(&room.id, from) == PointerDown::ShowDetails {
        let taken = grid
            .selected_session()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        anyhow::bail!(
            "{} in {} is already taken by '{}'",
            args.from,
            room.name,
            taken
        );
    }
    grid.pointer_enter(&room.id, to);
    if !grid.pointer_up() {
        anyhow::bail!("Could not select {} in {}", args.from, room.name);
    }

    let interactive = args.name.is_none();

    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };

    let abstract_text = match args.abstract_text {
        Some(text) => text,
        None if interactive => Input::new()
            .with_prompt("  Abstract (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let session_type = match args.session_type {
        Some(t) => t.parse::<SessionType>()?,
        None if interactive => {
            let items: Vec<&str> = SessionType::ALL.iter().map(|t| t.as_str()).collect();
            let selection = Select::new()
                .with_prompt("  Type")
                .items(&items)
                .default(0)
                .interact()?;
            SessionType::ALL[selection]
        }
        None => SessionType::default(),
    };

    let form = grid.form_mut();
    form.name = name;
    form.abstract_text = abstract_text;
    form.session_type = session_type;

    let handle = submit_session(&mut grid, store, TerminalNotifier)
        .context("Nothing to submit: no pending selection")?;

    match handle.await? {
        Some(session) => {
            if interactive {
                println!();
            }
            println!(
                "{}",
                format!("  Created: {} in {}", session.name, room.name).green()
            );
            println!("  {}", session.render());
            Ok(())
        }
        None => anyhow::bail!("Session was not saved"),
    }
}

pub async fn show(
    store: &FileStore,
    config: &CaesarConfig,
    date: &str,
    room: &str,
    at: &str,
) -> Result<()> {
    let mut grid = load_grid(store, config, date).await?;
    let room = resolve_room(grid.rooms(), room)?.clone();
    let index = slot_index(&grid, at)?;

    if grid.pointer_down(&room.id, index) != PointerDown::ShowDetails {
        println!("{}", format!("{} in {} is free", at, room.name).dimmed());
        return Ok(());
    }

    if let Some(session) = grid.selected_session() {
        for line in render_session_details(&grid, session) {
            println!("{}", line);
        }
    }
    grid.close_session_details();

    Ok(())
}
