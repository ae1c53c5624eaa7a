use anyhow::Result;
use caesar_core::colors::room_hue;
use caesar_core::store::{FileStore, RoomStore};
use owo_colors::OwoColorize;

pub async fn list(store: &FileStore) -> Result<()> {
    let rooms = store.list_rooms().await?;

    if rooms.is_empty() {
        println!("{}", "No rooms yet".dimmed());
        println!();
        println!("Add one with:\n  caesar room add \"Aula\" --capacity 40");
        return Ok(());
    }

    for (row, room) in rooms.iter().enumerate() {
        let (r, g, b) = room_hue(row).rgb();
        let capacity = format!("({} seats)", room.capacity);
        println!(
            "  {} {} {}",
            room.name.truecolor(r, g, b).bold(),
            capacity.dimmed(),
            room.id.dimmed()
        );
    }

    Ok(())
}

pub async fn add(store: &FileStore, name: &str, capacity: u32) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Room name cannot be empty");
    }

    let room = store.create_room(name, capacity).await?;
    println!("{}", format!("  Added room: {}", room.name).green());

    Ok(())
}
