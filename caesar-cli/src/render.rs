//! Terminal rendering for caesar types.
//!
//! Extension traits that add colored output to caesar-core types using
//! owo_colors.

use caesar_core::colors::Color;
use caesar_core::event::Event;
use caesar_core::grid::{SlotState, TimelineGrid};
use caesar_core::session::Session;
use owo_colors::OwoColorize;

/// Width of one slot column, in characters.
const CELL_WIDTH: usize = 6;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let date = self.date.format("%a %b %-d %Y").to_string();
        let hours = format!("{} - {}", self.start_hour, self.end_hour);
        format!(
            "{} {} {} {}",
            date.bold(),
            hours,
            self.title,
            format!("[{}]", self.id).dimmed()
        )
    }
}

impl Render for Session {
    fn render(&self) -> String {
        let time = format!("{} - {}", self.start_time, self.end_time);
        let mut line = format!("{} {} ({})", time, self.name.bold(), self.session_type);
        if !self.presenter.is_empty() {
            line.push_str(&format!(" by {}", self.presenter));
        }
        line
    }
}

fn swatch(color: Color, text: &str) -> String {
    let (r, g, b) = color.rgb();
    text.black().on_truecolor(r, g, b).to_string()
}

/// Pad or cut `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

/// The room × slot grid followed by a legend of its sessions.
pub fn render_timeline(grid: &TimelineGrid) -> Vec<String> {
    let mut lines = Vec::new();

    let Some(event) = grid.event() else {
        return lines;
    };

    lines.push(format!("📅 {}", event.render()));
    lines.push(String::new());

    if grid.rooms().is_empty() {
        lines.push("   No rooms yet".dimmed().to_string());
        return lines;
    }

    let label_width = grid
        .rooms()
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut header = " ".repeat(label_width);
    for slot in grid.slots() {
        header.push_str(&fit(&slot.time.to_string(), CELL_WIDTH));
    }
    lines.push(header.dimmed().to_string());

    for room in grid.rooms() {
        let (r, g, b) = grid.room_hue(&room.id).rgb();
        let mut line = fit(&room.name, label_width)
            .truecolor(r, g, b)
            .bold()
            .to_string();

        for slot in grid.slots() {
            let cell = match grid.slot_state(&room.id, slot.index) {
                SlotState::Occupied(session) => {
                    let text = if session.start_time == slot.time {
                        fit(&session.name, CELL_WIDTH - 1)
                    } else {
                        " ".repeat(CELL_WIDTH - 1)
                    };
                    format!("{} ", swatch(grid.session_color(&session.id), &text))
                }
                SlotState::Selected => {
                    format!("{} ", "▓".repeat(CELL_WIDTH - 1).truecolor(r, g, b))
                }
                SlotState::Empty => fit("  ·", CELL_WIDTH).dimmed().to_string(),
            };
            line.push_str(&cell);
        }

        lines.push(line);
    }

    if !grid.sessions().is_empty() {
        lines.push(String::new());
        for session in grid.sessions() {
            lines.push(format!(
                "   {} {} {}",
                swatch(grid.session_color(&session.id), "  "),
                session.render(),
                format!("@ {}", grid.room_name(&session.room)).dimmed()
            ));
        }
    }

    lines
}

/// Full read-only view of one session.
pub fn render_session_details(grid: &TimelineGrid, session: &Session) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {}",
            swatch(grid.session_color(&session.id), "  "),
            session.name.bold()
        ),
        format!("   Type:      {}", session.session_type),
        format!("   Room:      {}", grid.room_name(&session.room)),
        format!("   Time:      {} - {}", session.start_time, session.end_time),
    ];

    if !session.presenter.is_empty() {
        lines.push(format!("   Presenter: {}", session.presenter));
    }
    if !session.abstract_text.is_empty() {
        lines.push(String::new());
        lines.push(format!("   {}", session.abstract_text));
    }

    lines
}
