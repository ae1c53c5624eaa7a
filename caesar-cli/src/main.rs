mod commands;
mod render;

use anyhow::Result;
use caesar_core::config::CaesarConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caesar")]
#[command(about = "Plan CaesarForum events and arrange sessions on the room timeline")]
struct Cli {
    /// Log debug output (overridden by CAESAR_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    Events,
    /// Create or delete an event
    Event {
        #[command(subcommand)]
        action: EventAction,
    },
    /// List all rooms
    Rooms,
    /// Manage rooms
    Room {
        #[command(subcommand)]
        action: RoomAction,
    },
    /// Show the room timeline of the event on a date
    Timeline {
        /// Event date (YYYY-MM-DD)
        date: String,
    },
    /// Schedule or inspect sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum EventAction {
    New {
        title: String,

        /// Event date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// First slot, on a whole or half hour (e.g. "18:00")
        #[arg(short, long)]
        start: Option<String>,

        /// Last slot, on a whole or half hour (e.g. "21:00")
        #[arg(short, long)]
        end: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum RoomAction {
    Add {
        name: String,

        #[arg(short, long, default_value_t = 0)]
        capacity: u32,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    New {
        /// Event date (YYYY-MM-DD)
        date: String,

        /// Room id or name
        #[arg(short, long)]
        room: String,

        /// First selected slot (e.g. "19:00")
        #[arg(long)]
        from: String,

        /// Last selected slot, defaults to `from`. The session runs until
        /// half an hour after it.
        #[arg(long)]
        to: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long = "abstract")]
        abstract_text: Option<String>,

        /// Presentation, Brainstorm, Workshop or Feedback
        #[arg(short = 't', long = "type")]
        session_type: Option<String>,
    },
    Show {
        /// Event date (YYYY-MM-DD)
        date: String,

        /// Room id or name
        #[arg(short, long)]
        room: String,

        /// Slot time (e.g. "19:30")
        #[arg(long)]
        at: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = CaesarConfig::load()?;
    let store = config.store();

    match cli.command {
        Commands::Events => commands::events::list(&store).await,
        Commands::Event { action } => match action {
            EventAction::New {
                title,
                date,
                start,
                end,
            } => commands::events::create(&store, &config, title, date, start, end).await,
            EventAction::Delete { id } => commands::events::delete(&store, &id).await,
        },
        Commands::Rooms => commands::rooms::list(&store).await,
        Commands::Room { action } => match action {
            RoomAction::Add { name, capacity } => {
                commands::rooms::add(&store, &name, capacity).await
            }
        },
        Commands::Timeline { date } => commands::timeline::run(&store, &config, &date).await,
        Commands::Session { action } => match action {
            SessionAction::New {
                date,
                room,
                from,
                to,
                name,
                abstract_text,
                session_type,
            } => {
                let args = commands::session::NewSessionArgs {
                    date,
                    room,
                    from,
                    to,
                    name,
                    abstract_text,
                    session_type,
                };
                commands::session::create(store, &config, args).await
            }
            SessionAction::Show { date, room, at } => {
                commands::session::show(&store, &config, &date, &room, &at).await
            }
        },
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CAESAR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
