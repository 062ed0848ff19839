//! Command-line harness for the hero client.
//!
//! Exercises each client operation against a configured backend, prints the
//! result as JSON, then dumps the accumulated message log.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hero_client::{ClientConfig, Hero, HeroClient, MessageLog, NewHero};

#[derive(Parser)]
#[command(name = "hero-client", about = "Talk to a hero REST backend")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Collection endpoint base URL (overrides the config file).
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all heroes.
    List,
    /// Fetch one hero by id.
    Get { id: u32 },
    /// Fetch one hero by id via the query-filter endpoint.
    Lenient { id: u32 },
    /// Create a hero; the backend assigns the id.
    Add { name: String },
    /// Replace a hero's name.
    Update { id: u32, name: String },
    /// Delete a hero by id.
    Delete { id: u32 },
    /// Search heroes by name fragment.
    Search { term: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hero_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    tracing::info!(
        base_url = %config.base_url,
        request_timeout_secs = config.request_timeout_secs,
        "configuration loaded"
    );

    let messages = MessageLog::new();
    let client = HeroClient::new(&config, messages.clone())?;

    match cli.command {
        Command::List => print_json(&client.heroes().await)?,
        Command::Get { id } => print_json(&client.hero(id).await)?,
        Command::Lenient { id } => print_json(&client.hero_lenient(id).await)?,
        Command::Add { name } => print_json(&client.add_hero(NewHero::new(name)).await)?,
        Command::Update { id, name } => {
            let hero = Hero { id, name };
            client.update_hero(&hero).await;
            print_json(&hero)?;
        }
        Command::Delete { id } => print_json(&client.delete_hero(id).await)?,
        Command::Search { term } => print_json(&client.search_heroes(&term).await)?,
    }

    for entry in messages.entries() {
        println!("{entry}");
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
