//! Cochera CLI
//!
//! Terminal client for the Cochera collection platform: browse the activity
//! feed, watch it live, and manage cars, groups and the wishlist.
//!
//! Configuration comes from the environment (`COCHERA_API_URL`,
//! `COCHERA_API_TOKEN`, `COCHERA_POLL_INTERVAL_SECS`); a `.env` file is
//! honored.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cochera_client::{ApiClient, Config, FeedKind, FeedTab, WishPriority};

#[derive(Parser)]
#[command(name = "cochera", about = "Cochera die-cast collection client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the activity feed
    Feed {
        /// Feed tab: explore or following
        #[arg(long, default_value = "explore", value_parser = parse_tab)]
        tab: FeedTab,
        /// Filter by event kind (car_added, group_created, ...)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<FeedKind>,
        /// Show a single collector's activity
        #[arg(long)]
        user: Option<i64>,
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Follow the feed live; polls for new activity
    Watch {
        #[arg(long, default_value = "explore", value_parser = parse_tab)]
        tab: FeedTab,
        #[arg(long)]
        user: Option<i64>,
    },
    /// Manage the car catalog
    Cars {
        #[command(subcommand)]
        command: CarsCommand,
    },
    /// Manage collection groups
    Groups {
        #[command(subcommand)]
        command: GroupsCommand,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },
}

#[derive(Subcommand)]
enum CarsCommand {
    /// List your cars
    List,
    /// Register a new car
    Add {
        name: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        scale: Option<String>,
    },
    /// Remove a car
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum GroupsCommand {
    /// List your groups
    List,
    /// Create a group
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a car to a group
    AddCar { group_id: i64, car_id: i64 },
}

#[derive(Subcommand)]
enum WishlistCommand {
    /// List wishlist entries
    List,
    /// Add a wishlist entry
    Add {
        name: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long, value_parser = parse_priority)]
        priority: Option<WishPriority>,
    },
    /// Mark an entry as obtained
    Achieve { id: i64 },
}

fn parse_tab(s: &str) -> Result<FeedTab, String> {
    s.parse()
}

fn parse_kind(s: &str) -> Result<FeedKind, String> {
    match FeedKind::parse(s) {
        FeedKind::Unknown(other) => Err(format!("Unknown event kind: {}", other)),
        kind => Ok(kind),
    }
}

fn parse_priority(s: &str) -> Result<WishPriority, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::info!(api_url = %config.api_url, "starting cochera client");
    let client = ApiClient::from_config(&config)?;

    match cli.command {
        Command::Feed {
            tab,
            kind,
            user,
            pages,
        } => commands::show_feed(client, tab, kind, user, pages).await,
        Command::Watch { tab, user } => commands::watch_feed(client, &config, tab, user).await,
        Command::Cars { command } => match command {
            CarsCommand::List => commands::list_cars(client).await,
            CarsCommand::Add {
                name,
                brand,
                year,
                scale,
            } => commands::add_car(client, name, brand, year, scale).await,
            CarsCommand::Remove { id } => commands::remove_car(client, id).await,
        },
        Command::Groups { command } => match command {
            GroupsCommand::List => commands::list_groups(client).await,
            GroupsCommand::Create { name, description } => {
                commands::create_group(client, name, description).await
            }
            GroupsCommand::AddCar { group_id, car_id } => {
                commands::add_car_to_group(client, group_id, car_id).await
            }
        },
        Command::Wishlist { command } => match command {
            WishlistCommand::List => commands::list_wishlist(client).await,
            WishlistCommand::Add {
                name,
                brand,
                priority,
            } => commands::add_wishlist_item(client, name, brand, priority).await,
            WishlistCommand::Achieve { id } => commands::achieve_wishlist_item(client, id).await,
        },
    }
}
