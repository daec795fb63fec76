use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{ListingId, ListingStore};
use pipeline::{
    BedroomCriteria, CountFilter, PriceCeiling, PriceRange, RoomTypeSelection, DEFAULT_MIN_PRICE,
};
use session::{FilterController, JsonFileSource};
use std::path::PathBuf;
use std::time::Instant;

mod render;
mod repl;

/// roomlist - browse and filter room listings
#[derive(Parser)]
#[command(name = "roomlist")]
#[command(about = "Browse and filter room rental listings", long_about = None)]
struct Cli {
    /// Path to the listings JSON fixture
    #[arg(short, long, env = "ROOMLIST_DATA", default_value = "data/roomDetail.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter listings and print the matches
    Search {
        /// Room type: all, room, house, or any other literal type
        #[arg(long, default_value = "all")]
        room_type: RoomTypeSelection,

        /// Required number of bedrooms, or "any"
        #[arg(long, default_value = "any")]
        bedrooms: CountFilter,

        /// Required number of beds, or "any"
        #[arg(long, default_value = "any")]
        beds: CountFilter,

        /// Required number of bathrooms, or "any"
        #[arg(long, default_value = "any")]
        bathrooms: CountFilter,

        /// Lowest nightly price, inclusive
        #[arg(long, default_value_t = DEFAULT_MIN_PRICE)]
        min_price: u64,

        /// Highest nightly price, inclusive, or "unbounded"
        #[arg(long, default_value = "unbounded")]
        max_price: PriceCeiling,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail page for one listing
    Show {
        /// Listing ID to display
        #[arg(long)]
        id: ListingId,
    },

    /// Start an interactive filter session on stdin
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            room_type,
            bedrooms,
            beds,
            bathrooms,
            min_price,
            max_price,
            json,
        } => {
            let bedrooms = BedroomCriteria {
                bedrooms,
                beds,
                bathrooms,
            };
            let price_range = PriceRange {
                min: min_price,
                max: max_price,
            };
            handle_search(cli.data, room_type, bedrooms, price_range, json).await?
        }
        Commands::Show { id } => handle_show(cli.data, id)?,
        Commands::Session => handle_session(cli.data).await?,
    }

    Ok(())
}

async fn start_session(data: PathBuf) -> FilterController {
    let start = Instant::now();
    let source = JsonFileSource::new(data);
    let mut controller = FilterController::new();
    controller.initialize(&source).await;
    tracing::debug!(
        "Session initialized from {} in {:?}",
        source.path().display(),
        start.elapsed()
    );
    controller
}

/// Handle the 'search' command
async fn handle_search(
    data: PathBuf,
    room_type: RoomTypeSelection,
    bedrooms: BedroomCriteria,
    price_range: PriceRange,
    json: bool,
) -> Result<()> {
    let mut controller = start_session(data).await;

    controller.set_room_type(room_type);
    controller.set_bedroom_criteria(bedrooms);
    controller.set_price_range(price_range);
    let results = controller.apply_filters();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("Failed to encode listings")?
        );
        return Ok(());
    }

    render::print_state(controller.state());
    render::print_listings(&results);
    Ok(())
}

/// Handle the 'show' command
fn handle_show(data: PathBuf, id: ListingId) -> Result<()> {
    let store = ListingStore::load_from_file(&data)
        .with_context(|| format!("Failed to load listings from {}", data.display()))?;
    let listing = store
        .get(id)
        .ok_or_else(|| anyhow!("Listing {} not found", id))?;

    render::print_listing_detail(listing);
    Ok(())
}

/// Handle the 'session' command
async fn handle_session(data: PathBuf) -> Result<()> {
    let mut controller = start_session(data).await;
    if controller.state().listings().is_empty() {
        println!("{}", "No listings loaded; filters will show nothing.".yellow());
    }
    repl::run(&mut controller).await
}
