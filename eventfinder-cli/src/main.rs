mod commands;
mod logging;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventfinder_core::criteria::SortOrder;
use eventfinder_core::period::Period;

use commands::Context;
use commands::list::ListArgs;
use commands::show::LinkTarget;

#[derive(Parser)]
#[command(name = "eventfinder")]
#[command(about = "Browse, filter and review events from a static event catalog")]
struct Cli {
    /// Event document to load (file path or http(s) URL). Overrides the config file.
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events. Without filters this shows the home page sections.
    List {
        /// Only events in this category
        #[arg(short, long, conflicts_with = "favorites")]
        category: Option<String>,

        /// Only saved events
        #[arg(long)]
        favorites: bool,

        /// Only events that have ended
        #[arg(long)]
        ended: bool,

        /// Only events whose location contains this text ("all" for no filter)
        #[arg(short, long)]
        region: Option<String>,

        /// Search titles and locations
        #[arg(short, long)]
        search: Option<String>,

        /// Only events happening this week or this month
        #[arg(short, long, default_value = "all")]
        period: Period,

        /// Sort order (title_asc or date_asc)
        #[arg(long, default_value = "title_asc")]
        sort: SortOrder,
    },
    /// Show event details and reviews
    Show {
        id: i64,

        /// Open a link in the browser
        #[arg(long, value_enum)]
        open: Option<LinkTarget>,
    },
    /// Add or remove an event from favorites
    Favorite { id: i64 },
    /// List saved events
    Favorites,
    /// Manage reviews for an event
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Events closest to a location
    Nearby {
        /// Latitude of your location (defaults to the configured origin)
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of your location
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Search radius in km
        #[arg(long)]
        radius: Option<f64>,

        /// Number of events to list
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// List every event within the radius
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
    /// Show configuration paths and settings
    Config,
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews for an event
    List { id: i64 },
    /// Write a review (up to 100 characters)
    Add { id: i64, text: String },
    /// Delete a review
    Delete { id: i64, review_id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let ctx = Context::load(cli.source.as_deref())?;

    match cli.command {
        Commands::List {
            category,
            favorites,
            ended,
            region,
            search,
            period,
            sort,
        } => {
            let args = ListArgs {
                category,
                favorites,
                ended,
                region,
                search,
                period,
                sort,
            };
            commands::list::run(&ctx, &args).await
        }
        Commands::Show { id, open } => commands::show::run(&ctx, id, open).await,
        Commands::Favorite { id } => commands::favorite::run(&ctx, id).await,
        Commands::Favorites => {
            let args = ListArgs {
                favorites: true,
                ..ListArgs::default()
            };
            commands::list::run(&ctx, &args).await
        }
        Commands::Review { action } => match action {
            ReviewAction::List { id } => commands::review::list(&ctx, id).await,
            ReviewAction::Add { id, text } => commands::review::add(&ctx, id, &text).await,
            ReviewAction::Delete { id, review_id } => {
                commands::review::delete(&ctx, id, review_id).await
            }
        },
        Commands::Nearby {
            lat,
            lng,
            radius,
            limit,
            all,
        } => {
            let position = lat.zip(lng);
            commands::nearby::run(&ctx, position, radius, limit, all).await
        }
        Commands::Config => commands::config::run(&ctx),
    }
}
