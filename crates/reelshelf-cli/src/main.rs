use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use media_browse_config::{Config, PathManager};
use media_browse_core::{WatchlistStorage, WatchlistStore};
use media_browse_gateway::{TimeWindow, TrendingKind};
use media_browse_models::MediaKind;

use commands::{browse, clear, config, list, lookup};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelshelf")]
#[command(about = "Reelshelf - Browse the movie and TV catalog, keep a watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page rows (trending plus curated movie lists)
    Home,
    /// Show the movie rows (curated categories plus genre rows)
    Movies,
    /// Show the TV rows (curated categories plus genre rows)
    Tv,
    /// Show recently added and trending content
    Recent,
    /// Show details and credits for one title
    Details {
        /// Content kind: movie or tv
        kind: MediaKind,
        /// Catalog id of the title
        id: u64,
    },
    /// Search movies and shows by free text
    Search {
        query: String,
    },
    /// Discover titles by genre, date window and sort order
    Discover {
        /// Content kind: movie or tv
        kind: MediaKind,

        /// Genre id filter (see `reelshelf genres`)
        #[arg(long)]
        genre: Option<u64>,

        /// Sort key, e.g. popularity.desc or primary_release_date.desc
        #[arg(long)]
        sort_by: Option<String>,

        /// Only titles released on or after this date
        #[arg(long, value_name = "YYYY-MM-DD")]
        after: Option<NaiveDate>,

        /// Only titles released on or before this date
        #[arg(long, value_name = "YYYY-MM-DD")]
        before: Option<NaiveDate>,
    },
    /// Show trending titles
    Trending {
        /// Namespace: all, movie or tv
        #[arg(long, default_value = "all")]
        kind: TrendingKind,

        /// Time window: day or week
        #[arg(long, default_value = "day")]
        window: TimeWindow,
    },
    /// List genre ids for use with `discover --genre`
    Genres {
        /// Content kind: movie or tv
        kind: MediaKind,
    },
    /// Show or edit your watchlist
    List {
        #[command(subcommand)]
        cmd: Option<ListCommands>,
    },
    /// Configure the catalog API
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
    /// Clear stored data
    Clear {
        /// Clear the persisted watchlist
        #[arg(long, action = ArgAction::SetTrue)]
        watchlist: bool,

        /// Skip the confirmation prompt
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// Show the watchlist
    Show,
    /// Fetch a title's details and add it to the watchlist
    Add {
        /// Content kind: movie or tv
        kind: MediaKind,
        /// Catalog id of the title
        id: u64,
    },
    /// Remove a title from the watchlist
    Remove {
        /// Catalog id of the title
        id: u64,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Set the API key and base URL
    Set {
        /// Catalog API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,

        /// Catalog base URL (defaults to the provider's)
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let paths = PathManager::default();
    let app_config = Config::load_with_env(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    match cli.command {
        Commands::Home => browse::run_home(&app_config, &output).await,
        Commands::Movies => browse::run_movies(&app_config, &output).await,
        Commands::Tv => browse::run_tv(&app_config, &output).await,
        Commands::Recent => browse::run_recent(&app_config, &output).await,
        Commands::Details { kind, id } => {
            lookup::run_details(&app_config, kind, id, &output).await
        }
        Commands::Search { query } => lookup::run_search(&app_config, &query, &output).await,
        Commands::Discover {
            kind,
            genre,
            sort_by,
            after,
            before,
        } => lookup::run_discover(&app_config, kind, genre, sort_by, after, before, &output).await,
        Commands::Trending { kind, window } => {
            lookup::run_trending(&app_config, kind, window, &output).await
        }
        Commands::Genres { kind } => lookup::run_genres(&app_config, kind, &output).await,
        Commands::List { cmd } => {
            let mut store = open_store(&paths)?;
            let cmd = cmd.unwrap_or(ListCommands::Show);
            list::run_list(cmd, &app_config, &mut store, &output).await
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(cmd, &paths, &output)
        }
        Commands::Clear { watchlist, yes } => clear::run_clear(watchlist, yes, &paths, &output),
    }
}

fn open_store(paths: &PathManager) -> color_eyre::Result<WatchlistStore> {
    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let mut store = WatchlistStore::open(WatchlistStorage::new(paths.watchlist_file()));
    store.subscribe(|change| tracing::debug!(?change, "watchlist changed"));
    Ok(store)
}
