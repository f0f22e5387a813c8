use clap::{Parser, Subcommand, ValueEnum};
use nomad_core::SortKey;
use std::path::PathBuf;

/// CLI arguments for nomad-cli
#[derive(Debug, Parser)]
#[command(
    name = "nomad",
    version,
    about = "Filter, sort and bookmark digital nomad cities from the terminal"
)]
pub struct CliArgs {
    /// Path to a city dataset, `.json` or `.json.gz` (default: bundled cities.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Path to a JSON filter configuration (cost buckets, search fields, regions)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the JSON file holding favorites, bookmarks and the profile
    #[arg(short = 's', long = "store", global = true, default_value = ".nomad/store.json")]
    pub store: PathBuf,

    /// Log level (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the region codes usable in `regions=`
    Regions,

    /// List cities matching a filter query string
    List {
        /// Query string, e.g. "regions=seoul,jeju&speed=100&sort=cheap"
        #[arg(default_value = "")]
        query: String,

        /// Only cities in the favorites list
        #[arg(long)]
        favorites: bool,

        /// Only cities in the bookmarks list
        #[arg(long)]
        bookmarks: bool,

        /// Print the matching cities as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose filter query strings
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },

    /// Manage favorite cities
    Favorite {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Manage bookmarked cities
    Bookmark {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Manage joined events
    Event {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Show or edit the local user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum QueryAction {
    /// Apply filter changes to a query string and print the result
    Update {
        /// Current query string
        #[arg(default_value = "")]
        query: String,

        /// Search text; an empty value clears it
        #[arg(long)]
        search: Option<String>,

        /// Comma-separated region codes; an empty value clears them
        #[arg(long)]
        regions: Option<String>,

        /// Lower cost bound (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        cost_min: Option<u8>,

        /// Upper cost bound (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        cost_max: Option<u8>,

        /// Minimum internet speed in Mbps; 0 clears it
        #[arg(long)]
        speed: Option<u32>,

        /// Sort key (overall, cost, speed, nomads, quality, reviews)
        #[arg(long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,
    },

    /// Remove every filter key from a query string and print the result
    Reset {
        /// Current query string
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListAction {
    /// Add an id
    Add { id: String },
    /// Remove an id
    Remove { id: String },
    /// Add the id if absent, remove it otherwise
    Toggle { id: String },
    /// Print every id
    List,
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Print the profile as JSON
    Show,
    /// Change the display name
    SetName { name: String },
    /// Change the bio
    SetBio { bio: String },
    /// Change the avatar URL
    SetAvatar { url: String },
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Accepts canonical sort keys and their aliases (cheap, fast, active).
fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::from_param(s).ok_or_else(|| {
        let known: Vec<&str> = SortKey::ALL.iter().map(SortKey::as_str).collect();
        format!("'{}' is not a sort key (expected one of {})", s, known.join(", "))
    })
}
