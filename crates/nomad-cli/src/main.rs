//! nomad: command-line interface for nomad-core
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ nomad stats
//!
//! - List cities for a filter query (same keys as the web app URL)
//!   $ nomad list "regions=gangwon&costMin=1&costMax=2&sort=cheap"
//!
//! - Only favorites, printed as JSON
//!   $ nomad list --favorites --json
//!
//! - Compose the next query string after a filter change
//!   $ nomad query update "speed=100&tab=map" --speed 0 --sort fast
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the dataset bundled with `nomad-core`. Use
//! `--input <path>` for a custom `.json` or `.json.gz` dataset and
//! `--config <path>` for custom cost buckets, search fields or regions.
use clap::Parser;
use nomad_cli::args::CliArgs;
use nomad_cli::logging::init_logging;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    nomad_cli::run(args, &mut out)?;
    out.flush()?;
    Ok(())
}
