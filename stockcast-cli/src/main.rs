//! Stockcast CLI: resolve prediction dates against local price history.
//!
//! Commands:
//! - `resolve`: resolve a date against an explicit data window
//! - `window`: show the data window of a cached history file
//! - `plan`: resolve the prediction date for one or more symbols

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockcast_core::{
    parse_date, resolve, Clock, DataWindow, FixedClock, HistoryStore, ResolutionRequest,
    SystemClock,
};
use stockcast_runner::{batch_to_json, plan_batch, render_text, PredictConfig};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "stockcast",
    about = "Stockcast CLI: trading-date resolution for next-session predictions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a prediction date against an explicit data window.
    Resolve {
        /// First date with data (YYYY-MM-DD).
        #[arg(long)]
        first: String,

        /// Last date with data (YYYY-MM-DD).
        #[arg(long)]
        last: String,

        /// Requested prediction date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Minimum days of history required before the prediction date.
        #[arg(long)]
        min_lead_days: Option<u32>,

        /// Override today's date (YYYY-MM-DD).
        #[arg(long)]
        today: Option<String>,
    },
    /// Show the data window of a cached history file.
    Window {
        /// Symbol whose history to inspect.
        symbol: String,

        /// History directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Resolve the prediction date for one or more symbols.
    Plan {
        /// Symbols to plan (e.g., INFY TCS).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Requested prediction date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// History directory (overrides the config file).
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Override today's date (YYYY-MM-DD).
        #[arg(long)]
        today: Option<String>,

        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("stockcast=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            first,
            last,
            date,
            min_lead_days,
            today,
        } => run_resolve(&first, &last, date.as_deref(), min_lead_days, today.as_deref()),
        Commands::Window { symbol, data_dir } => run_window(&symbol, data_dir),
        Commands::Plan {
            symbols,
            date,
            config,
            data_dir,
            today,
            json,
        } => run_plan(symbols, date.as_deref(), config, data_dir, today.as_deref(), json),
    }
}

/// `--today` wins over the system clock.
fn clock_for(today: Option<&str>, system: SystemClock) -> Result<Box<dyn Clock>> {
    let clock: Box<dyn Clock> = match today {
        Some(text) => Box::new(FixedClock(parse_date(text)?)),
        None => Box::new(system),
    };
    Ok(clock)
}

fn run_resolve(
    first: &str,
    last: &str,
    date: Option<&str>,
    min_lead_days: Option<u32>,
    today: Option<&str>,
) -> Result<()> {
    let window = DataWindow::new(parse_date(first)?, parse_date(last)?)?;
    let requested_date: Option<NaiveDate> = date.map(parse_date).transpose()?;
    let clock = clock_for(today, SystemClock::utc())?;
    debug!(clock = clock.name(), "resolving against explicit window");

    let request = ResolutionRequest {
        requested_date,
        window,
        min_lead_days,
    };
    let result = resolve(&request, clock.today())?;

    println!("{}", result.resolved_date);
    if let Some(notice) = result.notice() {
        println!("{notice}");
    }
    Ok(())
}

fn run_window(symbol: &str, data_dir: PathBuf) -> Result<()> {
    let store = HistoryStore::new(data_dir);
    let history = store.load(symbol)?;
    let window = history.window()?;

    println!(
        "{}: {} .. {} ({} bars over {} calendar days)",
        history.symbol(),
        window.first_date(),
        window.last_date(),
        history.len(),
        window.calendar_days()
    );
    Ok(())
}

fn run_plan(
    symbols: Vec<String>,
    date: Option<&str>,
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    today: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => PredictConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PredictConfig::default(),
    };
    if let Some(dir) = data_dir {
        config.data.dir = dir;
    }

    let clock = clock_for(today, config.clock()?)?;
    let store = config.history_store();
    info!(
        symbols = symbols.len(),
        data_dir = %store.dir().display(),
        clock = clock.name(),
        "planning predictions"
    );

    let outcomes = plan_batch(&symbols, date, &config, &store, clock.as_ref());

    if json {
        println!("{}", batch_to_json(&outcomes)?);
    } else {
        for outcome in &outcomes {
            match &outcome.result {
                Ok(plan) => println!("{}", render_text(plan)),
                Err(err) => println!("{}: error: {err}", outcome.symbol),
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} prediction requests failed", outcomes.len());
    }
    Ok(())
}
