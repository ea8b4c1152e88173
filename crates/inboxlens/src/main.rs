//! `InboxLens` - headless email insights dashboard
//!
//! Lists, filters and summarizes a mailbox from the command line.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inboxlens_core::{
    Dashboard, DashboardSettings, DateRange, FilterMode, FilterUpdate, SUGGESTED_QUERIES,
    SearchPhase, SubmitStatus,
};

#[derive(Parser)]
#[command(name = "inboxlens")]
#[command(about = "Email insights dashboard (headless)", long_about = None)]
struct Cli {
    /// Seed emails from this JSON file instead of the sample mailbox
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Reject unknown urgency, sentiment and category values
    #[arg(long, global = true)]
    strict: bool,

    /// Override the simulated search latency
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List emails matching the filters
    List(FilterArgs),

    /// Show counts for emails matching the filters
    Stats(FilterArgs),

    /// Run a smart search and wait for it to finish
    Search {
        /// Natural language query
        query: String,
    },

    /// Show suggested queries
    Suggestions {
        /// Only suggestions starting with this text
        prefix: Option<String>,
    },

    /// Show weekly activity and urgent counts
    Insights,
}

#[derive(Args)]
struct FilterArgs {
    /// high, medium or low
    #[arg(long)]
    urgency: Option<String>,

    /// positive, negative or neutral
    #[arg(long)]
    sentiment: Option<String>,

    /// inbox, promotions, social, updates, forums, or any other label
    #[arg(long)]
    category: Option<String>,

    /// Earliest arrival date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest arrival date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    fn apply(self, dashboard: &mut Dashboard) -> Result<()> {
        if self.from.is_some() || self.to.is_some() {
            let range = DateRange::new(self.from, self.to)?;
            dashboard.set_filter_field(FilterUpdate::DateRange(Some(range)))?;
        }
        if let Some(urgency) = self.urgency {
            dashboard.set_filter_field(FilterUpdate::Urgency(Some(urgency)))?;
        }
        if let Some(sentiment) = self.sentiment {
            dashboard.set_filter_field(FilterUpdate::Sentiment(Some(sentiment)))?;
        }
        if let Some(category) = self.category {
            dashboard.set_filter_field(FilterUpdate::Category(Some(category)))?;
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inboxlens=info,inboxlens_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli).await;

    let mut dashboard = Dashboard::from_settings(settings)
        .await
        .context("Failed to load emails")?;
    info!(count = dashboard.emails().len(), "Starting InboxLens");

    match cli.cmd {
        Command::List(filters) => {
            filters.apply(&mut dashboard)?;
            print!("{}", render::email_list(&dashboard));
        }
        Command::Stats(filters) => {
            filters.apply(&mut dashboard)?;
            print!("{}", render::stats(dashboard.criteria(), &dashboard.stats()));
        }
        Command::Search { query } => run_search(&mut dashboard, &query).await,
        Command::Suggestions { prefix } => {
            let suggestions = match prefix {
                Some(prefix) => {
                    dashboard.search_mut().set_query(prefix);
                    dashboard.search().suggestions(SUGGESTED_QUERIES.len())
                }
                None => SUGGESTED_QUERIES.iter().map(ToString::to_string).collect(),
            };
            print!("{}", render::suggestions(&suggestions));
        }
        Command::Insights => print!("{}", render::insights(&dashboard.insights())),
    }

    Ok(())
}

/// Loads persisted settings and applies command-line overrides.
async fn load_settings(cli: &Cli) -> DashboardSettings {
    let mut settings = match DashboardSettings::load().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring unreadable settings: {e}");
            DashboardSettings::default()
        }
    };

    if let Some(data) = &cli.data {
        settings.data_file = Some(data.clone());
    }
    if cli.strict {
        settings.filter_mode = FilterMode::Strict;
    }
    if let Some(latency_ms) = cli.latency_ms {
        settings.search_latency_ms = latency_ms;
    }
    settings
}

async fn run_search(dashboard: &mut Dashboard, query: &str) {
    let mut phases = dashboard.search().subscribe();

    match dashboard.submit_query(query) {
        SubmitStatus::Accepted => {}
        status => {
            println!("Search {status}");
            return;
        }
    }

    while phases.changed().await.is_ok() {
        match *phases.borrow_and_update() {
            SearchPhase::Busy => println!("Analyzing your emails..."),
            SearchPhase::Idle => break,
        }
    }
    dashboard.search().wait_idle().await;
    println!("Search for {query:?} finished");
}
