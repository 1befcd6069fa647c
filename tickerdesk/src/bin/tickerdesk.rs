//! tickerdesk CLI: metric formatting, news search and an offline-capable demo dashboard.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tickerdesk::{
    DashboardSnapshot, Desk, FinancialSeries, HeadlineSource, Ticker, TickerdeskError,
    format_magnitude, format_percent, percent_change,
};
use tickerdesk_news::NewsFinder;
use tickerdesk_news::adapter::PageFetcher;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "tickerdesk", version)]
#[command(about = "Equity dashboard helpers: magnitudes, QoQ/YoY changes, news links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a number with a K/M/B/T/P suffix
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Percent change between the first value and the one N periods later
    ///
    /// Values are most-recent-first; use NA for a missing value.
    Change {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Periods back (1 = QoQ, 4 = YoY on quarterly data)
        #[arg(short, long, default_value_t = 1)]
        periods: usize,
    },
    /// Search headline links published in the last M months
    News {
        phrase: String,

        /// Lookback window in months (30-day months)
        #[arg(short, long, default_value_t = 6)]
        months: u32,

        /// Maximum number of links
        #[arg(long, default_value_t = 5)]
        max: usize,

        /// News provider origin
        #[arg(long)]
        origin: Option<String>,
    },
    /// Print a dashboard snapshot using the fixture connector
    Demo {
        #[arg(default_value = "INFY.NS")]
        ticker: String,

        /// Skip the news searches
        #[arg(long)]
        offline: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_value(raw: &str) -> Result<Option<f64>, TickerdeskError> {
    let raw = raw.trim();
    if ["na", "n/a", "null", "none", "-"].contains(&raw.to_ascii_lowercase().as_str()) {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| TickerdeskError::InvalidArg(format!("not a number: '{raw}'")))
}

fn print_snapshot(s: &DashboardSnapshot) {
    let o = &s.overview;
    println!("{} ({})", o.name, o.symbol);
    println!("  Industry:   {}", o.industry);
    println!("  Sector:     {}", o.sector);
    println!("  Website:    {}", o.website);
    println!("  Market cap: {}", o.market_cap);
    let last = o
        .last_close
        .map_or_else(|| "N/A".to_string(), |c| c.to_string());
    println!("  Last close: {last} ({} change {})", o.range.as_str(), o.price_change);

    println!("Financials");
    for row in &s.financials.rows {
        println!(
            "  {:<20} {:>10}  QoQ {:>8}  YoY {:>8}",
            row.line,
            row.latest,
            row.qoq.display(),
            row.yoy.display()
        );
    }

    for (title, section) in [
        ("News", &s.company_news),
        ("Orders", &s.orders),
        ("Sector news", &s.sector_news),
    ] {
        println!("{title}: {}", section.phrase);
        for link in &section.links {
            println!("  {link}");
        }
        if let Some(e) = &section.error {
            println!("  ({e})");
        }
    }
}

async fn run(cli: Cli) -> Result<(), TickerdeskError> {
    match cli.command {
        Commands::Format { value } => {
            println!("{}", format_magnitude(Some(value)));
        }
        Commands::Change { values, periods } => {
            let parsed = values
                .iter()
                .map(|v| parse_value(v))
                .collect::<Result<Vec<_>, _>>()?;
            let series = FinancialSeries::from_pairs(
                parsed.into_iter().enumerate().map(|(i, v)| (format!("p{i}"), v)),
            );
            println!("{}", format_percent(percent_change(&series, periods)));
        }
        Commands::News {
            phrase,
            months,
            max,
            origin,
        } => {
            let mut builder = NewsFinder::builder();
            if let Some(origin) = origin {
                builder = builder.origin(origin);
            }
            let finder = builder.build()?;
            let links = finder.find_news(&phrase, months, max).await?;
            info!(count = links.len(), "news search finished");
            for link in links {
                println!("{link}");
            }
        }
        Commands::Demo {
            ticker,
            offline,
            json,
        } => {
            let ticker = Ticker::parse(&ticker)?;
            let mut builder =
                Desk::builder().with_connector(Arc::new(tickerdesk_mock::MockConnector::new()));
            if offline {
                let empty = <dyn PageFetcher>::from_fn(|_| Ok(String::new()));
                let finder: Arc<dyn HeadlineSource> =
                    Arc::new(NewsFinder::builder().fetcher(empty).build()?);
                builder = builder.headline_source(finder);
            }
            let desk = builder.build()?;
            debug!(%ticker, offline, "building demo snapshot");
            let snapshot = desk.snapshot(&ticker).await?;
            if json {
                let out = serde_json::to_string_pretty(&snapshot)
                    .map_err(|e| TickerdeskError::Other(e.to_string()))?;
                println!("{out}");
            } else {
                print_snapshot(&snapshot);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_actionable() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
