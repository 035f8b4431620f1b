//! # gnews_batch
//!
//! Fetches Google News RSS search results for a query over a date range and
//! exports them to a single CSV file.
//!
//! A search feed caps how many results one request returns, so the range is
//! partitioned into consecutive windows of at most 30 days and one feed is
//! fetched per window, strictly in sequence. Records are concatenated in
//! window order with no dedup or sort; the CSV is written only after every
//! window has been fetched, so a failed run leaves no partial output.
//!
//! ## Usage
//!
//! ```sh
//! gnews_batch "reforma tributária" -s 2019-01-01 -e 2023-12-20 -o ./out
//! ```
//!
//! ## Pipeline
//!
//! 1. **Partitioning**: split `[start, end)` into ≤30-day windows
//! 2. **Fetching**: one GET + RSS parse per window
//! 3. **Extraction**: title, outlet, summary, link and date per entry
//! 4. **Output**: one UTF-8-with-BOM CSV for the whole range

use chrono::NaiveDate;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod models;
mod outputs;
mod scrapers;
mod utils;
mod windows;

use cli::Cli;
use models::NewsRecord;
use scrapers::google_news::{GoogleNewsScraper, Locale};
use utils::ensure_writable_dir;
use windows::partition_range;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("gnews_batch starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.query, ?args.start_date, ?args.end_date, ?args.output_dir, "Parsed CLI arguments");

    if args.start_date > args.end_date {
        error!(
            start_date = %args.start_date,
            end_date = %args.end_date,
            "Start date is after end date"
        );
        return Err(format!(
            "start date {} is after end date {}",
            args.start_date, args.end_date
        )
        .into());
    }

    // Early check: ensure the output dir is writable before any fetch
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Partition the range ----
    let date_windows = partition_range(args.start_date, args.end_date);
    info!(
        windows = date_windows.len(),
        start_date = %args.start_date,
        end_date = %args.end_date,
        "Partitioned date range into fetch windows"
    );

    // ---- Fetch windows in sequence ----
    let scraper = GoogleNewsScraper::new(Locale {
        hl: args.hl.clone(),
        gl: args.gl.clone(),
        ceid: args.ceid.clone(),
    });

    let records = fetch_all_windows(&scraper, &args.query, &date_windows).await?;
    info!(count = records.len(), "Total records across all windows");

    // ---- CSV output ----
    let path = outputs::csv::write_records(
        &records,
        &args.query,
        args.start_date,
        args.end_date,
        &args.output_dir,
    )
    .await?;
    info!(path = %path.display(), rows = records.len(), "Export complete");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Fetch every window in order and concatenate the results.
///
/// Logs a progress line per window. Any window failure aborts the run; no
/// partial result survives.
async fn fetch_all_windows(
    scraper: &GoogleNewsScraper,
    query: &str,
    date_windows: &[(NaiveDate, NaiveDate)],
) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let total = date_windows.len();
    let mut records = Vec::new();

    for (i, (window_start, window_end)) in date_windows.iter().enumerate() {
        info!(
            window = i + 1,
            total,
            start = %window_start,
            end = %window_end,
            "Fetching news batch"
        );
        let batch = scraper
            .fetch_window(query, *window_start, *window_end)
            .await?;
        debug!(window = i + 1, count = batch.len(), "Window fetched");
        records.extend(batch);
    }

    Ok(records)
}
