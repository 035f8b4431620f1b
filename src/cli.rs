//! Command-line interface definitions.
//!
//! The query, date bounds, output directory and feed locale are all explicit
//! arguments; nothing about a run is baked in.

use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the Google News batch fetcher.
///
/// # Examples
///
/// ```sh
/// # Brazilian Portuguese edition (the default locale)
/// gnews_batch "reforma tributária" -s 2019-01-01 -e 2023-12-20 -o ./out
///
/// # US English edition
/// gnews_batch "tax reform" -s 2024-01-01 -e 2024-03-01 --hl en-US --gl US --ceid US:en
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search query sent to Google News
    pub query: String,

    /// Start of the date range (inclusive), YYYY-MM-DD
    #[arg(short, long)]
    pub start_date: NaiveDate,

    /// End of the date range, YYYY-MM-DD
    #[arg(short, long)]
    pub end_date: NaiveDate,

    /// Directory the CSV file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Feed interface language (`hl` parameter)
    #[arg(long, default_value = "pt-BR")]
    pub hl: String,

    /// Feed country (`gl` parameter)
    #[arg(long, default_value = "BR")]
    pub gl: String,

    /// Feed country/language edition (`ceid` parameter)
    #[arg(long, default_value = "BR:pt")]
    pub ceid: String,
}
