//! Google News RSS search scraper.
//!
//! Fetches one search feed per date window. The feed URL embeds the
//! percent-encoded query together with `after:`/`before:` date bounds and
//! the locale parameters:
//!
//! ```text
//! https://news.google.com/rss/search?q=<query>+after:<start>+before:<end>&hl=pt-BR&gl=BR&ceid=BR:pt
//! ```
//!
//! The response is standard RSS 2.0. Titles carry the outlet as a trailing
//! `- Outlet` suffix and descriptions are HTML snippets whose first anchor
//! holds the readable summary text.

use crate::models::NewsRecord;
use crate::utils::{clean_summary, format_pub_date, outlet_from_title, SUMMARY_PLACEHOLDER};
use chrono::NaiveDate;
use reqwest::Client;
use rss::Channel;
use std::error::Error;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Production feed endpoint.
pub const GOOGLE_NEWS_RSS_URL: &str = "https://news.google.com/rss/search";

/// Locale parameters appended to every feed request.
///
/// Defaults match the Brazilian Portuguese edition the tool was written for.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Interface language (`hl` parameter), e.g. `pt-BR`.
    pub hl: String,
    /// Country (`gl` parameter), e.g. `BR`.
    pub gl: String,
    /// Country/language edition (`ceid` parameter), e.g. `BR:pt`.
    pub ceid: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            hl: "pt-BR".to_string(),
            gl: "BR".to_string(),
            ceid: "BR:pt".to_string(),
        }
    }
}

/// The feed endpoint answered with a non-success HTTP status.
#[derive(Debug)]
pub struct FeedStatusError {
    status: u16,
    url: String,
}

impl fmt::Display for FeedStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feed request returned status {}: {}", self.status, self.url)
    }
}

impl Error for FeedStatusError {}

/// A feed item lacked a field the export depends on.
#[derive(Debug)]
pub struct MissingItemField {
    field: &'static str,
}

impl fmt::Display for MissingItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feed item is missing required field `{}`", self.field)
    }
}

impl Error for MissingItemField {}

/// Client for the Google News RSS search endpoint.
#[derive(Debug)]
pub struct GoogleNewsScraper {
    client: Client,
    base_url: String,
    locale: Locale,
}

impl GoogleNewsScraper {
    pub fn new(locale: Locale) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .user_agent(concat!(
                    "Mozilla/5.0 (compatible; gnews_batch/",
                    env!("CARGO_PKG_VERSION"),
                    ")"
                ))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: GOOGLE_NEWS_RSS_URL.to_string(),
            locale,
        }
    }

    /// Point the scraper at a different feed endpoint. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the search feed URL for one window. Whitespace in the query is
    /// percent-encoded (`%20`); the date bounds ride inside the `q` parameter.
    pub fn feed_url(&self, query: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}?q={}+after:{}+before:{}&hl={}&gl={}&ceid={}",
            self.base_url,
            urlencoding::encode(query),
            start,
            end,
            self.locale.hl,
            self.locale.gl,
            self.locale.ceid
        )
    }

    /// Fetch and extract one window's worth of records.
    ///
    /// An empty feed yields an empty vector, not an error. Network failures,
    /// non-success statuses, unparsable feeds and summaries without an anchor
    /// tag all propagate and abort the run.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_window(
        &self,
        query: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
        let url = self.feed_url(query, start, end);
        debug!(%url, "Fetching search feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Box::new(FeedStatusError {
                status: status.as_u16(),
                url,
            }));
        }

        let body = response.bytes().await?;
        let channel = Channel::read_from(&body[..])?;
        let records = records_from_channel(&channel)?;

        info!(
            count = records.len(),
            window_start = %start,
            window_end = %end,
            "Extracted records from search feed window"
        );
        Ok(records)
    }
}

/// Turn a parsed RSS channel into export records, in feed order.
fn records_from_channel(channel: &Channel) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let mut records = Vec::with_capacity(channel.items().len());
    for item in channel.items() {
        let title = item
            .title()
            .ok_or(MissingItemField { field: "title" })?
            .to_string();
        let link = item
            .link()
            .ok_or(MissingItemField { field: "link" })?
            .to_string();
        let pub_date = item
            .pub_date()
            .ok_or(MissingItemField { field: "pubDate" })?;
        let summary_raw = item
            .description()
            .unwrap_or(SUMMARY_PLACEHOLDER)
            .to_string();

        records.push(NewsRecord {
            outlet: outlet_from_title(&title),
            summary: clean_summary(&summary_raw)?,
            published: format_pub_date(pub_date),
            title,
            summary_raw,
            link,
        });
    }
    Ok(records)
}
