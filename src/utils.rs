//! Field-extraction helpers and file system validation.
//!
//! This module holds the per-entry text transformations applied to feed
//! items:
//! - Outlet derivation from the Google News title suffix
//! - Anchor-tag inner-text extraction for summaries
//! - Feed timestamp reformatting to `YYYY-MM-DD`
//!
//! plus the output-directory probe used at startup.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Placeholder stored as the raw summary when a feed item carries no
/// description.
pub const SUMMARY_PLACEHOLDER: &str = "Resumo não disponível";

/// First anchor tag in a summary snippet; group 1 is its inner text.
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<a [^>]*>(.*?)</a>").expect("anchor pattern is valid")
});

/// A feed summary contained no anchor tag to extract text from.
///
/// Google News summaries are expected to be a small HTML snippet whose first
/// anchor holds the readable headline text. When that assumption breaks the
/// run aborts rather than exporting a row with markup in the clean column.
#[derive(Debug)]
pub struct NoAnchorInSummary {
    summary: String,
}

impl fmt::Display for NoAnchorInSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "feed summary contains no anchor tag: {}",
            truncate_for_log(&self.summary, 120)
        )
    }
}

impl Error for NoAnchorInSummary {}

/// Derive the outlet name from a Google News title.
///
/// Google appends the source as a `- Outlet` suffix; the text after the
/// last `-` is taken and trimmed. Titles without a `-` come back whole.
pub fn outlet_from_title(title: &str) -> String {
    title.rsplit('-').next().unwrap_or(title).trim().to_string()
}

/// Extract the inner text of the first anchor tag in a raw summary.
pub fn clean_summary(summary_raw: &str) -> Result<String, NoAnchorInSummary> {
    ANCHOR_RE
        .captures(summary_raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| NoAnchorInSummary {
            summary: summary_raw.to_string(),
        })
}

/// Reformat an RFC 2822 feed timestamp (`Fri, 06 Jul 2023 08:00:00 GMT`)
/// to `YYYY-MM-DD`. Timestamps that do not parse are returned unchanged.
pub fn format_pub_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw) {
        Ok(parsed) => parsed.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes with an ellipsis and byte count
/// appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then probes it with a throwaway file.
/// Run before any fetch so a bad output path fails the run up front.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Small sync write; simpler error surface than the async API here.
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlet_from_title() {
        assert_eq!(
            outlet_from_title("Some Headline - Outlet Name"),
            "Outlet Name"
        );
    }

    #[test]
    fn test_outlet_uses_last_hyphen() {
        assert_eq!(
            outlet_from_title("Drop-in centers expand - City Gazette"),
            "City Gazette"
        );
    }

    #[test]
    fn test_outlet_without_hyphen_is_whole_title() {
        assert_eq!(outlet_from_title("  Headline only  "), "Headline only");
    }

    #[test]
    fn test_clean_summary_extracts_anchor_text() {
        let cleaned = clean_summary("<a href='x'>Clean text</a>").unwrap();
        assert_eq!(cleaned, "Clean text");
    }

    #[test]
    fn test_clean_summary_takes_first_anchor() {
        let raw = "<a href='x'>First</a> e <a href='y'>Second</a>";
        assert_eq!(clean_summary(raw).unwrap(), "First");
    }

    #[test]
    fn test_clean_summary_without_anchor_is_an_error() {
        let err = clean_summary("plain text, no markup").unwrap_err();
        assert!(err.to_string().contains("no anchor tag"));
    }

    #[test]
    fn test_placeholder_summary_has_no_anchor() {
        assert!(clean_summary(SUMMARY_PLACEHOLDER).is_err());
    }

    #[test]
    fn test_format_pub_date_rfc2822() {
        assert_eq!(
            format_pub_date("Thu, 06 Jul 2023 08:00:00 GMT"),
            "2023-07-06"
        );
        assert_eq!(
            format_pub_date("Wed, 20 Dec 2023 12:30:00 +0000"),
            "2023-12-20"
        );
    }

    #[test]
    fn test_format_pub_date_falls_back_to_raw() {
        assert_eq!(format_pub_date("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_pub_date("2023-07-06T08:00:00Z"), "2023-07-06T08:00:00Z");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }
}
