//! CSV export.
//!
//! Records are serialized with the `csv` crate and the whole file is written
//! at once, prefixed with a UTF-8 BOM so spreadsheet software detects the
//! encoding (the usual failure mode for the accented Portuguese headers).
//!
//! The file name is derived from the query and the date range:
//! `{query}_{start}_to_{end}.csv`, spaces replaced by underscores.

use crate::models::NewsRecord;
use chrono::NaiveDate;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Derive the export file name from the query and range.
pub fn csv_file_name(query: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!("{query}_{start}_to_{end}.csv").replace(' ', "_")
}

/// Serialize all records and write them under `output_dir`.
///
/// The header row is emitted even when there are no records. Returns the
/// path of the written file.
#[instrument(level = "info", skip(records), fields(rows = records.len()))]
pub async fn write_records(
    records: &[NewsRecord],
    query: &str,
    start: NaiveDate,
    end: NaiveDate,
    output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(output_dir).join(csv_file_name(query, start, end));

    let mut buf = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        writer.write_record(NewsRecord::CSV_HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }

    info!(path = %path.display(), "Writing CSV export");
    fs::write(&path, buf).await?;
    info!(path = %path.display(), "Wrote CSV export");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample() -> NewsRecord {
        NewsRecord {
            title: "Reforma avança - Folha".to_string(),
            outlet: "Folha".to_string(),
            summary: "Reforma avança".to_string(),
            summary_raw: "<a href=\"https://x\">Reforma avança</a>".to_string(),
            link: "https://news.google.com/articles/x".to_string(),
            published: "2023-12-20".to_string(),
        }
    }

    #[test]
    fn test_csv_file_name_replaces_spaces() {
        let name = csv_file_name(
            "reforma tributária",
            date("2019-01-01"),
            date("2023-12-20"),
        );
        assert_eq!(name, "reforma_tributária_2019-01-01_to_2023-12-20.csv");
    }

    #[tokio::test]
    async fn test_write_records_prefixes_bom_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_records(
            &[sample()],
            "reforma",
            date("2023-12-01"),
            date("2023-12-31"),
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), NewsRecord::CSV_HEADER.join(","));
        let row = lines.next().unwrap();
        assert!(row.contains("Reforma avança - Folha"));
        assert!(row.ends_with("2023-12-20"));
    }

    #[tokio::test]
    async fn test_empty_export_still_carries_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_records(
            &[],
            "reforma",
            date("2023-12-01"),
            date("2023-12-31"),
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text.trim_end(), NewsRecord::CSV_HEADER.join(","));
    }
}
