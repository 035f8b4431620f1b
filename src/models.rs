//! Data model for exported news records.
//!
//! A [`NewsRecord`] is one row of the final CSV. The serde renames carry the
//! Portuguese column headers used by the export; field order here is the
//! column order in the file.

use serde::Serialize;

/// One news entry extracted from a Google News search feed.
///
/// Records are kept in feed order within a window and concatenated across
/// windows. No identity is attached: the same story may appear twice when
/// adjacent windows overlap on a boundary date.
#[derive(Debug, Clone, Serialize)]
pub struct NewsRecord {
    /// Full feed title, including the trailing `- Outlet` suffix Google appends.
    #[serde(rename = "Título")]
    pub title: String,
    /// Outlet name, the text after the last `-` in the title, trimmed.
    #[serde(rename = "Veículo")]
    pub outlet: String,
    /// Summary with markup stripped: the inner text of the first anchor tag
    /// in the raw summary.
    #[serde(rename = "Resumo")]
    pub summary: String,
    /// The summary exactly as it appeared in the feed (an HTML snippet).
    #[serde(rename = "Resumo bruto")]
    pub summary_raw: String,
    /// Article link, copied verbatim from the feed item.
    #[serde(rename = "Link")]
    pub link: String,
    /// Publication date as `YYYY-MM-DD`, or the raw feed timestamp when it
    /// did not parse as RFC 2822.
    #[serde(rename = "Data")]
    pub published: String,
}

impl NewsRecord {
    /// CSV header row. Must stay in sync with the serde renames above; the
    /// writer emits it explicitly so empty exports still carry a header.
    pub const CSV_HEADER: [&'static str; 6] =
        ["Título", "Veículo", "Resumo", "Resumo bruto", "Link", "Data"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewsRecord {
        NewsRecord {
            title: "Reforma avança no Senado - Folha".to_string(),
            outlet: "Folha".to_string(),
            summary: "Reforma avança no Senado".to_string(),
            summary_raw: "<a href=\"https://example.com\">Reforma avança no Senado</a>"
                .to_string(),
            link: "https://news.google.com/articles/abc".to_string(),
            published: "2023-07-06".to_string(),
        }
    }

    #[test]
    fn test_serde_header_matches_const() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample()).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header_line = out.lines().next().unwrap();
        assert_eq!(header_line, NewsRecord::CSV_HEADER.join(","));
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample()).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("Reforma avança no Senado - Folha,Folha,"));
        assert!(row.ends_with("2023-07-06"));
    }
}
