use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A news item. `content` is carried through but never aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub headline: String,
    pub content: String,
}

/// A reader comment pointing at an article by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub article_id: String,
    pub text: String,
    pub rating: f64,
}

/// Ratings collected for one article id, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateEntry {
    ratings: Vec<f64>,
    count: usize,
}

impl AggregateEntry {
    pub fn push(&mut self, rating: f64) {
        self.ratings.push(rating);
        self.count += 1;
    }

    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean rating, or 0 for an entry with no ratings.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.ratings.iter().sum::<f64>() / self.count as f64
    }
}

/// One output line per input article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "ID Berita")]
    pub article_id: String,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Rata-rata Rating")]
    pub average_rating: f64,
    #[serde(rename = "Jumlah Komentar")]
    pub comment_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_articles: usize,
    pub total_comments: usize,
    pub articles_without_comments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub summary: SummaryStats,
}

/// Records produced by the extract phase. A document that could not be read
/// or parsed shows up as an empty list plus an entry in `warnings`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub articles: Vec<Article>,
    pub comments: Vec<Comment>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub report: Report,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    pub fn default_filename(&self) -> String {
        format!("report.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unsupported format: {}. Valid formats: csv, tsv, json",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_entry_keeps_count_in_step() {
        let mut entry = AggregateEntry::default();
        assert_eq!(entry.mean(), 0.0);

        entry.push(4.0);
        entry.push(2.0);
        assert_eq!(entry.count(), entry.ratings().len());
        assert_eq!(entry.ratings(), &[4.0, 2.0]);
        assert_eq!(entry.mean(), 3.0);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!(" json ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xlsx".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Tsv.default_filename(), "report.tsv");
    }

    #[test]
    fn test_report_row_uses_display_labels() {
        let row = ReportRow {
            article_id: "1".to_string(),
            headline: "A".to_string(),
            average_rating: 3.0,
            comment_count: 2,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["ID Berita"], "1");
        assert_eq!(json["Rata-rata Rating"], 3.0);
        assert_eq!(json["Jumlah Komentar"], 2);
    }
}
