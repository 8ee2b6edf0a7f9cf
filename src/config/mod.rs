pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "comment-etl")]
#[command(about = "Rank news articles by comment count and average rating")]
pub struct CliConfig {
    /// Articles CSV (IdBerita, Headline, Content)
    #[arg(long)]
    pub news: String,

    /// Comments CSV (IdKomentar, IdBerita, Komentar, Rating)
    #[arg(long)]
    pub comments: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export formats: csv, tsv, json
    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<OutputFormat>,

    #[arg(long, help = "Bundle all exports into a single ZIP archive")]
    pub compress: bool,

    #[arg(long, default_value = "analysis_output.zip")]
    pub archive_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log elapsed time and memory per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, short, help = "Do not print the report table")]
    pub quiet: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn news_path(&self) -> &str {
        &self.news
    }

    fn comments_path(&self) -> &str {
        &self.comments
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    fn compression_enabled(&self) -> bool {
        self.compress
    }

    fn archive_filename(&self) -> &str {
        &self.archive_name
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_csv_file("news", &self.news)?;
        validation::validate_csv_file("comments", &self.comments)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty("formats", &self.formats)?;
        if self.compress {
            validation::validate_non_empty_string("archive_name", &self.archive_name)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::try_parse_from([
            "comment-etl",
            "--news",
            "berita.csv",
            "--comments",
            "komentar.csv",
            "--formats",
            "csv,json",
            "--compress",
        ])
        .unwrap();

        assert_eq!(config.formats, vec![OutputFormat::Csv, OutputFormat::Json]);
        assert_eq!(config.output_path, "./output");
        assert!(config.compression_enabled());
        assert_eq!(config.archive_filename(), "analysis_output.zip");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = CliConfig::try_parse_from([
            "comment-etl",
            "--news",
            "berita.csv",
            "--comments",
            "komentar.csv",
            "--formats",
            "xlsx",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_non_csv_inputs() {
        let config = CliConfig::try_parse_from([
            "comment-etl",
            "--news",
            "berita.xlsx",
            "--comments",
            "komentar.csv",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }
}
