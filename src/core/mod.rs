pub mod aggregator;
pub mod etl;
pub mod export;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod summary;

pub use crate::domain::model::{
    AggregateEntry, Article, Comment, Dataset, OutputFormat, Report, ReportRow, SummaryStats,
    TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

/// Runs aggregation, report building and summary over already parsed records.
pub fn analyze(articles: &[Article], comments: &[Comment]) -> Report {
    let aggregates = aggregator::aggregate(comments);
    let rows = report::build_report(articles, &aggregates);
    let summary = SummaryStats::compute(articles, comments, &rows);
    Report { rows, summary }
}
