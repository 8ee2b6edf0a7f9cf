pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{
    analyze,
    etl::{EtlEngine, EtlRun},
    pipeline::CommentPipeline,
};
pub use crate::domain::model::{
    AggregateEntry, Article, Comment, OutputFormat, Report, ReportRow, SummaryStats,
};
pub use crate::utils::error::{EtlError, Result};
