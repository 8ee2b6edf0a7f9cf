use crate::core::export::{encode, to_zip};
use crate::core::parser::{load_articles, load_comments, ARTICLES_DOCUMENT, COMMENTS_DOCUMENT};
use crate::core::{analyze, ConfigProvider, Dataset, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};
use chrono::Utc;
use std::path::Path;

/// Reads the articles and comments documents, aggregates them and writes the
/// report in every configured format.
pub struct CommentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CommentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// 讀取失敗時回傳空內容並記下警告，不中斷流程
    async fn read_source(&self, document: &str, path: &str, warnings: &mut Vec<String>) -> Vec<u8> {
        tracing::debug!("Reading {} file from: {}", document, path);
        match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("⚠️ Could not read {} file '{}': {}", document, path, e);
                warnings.push(format!("Failed to read {} file '{}': {}", document, path, e));
                Vec::new()
            }
        }
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CommentPipeline<S, C> {
    async fn extract(&self) -> Result<Dataset> {
        let mut warnings = Vec::new();

        let news_bytes = self
            .read_source(ARTICLES_DOCUMENT, self.config.news_path(), &mut warnings)
            .await;
        let comment_bytes = self
            .read_source(COMMENTS_DOCUMENT, self.config.comments_path(), &mut warnings)
            .await;

        let articles = load_articles(&news_bytes);
        let comments = load_comments(&comment_bytes);
        warnings.extend(articles.error);
        warnings.extend(comments.error);

        Ok(Dataset {
            articles: articles.records,
            comments: comments.records,
            warnings,
        })
    }

    async fn transform(&self, data: Dataset) -> Result<TransformResult> {
        if data.articles.is_empty() || data.comments.is_empty() {
            let mut message = format!(
                "loaded {} articles and {} comments; both files need a header row and at least one record",
                data.articles.len(),
                data.comments.len()
            );
            for warning in &data.warnings {
                message.push_str("; ");
                message.push_str(warning);
            }
            return Err(EtlError::InsufficientData { message });
        }

        let report = analyze(&data.articles, &data.comments);
        tracing::debug!(
            "Report has {} rows, {} without comments",
            report.rows.len(),
            report.summary.articles_without_comments
        );

        Ok(TransformResult {
            report,
            warnings: data.warnings,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let generated_at = Utc::now();
        let mut files = Vec::new();

        for format in self.config.output_formats() {
            let data = encode(&result.report, *format, generated_at)?;
            files.push((self.config.report_filename(*format), data));
        }

        if self.config.compression_enabled() {
            let archive = to_zip(&files)?;
            let path = self.output_file(self.config.archive_filename());
            tracing::debug!(
                "Writing ZIP archive with {} files ({} bytes) to {}",
                files.len(),
                archive.len(),
                path
            );
            self.storage.write_file(&path, &archive).await?;
            return Ok(path);
        }

        for (name, data) in &files {
            let path = self.output_file(name);
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
