use crate::domain::model::{Dataset, OutputFormat, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn news_path(&self) -> &str;
    fn comments_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];

    fn compression_enabled(&self) -> bool {
        false
    }

    fn archive_filename(&self) -> &str {
        "analysis_output.zip"
    }

    fn report_filename(&self, format: OutputFormat) -> String {
        format.default_filename()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Dataset>;
    async fn transform(&self, data: Dataset) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<String>;
}
