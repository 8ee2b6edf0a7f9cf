use crate::core::{Pipeline, Report};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Outcome of one successful run.
#[derive(Debug, Clone)]
pub struct EtlRun {
    pub output_path: String,
    pub report: Report,
    pub warnings: Vec<String>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<EtlRun> {
        tracing::info!("Starting ETL process...");

        // Extract
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Extracted {} articles and {} comments",
            data.articles.len(),
            data.comments.len()
        );
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(data).await?;
        tracing::info!("🔄 Built report with {} rows", result.report.rows.len());
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(&result).await?;
        tracing::info!("💾 Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(EtlRun {
            output_path,
            report: result.report,
            warnings: result.warnings,
        })
    }
}
