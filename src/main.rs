use clap::Parser;
use comment_etl::core::export::{render_summary, render_table};
use comment_etl::utils::{logger, validation::Validate};
use comment_etl::{CliConfig, CommentPipeline, EtlEngine, LocalStorage};

const MAX_HEADLINE_WIDTH: usize = 60;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting comment-etl CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let quiet = config.quiet;
    let monitor_enabled = config.monitor;
    let storage = LocalStorage::default();
    let pipeline = CommentPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(run) => {
            if !quiet {
                println!("{}", render_table(&run.report.rows, MAX_HEADLINE_WIDTH));
                print!("{}", render_summary(&run.report.summary));
            }
            tracing::info!("✅ Analysis completed, output saved to: {}", run.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("⚠️ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // Low severity (analysis skipped) exits 0
            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
