use anyhow::Context;
use clap::Parser;
use comment_etl::config::toml_config::TomlConfig;
use comment_etl::core::export::{render_summary, render_table};
use comment_etl::core::ConfigProvider;
use comment_etl::utils::{logger, validation::Validate};
use comment_etl::{CommentPipeline, EtlEngine, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Comment analysis driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "etl-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    match (args.verbose, config.log_level()) {
        (false, Some(level)) => logger::init_cli_logger_with_level(level),
        (verbose, _) => logger::init_cli_logger(verbose),
    }

    tracing::info!("🚀 Starting TOML-based comment analysis");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let pipeline = CommentPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(run) => {
            println!("{}", render_table(&run.report.rows, 60));
            print!("{}", render_summary(&run.report.summary));
            tracing::info!("✅ Output saved to: {}", run.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("⚠️ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Pipeline: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("📰 Articles: {}", config.news_path());
    tracing::info!("💬 Comments: {}", config.comments_path());

    let formats: Vec<String> = config
        .output_formats()
        .iter()
        .map(|f| f.to_string())
        .collect();
    tracing::info!(
        "💾 Output: {} [{}]{}",
        config.output_path(),
        formats.join(", "),
        if config.compression_enabled() {
            format!(" -> {}", config.archive_filename())
        } else {
            String::new()
        }
    );
}
