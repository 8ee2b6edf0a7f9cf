use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn verbosity_directive(verbose: bool) -> &'static str {
    if verbose {
        "comment_etl=debug,info"
    } else {
        "comment_etl=info"
    }
}

// RUST_LOG 優先
fn filter_or(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

fn init_compact(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init_compact(filter_or(verbosity_directive(verbose)));
}

/// Uses a level such as `debug` or `warn` for this crate's events.
pub fn init_cli_logger_with_level(level: &str) {
    init_compact(filter_or(&format!("comment_etl={}", level)));
}

/// JSON 格式日誌，方便收集
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_or(verbosity_directive(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}
