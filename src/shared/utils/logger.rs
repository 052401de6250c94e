use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        // `try_init` so a logger installed by the host (or a test harness) wins
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("dynamo_catalog_lib", log::LevelFilter::Debug)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log catalog loads
    pub fn catalog_load(kind: &str, source: &str, count: Option<usize>) {
        match count {
            Some(count) => info!("Catalog: loaded {} {} from {}", count, kind, source),
            None => debug!("Catalog: loading {} from {}", kind, source),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, total: usize, results: Option<usize>) {
        match results {
            Some(r) => debug!("Search: '{}' matched {}/{} entries", query, r, total),
            None => debug!("Search: starting '{}' over {} entries", query, total),
        }
    }

    /// Log icon cascade steps
    pub fn icon_fallback(from: &str, to: Option<&str>) {
        match to {
            Some(next) => debug!("Icon: {} failed, trying {}", from, next),
            None => debug!("Icon: settled on placeholder {}", from),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}
