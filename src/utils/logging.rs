//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the FairHub application.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must be held for the lifetime of the process so the
/// file writer keeps flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "fairhub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log application status changes
pub fn log_status_change(application_id: i64, old_status: &str, new_status: &str, changed_by: i64) {
    info!(
        application_id = application_id,
        old_status = old_status,
        new_status = new_status,
        changed_by = changed_by,
        "Application status changed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        "Admin action performed"
    );
}

/// Log blob store operations
pub fn log_blob_operation(hash: &str, operation: &str, size_bytes: u64) {
    info!(
        hash = hash,
        operation = operation,
        size_bytes = size_bytes,
        "Blob store operation"
    );
}
