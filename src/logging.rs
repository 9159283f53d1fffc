use log::{debug, error, info, warn};

use crate::core::types::ScanStats;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log per-file scan progress
pub fn log_scan_file(file_name: &str, imgs_found: usize) {
    debug!("{file_name}: {imgs_found} <img> tag(s)");
}

/// Log an accepted image reference
pub fn log_used_image(name: &str, src: &str) {
    debug!("  + {name} (src: {src})");
}

/// Log a src value that matched no uploads-path pattern
pub fn log_ignored_src(src: &str) {
    debug!("  - ignored src: '{src}'");
}

/// Log scan completion
pub fn log_scan_summary(stats: &ScanStats, used_count: usize) {
    info!(
        "Scanned {} file(s), skipped {}, {} <img> tag(s), {} unique referenced image(s)",
        stats.files_scanned,
        stats.files_skipped(),
        stats.imgs_seen,
        used_count
    );
}

/// Log uploads listing completion
pub fn log_uploads_summary(present_count: usize) {
    info!("{present_count} image file(s) present in uploads");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
