use clap::Parser;

use sitesweep::config::{CliConfig, Config};
use sitesweep::core::constants::prompt;
use sitesweep::core::error::Result;
use sitesweep::discovery::{Scanner, html_files_in, present_images};
use sitesweep::logging;
use sitesweep::prune;
use sitesweep::ui::output::{self, SweepMetadata};
use sitesweep::ui::{Cli, ConfirmationSource, TerminalPrompt, cli_to_config};

use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match run_sweep_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main sweep logic extracted from main() for testing.
///
/// Phases run strictly in sequence: scan HTML, list uploads, compute the
/// difference, then either stop (nothing unused), delete after an
/// affirmative answer, or write the unused list. Every normal path exits 0.
fn run_sweep_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);

    let site_dir = PathBuf::from(&cli_config.dir);
    let uploads_dir = resolve_uploads_dir(&site_dir, config.uploads_dir());

    if !cli_config.quiet {
        output::display_scan_header(&site_dir, &uploads_dir);
    }

    // Phase 1: scan HTML files for referenced images
    let html_files = html_files_in(&site_dir)?;
    let scanner = Scanner::default();
    let (used, stats) = scanner.used_images(&html_files);
    logging::log_scan_summary(&stats, used.len());

    // Phase 2: list images physically present in uploads
    let extensions = config.extension_set();
    let present = present_images(&uploads_dir, &extensions)?;
    logging::log_uploads_summary(present.len());

    if !cli_config.quiet {
        output::display_scan_errors(&stats.skipped);
        output::display_scan_summary(&SweepMetadata {
            files_scanned: stats.files_scanned,
            files_skipped: stats.files_skipped(),
            imgs_seen: stats.imgs_seen,
            used_count: used.len(),
            present_count: present.len(),
        });
    }

    // Phase 3: the difference, computed exactly once
    let unused = prune::unused_images(&present, &used);

    if unused.is_empty() {
        if !cli_config.quiet {
            output::display_all_used();
        }
        return Ok(0);
    }

    if !cli_config.quiet {
        output::display_unused_images(&unused);
        output::display_used_images(&used);
        output::display_deletion_warning(&uploads_dir);
    }

    // Phase 4: the confirmation gate
    let confirmed = if cli_config.dry_run {
        false
    } else if cli_config.assume_yes {
        true
    } else {
        let mut source = TerminalPrompt;
        source.confirm(prompt::QUESTION)?
    };

    if confirmed {
        let summary = prune::delete_images(&uploads_dir, &unused);
        if !cli_config.quiet {
            output::display_deletion_summary(&summary);
        }
        let log_path = prune::write_deletion_log(&site_dir, &summary)?;
        if !cli_config.quiet {
            output::display_log_saved(&log_path);
        }
    } else {
        let report_path = prune::write_unused_report(&site_dir, &unused)?;
        if !cli_config.quiet {
            output::display_declined(&report_path, cli_config.dry_run);
        }
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI
/// config (CLI takes precedence)
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Resolve the uploads directory under the site directory when relative
fn resolve_uploads_dir(site_dir: &Path, uploads_dir: &str) -> PathBuf {
    let path = Path::new(uploads_dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        site_dir.join(path)
    }
}
