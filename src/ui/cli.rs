// Command-line interface definitions and parsing for sitesweep

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Core Options
    /// Site directory containing the HTML files
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        default_value = ".",
        help_heading = "Core Options"
    )]
    pub dir: String,

    /// Uploads directory, resolved under the site directory when relative
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub uploads_dir: Option<String>,

    // Deletion
    /// Delete unused images without asking for confirmation
    #[arg(short = 'y', long, help_heading = "Deletion")]
    pub yes: bool,

    /// List unused images and write the report without deleting anything
    #[arg(long, conflicts_with = "yes", help_heading = "Deletion")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert the derive-based CLI into the CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        dir: cli.dir.clone(),
        uploads_dir: cli.uploads_dir.clone(),
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
