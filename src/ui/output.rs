//! Output formatting and display logic for sitesweep

use rustc_hash::FxHashSet;
use std::path::Path;

use crate::core::constants::display;
use crate::core::types::DeletionSummary;
use crate::ui::color::{Colors, colorize};

/// Counts shown in the scan summary section
#[derive(Debug, Clone)]
pub struct SweepMetadata {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub imgs_seen: usize,
    pub used_count: usize,
    pub present_count: usize,
}

/// Print the scan header: where HTML is read and where images live
pub fn display_scan_header(site_dir: &Path, uploads_dir: &Path) {
    println!(
        "{} Scanning HTML files in: {}",
        display::SCAN_EMOJI,
        colorize(&site_dir.display().to_string(), Colors::BRIGHT_WHITE)
    );
    println!(
        "{} Checking images in: {}",
        display::FOLDER_EMOJI,
        colorize(&uploads_dir.display().to_string(), Colors::BRIGHT_WHITE)
    );
}

/// Print one line per file skipped during the HTML scan
pub fn display_scan_errors(skipped: &[(String, String)]) {
    for (file_name, reason) in skipped {
        println!(
            "{} Could not process {}: {}",
            display::WARNING_EMOJI,
            colorize(file_name, Colors::BRIGHT_WHITE),
            reason
        );
    }
}

/// Print the post-scan counts
pub fn display_scan_summary(metadata: &SweepMetadata) {
    println!(
        "{} Scanned {} file(s) ({} skipped), {} <img> tag(s)",
        display::STATS_EMOJI,
        metadata.files_scanned,
        metadata.files_skipped,
        metadata.imgs_seen
    );
    println!(
        "{} {} unique referenced image(s), {} image file(s) in uploads",
        display::STATS_EMOJI,
        metadata.used_count,
        metadata.present_count
    );
}

/// Print the deletion candidates as a numbered list
pub fn display_unused_images(unused: &[String]) {
    println!(
        "\n{} Found {} unused image(s):",
        display::TRASH_EMOJI,
        colorize(&unused.len().to_string(), Colors::YELLOW)
    );
    for (i, name) in unused.iter().enumerate() {
        println!("{:4}. {}", i + 1, name);
    }
}

/// Print the referenced images, sorted, as a numbered list
pub fn display_used_images(used: &FxHashSet<String>) {
    let mut names: Vec<&String> = used.iter().collect();
    names.sort();

    println!(
        "\n{} Referenced images ({}):",
        display::SUCCESS_EMOJI,
        names.len()
    );
    for (i, name) in names.iter().enumerate() {
        println!("{:4}. {}", i + 1, name);
    }
}

/// Print the nothing-to-do outcome
pub fn display_all_used() {
    println!(
        "\n{} All images in the uploads directory are referenced!",
        display::SUCCESS_EMOJI
    );
}

/// Print the pre-confirmation warning
pub fn display_deletion_warning(uploads_dir: &Path) {
    println!(
        "\n{} These files will be {} from {}.",
        display::WARNING_EMOJI,
        colorize("permanently deleted", Colors::RED),
        uploads_dir.display()
    );
}

/// Print the per-outcome counts after a deletion batch
pub fn display_deletion_summary(summary: &DeletionSummary) {
    println!("\n{} Deletion summary:", display::STATS_EMOJI);
    println!(
        "   {} Deleted: {}",
        display::SUCCESS_EMOJI,
        colorize(&summary.deleted_count().to_string(), Colors::GREEN)
    );
    if !summary.missing.is_empty() {
        println!(
            "   {} Already gone: {}",
            display::WARNING_EMOJI,
            summary.missing.len()
        );
    }
    if summary.has_failures() {
        println!(
            "   {} Failed: {}",
            display::ERROR_EMOJI,
            colorize(&summary.failed.len().to_string(), Colors::RED)
        );
        for (name, reason) in &summary.failed {
            println!("      - {name}: {reason}");
        }
    }
}

/// Print where the deletion log was written
pub fn display_log_saved(path: &Path) {
    println!("{} Log saved to: {}", display::SAVE_EMOJI, path.display());
}

/// Print the declined outcome and where the unused list was written
pub fn display_declined(path: &Path, dry_run: bool) {
    if dry_run {
        println!("\n{} Dry run: nothing was deleted.", display::WARNING_EMOJI);
    } else {
        println!("\n{} Deletion cancelled.", display::ERROR_EMOJI);
    }
    println!(
        "{} Unused list saved to: {}",
        display::SAVE_EMOJI,
        path.display()
    );
}
