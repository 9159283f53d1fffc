use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::reports;
use crate::core::error::Result;
use crate::core::types::DeletionSummary;

/// Write the deletion log after a confirmed run.
///
/// The file name and wording are the tool's long-standing output contract;
/// any pre-existing log is overwritten. Returns the path written.
pub fn write_deletion_log(dir: &Path, summary: &DeletionSummary) -> Result<PathBuf> {
    let path = dir.join(reports::DELETION_LOG);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut content = String::new();
    content.push_str("=== LOG DE IMAGENS DELETADAS ===\n\n");
    content.push_str(&format!("Data/Hora: {timestamp}\n"));
    content.push_str(&format!(
        "Total de imagens deletadas: {}\n\n",
        summary.deleted_count()
    ));

    content.push_str("Imagens deletadas:\n");
    let mut deleted = summary.deleted.clone();
    deleted.sort();
    for name in &deleted {
        content.push_str(&format!("- {name}\n"));
    }

    if summary.has_failures() {
        content.push_str(&format!("\nErros na deleção ({}):\n", summary.failed.len()));
        for (name, reason) in &summary.failed {
            content.push_str(&format!("- {name}: {reason}\n"));
        }
    }

    fs::write(&path, content)?;
    Ok(path)
}

/// Write the unused-image list when deletion was declined.
///
/// Exactly the sorted filenames, one per line. Overwrites any previous
/// report. Returns the path written.
pub fn write_unused_report(dir: &Path, unused: &[String]) -> Result<PathBuf> {
    let path = dir.join(reports::UNUSED_LIST);

    let mut names = unused.to_vec();
    names.sort();

    let mut content = String::new();
    for name in &names {
        content.push_str(name);
        content.push('\n');
    }

    fs::write(&path, content)?;
    Ok(path)
}
