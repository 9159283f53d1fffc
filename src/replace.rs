use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::ReplaceSummary;
use crate::discovery::site::html_files_in;

/// Replace every occurrence of `needle` with `replacement` in each `.html`
/// file directly inside `dir`, rewriting changed files in place.
///
/// Files not containing the needle are left untouched. No backup is taken
/// before the overwrite; this is a one-shot manual tool. Read and write
/// errors propagate and terminate the run.
pub fn replace_in_dir(dir: &Path, needle: &str, replacement: &str) -> Result<ReplaceSummary> {
    let mut summary = ReplaceSummary::default();

    for path in html_files_in(dir)? {
        let contents = fs::read_to_string(&path)?;

        if contents.contains(needle) {
            let rewritten = contents.replace(needle, replacement);
            fs::write(&path, rewritten)?;

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            summary.modified.push(name);
        }
    }

    Ok(summary)
}
