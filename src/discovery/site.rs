use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::extensions;
use crate::core::error::Result;

/// Enumerate the `.html` files directly inside `dir`, sorted by name.
///
/// Only direct children are considered; nested directories are not scanned.
/// Failure to read the directory itself is unrecoverable and propagates.
pub fn html_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if ext.eq_ignore_ascii_case(extensions::HTML) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
