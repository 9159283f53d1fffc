use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::logging;

/// List the image files physically present directly inside the uploads
/// directory.
///
/// A missing directory is not an error: the tool must be runnable against a
/// site that has no uploads yet, so that case returns an empty set. Only
/// regular files whose lower-cased extension is in `extensions` are
/// collected, by bare filename.
pub fn present_images(uploads_dir: &Path, extensions: &FxHashSet<String>) -> Result<FxHashSet<String>> {
    let mut images = FxHashSet::default();

    if !uploads_dir.exists() {
        logging::log_warning(&format!(
            "Uploads directory not found: {}",
            uploads_dir.display()
        ));
        return Ok(images);
    }

    for entry in fs::read_dir(uploads_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if extensions.contains(&ext.to_lowercase()) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    images.insert(name.to_string());
                }
            }
        }
    }

    Ok(images)
}
