use std::fs;
use std::path::Path;

use crate::core::types::DeletionSummary;
use crate::logging;

/// Delete the candidate files from the uploads directory.
///
/// Each candidate resolves to one of three outcomes: deleted, missing
/// (vanished between listing and deletion, recorded but benign), or failed
/// with the error text. A failure never aborts the batch.
pub fn delete_images(uploads_dir: &Path, candidates: &[String]) -> DeletionSummary {
    let mut summary = DeletionSummary::default();

    for name in candidates {
        let path = uploads_dir.join(name);

        if !path.exists() {
            logging::log_warning(&format!("Already gone: {name}"));
            summary.missing.push(name.clone());
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => summary.deleted.push(name.clone()),
            Err(err) => {
                logging::log_error(&format!("Could not delete {name}"), Some(&err));
                summary.failed.push((name.clone(), err.to_string()));
            }
        }
    }

    summary
}
