use std::fmt;

/// Statistics gathered while scanning HTML files for image references.
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    /// Files read and parsed successfully
    pub files_scanned: usize,
    /// Total `<img>` tags seen across all parsed files
    pub imgs_seen: usize,
    /// Files skipped on error, with the error text
    pub skipped: Vec<(String, String)>,
}

impl ScanStats {
    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Outcome of one deletion batch over the unused-image candidates.
///
/// A candidate ends up in exactly one bucket: deleted, already gone at
/// deletion time, or failed with the captured error text. A missing file is
/// a benign outcome, never an error.
#[derive(Debug, Default, Clone)]
pub struct DeletionSummary {
    pub deleted: Vec<String>,
    pub missing: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl DeletionSummary {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for DeletionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} deleted, {} missing, {} failed",
            self.deleted.len(),
            self.missing.len(),
            self.failed.len()
        )
    }
}

/// Result of one replacer run: the files rewritten, in processing order.
#[derive(Debug, Default, Clone)]
pub struct ReplaceSummary {
    pub modified: Vec<String>,
}

impl ReplaceSummary {
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }
}
