//! Unused-image resolution, deletion and reporting
//!
//! This module computes the present-minus-used set difference and carries
//! the deletion batch and its two report writers. Phase sequencing lives in
//! the `sitesweep` binary.

pub mod deleter;
pub mod report;

use rustc_hash::FxHashSet;

// Re-export commonly used items
pub use deleter::delete_images;
pub use report::{write_deletion_log, write_unused_report};

/// Compute the unused-image candidates: present minus used, sorted.
///
/// Plain set difference, computed exactly once per run, before the
/// confirmation gate. No fuzzy matching.
pub fn unused_images(present: &FxHashSet<String>, used: &FxHashSet<String>) -> Vec<String> {
    let mut unused: Vec<String> = present.difference(used).cloned().collect();
    unused.sort();
    unused
}
