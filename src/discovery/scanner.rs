use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Node, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::types::ScanStats;
use crate::logging;

/// Ordered uploads-path matchers, tried first to last against a lower-cased
/// `src` value with search semantics. A value matching none of them is
/// silently ignored.
static UPLOAD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/uploads/",     // absolute: /uploads/image.jpg
        r"uploads/",      // bare: uploads/image.jpg
        r"\\uploads\\",   // backslash variant
        r"\.?/?uploads/", // ./uploads/ and ../uploads/
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Failed to compile uploads-path pattern"))
    .collect()
});

/// Extract the referenced image basename from an `<img>` src value.
///
/// Matching is case-insensitive; the returned basename keeps the original
/// casing. The final path segment is taken after splitting on both `/` and
/// `\`; an empty segment yields `None`.
pub fn upload_basename(src: &str) -> Option<String> {
    let lowered = src.to_ascii_lowercase();
    UPLOAD_PATTERNS.iter().find(|p| p.is_match(&lowered))?;

    let name = src.rsplit(['/', '\\']).next().unwrap_or_default();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[derive(Default, Debug)]
pub struct Scanner {}

impl Scanner {
    /// Scan HTML files and collect the basenames of referenced uploads
    /// images.
    ///
    /// The used-image set only grows while scanning. Per-file read errors
    /// are logged, recorded in the stats, and never abort the scan.
    pub fn used_images(&self, paths: &[PathBuf]) -> (FxHashSet<String>, ScanStats) {
        let mut used = FxHashSet::default();
        let mut stats = ScanStats::default();

        for path in paths {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            match Self::img_srcs(path) {
                Ok(srcs) => {
                    logging::log_scan_file(&file_name, srcs.len());
                    stats.files_scanned += 1;
                    stats.imgs_seen += srcs.len();

                    for src in srcs {
                        match upload_basename(&src) {
                            Some(name) => {
                                logging::log_used_image(&name, &src);
                                used.insert(name);
                            }
                            None => logging::log_ignored_src(&src),
                        }
                    }
                }
                Err(err) => {
                    logging::log_warning(&format!("Could not process {file_name}: {err}"));
                    stats.skipped.push((file_name, err.to_string()));
                }
            }
        }

        (used, stats)
    }

    /// Parse one HTML file and return every `<img>` src attribute value.
    ///
    /// A missing src attribute is read as the empty string. The parser is
    /// permissive; malformed markup never fails here, only I/O does.
    fn img_srcs(path: &Path) -> io::Result<Vec<String>> {
        let html = fs::read_to_string(path)?;
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut srcs = Vec::new();
        Self::collect_img_srcs(&dom.document, &mut srcs);
        Ok(srcs)
    }

    fn collect_img_srcs(node: &Rc<Node>, srcs: &mut Vec<String>) {
        if let NodeData::Element {
            ref name,
            ref attrs,
            ..
        } = node.data
        {
            // html5ever lower-cases tag and attribute names while parsing
            if name.local.as_ref() == "img" {
                let src = attrs
                    .borrow()
                    .iter()
                    .find(|attr| attr.name.local.as_ref() == "src")
                    .map(|attr| attr.value.to_string())
                    .unwrap_or_default();
                srcs.push(src);
            }
        }

        for child in node.children.borrow().iter() {
            Self::collect_img_srcs(child, srcs);
        }
    }
}
