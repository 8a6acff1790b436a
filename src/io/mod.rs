//! I/O helpers for the command-line tool.
//!
//! - `read_segments_file`: load detector output from JSON, either a single
//!   frame (`[[x1, y1, x2, y2], ...]`) or a list of frames.
//! - `retain_finite`: drop detections with NaN or infinite coordinates.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `overlay`: draw representative lines and intersections over an image.

mod json;
pub mod overlay;

pub use json::{read_segments_file, retain_finite, write_json_file, SegmentInput};

use std::fs;
use std::path::Path;

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
