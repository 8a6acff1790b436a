use super::ensure_parent_dir;
use crate::segments::Segment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Detector output for one frame or a sequence of frames.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SegmentInput {
    Frame(Vec<Segment>),
    Frames(Vec<Vec<Segment>>),
}

impl SegmentInput {
    /// Normalizes to a list of frames.
    pub fn into_frames(self) -> Vec<Vec<Segment>> {
        match self {
            SegmentInput::Frame(segs) => vec![segs],
            SegmentInput::Frames(frames) => frames,
        }
    }

    pub fn is_single_frame(&self) -> bool {
        matches!(self, SegmentInput::Frame(_))
    }
}

/// Drops segments with non-finite coordinates from every frame and returns
/// how many were removed.
pub fn retain_finite(frames: &mut [Vec<Segment>]) -> usize {
    let mut dropped = 0;
    for frame in frames.iter_mut() {
        let before = frame.len();
        frame.retain(Segment::is_finite);
        dropped += before - frame.len();
    }
    dropped
}

/// Reads detector output from a JSON file.
pub fn read_segments_file(path: &Path) -> Result<SegmentInput, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse segments {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}
