//! Serializable per-frame report.

use crate::angle::Orientation;
use crate::intersect::IntersectionPoint;
use crate::segments::{Segment, SegmentId};
use serde::Serialize;

/// One merged cluster and the detections it absorbed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub orientation: Orientation,
    pub seed_orientation_deg: f64,
    pub members: Vec<SegmentId>,
    pub line: Segment,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub bundling_ms: f64,
    pub intersect_ms: f64,
    pub total_ms: f64,
}

/// Result of [`crate::HoughBundler::process`] for one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleReport {
    pub input_segments: usize,
    pub lines: Vec<Segment>,
    pub intersections: Vec<IntersectionPoint>,
    pub clusters: Vec<ClusterSummary>,
    pub timing: StageTiming,
}

impl BundleReport {
    /// Number of detections absorbed by clusters that merged more than one segment.
    pub fn merged_detections(&self) -> usize {
        self.clusters
            .iter()
            .filter(|c| c.members.len() > 1)
            .map(|c| c.members.len())
            .sum()
    }
}
