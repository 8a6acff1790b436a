use serde::{Deserialize, Serialize};

/// Thresholds deciding whether two detections belong to the same line.
///
/// Both thresholds are strict: a pair merges only when the segment distance
/// is below `min_distance` and the orientation difference is below
/// `min_angle_deg`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlingParams {
    /// Maximum segment-to-segment distance in pixels (exclusive).
    pub min_distance: f64,
    /// Maximum orientation difference in degrees (exclusive).
    pub min_angle_deg: f64,
}

impl Default for BundlingParams {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            min_angle_deg: 2.0,
        }
    }
}

impl BundlingParams {
    pub fn new(min_distance: f64, min_angle_deg: f64) -> Self {
        Self {
            min_distance,
            min_angle_deg,
        }
    }

    /// Looser thresholds tuned for full-resolution court footage, where
    /// painted lines are several pixels wide and detections are fragmented.
    pub fn court() -> Self {
        Self::new(10.0, 5.0)
    }
}
