//! Angle utilities used to bucket segments by orientation.
//!
//! Orientations are unsigned: the angle between a segment and the horizontal
//! axis folded into `[0, 90]` degrees, so the direction in which a segment's
//! endpoints are listed does not matter.

use crate::segments::Segment;
use serde::{Deserialize, Serialize};

/// Orientations strictly above this angle (degrees) are vertical-leaning.
pub const VERTICAL_THRESHOLD_DEG: f64 = 45.0;

/// Absolute angle in degrees between `seg` and the horizontal axis, in `[0, 90]`.
///
/// A zero-length segment yields `0.0` (`atan2(0, 0) == 0`).
#[inline]
pub fn orientation_deg(seg: &Segment) -> f64 {
    let dx = (seg.p1[0] - seg.p0[0]).abs();
    let dy = (seg.p1[1] - seg.p0[1]).abs();
    dy.atan2(dx).to_degrees()
}

/// Unsigned difference between two orientations in degrees.
///
/// Orientations are already folded into `[0, 90]`, so no wrap-around is
/// applied: 1° and 89° differ by 88°.
#[inline]
pub fn orientation_difference(a_deg: f64, b_deg: f64) -> f64 {
    (a_deg - b_deg).abs()
}

/// Orientation bucket a segment is clustered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Orientation in `[0, 45]`.
    Horizontal,
    /// Orientation in `(45, 90]`.
    Vertical,
}

impl Orientation {
    /// Buckets an orientation angle with a hard 45° threshold.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        if deg > VERTICAL_THRESHOLD_DEG && deg <= 90.0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    #[inline]
    pub fn classify(seg: &Segment) -> Self {
        Self::from_degrees(orientation_deg(seg))
    }

    /// Coordinate index (0 = x, 1 = y) along which segments of this bucket extend.
    #[inline]
    pub fn dominant_axis(self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }
}
