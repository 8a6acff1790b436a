//! Bounded pairwise intersection of representative lines.
//!
//! Each pair of segments is extended to infinite lines and solved with
//! Cramer's rule. The solution is kept only if it lies inside both segments'
//! bounding boxes grown by `tolerance` on every side: merged detections rarely
//! end exactly at the corner they belong to, so a small overshoot is allowed.
//! The bound is exclusive, so a point exactly `tolerance` outside a box is
//! rejected.

use crate::segments::Segment;
use nalgebra::Matrix2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Pair counts above this are scanned in parallel.
const PARALLEL_PAIR_THRESHOLD: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectParams {
    /// Outward margin in pixels added to each segment's bounding box.
    pub tolerance: f64,
}

impl Default for IntersectParams {
    fn default() -> Self {
        Self { tolerance: 10.0 }
    }
}

/// Intersection of two lines, tagged with their indices (`lines[0] < lines[1]`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionPoint {
    pub point: [f64; 2],
    pub lines: [usize; 2],
}

#[inline]
fn det(a: [f64; 2], b: [f64; 2]) -> f64 {
    Matrix2::new(a[0], a[1], b[0], b[1]).determinant()
}

/// Intersection of the infinite lines through `a` and `b`, or `None` when the
/// lines are parallel (including coincident) or the point falls outside
/// either segment's tolerance box.
pub fn line_intersection(a: &Segment, b: &Segment, tolerance: f64) -> Option<[f64; 2]> {
    let [x1, y1, x2, y2] = a.coords();
    let [x3, y3, x4, y4] = b.coords();

    let xdiff = [x1 - x2, x3 - x4];
    let ydiff = [y1 - y2, y3 - y4];
    let div = det(xdiff, ydiff);
    if div == 0.0 {
        return None;
    }

    let d = [det([x1, y1], [x2, y2]), det([x3, y3], [x4, y4])];
    let x = det(d, xdiff) / div;
    let y = det(d, ydiff) / div;
    let point = [x, y];

    if within_tolerance(a, point, tolerance) && within_tolerance(b, point, tolerance) {
        Some(point)
    } else {
        None
    }
}

fn within_tolerance(seg: &Segment, p: [f64; 2], tolerance: f64) -> bool {
    let [min_x, min_y, max_x, max_y] = seg.bbox();
    p[0] > min_x - tolerance
        && p[0] < max_x + tolerance
        && p[1] > min_y - tolerance
        && p[1] < max_y + tolerance
}

/// Intersects every unordered pair of distinct lines.
///
/// Results are ordered by `(i, j)`. A line is never intersected with itself.
pub fn intersect_lines(lines: &[Segment], params: &IntersectParams) -> Vec<IntersectionPoint> {
    let n = lines.len();
    let pairs = n * n.saturating_sub(1) / 2;
    let tol = params.tolerance;
    let row = |i: usize| -> Vec<IntersectionPoint> {
        ((i + 1)..n)
            .filter_map(|j| {
                line_intersection(&lines[i], &lines[j], tol).map(|point| IntersectionPoint {
                    point,
                    lines: [i, j],
                })
            })
            .collect()
    };
    if pairs >= PARALLEL_PAIR_THRESHOLD {
        (0..n).into_par_iter().flat_map_iter(row).collect()
    } else {
        (0..n).flat_map(row).collect()
    }
}
