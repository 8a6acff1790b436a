//! Point-to-segment and segment-to-segment distances.

use super::Segment;
use nalgebra::Point2;

/// Distance reported against a degenerate (zero-length) segment.
pub const DEGENERATE_DISTANCE: f64 = 9999.0;

/// Segments shorter than this are treated as degenerate.
const MIN_SEGMENT_LENGTH: f64 = 1e-8;

/// Projection parameters below this are clamped to the nearer endpoint.
const PROJECTION_EPS: f64 = 1e-5;

/// Distance from `point` to the finite segment `seg`.
///
/// The point is projected onto the infinite line through `seg`; when the
/// projection falls outside the segment the distance to the nearer endpoint
/// is returned instead.
pub fn point_segment_distance(point: [f64; 2], seg: &Segment) -> f64 {
    let len = seg.length();
    if len < MIN_SEGMENT_LENGTH {
        return DEGENERATE_DISTANCE;
    }

    let p = Point2::from(point);
    let a = Point2::from(seg.p0);
    let b = Point2::from(seg.p1);
    let ab = b - a;
    let u = (p - a).dot(&ab) / (len * len);

    if u < PROJECTION_EPS || u > 1.0 {
        let da = (p - a).norm();
        let db = (p - b).norm();
        da.min(db)
    } else {
        let foot = a + ab * u;
        (p - foot).norm()
    }
}

/// Symmetric distance between two segments: the smallest of the four
/// endpoint-to-segment distances.
pub fn segment_distance(a: &Segment, b: &Segment) -> f64 {
    let d1 = point_segment_distance(a.p0, b);
    let d2 = point_segment_distance(a.p1, b);
    let d3 = point_segment_distance(b.p0, a);
    let d4 = point_segment_distance(b.p1, a);
    d1.min(d2).min(d3).min(d4)
}
