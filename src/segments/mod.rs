//! Raw line segments as produced by a Hough-style detector.
//!
//! A segment is just two endpoints; it carries no identity beyond its
//! coordinates, and duplicated detections are expected. This module provides
//! the value type plus the distance measure the bundler uses to decide
//! whether two detections describe the same physical line:
//!
//! - `point_segment_distance`: project a point onto the segment's supporting
//!   line, falling back to the nearer endpoint when the projection lands
//!   outside the segment.
//! - `segment_distance`: minimum of the four endpoint-to-segment distances,
//!   symmetric in its arguments.
//!
//! Zero-length segments report [`DEGENERATE_DISTANCE`] when measured against,
//! which keeps them from attracting other detections.

mod distance;
mod segment;

pub use distance::{point_segment_distance, segment_distance, DEGENERATE_DISTANCE};
pub use segment::{Segment, SegmentId};
