#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bundler;
pub mod diagnostics;
pub mod intersect;
pub mod segments;

// Building blocks of the pipeline, exposed for tools and tests.
pub mod angle;
pub mod bundling;

// Tool support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: bundler + results.
pub use crate::bundler::{intersect, process_segments, BundlerParams, HoughBundler};
pub use crate::diagnostics::BundleReport;
pub use crate::intersect::{IntersectParams, IntersectionPoint};
pub use crate::segments::Segment;

// Threshold types.
pub use crate::bundling::BundlingParams;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use hough_bundler::prelude::*;
///
/// let raw: Vec<Segment> = vec![
///     Segment::from([0, 0, 10, 0]),
///     Segment::from([0, 1, 10, 1]),
///     Segment::from([5, -5, 5, 5]),
/// ];
/// let bundler = HoughBundler::new(BundlerParams::default());
/// let report = bundler.process(&raw);
/// assert_eq!(report.lines.len(), 2);
/// assert_eq!(report.intersections.len(), 1);
/// ```
pub mod prelude {
    pub use crate::{BundleReport, BundlerParams, HoughBundler, Segment};
}
