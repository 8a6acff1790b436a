//! End-to-end bundling facade.
//!
//! [`HoughBundler`] owns the thresholds and runs the per-frame pipeline:
//! bucket and cluster raw detections, merge each cluster to one line, then
//! intersect the merged lines. Every call works on its own cluster state, so
//! one bundler can serve many frames, including in parallel via
//! [`HoughBundler::process_frames`].

use crate::bundling::{cluster_segments, merge_cluster, BundlingParams};
use crate::diagnostics::{BundleReport, ClusterSummary, StageTiming};
use crate::intersect::{intersect_lines, IntersectParams, IntersectionPoint};
use crate::segments::Segment;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Thresholds for both stages of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlerParams {
    pub bundling: BundlingParams,
    pub intersect: IntersectParams,
}

impl BundlerParams {
    /// Preset used on full-resolution court footage.
    pub fn court() -> Self {
        Self {
            bundling: BundlingParams::court(),
            intersect: IntersectParams::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HoughBundler {
    params: BundlerParams,
}

impl HoughBundler {
    pub fn new(params: BundlerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BundlerParams {
        &self.params
    }

    pub fn set_bundling(&mut self, bundling: BundlingParams) {
        self.params.bundling = bundling;
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.params.intersect.tolerance = tolerance;
    }

    /// Collapses raw detections into one representative line per cluster,
    /// horizontal lines first.
    pub fn process_segments(&self, segs: &[Segment]) -> Vec<Segment> {
        crate::bundling::bundle_segments(segs, &self.params.bundling)
    }

    /// Bounded pairwise intersections of `lines`.
    pub fn intersect(&self, lines: &[Segment]) -> Vec<IntersectionPoint> {
        intersect_lines(lines, &self.params.intersect)
    }

    /// Bundles one frame and intersects the result.
    pub fn process(&self, segs: &[Segment]) -> BundleReport {
        let t0 = Instant::now();
        let buckets = cluster_segments(segs, &self.params.bundling);

        let mut lines = Vec::new();
        let mut clusters = Vec::new();
        for bucket in buckets.iter() {
            for cluster in bucket.clusters.iter() {
                let Some(line) = merge_cluster(cluster, segs) else {
                    continue;
                };
                clusters.push(ClusterSummary {
                    orientation: bucket.orientation,
                    seed_orientation_deg: cluster.seed_orientation_deg,
                    members: cluster.members.clone(),
                    line,
                });
                lines.push(line);
            }
        }
        let bundling_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let intersections = self.intersect(&lines);
        let intersect_ms = t1.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "HoughBundler::process {} segments -> {} lines, {} intersections ({:.3} ms)",
            segs.len(),
            lines.len(),
            intersections.len(),
            bundling_ms + intersect_ms
        );

        BundleReport {
            input_segments: segs.len(),
            lines,
            intersections,
            clusters,
            timing: StageTiming {
                bundling_ms,
                intersect_ms,
                total_ms: t0.elapsed().as_secs_f64() * 1000.0,
            },
        }
    }

    /// Processes independent frames in parallel; reports keep frame order.
    pub fn process_frames<F>(&self, frames: &[F]) -> Vec<BundleReport>
    where
        F: AsRef<[Segment]> + Sync,
    {
        frames
            .par_iter()
            .map(|frame| self.process(frame.as_ref()))
            .collect()
    }
}

/// Collapses raw detections into representative lines with the given
/// thresholds (pixels, degrees).
pub fn process_segments(segs: &[Segment], min_distance: f64, min_angle_deg: f64) -> Vec<Segment> {
    crate::bundling::bundle_segments(segs, &BundlingParams::new(min_distance, min_angle_deg))
}

/// Pairwise intersections of `lines` with the given bounding-box tolerance.
pub fn intersect(lines: &[Segment], tolerance: f64) -> Vec<IntersectionPoint> {
    intersect_lines(lines, &IntersectParams { tolerance })
}
