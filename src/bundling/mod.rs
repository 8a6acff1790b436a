//! Clustering of raw detections into one line per physical edge.
//!
//! Hough detectors report several overlapping, fragmented or duplicated
//! segments for every real edge. Bundling collapses them using only pairwise
//! geometry:
//!
//! 1. Split detections into horizontal and vertical buckets (45° threshold)
//!    and sort each along its scan axis.
//! 2. Cluster each bucket greedily: a detection joins the first cluster that
//!    contains a member within `min_distance` pixels and `min_angle_deg`
//!    degrees of it, else it seeds a new cluster.
//! 3. Merge each cluster into the segment spanning its extreme endpoints along
//!    the seed's dominant axis.
//!
//! Clustering is first-fit and order dependent, not transitive: two
//! detections that are each close to a third can end up in different
//! clusters. Buckets never mix.

mod cluster;
mod merge;
mod params;

pub use cluster::{cluster_bucket, is_similar, split_buckets, Cluster, MAX_SEGMENTS};
pub use merge::merge_cluster;
pub use params::BundlingParams;

use crate::angle::Orientation;
use crate::segments::Segment;
use log::debug;

/// Clusters of one orientation bucket.
#[derive(Clone, Debug)]
pub struct BucketClusters {
    pub orientation: Orientation,
    pub clusters: Vec<Cluster>,
}

/// Runs bucketing and clustering over all detections.
///
/// The horizontal bucket comes first, followed by the vertical one.
pub fn cluster_segments(segs: &[Segment], params: &BundlingParams) -> [BucketClusters; 2] {
    let (horizontal, vertical) = split_buckets(segs);
    debug!(
        "bundling: {} segments -> {} horizontal, {} vertical",
        segs.len(),
        horizontal.len(),
        vertical.len()
    );
    let h = cluster_bucket(segs, &horizontal, params);
    let v = cluster_bucket(segs, &vertical, params);
    debug!(
        "bundling: {} horizontal clusters, {} vertical clusters",
        h.len(),
        v.len()
    );
    [
        BucketClusters {
            orientation: Orientation::Horizontal,
            clusters: h,
        },
        BucketClusters {
            orientation: Orientation::Vertical,
            clusters: v,
        },
    ]
}

/// Clusters and merges `segs`, returning one representative line per cluster.
pub fn bundle_segments(segs: &[Segment], params: &BundlingParams) -> Vec<Segment> {
    cluster_segments(segs, params)
        .iter()
        .flat_map(|bucket| bucket.clusters.iter())
        .filter_map(|cluster| merge_cluster(cluster, segs))
        .collect()
}

#[cfg(test)]
mod tests;
