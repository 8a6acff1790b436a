use super::Cluster;
use crate::segments::Segment;

/// Reduces a cluster to its representative line.
///
/// A single-member cluster is returned unchanged. Otherwise every member
/// endpoint is sorted along the seed's dominant axis (y for vertical seeds,
/// x for horizontal ones) and the two extremes become the new endpoints.
/// Members whose orientation drifted from the seed are still merged along the
/// seed's axis.
pub fn merge_cluster(cluster: &Cluster, segs: &[Segment]) -> Option<Segment> {
    let mut members = cluster.segments(segs);
    let first = *members.next()?;
    if cluster.len() == 1 {
        return Some(first);
    }

    let mut points: Vec<[f64; 2]> = Vec::with_capacity(cluster.len() * 2);
    points.extend(first.endpoints());
    for seg in members {
        points.extend(seg.endpoints());
    }

    let axis = cluster.orientation().dominant_axis();
    points.sort_by(|a, b| {
        a[axis]
            .partial_cmp(&b[axis])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let lo = points.first()?;
    let hi = points.last()?;
    Some(Segment::new(*lo, *hi))
}
