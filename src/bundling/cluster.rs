use super::BundlingParams;
use crate::angle::{orientation_deg, orientation_difference, Orientation};
use crate::segments::{segment_distance, Segment, SegmentId};
use log::warn;
use serde::Serialize;

/// Largest number of detections one clustering pass can address.
pub const MAX_SEGMENTS: u64 = u32::MAX as u64 + 1;

/// Group of detections believed to describe one physical line.
///
/// Members are ids into the caller's segment slice, kept in insertion order.
/// The seed's orientation is recorded once so the merge axis never depends on
/// later members.
#[derive(Clone, Debug, Serialize)]
pub struct Cluster {
    pub seed_orientation_deg: f64,
    pub members: Vec<SegmentId>,
}

impl Cluster {
    fn seeded(id: SegmentId, seg: &Segment) -> Self {
        Self {
            seed_orientation_deg: orientation_deg(seg),
            members: vec![id],
        }
    }

    /// Axis along which the cluster is merged, taken from the seed segment.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_degrees(self.seed_orientation_deg)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Resolves member ids against the segment slice the cluster was built from.
    pub fn segments<'a>(&'a self, segs: &'a [Segment]) -> impl Iterator<Item = &'a Segment> + 'a {
        self.members.iter().map(move |id| &segs[id.0 as usize])
    }
}

/// Returns true when `candidate` should join a cluster containing `member`.
#[inline]
pub fn is_similar(candidate: &Segment, member: &Segment, params: &BundlingParams) -> bool {
    if segment_distance(candidate, member) >= params.min_distance {
        return false;
    }
    let diff = orientation_difference(orientation_deg(candidate), orientation_deg(member));
    diff < params.min_angle_deg
}

/// Splits segment ids into the horizontal and vertical buckets, each sorted
/// along its scan axis: horizontal by the first endpoint's x, vertical by the
/// first endpoint's y. The sort is stable so ties keep detector order.
///
/// Ids are `u32`; detections past index `u32::MAX` cannot be addressed and
/// are left out of both buckets (with a warning) rather than aliasing
/// earlier ids.
pub fn split_buckets(segs: &[Segment]) -> (Vec<SegmentId>, Vec<SegmentId>) {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    let total = segs.len() as u64;
    if total > MAX_SEGMENTS {
        warn!(
            "bundling: {} segments exceed the id range, ignoring the last {}",
            total,
            total - MAX_SEGMENTS
        );
    }
    for (idx, seg) in segs.iter().enumerate() {
        let Ok(raw) = u32::try_from(idx) else {
            break;
        };
        let id = SegmentId(raw);
        match Orientation::classify(seg) {
            Orientation::Horizontal => horizontal.push(id),
            Orientation::Vertical => vertical.push(id),
        }
    }
    sort_bucket(segs, &mut horizontal, Orientation::Horizontal);
    sort_bucket(segs, &mut vertical, Orientation::Vertical);
    (horizontal, vertical)
}

fn sort_bucket(segs: &[Segment], bucket: &mut [SegmentId], orientation: Orientation) {
    let axis = orientation.dominant_axis();
    bucket.sort_by(|a, b| {
        let ka = segs[a.0 as usize].p0[axis];
        let kb = segs[b.0 as usize].p0[axis];
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Greedy first-fit clustering of one orientation bucket.
///
/// Each segment, in bucket order, joins the first cluster (in creation order)
/// holding a member it is similar to; otherwise it seeds a new cluster.
/// Membership is never revisited and clusters never merge with each other, so
/// the result depends on bucket order. An empty bucket yields no clusters.
pub fn cluster_bucket(
    segs: &[Segment],
    bucket: &[SegmentId],
    params: &BundlingParams,
) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    for &id in bucket {
        let seg = &segs[id.0 as usize];
        let target = clusters.iter().position(|cluster| {
            cluster
                .segments(segs)
                .any(|member| is_similar(seg, member, params))
        });
        match target {
            Some(ci) => clusters[ci].members.push(id),
            None => clusters.push(Cluster::seeded(id, seg)),
        }
    }
    clusters
}
