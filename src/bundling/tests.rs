use super::*;
use crate::segments::SegmentId;

fn segs(coords: &[[f64; 4]]) -> Vec<Segment> {
    coords.iter().map(|&c| Segment::from(c)).collect()
}

fn ids(v: &[u32]) -> Vec<SegmentId> {
    v.iter().map(|&i| SegmentId(i)).collect()
}

#[test]
fn near_duplicates_collapse_and_far_line_stays() {
    let input = segs(&[[0.0, 0.0, 10.0, 0.0], [0.0, 1.0, 10.0, 1.0], [0.0, 50.0, 10.0, 50.0]]);
    let params = BundlingParams::new(5.0, 2.0);
    let (horizontal, vertical) = split_buckets(&input);
    assert!(vertical.is_empty());

    let clusters = cluster_bucket(&input, &horizontal, &params);
    assert_eq!(clusters.len(), 2, "clusters: {:?}", clusters);
    assert_eq!(clusters[0].members, ids(&[0, 1]));
    assert_eq!(clusters[1].members, ids(&[2]));

    let merged = bundle_segments(&input, &params);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0], Segment::new([0.0, 0.0], [10.0, 1.0]));
    assert_eq!(merged[1], input[2]);
}

#[test]
fn every_segment_lands_in_exactly_one_cluster() {
    let input = segs(&[
        [0.0, 0.0, 40.0, 1.0],
        [35.0, 1.0, 80.0, 2.0],
        [5.0, 30.0, 60.0, 31.0],
        [10.0, 0.0, 11.0, 50.0],
        [10.0, 45.0, 12.0, 90.0],
        [100.0, 0.0, 101.0, 80.0],
        [3.0, 3.0, 3.0, 3.0],
        [20.0, 2.0, 70.0, 1.0],
    ]);
    let params = BundlingParams::default();
    let buckets = cluster_segments(&input, &params);

    let mut seen: Vec<u32> = buckets
        .iter()
        .flat_map(|b| b.clusters.iter())
        .flat_map(|c| c.members.iter().map(|id| id.0))
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..input.len() as u32).collect::<Vec<_>>());

    for bucket in buckets.iter() {
        for cluster in bucket.clusters.iter() {
            assert!(!cluster.is_empty());
            for seg in cluster.segments(&input) {
                assert_eq!(Orientation::classify(seg), bucket.orientation);
            }
        }
    }
}

#[test]
fn first_matching_cluster_wins() {
    // The middle line is close to both outer lines, which are too far apart
    // to cluster with each other. It joins the earlier cluster and the two
    // clusters stay separate.
    let input = segs(&[[0.0, 0.0, 10.0, 0.0], [0.0, 8.0, 10.0, 8.0], [0.0, 4.0, 10.0, 4.0]]);
    let params = BundlingParams::new(5.0, 2.0);
    let (horizontal, _) = split_buckets(&input);
    let clusters = cluster_bucket(&input, &horizontal, &params);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].members, ids(&[0, 2]));
    assert_eq!(clusters[1].members, ids(&[1]));
}

#[test]
fn buckets_are_sorted_along_scan_axis() {
    let input = segs(&[
        [30.0, 0.0, 40.0, 0.0],
        [5.0, 60.0, 6.0, 90.0],
        [10.0, 0.0, 20.0, 0.0],
        [5.0, 10.0, 6.0, 40.0],
        [10.0, 5.0, 30.0, 5.0],
    ]);
    let (horizontal, vertical) = split_buckets(&input);
    assert_eq!(horizontal, ids(&[2, 4, 0]));
    assert_eq!(vertical, ids(&[3, 1]));
}

#[test]
fn orientation_gate_keeps_crossing_lines_apart() {
    // Touching but 30 degrees apart.
    let input = segs(&[[0.0, 0.0, 100.0, 0.0], [0.0, 0.0, 86.6, 50.0]]);
    let merged = bundle_segments(&input, &BundlingParams::court());
    assert_eq!(merged.len(), 2);
}

#[test]
fn thresholds_are_exclusive() {
    let input = segs(&[[0.0, 0.0, 10.0, 0.0], [0.0, 5.0, 10.0, 5.0]]);
    let merged = bundle_segments(&input, &BundlingParams::new(5.0, 2.0));
    assert_eq!(merged.len(), 2, "distance equal to threshold must not merge");
    let merged = bundle_segments(&input, &BundlingParams::new(5.01, 2.0));
    assert_eq!(merged.len(), 1);
}

#[test]
fn empty_input_yields_no_clusters() {
    let buckets = cluster_segments(&[], &BundlingParams::default());
    assert!(buckets.iter().all(|b| b.clusters.is_empty()));
    assert!(bundle_segments(&[], &BundlingParams::default()).is_empty());
}

#[test]
fn single_member_cluster_is_returned_unchanged() {
    let input = segs(&[[7.0, 3.0, 1.0, 2.0]]);
    let merged = bundle_segments(&input, &BundlingParams::default());
    assert_eq!(merged, input);

    let lone_point = segs(&[[3.0, 3.0, 3.0, 3.0]]);
    let merged = bundle_segments(&lone_point, &BundlingParams::default());
    assert_eq!(merged, lone_point);
}

#[test]
fn vertical_fragments_merge_along_y() {
    let input = segs(&[[50.0, 10.0, 51.0, 60.0], [51.0, 55.0, 52.0, 120.0], [50.0, 0.0, 50.0, 12.0]]);
    let merged = bundle_segments(&input, &BundlingParams::court());
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0], Segment::new([50.0, 0.0], [52.0, 120.0]));
}

#[test]
fn merge_axis_follows_the_seed_segment() {
    let input = segs(&[[0.0, 0.0, 2.0, 20.0], [-30.0, 5.0, 30.0, 6.0]]);
    let cluster = Cluster {
        seed_orientation_deg: crate::angle::orientation_deg(&input[0]),
        members: ids(&[0, 1]),
    };
    assert_eq!(cluster.orientation(), Orientation::Vertical);
    // Sorted by y despite the wide horizontal member.
    let merged = merge_cluster(&cluster, &input).unwrap();
    assert_eq!(merged, Segment::new([0.0, 0.0], [2.0, 20.0]));
}

#[test]
fn empty_cluster_merges_to_nothing() {
    let cluster = Cluster {
        seed_orientation_deg: 0.0,
        members: Vec::new(),
    };
    assert!(merge_cluster(&cluster, &[]).is_none());
}

#[test]
fn bucket_ids_index_the_input_directly() {
    let input = segs(&[
        [0.0, 0.0, 10.0, 0.0],
        [0.0, 0.0, 0.0, 10.0],
        [3.0, 3.0, 3.0, 3.0],
        [5.0, 0.0, 6.0, 9.0],
    ]);
    let (horizontal, vertical) = split_buckets(&input);
    let mut all: Vec<SegmentId> = horizontal.iter().chain(vertical.iter()).copied().collect();
    all.sort();
    assert_eq!(all, ids(&[0, 1, 2, 3]));
    for id in horizontal.iter().chain(vertical.iter()) {
        let seg = &input[id.0 as usize];
        let expected = if vertical.contains(id) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        assert_eq!(Orientation::classify(seg), expected);
    }
    assert_eq!(MAX_SEGMENTS, u32::MAX as u64 + 1);
}
