use hough_bundler::{BundlerParams, HoughBundler, Segment};

fn main() {
    // Demo: a fragmented rectangle as a Hough detector would report it.
    let raw: Vec<Segment> = [
        [10, 10, 120, 11],
        [100, 11, 300, 12],
        [12, 14, 200, 15],
        [10, 200, 300, 201],
        [11, 8, 10, 100],
        [10, 90, 12, 205],
        [300, 10, 301, 150],
        [301, 140, 300, 200],
    ]
    .into_iter()
    .map(Segment::from)
    .collect();

    let bundler = HoughBundler::new(BundlerParams::court());
    let report = bundler.process(&raw);
    println!(
        "segments={} lines={} intersections={} latency_ms={:.3}",
        report.input_segments,
        report.lines.len(),
        report.intersections.len(),
        report.timing.total_ms
    );
    for ip in &report.intersections {
        println!(
            "  lines {:?} meet at ({:.1}, {:.1})",
            ip.lines, ip.point[0], ip.point[1]
        );
    }
}
