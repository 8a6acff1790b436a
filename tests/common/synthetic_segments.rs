use hough_bundler::Segment;

/// Ideal court markings: three horizontal lines and three vertical lines
/// spanning a 600 x 400 rectangle with its top-left corner at (100, 100).
pub fn court_lines() -> Vec<Segment> {
    vec![
        Segment::from([100, 100, 700, 100]),
        Segment::from([100, 300, 700, 300]),
        Segment::from([100, 500, 700, 500]),
        Segment::from([100, 100, 100, 500]),
        Segment::from([400, 100, 400, 500]),
        Segment::from([700, 100, 700, 500]),
    ]
}

const JITTER: [f64; 5] = [0.0, 1.0, -1.0, 0.5, -0.5];

/// Breaks an axis-aligned line into overlapping fragments with sub-pixel to
/// one-pixel perpendicular jitter, and reports every fragment twice, the
/// second copy shifted by one pixel across the line.
pub fn fragment(line: &Segment, piece: f64, step: f64) -> Vec<Segment> {
    assert!(piece > step, "fragments must overlap");
    let horizontal = (line.p1[1] - line.p0[1]).abs() < (line.p1[0] - line.p0[0]).abs();
    let (along, across) = if horizontal { (0, 1) } else { (1, 0) };
    let start = line.p0[along].min(line.p1[along]);
    let end = line.p0[along].max(line.p1[along]);
    let base = line.p0[across];

    let mut out = Vec::new();
    let mut k = 0usize;
    let mut t = start;
    loop {
        let t_end = (t + piece).min(end);
        let j0 = JITTER[k % JITTER.len()];
        let j1 = JITTER[(k + 1) % JITTER.len()];
        for dup in [0.0, 1.0] {
            let mut p0 = [0.0; 2];
            let mut p1 = [0.0; 2];
            p0[along] = t;
            p1[along] = t_end;
            p0[across] = base + j0 + dup;
            p1[across] = base + j1 + dup;
            out.push(Segment::new(p0, p1));
        }
        if t_end >= end {
            break;
        }
        t += step;
        k += 1;
    }
    out
}

/// Fragmented detections of all court lines, interleaved the way a detector
/// would report them (no meaningful order).
pub fn noisy_court_detections() -> Vec<Segment> {
    let per_line: Vec<Vec<Segment>> = court_lines()
        .iter()
        .map(|l| fragment(l, 150.0, 110.0))
        .collect();
    let longest = per_line.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::new();
    for i in 0..longest {
        for (li, frags) in per_line.iter().enumerate() {
            // Alternate direction per line so detector order is not sorted.
            let idx = if li % 2 == 0 { i } else { frags.len().wrapping_sub(1 + i) };
            if let Some(s) = frags.get(idx) {
                out.push(*s);
            }
        }
    }
    out
}
