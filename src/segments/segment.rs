use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Identifier referencing a segment by its position in the detector output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

/// Straight line segment between two endpoints in pixel coordinates.
///
/// Serialized as the detector's flat `[x1, y1, x2, y2]` tuple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Segment {
    pub p0: [f64; 2],
    pub p1: [f64; 2],
}

impl Segment {
    pub fn new(p0: [f64; 2], p1: [f64; 2]) -> Self {
        Self { p0, p1 }
    }

    /// Flat `[x1, y1, x2, y2]` representation.
    pub fn coords(&self) -> [f64; 4] {
        [self.p0[0], self.p0[1], self.p1[0], self.p1[1]]
    }

    pub fn endpoints(&self) -> [[f64; 2]; 2] {
        [self.p0, self.p1]
    }

    /// Vector from `p0` to `p1`.
    pub fn delta(&self) -> Vector2<f64> {
        Point2::from(self.p1) - Point2::from(self.p0)
    }

    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]`.
    pub fn bbox(&self) -> [f64; 4] {
        [
            self.p0[0].min(self.p1[0]),
            self.p0[1].min(self.p1[1]),
            self.p0[0].max(self.p1[0]),
            self.p0[1].max(self.p1[1]),
        ]
    }

    /// True when every coordinate is finite. The bundler itself does not check
    /// this; `io::retain_finite` filters detector input with it.
    pub fn is_finite(&self) -> bool {
        self.coords().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for Segment {
    fn from(c: [f64; 4]) -> Self {
        Self::new([c[0], c[1]], [c[2], c[3]])
    }
}

impl From<Segment> for [f64; 4] {
    fn from(seg: Segment) -> Self {
        seg.coords()
    }
}

impl From<[i32; 4]> for Segment {
    fn from(c: [i32; 4]) -> Self {
        Self::new([c[0] as f64, c[1] as f64], [c[2] as f64, c[3] as f64])
    }
}

impl From<(f64, f64, f64, f64)> for Segment {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::new([x1, y1], [x2, y2])
    }
}
