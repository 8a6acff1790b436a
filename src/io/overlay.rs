//! Debug overlay: merged lines in green, intersections as red circles.

use super::ensure_parent_dir;
use crate::diagnostics::BundleReport;
use crate::segments::Segment;
use image::{Rgb, RgbImage};
use std::path::Path;

const LINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const POINT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    /// Half-width of drawn lines in pixels.
    pub line_half_width: i32,
    pub point_radius: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_half_width: 1,
            point_radius: 5,
        }
    }
}

/// Draws `report` onto `img` in place.
///
/// Geometry is clipped to the image before rasterizing, so lines and points
/// far outside the frame cost nothing. Widths and radii are capped at the
/// larger image dimension.
pub fn draw_report(img: &mut RgbImage, report: &BundleReport, style: OverlayStyle) {
    for line in &report.lines {
        draw_segment(img, line, LINE_COLOR, style.line_half_width);
    }
    for ip in &report.intersections {
        draw_circle(img, ip.point, style.point_radius, POINT_COLOR);
    }
}

/// Loads `image_path`, draws `report` and saves the result to `out_path`.
pub fn render_overlay(
    image_path: &Path,
    report: &BundleReport,
    out_path: &Path,
    style: OverlayStyle,
) -> Result<(), String> {
    let mut img = image::open(image_path)
        .map_err(|e| format!("Failed to open {}: {e}", image_path.display()))?
        .into_rgb8();
    draw_report(&mut img, report, style);
    ensure_parent_dir(out_path)?;
    img.save(out_path)
        .map_err(|e| format!("Failed to save {}: {e}", out_path.display()))
}

fn max_extent(img: &RgbImage) -> i64 {
    img.width().max(img.height()) as i64
}

fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < img.width() as i64 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Liang-Barsky clip of `p0 -> p1` against the box `lo..=hi`.
fn clip_segment(
    p0: [f64; 2],
    p1: [f64; 2],
    lo: [f64; 2],
    hi: [f64; 2],
) -> Option<([f64; 2], [f64; 2])> {
    let d = [p1[0] - p0[0], p1[1] - p0[1]];
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for axis in 0..2 {
        for (p, q) in [(-d[axis], p0[axis] - lo[axis]), (d[axis], hi[axis] - p0[axis])] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    Some((
        [p0[0] + t0 * d[0], p0[1] + t0 * d[1]],
        [p0[0] + t1 * d[0], p0[1] + t1 * d[1]],
    ))
}

fn draw_segment(img: &mut RgbImage, seg: &Segment, color: Rgb<u8>, half_width: i32) {
    if !seg.is_finite() || img.width() == 0 || img.height() == 0 {
        return;
    }
    let hw = (half_width as i64).clamp(0, max_extent(img));
    let margin = hw as f64 + 1.0;
    let lo = [-margin, -margin];
    let hi = [
        img.width() as f64 - 1.0 + margin,
        img.height() as f64 - 1.0 + margin,
    ];
    let Some((a, b)) = clip_segment(seg.p0, seg.p1, lo, hi) else {
        return;
    };

    let x0 = a[0].round() as i64;
    let y0 = a[1].round() as i64;
    let x1 = b[0].round() as i64;
    let y1 = b[1].round() as i64;

    // Bresenham with a square brush.
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        for oy in -hw..=hw {
            for ox in -hw..=hw {
                put_clipped(img, x + ox, y + oy, color);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// One-pixel ring of radius `r` around `center`, visiting only image pixels.
fn draw_circle(img: &mut RgbImage, center: [f64; 2], r: i32, color: Rgb<u8>) {
    if !(center[0].is_finite() && center[1].is_finite()) {
        return;
    }
    let (w, h) = (img.width() as i64, img.height() as i64);
    let r = (r as i64).clamp(0, max_extent(img));
    let rf = r as f64;
    if center[0] < -rf - 1.0
        || center[1] < -rf - 1.0
        || center[0] > (w + r) as f64
        || center[1] > (h + r) as f64
    {
        return;
    }
    let cx = center[0].round() as i64;
    let cy = center[1].round() as i64;
    let r_sq = r * r;
    let inner_sq = (r - 1).max(0) * (r - 1).max(0);
    for y in (cy - r).max(0)..=(cy + r).min(h - 1) {
        for x in (cx - r).max(0)..=(cx + r).min(w - 1) {
            let d = (x - cx) * (x - cx) + (y - cy) * (y - cy);
            if d <= r_sq && d >= inner_sq {
                put_clipped(img, x, y, color);
            }
        }
    }
}
