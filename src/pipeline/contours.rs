use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use crate::types::{Contour, Point};

/// Outer boundaries of the top-level foreground regions in `mask`.
///
/// Hole borders, and anything nested inside a hole, are dropped. Each border
/// is compressed so straight runs keep only their end points. The order of the
/// returned contours is unspecified.
pub fn external_contours(mask: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| Contour::new(compress_runs(&c.points)))
        .collect()
}

/// Removes every point whose incoming and outgoing step share a direction.
pub fn compress_runs(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |from: Point, to: Point| (to.x - from.x, to.y - from.y);

    let compressed: Vec<Point> = points
        .iter()
        .enumerate()
        .filter(|&(i, &p)| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, p) != step(p, next)
        })
        .map(|(_, &p)| p)
        .collect();

    if compressed.is_empty() {
        points.to_vec()
    } else {
        compressed
    }
}
