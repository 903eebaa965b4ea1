use std::collections::HashMap;

use imageproc::geometry::convex_hull;

use crate::types::{Contour, ConvexHull, ConvexityDefect, Point};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullAnalysis {
    pub hull: ConvexHull,
    /// Defects deeper than the threshold, in hull-edge order.
    pub defects: Vec<ConvexityDefect>,
}

impl HullAnalysis {
    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }
}

/// Convex hull of `contour` as indices into its points.
///
/// The indices are strictly increasing, so walking them visits the hull in the
/// contour's own winding. Contours with fewer than three points have no hull.
pub fn convex_hull_indices(contour: &Contour) -> ConvexHull {
    if !contour.is_valid() {
        return ConvexHull::default();
    }

    let mut first_seen: HashMap<(i32, i32), usize> = HashMap::with_capacity(contour.len());
    for (idx, p) in contour.points.iter().enumerate() {
        first_seen.entry((p.x, p.y)).or_insert(idx);
    }

    let mut indices: Vec<usize> = convex_hull(contour.points.as_slice())
        .iter()
        .filter_map(|p| first_seen.get(&(p.x, p.y)).copied())
        .collect();
    indices.sort_unstable();
    indices.dedup();

    ConvexHull { indices }
}

/// One candidate defect per hull edge: the contour point strictly between the
/// edge's end points that lies farthest from the chord.
///
/// Edges with no point off the chord produce nothing. Hulls with fewer than
/// three vertices produce nothing.
pub fn convexity_defects(contour: &Contour, hull: &ConvexHull) -> Vec<ConvexityDefect> {
    let n = contour.len();
    if n < 3 || hull.len() < 3 || hull.indices.iter().any(|&idx| idx >= n) {
        return Vec::new();
    }

    let mut defects = Vec::new();
    for (k, &start) in hull.indices.iter().enumerate() {
        let end = hull.indices[(k + 1) % hull.len()];
        if let Some((far, depth)) = farthest_between(&contour.points, start, end) {
            defects.push(ConvexityDefect {
                start,
                end,
                far,
                depth,
            });
        }
    }
    defects
}

pub fn analyze(contour: &Contour, depth_threshold: f64) -> HullAnalysis {
    let hull = convex_hull_indices(contour);
    let defects = convexity_defects(contour, &hull)
        .into_iter()
        .filter(|d| d.depth > depth_threshold)
        .collect();
    HullAnalysis { hull, defects }
}

// Walks start+1 .. end, wrapping past the last contour point.
fn farthest_between(points: &[Point], start: usize, end: usize) -> Option<(usize, f64)> {
    let n = points.len();
    let (a, b) = (points[start], points[end]);
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let chord = dx.hypot(dy);
    if chord == 0.0 {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    let mut idx = (start + 1) % n;
    while idx != end {
        let p = points[idx];
        let cross = dx * (p.y - a.y) as f64 - dy * (p.x - a.x) as f64;
        let depth = cross.abs() / chord;
        if depth > best.map_or(0.0, |(_, d)| d) {
            best = Some((idx, depth));
        }
        idx = (idx + 1) % n;
    }
    best
}
