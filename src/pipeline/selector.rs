use crate::types::{Contour, Point};

/// Enclosed area of a closed polygon (shoelace formula), always non-negative.
pub fn contour_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
        .sum();
    (twice as f64 / 2.0).abs()
}

/// Picks the largest contour whose area is strictly above `min_area`.
///
/// Ties go to the contour seen first. Returns `None` when nothing qualifies,
/// which is the ordinary "no hand in view" case.
pub fn select_hand(contours: Vec<Contour>, min_area: f64) -> Option<(Contour, f64)> {
    let mut best: Option<(Contour, f64)> = None;

    for contour in contours {
        let area = contour_area(&contour.points);
        if area <= min_area {
            continue;
        }
        let is_larger = best.as_ref().is_none_or(|(_, best_area)| area > *best_area);
        if is_larger {
            best = Some((contour, area));
        }
    }

    best
}
