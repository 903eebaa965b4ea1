use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut},
    rect::Rect,
};

use crate::types::{Frame, HandGeometry, Point};

pub const MARKER_COLOR: [u8; 3] = [255, 0, 0];
pub const LABEL_COLOR: [u8; 3] = [0, 255, 0];
pub const CONTOUR_COLOR: [u8; 3] = [0, 0, 255];
pub const HULL_COLOR: [u8; 3] = [0, 255, 0];

/// Stroke width of the contour and hull outlines, in pixels.
pub const OUTLINE_THICKNESS: u32 = 2;
pub const MARKER_RADIUS: i32 = 5;
pub const LABEL_ORIGIN: (i32, i32) = (10, 50);
const GLYPH_SCALE: i32 = 3;
const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;

/// Draws the hand overlay onto `frame`: defect markers, label, contour, hull.
///
/// Frames that do not hold a full RGB buffer are left as they are.
pub fn annotate(frame: &mut Frame, hand: &HandGeometry, text: &str) {
    if frame.validate().is_err() {
        log::warn!("cannot annotate malformed {}x{} frame", frame.width, frame.height);
        return;
    }
    let pixels = std::mem::take(&mut frame.pixels);
    let Some(mut canvas) = RgbImage::from_raw(frame.width, frame.height, pixels) else {
        return;
    };

    for marker in hand.markers() {
        draw_filled_circle_mut(
            &mut canvas,
            (marker.x, marker.y),
            MARKER_RADIUS,
            Rgb(MARKER_COLOR),
        );
    }
    draw_text(&mut canvas, LABEL_ORIGIN, text, Rgb(LABEL_COLOR));
    draw_outline(&mut canvas, &hand.contour.points, Rgb(CONTOUR_COLOR));
    draw_outline(&mut canvas, &hand.hull.points(&hand.contour), Rgb(HULL_COLOR));

    frame.pixels = canvas.into_raw();
}

/// Closed polygon outline, [`OUTLINE_THICKNESS`] pixels wide.
fn draw_outline(canvas: &mut RgbImage, points: &[Point], color: Rgb<u8>) {
    if points.len() < 2 {
        return;
    }
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_thick_segment(canvas, a, b, color);
    }
}

// Repeats the 1px segment across the minor axis so the stroke is exactly
// OUTLINE_THICKNESS wide whatever the slope.
fn draw_thick_segment(canvas: &mut RgbImage, a: Point, b: Point, color: Rgb<u8>) {
    let steep = (b.y - a.y).abs() > (b.x - a.x).abs();
    for k in 0..OUTLINE_THICKNESS as i32 {
        let (ox, oy) = if steep { (k, 0) } else { (0, k) };
        draw_line_segment_mut(
            canvas,
            ((a.x + ox) as f32, (a.y + oy) as f32),
            ((b.x + ox) as f32, (b.y + oy) as f32),
            color,
        );
    }
}

/// Block-letter text with its baseline at `origin.1`. Lowercase is drawn as
/// uppercase; characters without a glyph only advance the pen.
fn draw_text(canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
    let top = origin.1 - GLYPH_HEIGHT * GLYPH_SCALE;
    let advance = (GLYPH_WIDTH + 1) * GLYPH_SCALE;

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch.to_ascii_uppercase()) else {
            continue;
        };
        let left = origin.0 + i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in (0..GLYPH_WIDTH).filter(|col| bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0) {
                let cell = Rect::at(left + col * GLYPH_SCALE, top + row as i32 * GLYPH_SCALE)
                    .of_size(GLYPH_SCALE as u32, GLYPH_SCALE as u32);
                draw_filled_rect_mut(canvas, cell, color);
            }
        }
    }
}

fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        _ => return None,
    };
    Some(rows)
}
