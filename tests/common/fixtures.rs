use std::f64::consts::PI;

use gesture_hull::Frame;
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut},
    point::Point,
    rect::Rect,
};

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

/// HSV (8, 140, 200): well inside the default skin range.
pub const SKIN: Rgb<u8> = Rgb([200, 120, 90]);

pub fn blank_canvas() -> RgbImage {
    RgbImage::new(WIDTH, HEIGHT)
}

pub fn frame_of(canvas: RgbImage) -> Frame {
    Frame::from_rgb_image(canvas)
}

pub fn disc_frame(center: (i32, i32), radius: i32) -> Frame {
    let mut canvas = blank_canvas();
    draw_filled_circle_mut(&mut canvas, center, radius, SKIN);
    frame_of(canvas)
}

/// Filled squares given as (x, y, side).
pub fn squares_frame(squares: &[(i32, i32, u32)]) -> Frame {
    let mut canvas = blank_canvas();
    for &(x, y, side) in squares {
        draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(side, side), SKIN);
    }
    frame_of(canvas)
}

/// Star polygon with its first tip pointing up. One valley sits between each
/// pair of neighbouring tips, at the radius given in `valley_radii`.
pub fn star_points(center: (f64, f64), tip_radius: f64, valley_radii: &[f64]) -> Vec<Point<i32>> {
    let tips = valley_radii.len();
    let step = 2.0 * PI / tips as f64;
    let mut points = Vec::with_capacity(tips * 2);
    for (k, &valley) in valley_radii.iter().enumerate() {
        let tip_angle = -PI / 2.0 + step * k as f64;
        let valley_angle = tip_angle + step / 2.0;
        points.push(polar(center, tip_radius, tip_angle));
        points.push(polar(center, valley, valley_angle));
    }
    points
}

pub fn star_frame(tip_radius: f64, valley_radii: &[f64]) -> Frame {
    let mut canvas = blank_canvas();
    let center = (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0);
    draw_polygon_mut(&mut canvas, &star_points(center, tip_radius, valley_radii), SKIN);
    frame_of(canvas)
}

/// Depth of a valley at `valley_radius` below the chord joining its two tips.
pub fn valley_depth(tips: usize, tip_radius: f64, valley_radius: f64) -> f64 {
    tip_radius * (PI / tips as f64).cos() - valley_radius
}

fn polar(center: (f64, f64), radius: f64, angle: f64) -> Point<i32> {
    Point::new(
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 + radius * angle.sin()).round() as i32,
    )
}
