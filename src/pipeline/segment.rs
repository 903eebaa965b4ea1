use image::GrayImage;
use rayon::prelude::*;

use crate::{
    config::SkinRange,
    error::FrameError,
    types::{Frame, RGB_CHANNELS},
};

pub const MASK_ON: u8 = 255;
pub const MASK_OFF: u8 = 0;

/// 8-bit HSV: hue in 0..=180 (degrees / 2), saturation and value in 0..=255.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(i32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        ((255 * diff) as f32 / v as f32).round() as i32
    };

    let h = if diff == 0 {
        0.0
    } else {
        let diff = diff as f32;
        let mut h = if v == r {
            60.0 * (g - b) as f32 / diff
        } else if v == g {
            120.0 + 60.0 * (b - r) as f32 / diff
        } else {
            240.0 + 60.0 * (r - g) as f32 / diff
        };
        if h < 0.0 {
            h += 360.0;
        }
        h
    };

    let h = ((h / 2.0).round() as i32).rem_euclid(180);
    [h as u8, s.clamp(0, 255) as u8, v as u8]
}

pub fn skin_mask(frame: &Frame, range: &SkinRange) -> Result<GrayImage, FrameError> {
    frame.validate()?;

    let mask: Vec<u8> = frame
        .pixels
        .par_chunks_exact(RGB_CHANNELS)
        .map(|px| {
            if range.contains(rgb_to_hsv([px[0], px[1], px[2]])) {
                MASK_ON
            } else {
                MASK_OFF
            }
        })
        .collect();

    let actual = mask.len();
    GrayImage::from_raw(frame.width, frame.height, mask).ok_or(FrameError::BufferSize {
        expected: frame.width as usize * frame.height as usize,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_map_to_expected_hues() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn magenta_wraps_into_upper_hue_range() {
        // 300 degrees -> 150
        assert_eq!(rgb_to_hsv([255, 0, 255])[0], 150);
    }

    #[test]
    fn skin_tone_is_inside_default_range() {
        let hsv = rgb_to_hsv([200, 120, 90]);
        assert!(SkinRange::default().contains(hsv), "hsv = {hsv:?}");
        assert!(!SkinRange::default().contains(rgb_to_hsv([40, 90, 200])));
    }

    #[test]
    fn mask_marks_only_skin_pixels() {
        let pixels = vec![200, 120, 90, 0, 0, 0, 40, 90, 200, 210, 140, 110];
        let frame = Frame::from_rgb(pixels, 2, 2);
        let mask = skin_mask(&frame, &SkinRange::default()).unwrap();
        assert_eq!(mask.into_raw(), vec![MASK_ON, MASK_OFF, MASK_OFF, MASK_ON]);
    }

    #[test]
    fn mask_rejects_single_channel_frames() {
        let mut frame = Frame::from_rgb(vec![0; 4], 2, 2);
        frame.channels = 1;
        assert_eq!(
            skin_mask(&frame, &SkinRange::default()),
            Err(FrameError::ChannelCount(1))
        );
    }
}
