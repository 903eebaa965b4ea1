use std::{fmt, time::Instant};

use image::RgbImage;

use crate::error::FrameError;

pub type Point = imageproc::point::Point<i32>;

pub const RGB_CHANNELS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub timestamp: Instant,
}

impl Frame {
    pub fn from_rgb(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
            channels: RGB_CHANNELS,
            timestamp: Instant::now(),
        }
    }

    pub fn from_rgb_image(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_rgb(image.into_raw(), width, height)
    }

    pub fn into_rgb_image(self) -> Option<RgbImage> {
        if self.channels != RGB_CHANNELS {
            return None;
        }
        RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::EmptyFrame {
                width: self.width,
                height: self.height,
            });
        }
        if self.channels != RGB_CHANNELS {
            return Err(FrameError::ChannelCount(self.channels));
        }
        let expected = (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(RGB_CHANNELS);
        if self.pixels.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

/// Closed boundary polygon of one connected foreground region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polygon needs at least three vertices to enclose anything.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }
}

/// Hull vertices as strictly increasing indices into the source contour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvexHull {
    pub indices: Vec<usize>,
}

impl ConvexHull {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn points(&self, contour: &Contour) -> Vec<Point> {
        self.indices
            .iter()
            .filter_map(|&idx| contour.points.get(idx).copied())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexityDefect {
    pub start: usize,
    pub end: usize,
    pub far: usize,
    /// Perpendicular distance from the far point to the start-end chord, in pixels.
    pub depth: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandGeometry {
    pub contour: Contour,
    pub area: f64,
    pub hull: ConvexHull,
    /// Only the defects deep enough to count as finger valleys.
    pub defects: Vec<ConvexityDefect>,
}

impl HandGeometry {
    pub fn markers(&self) -> Vec<Point> {
        self.defects
            .iter()
            .filter_map(|d| self.contour.points.get(d.far).copied())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureLabel {
    ClosedFist,
    OpenHand,
    Unknown,
}

impl GestureLabel {
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::ClosedFist => "Closed Fist",
            GestureLabel::OpenHand => "Open Hand",
            GestureLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureResult {
    pub label: GestureLabel,
    pub defect_count: usize,
    pub timestamp: Instant,
    pub hand: Option<HandGeometry>,
}

impl GestureResult {
    pub fn no_hand(timestamp: Instant) -> Self {
        Self {
            label: GestureLabel::Unknown,
            defect_count: 0,
            timestamp,
            hand: None,
        }
    }

    /// Separates "nothing skin-coloured in view" from a hand whose defect
    /// count happens to map to `Unknown`.
    pub fn hand_detected(&self) -> bool {
        self.hand.is_some()
    }

    pub fn display_text(&self) -> String {
        format!("GESTURE: {}", self.label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecognizedFrame {
    pub frame: Frame,
    pub result: GestureResult,
}
