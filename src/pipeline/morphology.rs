use std::fmt;

use image::{GrayImage, Luma};
use imageproc::morphology::{Mask, grayscale_close, grayscale_dilate, grayscale_erode, grayscale_open};

use crate::config::{KernelConfig, KernelShape, MAX_KERNEL_SIZE};

/// Binary structuring element, anchored at its centre.
#[derive(Clone)]
pub struct StructuringElement {
    width: u32,
    height: u32,
    offsets: Vec<(i32, i32)>,
    mask: Mask,
}

impl StructuringElement {
    /// Sides are clamped to `1..=MAX_KERNEL_SIZE`.
    pub fn new(shape: KernelShape, width: u32, height: u32) -> Self {
        let w = width.clamp(1, MAX_KERNEL_SIZE) as i32;
        let h = height.clamp(1, MAX_KERNEL_SIZE) as i32;
        let (ax, ay) = (w / 2, h / 2);
        let mut offsets = Vec::new();
        let mut cells = GrayImage::new(w as u32, h as u32);

        for row in 0..h {
            let (start, end) = match shape {
                KernelShape::Rect => (0, w),
                KernelShape::Cross if row == ay => (0, w),
                KernelShape::Cross => (ax, ax + 1),
                KernelShape::Ellipse => ellipse_span(row, w, h),
            };
            for col in start..end {
                offsets.push((col - ax, row - ay));
                cells.put_pixel(col as u32, row as u32, Luma([255]));
            }
        }

        Self {
            width: w as u32,
            height: h as u32,
            offsets,
            mask: Mask::from_image(&cells, ax as u8, ay as u8),
        }
    }

    /// Offsets of the set cells relative to the anchor.
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

impl fmt::Debug for StructuringElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuringElement")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cells", &self.offsets.len())
            .finish()
    }
}

impl From<KernelConfig> for StructuringElement {
    fn from(cfg: KernelConfig) -> Self {
        Self::new(cfg.shape, cfg.width, cfg.height)
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        KernelConfig::default().into()
    }
}

// Column span [start, end) of one ellipse row, matching the usual
// integer rasterisation of an axis-aligned ellipse inscribed in the box.
fn ellipse_span(row: i32, width: i32, height: i32) -> (i32, i32) {
    let r = height / 2;
    let c = width / 2;
    let dy = row - r;
    if dy.abs() > r {
        return (0, 0);
    }
    let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };
    let dx = (c as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round() as i32;
    ((c - dx).max(0), (c + dx + 1).min(width))
}

// imageproc skips mask cells that fall outside the image, so the frame
// border never erodes or dilates a region.

pub fn erode(mask: &GrayImage, kernel: &StructuringElement) -> GrayImage {
    grayscale_erode(mask, kernel.mask())
}

pub fn dilate(mask: &GrayImage, kernel: &StructuringElement) -> GrayImage {
    grayscale_dilate(mask, kernel.mask())
}

/// Erosion followed by dilation: removes specks smaller than the kernel.
pub fn open(mask: &GrayImage, kernel: &StructuringElement) -> GrayImage {
    grayscale_open(mask, kernel.mask())
}

/// Dilation followed by erosion: fills gaps smaller than the kernel.
pub fn close(mask: &GrayImage, kernel: &StructuringElement) -> GrayImage {
    grayscale_close(mask, kernel.mask())
}

pub fn clean_mask(mask: &GrayImage, kernel: &StructuringElement) -> GrayImage {
    close(&open(mask, kernel), kernel)
}
