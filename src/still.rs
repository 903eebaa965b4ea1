use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Frame;

/// Decodes any PNG or JPEG on disk into an RGB frame.
pub fn load_frame(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("failed to read image {}", path.display()))?
        .into_rgb8();
    Ok(Frame::from_rgb_image(image))
}

/// Writes `frame` to `path`; the format follows the file extension.
pub fn save_frame(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    frame
        .validate()
        .with_context(|| format!("refusing to save malformed frame to {}", path.display()))?;
    image::save_buffer(
        path,
        &frame.pixels,
        frame.width,
        frame.height,
        image::ExtendedColorType::Rgb8,
    )
    .with_context(|| format!("failed to write image {}", path.display()))
}
