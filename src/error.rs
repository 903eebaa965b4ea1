use thiserror::Error;

/// Malformed input handed to the pipeline. These are caller bugs and are
/// never retried; "no hand in view" is not an error and never shows up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame has zero area ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("frame has {0} channels, expected 3 (RGB)")]
    ChannelCount(usize),

    #[error("frame buffer size mismatch: got {actual}, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("skin range channel {channel}: lower bound {lower} exceeds upper bound {upper}")]
    InvertedSkinRange { channel: usize, lower: u8, upper: u8 },

    #[error("skin hue bound {0} is outside the 8-bit hue range 0..=180")]
    HueOutOfRange(u8),

    #[error("structuring element must be at least 1x1, got {width}x{height}")]
    EmptyKernel { width: u32, height: u32 },

    #[error("structuring element {width}x{height} exceeds the 255x255 limit")]
    KernelTooLarge { width: u32, height: u32 },

    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error(
        "open-hand defect count ({open_hand}) must exceed the closed-fist maximum ({closed_fist_max})"
    )]
    OverlappingGestures {
        closed_fist_max: usize,
        open_hand: usize,
    },
}
