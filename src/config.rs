use crate::error::ConfigError;

pub const DEFAULT_SKIN_LOWER: [u8; 3] = [0, 48, 80];
pub const DEFAULT_SKIN_UPPER: [u8; 3] = [20, 255, 255];
pub const DEFAULT_KERNEL_SIZE: u32 = 7;
/// Largest structuring element side; the anchor has to fit in a `u8`.
pub const MAX_KERNEL_SIZE: u32 = 255;
pub const DEFAULT_MIN_CONTOUR_AREA: f64 = 10_000.0;
pub const DEFAULT_DEFECT_DEPTH_THRESHOLD: f64 = 20.0;

/// Largest hue value in the 8-bit HSV encoding (degrees / 2).
pub const MAX_HUE: u8 = 180;

/// Inclusive per-channel HSV bounds for skin pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkinRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl SkinRange {
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| hsv[c] >= self.lower[c] && hsv[c] <= self.upper[c])
    }
}

impl Default for SkinRange {
    fn default() -> Self {
        Self {
            lower: DEFAULT_SKIN_LOWER,
            upper: DEFAULT_SKIN_UPPER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelShape {
    Rect,
    Cross,
    Ellipse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
    pub shape: KernelShape,
    pub width: u32,
    pub height: u32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            shape: KernelShape::Ellipse,
            width: DEFAULT_KERNEL_SIZE,
            height: DEFAULT_KERNEL_SIZE,
        }
    }
}

/// Defect-count cut-offs for the gesture labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureThresholds {
    /// Counts at or below this are a closed fist.
    pub closed_fist_max: usize,
    /// Exactly this many counting defects is an open hand.
    pub open_hand: usize,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            closed_fist_max: 1,
            open_hand: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierConfig {
    pub skin: SkinRange,
    pub kernel: KernelConfig,
    /// Contours must be strictly larger than this (px²) to count as a hand.
    pub min_contour_area: f64,
    /// Defects must be strictly deeper than this (px) to count as a finger valley.
    pub defect_depth_threshold: f64,
    pub gestures: GestureThresholds,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            skin: SkinRange::default(),
            kernel: KernelConfig::default(),
            min_contour_area: DEFAULT_MIN_CONTOUR_AREA,
            defect_depth_threshold: DEFAULT_DEFECT_DEPTH_THRESHOLD,
            gestures: GestureThresholds::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn with_skin_range(mut self, skin: SkinRange) -> Self {
        self.skin = skin;
        self
    }

    pub fn with_kernel(mut self, kernel: KernelConfig) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_min_contour_area(mut self, area: f64) -> Self {
        self.min_contour_area = area;
        self
    }

    pub fn with_defect_depth_threshold(mut self, depth: f64) -> Self {
        self.defect_depth_threshold = depth;
        self
    }

    pub fn with_gestures(mut self, gestures: GestureThresholds) -> Self {
        self.gestures = gestures;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for channel in 0..3 {
            let (lower, upper) = (self.skin.lower[channel], self.skin.upper[channel]);
            if lower > upper {
                return Err(ConfigError::InvertedSkinRange {
                    channel,
                    lower,
                    upper,
                });
            }
        }
        if self.skin.upper[0] > MAX_HUE {
            return Err(ConfigError::HueOutOfRange(self.skin.upper[0]));
        }

        if self.kernel.width == 0 || self.kernel.height == 0 {
            return Err(ConfigError::EmptyKernel {
                width: self.kernel.width,
                height: self.kernel.height,
            });
        }
        if self.kernel.width > MAX_KERNEL_SIZE || self.kernel.height > MAX_KERNEL_SIZE {
            return Err(ConfigError::KernelTooLarge {
                width: self.kernel.width,
                height: self.kernel.height,
            });
        }

        check_threshold("min_contour_area", self.min_contour_area)?;
        check_threshold("defect_depth_threshold", self.defect_depth_threshold)?;

        if self.gestures.open_hand <= self.gestures.closed_fist_max {
            return Err(ConfigError::OverlappingGestures {
                closed_fist_max: self.gestures.closed_fist_max,
                open_hand: self.gestures.open_hand,
            });
        }

        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}
