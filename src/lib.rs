//! Hand gesture recognition from webcam frames using skin-colour segmentation,
//! contour convex hulls and convexity defects.
//!
//! [`pipeline::classify_frame`] is the whole algorithm; the rest is plumbing
//! to feed it from a camera or image files.

#[cfg(feature = "camera-nokhwa")]
pub mod camera;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod recognizer;
pub mod still;
pub mod types;

pub use config::ClassifierConfig;
pub use error::{ConfigError, FrameError};
pub use pipeline::{GestureRecognizer, classify_frame};
pub use types::{Frame, GestureLabel, GestureResult, RecognizedFrame};
