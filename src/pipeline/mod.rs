pub mod annotate;
pub mod classify;
pub mod contours;
pub mod hull;
pub mod morphology;
pub mod segment;
pub mod selector;

use crate::{
    config::ClassifierConfig,
    error::{ConfigError, FrameError},
    types::{Frame, GestureResult, HandGeometry, RecognizedFrame},
};

use self::morphology::StructuringElement;

/// Runs one frame through segmentation, cleanup, contour selection, hull
/// analysis and classification, and draws the overlay when a hand is found.
///
/// Only malformed frames are errors. A frame without a hand comes back
/// untouched with an `Unknown` result.
pub fn classify_frame(frame: Frame, config: &ClassifierConfig) -> Result<RecognizedFrame, FrameError> {
    let kernel = StructuringElement::from(config.kernel);
    run(frame, config, &kernel)
}

fn run(
    mut frame: Frame,
    config: &ClassifierConfig,
    kernel: &StructuringElement,
) -> Result<RecognizedFrame, FrameError> {
    let mask = segment::skin_mask(&frame, &config.skin)?;
    let cleaned = morphology::clean_mask(&mask, kernel);
    drop(mask);

    let candidates = contours::external_contours(&cleaned);
    log::debug!(
        "{}x{} frame: {} skin pixels after cleanup, {} contours",
        frame.width,
        frame.height,
        cleaned.pixels().filter(|p| p[0] != 0).count(),
        candidates.len()
    );
    drop(cleaned);

    let Some((contour, area)) = selector::select_hand(candidates, config.min_contour_area) else {
        return Ok(RecognizedFrame {
            result: GestureResult::no_hand(frame.timestamp),
            frame,
        });
    };

    let analysis = hull::analyze(&contour, config.defect_depth_threshold);
    let defect_count = analysis.defect_count();
    let label = classify::label_for(defect_count, &config.gestures);
    log::debug!(
        "hand contour: {} points, area {area:.0}, hull {} points, {defect_count} defects -> {label}",
        contour.len(),
        analysis.hull.len(),
    );

    let result = GestureResult {
        label,
        defect_count,
        timestamp: frame.timestamp,
        hand: Some(HandGeometry {
            contour,
            area,
            hull: analysis.hull,
            defects: analysis.defects,
        }),
    };

    if let Some(hand) = &result.hand {
        annotate::annotate(&mut frame, hand, &result.display_text());
    }

    Ok(RecognizedFrame { frame, result })
}

/// Holds a validated configuration and its structuring element. Stateless
/// between frames, so one instance can serve a worker thread indefinitely.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: ClassifierConfig,
    kernel: StructuringElement,
}

impl GestureRecognizer {
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let kernel = StructuringElement::from(config.kernel);
        Ok(Self { config, kernel })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn recognize(&self, frame: Frame) -> Result<RecognizedFrame, FrameError> {
        run(frame, &self.config, &self.kernel)
    }
}
