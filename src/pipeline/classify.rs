use crate::{config::GestureThresholds, types::GestureLabel};

/// Maps a finger-valley count to a label. A fist shows at most one valley, a
/// spread hand shows one between each pair of neighbouring fingers.
pub fn label_for(defect_count: usize, thresholds: &GestureThresholds) -> GestureLabel {
    if defect_count <= thresholds.closed_fist_max {
        GestureLabel::ClosedFist
    } else if defect_count == thresholds.open_hand {
        GestureLabel::OpenHand
    } else {
        GestureLabel::Unknown
    }
}
