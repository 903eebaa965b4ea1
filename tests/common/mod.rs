#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

pub use gesture_hull::{
    ClassifierConfig, Frame, GestureLabel, GestureRecognizer, GestureResult, RecognizedFrame,
    classify_frame,
};
