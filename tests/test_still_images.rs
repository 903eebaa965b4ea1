mod common;

use common::*;
use gesture_hull::still::{load_frame, save_frame};

#[test]
fn classifies_a_hand_loaded_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let input = dir.path().join("hand.png");
    save_frame(&star_frame(200.0, &[80.0, 80.0, 80.0, 80.0, 150.0]), &input)?;

    let frame = load_frame(&input)?;
    assert_eq!((frame.width, frame.height), (WIDTH, HEIGHT));

    let RecognizedFrame { frame, result } = GestureRecognizer::default().recognize(frame)?;
    assert_eq!(result.label, GestureLabel::OpenHand);

    let annotated = dir.path().join("hand_annotated.png");
    save_frame(&frame, &annotated)?;
    assert_eq!(load_frame(&annotated)?.pixels, frame.pixels);
    Ok(())
}

#[test]
fn jpeg_input_is_decoded_to_rgb() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("disc.jpg");
    save_frame(&disc_frame((320, 240), 150), &path)?;

    let frame = load_frame(&path)?;
    assert_eq!(frame.channels, 3);
    let result = classify_frame(frame, &ClassifierConfig::default())?.result;
    assert_eq!(result.label, GestureLabel::ClosedFist);
    Ok(())
}
