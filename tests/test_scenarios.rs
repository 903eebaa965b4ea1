mod common;

use common::*;
use gesture_hull::FrameError;

fn classify(frame: Frame) -> RecognizedFrame {
    classify_frame(frame, &ClassifierConfig::default()).expect("well-formed frame")
}

fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 3] {
    let idx = (y as usize * frame.width as usize + x as usize) * 3;
    [frame.pixels[idx], frame.pixels[idx + 1], frame.pixels[idx + 2]]
}

#[test]
fn filled_disc_is_a_closed_fist() {
    let input = disc_frame((320, 240), 150);
    let out = classify(input.clone());

    assert_eq!(out.result.label, GestureLabel::ClosedFist);
    assert_eq!(out.result.defect_count, 0);
    let hand = out.result.hand.as_ref().expect("disc is large enough");
    let expected = std::f64::consts::PI * 150.0 * 150.0;
    assert!((hand.area - expected).abs() / expected < 0.05, "area {}", hand.area);
    assert_ne!(out.frame, input, "overlay should be drawn");
}

#[test]
fn five_point_star_is_an_open_hand() {
    let valleys = [80.0, 80.0, 80.0, 80.0, 150.0];
    assert!(valley_depth(5, 200.0, 150.0) < 20.0);
    assert!(valley_depth(5, 200.0, 80.0) > 60.0);

    let out = classify(star_frame(200.0, &valleys));
    assert_eq!(out.result.defect_count, 4);
    assert_eq!(out.result.label, GestureLabel::OpenHand);
    assert_eq!(out.result.display_text(), "GESTURE: Open Hand");

    let hand = out.result.hand.as_ref().expect("star is large enough");
    assert_eq!(hand.markers().len(), 4);
    assert!(hand.defects.iter().all(|d| d.depth > 20.0));
    // top-left cell of the 'G' in the label
    assert_eq!(pixel(&out.frame, 13, 29), [0, 255, 0]);
}

#[test]
fn three_valleys_is_an_unknown_hand() {
    let out = classify(star_frame(200.0, &[70.0, 70.0, 70.0, 130.0]));
    assert_eq!(out.result.defect_count, 3);
    assert_eq!(out.result.label, GestureLabel::Unknown);
    assert!(out.result.hand_detected());
}

#[test]
fn black_frame_is_unknown_and_untouched() {
    let input = frame_of(blank_canvas());
    let out = classify(input.clone());

    assert_eq!(out.result.label, GestureLabel::Unknown);
    assert_eq!(out.result.defect_count, 0);
    assert!(!out.result.hand_detected());
    assert_eq!(out.result.timestamp, input.timestamp);
    assert_eq!(out.frame, input);
}

#[test]
fn largest_blob_is_selected() {
    for squares in [
        vec![(40, 40, 71), (300, 150, 225)],
        vec![(20, 20, 120), (300, 150, 225)],
    ] {
        let out = classify(squares_frame(&squares));
        let hand = out.result.hand.expect("large square qualifies");
        assert!(hand.area > 45_000.0 && hand.area <= 224.0 * 224.0, "area {}", hand.area);
        assert!(
            hand.contour
                .points
                .iter()
                .all(|p| (300..525).contains(&p.x) && (150..375).contains(&p.y))
        );
        assert_eq!(out.result.label, GestureLabel::ClosedFist);
    }
}

#[test]
fn small_blob_alone_is_ignored() {
    let frame = squares_frame(&[(100, 100, 90)]);
    let out = classify(frame.clone());
    assert!(!out.result.hand_detected());
    assert_eq!(out.frame, frame);

    let relaxed = ClassifierConfig::default().with_min_contour_area(5_000.0);
    let out = classify_frame(frame, &relaxed).unwrap();
    assert!(out.result.hand_detected());
    assert_eq!(out.result.label, GestureLabel::ClosedFist);
}

#[test]
fn identical_frames_give_identical_output() {
    let frame = star_frame(200.0, &[80.0, 80.0, 80.0, 80.0, 150.0]);
    let recognizer = GestureRecognizer::default();
    let first = recognizer.recognize(frame.clone()).unwrap();
    let second = recognizer.recognize(frame).unwrap();
    assert_eq!(first, second);
}

#[test]
fn hull_follows_contour_order() {
    let out = classify(star_frame(200.0, &[80.0, 80.0, 80.0, 80.0, 150.0]));
    let hand = out.result.hand.unwrap();
    assert!(hand.hull.len() >= 5);
    assert!(hand.hull.indices.windows(2).all(|w| w[0] < w[1]));
    assert!(hand.hull.indices.iter().all(|&i| i < hand.contour.len()));
}

#[test]
fn raising_depth_threshold_never_adds_defects() {
    let frame = star_frame(200.0, &[60.0, 90.0, 110.0, 130.0, 150.0]);
    let counts: Vec<usize> = [100.0, 60.0, 40.0, 20.0, 5.0]
        .iter()
        .map(|&depth| {
            let cfg = ClassifierConfig::default().with_defect_depth_threshold(depth);
            classify_frame(frame.clone(), &cfg).unwrap().result.defect_count
        })
        .collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
    assert!(counts[0] < counts[4]);
}

#[test]
fn malformed_frames_are_rejected() {
    let cfg = ClassifierConfig::default();

    let empty = Frame::from_rgb(Vec::new(), 0, 0);
    assert!(matches!(
        classify_frame(empty, &cfg),
        Err(FrameError::EmptyFrame { .. })
    ));

    let mut four = Frame::from_rgb(vec![0; 2 * 2 * 4], 2, 2);
    four.channels = 4;
    assert_eq!(classify_frame(four, &cfg).unwrap_err(), FrameError::ChannelCount(4));

    let short = Frame::from_rgb(vec![0; 10], 2, 2);
    assert_eq!(
        classify_frame(short, &cfg).unwrap_err(),
        FrameError::BufferSize {
            expected: 12,
            actual: 10
        }
    );
}
