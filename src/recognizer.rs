use std::thread;

use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::{
    pipeline::GestureRecognizer,
    types::{Frame, RecognizedFrame},
};

/// Spawns the recognition worker. It runs until `frame_rx` disconnects.
pub fn start_recognizer(
    recognizer: GestureRecognizer,
    frame_rx: Receiver<Frame>,
    result_tx: Sender<RecognizedFrame>,
) -> thread::JoinHandle<()> {
    log::info!(
        "starting contour recognizer (min area {:.0}px², defect depth {:.1}px)",
        recognizer.config().min_contour_area,
        recognizer.config().defect_depth_threshold
    );

    thread::spawn(move || run_worker_loop(&recognizer, &frame_rx, &result_tx))
}

/// Waits for the worker to exit. Returns `false` (and logs) if it panicked.
pub fn join_recognizer(handle: thread::JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(_) => {
            log::warn!("recognizer thread panicked");
            false
        }
    }
}

fn run_worker_loop(
    recognizer: &GestureRecognizer,
    frame_rx: &Receiver<Frame>,
    result_tx: &Sender<RecognizedFrame>,
) {
    while let Some(frame) = recv_latest_frame(frame_rx) {
        match recognizer.recognize(frame) {
            // Drop if the presenter is behind; the next frame supersedes it.
            Ok(recognized) => match result_tx.try_send(recognized) {
                Ok(()) | Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => {
                    log::info!("result receiver closed, stopping recognizer");
                    return;
                }
            },
            Err(err) => {
                log::warn!("skipping malformed frame: {err}");
            }
        }
    }
    log::info!("frame source closed, recognizer exiting");
}

fn recv_latest_frame(frame_rx: &Receiver<Frame>) -> Option<Frame> {
    let mut frame = frame_rx.recv().ok()?;
    // Drop stale frames if the recognizer is still busy to avoid backlog.
    while let Ok(newer) = frame_rx.try_recv() {
        frame = newer;
    }
    Some(frame)
}
