use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use gesture_hull::{
    ClassifierConfig, GestureRecognizer, RecognizedFrame,
    still::{load_frame, save_frame},
};

#[derive(Parser)]
#[command(name = "gesture-hull")]
#[command(about = "Recognise a closed fist or an open hand from images or a webcam")]
struct Cli {
    /// Images to classify; the camera is used when none are given
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Write annotated frames into this directory
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Smallest contour area (px²) accepted as a hand
    #[arg(long, value_name = "A")]
    min_area: Option<f64>,

    /// Defect depth (px) a finger valley must exceed
    #[arg(long, value_name = "D")]
    depth: Option<f64>,

    /// Stop the camera loop after this many results
    #[arg(long, value_name = "N")]
    frames: Option<usize>,

    /// Camera position in the enumerated device list
    #[arg(long, value_name = "I", default_value_t = 0)]
    camera: usize,

    /// Print available cameras and exit
    #[arg(long)]
    list_cameras: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ClassifierConfig::default();
    if let Some(area) = cli.min_area {
        config = config.with_min_contour_area(area);
    }
    if let Some(depth) = cli.depth {
        config = config.with_defect_depth_threshold(depth);
    }
    let recognizer = GestureRecognizer::new(config).context("invalid classifier settings")?;

    if let Some(dir) = &cli.out {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    if cli.list_cameras {
        return list_cameras();
    }

    if cli.images.is_empty() {
        run_camera(recognizer, &cli)
    } else {
        run_images(&recognizer, &cli.images, cli.out.as_deref())
    }
}

fn run_images(recognizer: &GestureRecognizer, images: &[PathBuf], out: Option<&Path>) -> Result<()> {
    for path in images {
        let frame = load_frame(path)?;
        let RecognizedFrame { frame, result } = recognizer
            .recognize(frame)
            .with_context(|| format!("failed to classify {}", path.display()))?;

        if result.hand_detected() {
            println!(
                "{} -> {} ({} defects)",
                path.display(),
                result.label,
                result.defect_count
            );
        } else {
            println!("{} -> no hand found", path.display());
        }

        if let Some(dir) = out {
            let name = path
                .file_stem()
                .map(|stem| format!("{}_annotated.png", stem.to_string_lossy()))
                .unwrap_or_else(|| "annotated.png".to_owned());
            save_frame(&frame, dir.join(name))?;
        }
    }
    Ok(())
}

#[cfg(feature = "camera-nokhwa")]
fn list_cameras() -> Result<()> {
    let cameras = gesture_hull::camera::available_cameras().context("failed to query cameras")?;
    if cameras.is_empty() {
        println!("no cameras found");
    }
    for (pos, device) in cameras.iter().enumerate() {
        println!("{pos}: {}", device.label);
    }
    Ok(())
}

#[cfg(not(feature = "camera-nokhwa"))]
fn list_cameras() -> Result<()> {
    anyhow::bail!("built without camera support (enable the `camera-nokhwa` feature)")
}

#[cfg(feature = "camera-nokhwa")]
fn run_camera(recognizer: GestureRecognizer, cli: &Cli) -> Result<()> {
    use crossbeam_channel::bounded;
    use gesture_hull::{
        GestureLabel, camera,
        recognizer::{join_recognizer, start_recognizer},
    };

    let cameras = camera::available_cameras().context("failed to query cameras")?;
    let device = cameras
        .get(cli.camera)
        .with_context(|| format!("no camera at position {} ({} found)", cli.camera, cameras.len()))?;
    log::info!("using camera {}", device.label);

    let (frame_tx, frame_rx) = bounded(1);
    let (result_tx, result_rx) = bounded(1);
    let stream = camera::start_camera_stream(device.index.clone(), frame_tx)?;
    let worker = start_recognizer(recognizer, frame_rx, result_tx);

    let latest_path = cli.out.as_ref().map(|dir| dir.join("latest.png"));
    let mut last_label: Option<GestureLabel> = None;
    let mut seen = 0usize;

    while let Ok(RecognizedFrame { frame, result }) = result_rx.recv() {
        seen += 1;
        if last_label != Some(result.label) {
            log::info!(
                "{} ({} defects, hand {})",
                result.display_text(),
                result.defect_count,
                if result.hand_detected() { "found" } else { "missing" }
            );
            last_label = Some(result.label);
        }

        if let Some(path) = &latest_path {
            if let Err(err) = save_frame(&frame, path) {
                log::warn!("{err:#}");
            }
        }

        if cli.frames.is_some_and(|limit| seen >= limit) {
            break;
        }
    }

    stream.stop();
    drop(result_rx);
    join_recognizer(worker);
    Ok(())
}

#[cfg(not(feature = "camera-nokhwa"))]
fn run_camera(_recognizer: GestureRecognizer, _cli: &Cli) -> Result<()> {
    anyhow::bail!("no images given and built without camera support (enable the `camera-nokhwa` feature)")
}
