use std::{fs::File, io::BufWriter, path::PathBuf};

use common::{Trajectory, TrajError};
use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame,
};
use tempfile::TempDir;

use crate::{
    frame::{render_frame, window_bounds},
    ExportError, GifConfig,
};

/// What a successful export produced
#[derive(Debug)]
pub struct GifExport {
    /// Path of the assembled GIF
    pub gif_path: PathBuf,
    /// Frame indices that were rendered, in order
    pub frame_indices: Vec<usize>,
    /// The retained frame directory, present only when cleanup was disabled
    pub frame_dir: Option<PathBuf>,
}

/// Render the interior frames of the configured window to per-frame PNGs in a
/// per-call temporary directory, then assemble them into an animated GIF at
/// `config.gif_name`.
///
/// The frame directory is removed on every exit path unless `config.cleanup`
/// is disabled, in which case its path is reported in the returned [`GifExport`].
pub fn create_animated_trajectory_gif(
    trajectories: &[Trajectory],
    config: &GifConfig,
) -> Result<GifExport, ExportError> {
    let frame_indices = config.window.interior_indices();

    // Validate the window against every trajectory before touching the disk,
    // so a doomed call writes no partial artifacts.
    if let Some(&last) = frame_indices.last() {
        for traj in trajectories {
            if last >= traj.len() {
                return Err(TrajError::FrameOutOfRange {
                    index: last,
                    label: traj.label().to_string(),
                    len: traj.len(),
                }
                .into());
            }
        }
    }

    let frame_dir = TempDir::with_prefix("traj_frames_")?;
    let bounds = window_bounds(
        trajectories,
        config.window.start,
        frame_indices.last().map(|&last| last + 1).unwrap_or(config.window.start),
    );

    let mut frame_paths = Vec::with_capacity(frame_indices.len());
    for &i in &frame_indices {
        let path = frame_dir.path().join(format!("frame_{}.png", i));
        render_frame(&path, trajectories, config.window.start, i, bounds, config.dims)?;
        debug!("rendered frame {} to {}", i, path.display());
        frame_paths.push(path);
    }
    info!("rendered {} frames", frame_paths.len());

    let out = BufWriter::new(File::create(&config.gif_name)?);
    let mut encoder = GifEncoder::new(out);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_saturating_duration(config.frame_duration);
    for path in &frame_paths {
        let img = image::open(path)?.to_rgba8();
        encoder.encode_frame(Frame::from_parts(img, 0, 0, delay))?;
    }
    drop(encoder);
    info!("wrote animated gif to {}", config.gif_name.display());

    let frame_dir = if config.cleanup {
        frame_dir.close()?;
        None
    } else {
        Some(frame_dir.keep())
    };

    Ok(GifExport {
        gif_path: config.gif_name.clone(),
        frame_indices,
        frame_dir,
    })
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use common::{FrameWindow, PALETTE};
    use image::{codecs::gif::GifDecoder, AnimationDecoder};

    use super::*;

    fn sample_trajectories(len: usize) -> Vec<Trajectory> {
        let ts = || (0..len).map(|i| i as f64 * 0.05);
        let circle = Trajectory::new(
            "circle",
            PALETTE[0],
            ts().map(f64::cos).collect(),
            ts().map(f64::sin).collect(),
        )
        .unwrap();
        let drift = Trajectory::new(
            "drift",
            PALETTE[1],
            ts().collect(),
            ts().map(|t| (2.0 * t).sin()).collect(),
        )
        .unwrap();
        vec![circle, drift]
    }

    fn gif_frame_count(path: &std::path::Path) -> usize {
        let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
        decoder.into_frames().collect_frames().unwrap().len()
    }

    fn test_config(dir: &std::path::Path, cleanup: bool) -> GifConfig {
        GifConfig {
            window: FrameWindow::new(0, 100, 25),
            dims: (320, 240),
            gif_name: dir.join("trajectories.gif"),
            cleanup,
            ..GifConfig::default()
        }
    }

    #[test]
    fn exports_interior_frames_and_cleans_up() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let out_dir = TempDir::with_prefix("traj_gif_test_").unwrap();
        let trajectories = sample_trajectories(200);
        let config = test_config(out_dir.path(), true);

        // Two identical runs: both must leave no frame files and both must
        // produce a three-frame GIF.
        for _ in 0..2 {
            let export = create_animated_trajectory_gif(&trajectories, &config).unwrap();
            assert_eq!(export.frame_indices, vec![25, 50, 75]);
            assert!(export.frame_dir.is_none());
            assert_eq!(gif_frame_count(&export.gif_path), 3);
        }
    }

    #[test]
    fn cleanup_disabled_keeps_frame_files() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let out_dir = TempDir::with_prefix("traj_gif_test_").unwrap();
        let trajectories = sample_trajectories(200);
        let config = test_config(out_dir.path(), false);

        let export = create_animated_trajectory_gif(&trajectories, &config).unwrap();
        let frame_dir = export.frame_dir.expect("frame dir must be retained");
        for i in [25, 50, 75] {
            assert!(frame_dir.join(format!("frame_{}.png", i)).is_file());
        }
        std::fs::remove_dir_all(&frame_dir).unwrap();
    }

    #[test]
    fn window_beyond_trajectory_is_rejected() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let out_dir = TempDir::with_prefix("traj_gif_test_").unwrap();
        let trajectories = sample_trajectories(50);
        let config = test_config(out_dir.path(), true);

        match create_animated_trajectory_gif(&trajectories, &config) {
            Err(ExportError::Trajectory(TrajError::FrameOutOfRange { index, len, .. })) => {
                assert_eq!(index, 75);
                assert_eq!(len, 50);
            }
            other => panic!("expected FrameOutOfRange, got {:?}", other.map(|e| e.frame_indices)),
        }
        // validation failed before any rendering, so no output file exists
        assert!(!config.gif_name.exists());
    }

    #[test]
    fn empty_window_writes_no_frames() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let out_dir = TempDir::with_prefix("traj_gif_test_").unwrap();
        let trajectories = sample_trajectories(10);
        let config = GifConfig {
            window: FrameWindow::new(0, 5, 10),
            gif_name: out_dir.path().join("empty.gif"),
            ..GifConfig::default()
        };

        let export = create_animated_trajectory_gif(&trajectories, &config).unwrap();
        assert!(export.frame_indices.is_empty());
    }
}
