#[macro_use]
extern crate log;

use std::{path::PathBuf, time::Duration};

use common::{default_colors, FrameWindow, Table, Trajectory};
use dialoguer::{theme::ColorfulTheme, Select};
use traj_plot::{create_animated_trajectory_gif, GifConfig};
use traj_view::{dynamic_trajectory_plot, ViewerOptions};

const N_SAMPLES: usize = 2_000;

fn main() {
    pretty_env_logger::init();

    let table = sample_table(N_SAMPLES);
    info!("generated {} samples per trajectory", N_SAMPLES);

    let modes = vec!["Interactive viewer", "Export animated GIF"];
    let mode = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select output")
        .items(&modes)
        .default(0)
        .interact()
        .unwrap();
    match mode {
        0 => {
            let options = ViewerOptions {
                labels: Some(vec!["Circle".to_string(), "Lissajous".to_string()]),
                step: 10,
                title: "Lissajous Demo".to_string(),
                ..ViewerOptions::default()
            };
            let viewer = dynamic_trajectory_plot(
                &table,
                &[("circle_x", "circle_y"), ("lissajous_x", "lissajous_y")],
                options,
            )
            .unwrap();
            viewer.run().unwrap();
        }
        1 => {
            let colors = default_colors(2).unwrap();
            let trajectories = vec![
                Trajectory::from_table(&table, "circle_x", "circle_y", "Circle", colors[0])
                    .unwrap(),
                Trajectory::from_table(
                    &table,
                    "lissajous_x",
                    "lissajous_y",
                    "Lissajous",
                    colors[1],
                )
                .unwrap(),
            ];
            let config = GifConfig {
                window: FrameWindow::new(0, N_SAMPLES, 50),
                gif_name: PathBuf::from("lissajous.gif"),
                frame_duration: Duration::from_millis(100),
                ..GifConfig::default()
            };
            let export = create_animated_trajectory_gif(&trajectories, &config).unwrap();
            info!(
                "exported {} frames to {}",
                export.frame_indices.len(),
                export.gif_path.display()
            );
        }
        _ => panic!("invalid output selection"),
    }
}

fn sample_table(n: usize) -> Table {
    let ts = || (0..n).map(|i| i as f64 * 0.01);
    let mut table = Table::new();
    table.insert_column("circle_x", ts().map(f64::cos).collect());
    table.insert_column("circle_y", ts().map(f64::sin).collect());
    table.insert_column("lissajous_x", ts().map(|t| (3.0 * t).sin()).collect());
    table.insert_column("lissajous_y", ts().map(|t| (2.0 * t).sin()).collect());
    table
}
