use common::{default_colors, default_labels, Path, Table, Trajectory};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};

use crate::{ViewerError, ViewerOptions};

/// A slider-driven trajectory figure for a native window
pub struct TrajectoryViewer {
    trajectories: Vec<Trajectory>,
    start: usize,
    end: usize,
    step: usize,
    frame: usize,
    width: f32,
    height: f32,
    title: String,
}

/// Resolve (x-column, y-column) pairs from the table into a slider-driven
/// trajectory viewer.
///
/// Missing columns surface as [`common::TrajError::UnknownColumn`]; more than
/// eight pairs without explicit colors as
/// [`common::TrajError::PaletteExhausted`]. No further validation happens.
pub fn dynamic_trajectory_plot(
    table: &Table,
    pairs: &[(&str, &str)],
    options: ViewerOptions,
) -> Result<TrajectoryViewer, ViewerError> {
    let n = pairs.len();
    let labels = match options.labels {
        Some(labels) => labels,
        None => default_labels(n),
    };
    let colors = match options.colors {
        Some(colors) => colors,
        None => default_colors(n)?,
    };

    let trajectories = pairs
        .iter()
        .zip(labels)
        .zip(colors)
        .map(|((&(x_col, y_col), label), color)| {
            Trajectory::from_table(table, x_col, y_col, label, color)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let end = match options.end {
        Some(end) => end,
        None => trajectories
            .first()
            .map(|t| t.len().saturating_sub(1))
            .unwrap_or(0),
    };

    Ok(TrajectoryViewer {
        trajectories,
        start: options.start,
        end,
        step: options.step,
        frame: options.start,
        width: options.width,
        height: options.height,
        title: options.title,
    })
}

impl TrajectoryViewer {
    /// The resolved trajectories, in column-pair order
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// The slider range as (start, end, step), end inclusive
    pub fn slider_range(&self) -> (usize, usize, usize) {
        (self.start, self.end, self.step)
    }

    /// The currently selected frame index
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Per-trajectory cumulative path (indices `0..i`) and current-position
    /// marker for frame `i`. The marker is absent past the trajectory's end.
    pub fn frame_layers(&self, i: usize) -> Vec<(Path, Option<[f64; 2]>)> {
        self.trajectories
            .iter()
            .map(|t| (t.path_until(i), t.position(i).ok()))
            .collect()
    }

    /// Open a native window of the configured size and hand control to the
    /// event loop until the window is closed
    pub fn run(self) -> Result<(), ViewerError> {
        info!(
            "launching viewer \"{}\" with {} trajectories, frames {}..={} step {}",
            self.title,
            self.trajectories.len(),
            self.start,
            self.end,
            self.step
        );
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([self.width, self.height]),
            ..Default::default()
        };
        let title = self.title.clone();
        eframe::run_native(&title, native_options, Box::new(|_cc| Ok(Box::new(self))))?;
        Ok(())
    }
}

impl eframe::App for TrajectoryViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("frame_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Frame:");
                ui.add(
                    egui::Slider::new(&mut self.frame, self.start..=self.end)
                        .step_by(self.step as f64),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("{} - Frame {}", self.title, self.frame));

            let layers = self.frame_layers(self.frame);
            Plot::new("trajectory_plot")
                .legend(Legend::default().position(Corner::RightTop))
                .x_axis_label("X Position")
                .y_axis_label("Y Position")
                .show(ui, |plot_ui| {
                    for (traj, (path, _)) in self.trajectories.iter().zip(&layers) {
                        let points: PlotPoints = path.clone().into();
                        let color = Color32::from_rgb(traj.color().r, traj.color().g, traj.color().b);
                        plot_ui.line(Line::new(traj.label(), points).color(color));
                    }
                    for (_, marker) in &layers {
                        if let Some(pos) = *marker {
                            plot_ui.points(
                                Points::new("", vec![pos]).radius(5.0).color(Color32::BLACK),
                            );
                        }
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use common::{TrajError, PALETTE};

    use super::*;

    fn sample_table(len: usize) -> Table {
        let ts = || (0..len).map(|i| i as f64 * 0.1);
        let mut table = Table::new();
        table.insert_column("a_x", ts().map(f64::cos).collect());
        table.insert_column("a_y", ts().map(f64::sin).collect());
        table.insert_column("b_x", ts().collect());
        table.insert_column("b_y", ts().map(|t| t * t).collect());
        table
    }

    #[test]
    fn defaults_resolved_from_table() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let table = sample_table(100);
        let viewer = dynamic_trajectory_plot(
            &table,
            &[("a_x", "a_y"), ("b_x", "b_y")],
            ViewerOptions::default(),
        )
        .unwrap();

        let labels: Vec<&str> = viewer.trajectories().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Trajectory 1", "Trajectory 2"]);
        assert_eq!(viewer.trajectories()[0].color(), PALETTE[0]);
        assert_eq!(viewer.trajectories()[1].color(), PALETTE[1]);
        // end defaults to the last valid index of the first x column
        assert_eq!(viewer.slider_range(), (0, 99, 1));
        assert_eq!(viewer.frame(), 0);
    }

    #[test]
    fn frame_layers_hold_cumulative_paths_and_markers() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let table = sample_table(100);
        let viewer = dynamic_trajectory_plot(
            &table,
            &[("a_x", "a_y"), ("b_x", "b_y")],
            ViewerOptions::default(),
        )
        .unwrap();

        let layers = viewer.frame_layers(50);
        assert_eq!(layers.len(), 2);
        for (path, marker) in &layers {
            assert_eq!(path.len(), 50);
            assert!(marker.is_some());
        }
        // past the end of the data the marker disappears but the path stays
        let layers = viewer.frame_layers(100);
        for (path, marker) in &layers {
            assert_eq!(path.len(), 100);
            assert!(marker.is_none());
        }
    }

    #[test]
    fn explicit_labels_and_window() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let table = sample_table(100);
        let options = ViewerOptions {
            labels: Some(vec!["Surgeon C7".to_string(), "Robot HTop".to_string()]),
            start: 10,
            end: Some(90),
            step: 5,
            ..ViewerOptions::default()
        };
        let viewer =
            dynamic_trajectory_plot(&table, &[("a_x", "a_y"), ("b_x", "b_y")], options).unwrap();
        assert_eq!(viewer.trajectories()[0].label(), "Surgeon C7");
        assert_eq!(viewer.slider_range(), (10, 90, 5));
        assert_eq!(viewer.frame(), 10);
    }

    #[test]
    fn unknown_column_surfaces() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let table = sample_table(10);
        match dynamic_trajectory_plot(&table, &[("a_x", "missing")], ViewerOptions::default()) {
            Err(ViewerError::Trajectory(TrajError::UnknownColumn(col))) => {
                assert_eq!(col, "missing");
            }
            _ => panic!("expected UnknownColumn"),
        }
    }

    #[test]
    fn too_many_default_colored_pairs() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let table = sample_table(10);
        let pairs = vec![("a_x", "a_y"); 9];
        match dynamic_trajectory_plot(&table, &pairs, ViewerOptions::default()) {
            Err(ViewerError::Trajectory(TrajError::PaletteExhausted { requested, .. })) => {
                assert_eq!(requested, 9);
            }
            _ => panic!("expected PaletteExhausted"),
        }
    }
}
