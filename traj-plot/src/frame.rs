use std::path::Path;

use common::Trajectory;
use plotters::prelude::*;

use crate::error::{draw_err, ExportError};

/// Axis bounds shared by every frame of an export, so the axes do not
/// jitter as the paths grow
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Scan all points drawn within the half-open window `from..to` and pad the
/// extent by 5% (0.5 absolute for constant series)
pub(crate) fn window_bounds(trajectories: &[Trajectory], from: usize, to: usize) -> Bounds {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for traj in trajectories {
        for [x, y] in traj.path_between(from, to) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return Bounds {
            x: (0.0, 1.0),
            y: (0.0, 1.0),
        };
    }

    let pad = |min: f64, max: f64| {
        let span = max - min;
        if span == 0.0 {
            (min - 0.5, max + 0.5)
        } else {
            (min - 0.05 * span, max + 0.05 * span)
        }
    };
    Bounds {
        x: pad(x_min, x_max),
        y: pad(y_min, y_max),
    }
}

fn rgb(c: common::Color) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Render a single frame to a PNG: each trajectory's path over `from..i` in
/// its own color plus a black marker at position `i`, with legend and grid
pub(crate) fn render_frame(
    path: &Path,
    trajectories: &[Trajectory],
    from: usize,
    i: usize,
    bounds: Bounds,
    dims: (u32, u32),
) -> Result<(), ExportError> {
    let root = BitMapBackend::new(path, dims).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .set_all_label_area_size(50)
        .caption(format!("Frame {}", i), ("sans-serif", 30).into_font())
        .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
        .map_err(draw_err)?;
    chart
        .configure_mesh()
        .x_labels(20)
        .y_labels(20)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()
        .map_err(draw_err)?;

    for traj in trajectories {
        let color = rgb(traj.color());
        let points = traj.path_between(from, i).into_iter().map(|p| (p[0], p[1]));
        chart
            .draw_series(LineSeries::new(points, color))
            .map_err(draw_err)?
            .label(traj.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    for traj in trajectories {
        let [x, y] = traj.position(i)?;
        chart
            .draw_series(std::iter::once(Circle::new((x, y), 5, BLACK.filled())))
            .map_err(draw_err)?;
    }
    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;

    Ok(())
}
