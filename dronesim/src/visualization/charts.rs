//! Static PNG charts of a finished run
//!
//! One row per axis: position against time with the target as a dashed
//! line on the left, net force and its P/I/D components on the right

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::simulation::history::{History, Series};

/// Pixel size of one chart panel
const PANEL_WIDTH: u32 = 640;
const PANEL_HEIGHT: u32 = 320;

/// Render `history` as a PNG at `path`, one row of two panels per axis
pub fn generate_history_chart(history: &History, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    if history.is_empty() {
        return Err("history has no records to plot".into());
    }

    let dim = history.dimension();
    let size = (2 * PANEL_WIDTH, dim as u32 * PANEL_HEIGHT);
    let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    root.fill(&WHITE)?;

    let times = history.times();
    let t_range = padded_range(times.iter().copied());
    let panels = root.split_evenly((dim, 2));

    for (axis, row) in panels.chunks(2).enumerate() {
        let target = history.desired_position()[axis];

        // position vs time
        let position = history.axis_series(axis, Series::Position);
        let y_range = padded_range(position.iter().copied().chain(std::iter::once(target)));

        let mut chart = ChartBuilder::on(&row[0])
            .caption(format!("Axis {axis}: position"), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(t_range.clone(), y_range)?;

        chart.configure_mesh().x_desc("Time (s)").y_desc("Position").draw()?;

        chart
            .draw_series(LineSeries::new(times.iter().copied().zip(position.iter().copied()), &BLUE))?
            .label("position")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
        chart
            .draw_series(DashedLineSeries::new(
                vec![(t_range.start, target), (t_range.end, target)],
                8,
                6,
                BLACK.stroke_width(1),
            ))?
            .label("target")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));
        chart.configure_series_labels().border_style(&BLACK).background_style(&WHITE.mix(0.8)).draw()?;

        // net force and its components
        let components = [
            (Series::NetForce, "total", RED),
            (Series::Proportional, "P", GREEN),
            (Series::Integral, "I", MAGENTA),
            (Series::Derivative, "D", CYAN),
        ];
        let columns: Vec<Vec<f64>> = components
            .iter()
            .map(|(series, _, _)| history.axis_series(axis, *series))
            .collect();
        let f_range = padded_range(columns.iter().flatten().copied());

        let mut chart = ChartBuilder::on(&row[1])
            .caption(format!("Axis {axis}: force"), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(t_range.clone(), f_range)?;

        chart.configure_mesh().x_desc("Time (s)").y_desc("Force").draw()?;

        for ((_, label, color), values) in components.iter().zip(&columns) {
            let color = *color;
            chart
                .draw_series(LineSeries::new(times.iter().copied().zip(values.iter().copied()), &color))?
                .label(*label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
        chart.configure_series_labels().border_style(&BLACK).background_style(&WHITE.mix(0.8)).draw()?;
    }

    root.present()?;
    Ok(())
}

/// Range covering every finite value with a 5% margin; never empty
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return 0.0..1.0;
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 * lo.abs().max(1.0) };
    (lo - pad)..(hi + pad)
}
