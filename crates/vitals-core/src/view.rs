// File: crates/vitals-core/src/view.rs
// Summary: Data bounds and axis resolution (fixed bounds from options, the rest autoscaled).

use crate::axis::Axis;
use crate::options::{AxisOptions, PlotOptions};
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Extent of all finite samples; unit box when there are none.
    pub fn from_series(series: &[Series]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.data {
                if !(x.is_finite() && y.is_finite()) { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }
}

/// Resolve both axes: configured bounds win, missing ones come from the data.
pub fn resolve_axes(options: &PlotOptions, series: &[Series]) -> (Axis, Axis) {
    let needs_data = [options.xaxis.min, options.xaxis.max, options.yaxis.min, options.yaxis.max]
        .iter()
        .any(Option::is_none);
    let data = if needs_data { DataBounds::from_series(series) } else { DataBounds { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 } };
    let x = resolve_one(&options.xaxis, data.x_min, data.x_max);
    let y = resolve_one(&options.yaxis, data.y_min, data.y_max);
    (x, y)
}

fn resolve_one(opts: &AxisOptions, data_min: f64, data_max: f64) -> Axis {
    let label = opts.label.clone().unwrap_or_default();
    let mut min = opts.min.unwrap_or(data_min);
    let mut max = opts.max.unwrap_or(data_max);
    if max <= min {
        // One fixed bound on the wrong side of the data.
        match (opts.min, opts.max) {
            (Some(_), None) => max = min + 1.0,
            _ => min = max - 1.0,
        }
    }
    Axis::new(label, min, max)
}
