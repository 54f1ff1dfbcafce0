// File: crates/vitals-core/src/target.rs
// Summary: Plot targets: anything that takes an ordered series list plus options and plots it.

use std::path::PathBuf;

use serde_json::{json, Value};
use tracing::info;

use crate::chart::{Chart, RenderOptions};
use crate::error::Result;
use crate::options::PlotOptions;
use crate::series::Series;
use crate::theme::Theme;

/// Display surface for one plot call.
pub trait PlotTarget {
    fn plot(&mut self, series: &[Series], options: &PlotOptions) -> Result<()>;
}

/// Rasterizes with [`Chart`] and writes a PNG file.
pub struct PngTarget {
    pub path: PathBuf,
    pub render: RenderOptions,
    pub theme: Theme,
}

impl PngTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), render: RenderOptions::default(), theme: Theme::default() }
    }
}

impl PlotTarget for PngTarget {
    fn plot(&mut self, series: &[Series], options: &PlotOptions) -> Result<()> {
        options.validate()?;
        let chart = Chart::with_series(options.clone(), series.to_vec()).with_theme(self.theme);
        chart.render_to_png(&self.render, &self.path)
    }
}

/// Writes the flot call payload (`series` + `options`) as JSON.
pub struct FlotJsonTarget {
    pub path: PathBuf,
}

impl FlotJsonTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlotTarget for FlotJsonTarget {
    fn plot(&mut self, series: &[Series], options: &PlotOptions) -> Result<()> {
        options.validate()?;
        let payload = flot_payload(series, options)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&payload)?)?;
        info!(path = %self.path.display(), "wrote flot payload");
        Ok(())
    }
}

/// `{"series": [{"data": [[x, y], ...], "label": ...}], "options": {...}}`
pub fn flot_payload(series: &[Series], options: &PlotOptions) -> Result<Value> {
    let series: Vec<Value> = series
        .iter()
        .map(|s| {
            let data: Vec<[f64; 2]> = s.data.iter().map(|&(x, y)| [x, y]).collect();
            json!({ "data": data, "label": s.label })
        })
        .collect();
    Ok(json!({ "series": series, "options": options.to_json_value()? }))
}
