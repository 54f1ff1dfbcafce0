// File: crates/vitals-core/src/options.rs
// Summary: Plot configuration (line/fill/point flags, grid interactivity, axis bounds, palette).
// Notes:
// - Field names serialize to the camelCase keys of the flot options object so
//   the same struct round-trips through the JSON payload and TOML config files.
// - Every struct is `#[serde(default)]`; a config file only lists overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::theme::parse_color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub series: SeriesOptions,
    pub grid: GridOptions,
    pub legend: LegendOptions,
    pub xaxis: AxisOptions,
    pub yaxis: AxisOptions,
    /// Series `i` takes `colors[i % colors.len()]`.
    pub colors: Vec<String>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            series: SeriesOptions::default(),
            grid: GridOptions::default(),
            legend: LegendOptions::default(),
            xaxis: AxisOptions::fixed(0.0, 9.0),
            yaxis: AxisOptions::fixed(-1.1, 1.1),
            colors: ["#008FC5", "#222", "#666", "#BBB", "#666", "#BBB"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    pub lines: LineOptions,
    pub points: PointOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOptions {
    pub show: bool,
    pub fill: bool,
    /// Vertical gradient for the fill, top of the plot first. `None` fills flat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<FillGradient>,
    pub line_width: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            show: true,
            fill: true,
            fill_color: Some(FillGradient::from_opacities(&[0.6, 0.2])),
            line_width: 2.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillGradient {
    pub colors: Vec<GradientStop>,
}

impl FillGradient {
    pub fn from_opacities(opacities: &[f64]) -> Self {
        Self { colors: opacities.iter().map(|&opacity| GradientStop { opacity }).collect() }
    }

    pub fn opacities(&self) -> impl Iterator<Item = f64> + '_ {
        self.colors.iter().map(|s| s.opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointOptions {
    pub show: bool,
    pub radius: f32,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self { show: true, radius: 3.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    pub hoverable: bool,
    pub clickable: bool,
    /// Pixel distance within which hover/click picks a data point.
    pub mouse_active_radius: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { hoverable: true, clickable: true, mouse_active_radius: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub show: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { show: true }
    }
}

/// Axis bounds; a missing bound is autoscaled from the data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AxisOptions {
    pub fn fixed(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max), label: None }
    }

    pub fn auto() -> Self {
        Self::default()
    }
}

impl PlotOptions {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load from a `.toml` or `.json` file, chosen by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        debug!(path = %path.display(), "loading plot options");
        match ext.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            other => Err(ChartError::option(
                "config",
                format!("unsupported config extension '{other}' for {}", path.display()),
            )),
        }
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Palette entry for the `index`-th series.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()].as_str())
    }

    pub fn validate(&self) -> Result<()> {
        for (i, c) in self.colors.iter().enumerate() {
            parse_color(c).map_err(|_| ChartError::option(format!("colors[{i}]"), format!("cannot parse color '{c}'")))?;
        }

        let lines = &self.series.lines;
        if !lines.line_width.is_finite() || lines.line_width < 0.0 {
            return Err(ChartError::option("series.lines.lineWidth", "must be a non-negative number"));
        }
        if let Some(grad) = &lines.fill_color {
            for (i, o) in grad.opacities().enumerate() {
                if !(0.0..=1.0).contains(&o) {
                    return Err(ChartError::option(
                        format!("series.lines.fillColor.colors[{i}].opacity"),
                        format!("{o} is outside [0, 1]"),
                    ));
                }
            }
        }
        let radius = self.series.points.radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ChartError::option("series.points.radius", "must be a non-negative number"));
        }
        let active = self.grid.mouse_active_radius;
        if !active.is_finite() || active < 0.0 {
            return Err(ChartError::option("grid.mouseActiveRadius", "must be a non-negative number"));
        }

        check_axis("xaxis", &self.xaxis)?;
        check_axis("yaxis", &self.yaxis)?;
        Ok(())
    }
}

fn check_axis(name: &str, axis: &AxisOptions) -> Result<()> {
    for (bound, v) in [("min", axis.min), ("max", axis.max)] {
        if let Some(v) = v {
            if !v.is_finite() {
                return Err(ChartError::option(format!("{name}.{bound}"), "must be finite"));
            }
        }
    }
    if let (Some(lo), Some(hi)) = (axis.min, axis.max) {
        if lo >= hi {
            return Err(ChartError::option(name, format!("min {lo} must be below max {hi}")));
        }
    }
    Ok(())
}
