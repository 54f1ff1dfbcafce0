// File: crates/vitals-core/src/theme.rs
// Summary: Light/Dark chrome colors and CSS color parsing for the series palette.

use std::str::FromStr;

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Colors for everything except the series themselves (those come from
/// `PlotOptions::colors`).
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White page, grey grid.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 84, 84, 84),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 84, 84, 84),
            legend_background: skia::Color::from_argb(217, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(217, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Parse `#RGB`, `#RRGGBB`, `rgb(...)` or a CSS color name.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let c = svgtypes::Color::from_str(s.trim())
        .map_err(|e| ChartError::option("color", format!("'{s}': {e}")))?;
    Ok(skia::Color::from_argb(c.alpha, c.red, c.green, c.blue))
}

/// `color` with its alpha replaced by `opacity` in `[0, 1]`.
pub fn with_opacity(color: skia::Color, opacity: f64) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    color.with_a(a)
}
