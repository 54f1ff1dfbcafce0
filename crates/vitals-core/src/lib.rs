// File: crates/vitals-core/src/lib.rs
// Summary: Core library entry point; exports the public API for series synthesis, plot options and rendering.

pub mod error;
pub mod chart;
pub mod series;
pub mod sample;
pub mod expr;
pub mod vitals;
pub mod options;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod interact;
pub mod target;
pub mod readings;

pub use error::{ChartError, Result};
pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use sample::{sample, Domain, SeriesFn};
pub use expr::Expression;
pub use vitals::{generate, plot_vitals, VitalFunctions, VitalSign};
pub use options::PlotOptions;
pub use axis::Axis;
pub use theme::Theme;
pub use interact::{EventKind, PlotEvent, PlotItem};
pub use target::{flot_payload, FlotJsonTarget, PlotTarget, PngTarget};
pub use readings::{load_readings_csv, readings_to_series, Reading};
