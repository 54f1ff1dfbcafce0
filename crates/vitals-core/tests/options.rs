// File: crates/vitals-core/tests/options.rs
// Purpose: Plot configuration defaults, config loading and validation.

use std::io::Write;

use vitals_core::options::{AxisOptions, FillGradient};
use vitals_core::{plot_vitals, ChartError, Domain, PlotOptions, PlotTarget, Series, VitalFunctions};

#[test]
fn defaults_match_the_vitals_chart() {
    let o = PlotOptions::default();
    assert_eq!(o.yaxis.min, Some(-1.1));
    assert_eq!(o.yaxis.max, Some(1.1));
    assert_eq!(o.xaxis.min, Some(0.0));
    assert_eq!(o.xaxis.max, Some(9.0));
    assert!(o.series.lines.show);
    assert!(o.series.lines.fill);
    assert!(o.series.points.show);
    assert!(o.grid.hoverable);
    assert!(o.grid.clickable);
    assert_eq!(o.series.lines.fill_color, Some(FillGradient::from_opacities(&[0.6, 0.2])));
    assert_eq!(o.colors, ["#008FC5", "#222", "#666", "#BBB", "#666", "#BBB"]);
    o.validate().expect("defaults are valid");
}

#[test]
fn palette_cycles_past_its_end() {
    let o = PlotOptions::default();
    assert_eq!(o.color_for(0), Some("#008FC5"));
    assert_eq!(o.color_for(2), Some("#666"));
    assert_eq!(o.color_for(6), Some("#008FC5"));

    let empty = PlotOptions { colors: Vec::new(), ..PlotOptions::default() };
    assert_eq!(empty.color_for(0), None);
}

#[test]
fn json_uses_flot_option_keys() {
    let v = PlotOptions::default().to_json_value().unwrap();
    assert_eq!(v["series"]["lines"]["show"], true);
    assert_eq!(v["series"]["lines"]["fillColor"]["colors"][0]["opacity"], 0.6);
    assert_eq!(v["series"]["lines"]["fillColor"]["colors"][1]["opacity"], 0.2);
    assert_eq!(v["grid"]["hoverable"], true);
    assert_eq!(v["grid"]["clickable"], true);
    assert_eq!(v["yaxis"]["min"], -1.1);
    assert_eq!(v["yaxis"]["max"], 1.1);
    assert_eq!(v["xaxis"]["min"], 0.0);
    assert_eq!(v["xaxis"]["max"], 9.0);
    assert_eq!(v["colors"][0], "#008FC5");
    assert!(v["xaxis"].get("label").is_none());

    let back = PlotOptions::from_json_str(&v.to_string()).unwrap();
    assert_eq!(back, PlotOptions::default());
}

#[test]
fn toml_overrides_only_what_it_names() {
    let o = PlotOptions::from_toml_str(
        r##"
colors = ["#c0392b", "steelblue"]

[yaxis]
min = 40.0
max = 200.0

[grid]
hoverable = false
"##,
    )
    .unwrap();
    assert_eq!(o.yaxis, AxisOptions::fixed(40.0, 200.0));
    assert_eq!(o.xaxis, AxisOptions::fixed(0.0, 9.0));
    assert!(!o.grid.hoverable);
    assert!(o.grid.clickable);
    assert_eq!(o.colors.len(), 2);
    assert!(o.series.points.show);
}

#[test]
fn validation_catches_bad_values() {
    let bad_color = PlotOptions { colors: vec!["#12".into()], ..PlotOptions::default() };
    assert!(matches!(bad_color.validate(), Err(ChartError::InvalidOption { .. })));

    let mut bad_opacity = PlotOptions::default();
    bad_opacity.series.lines.fill_color = Some(FillGradient::from_opacities(&[1.5]));
    assert!(matches!(bad_opacity.validate(), Err(ChartError::InvalidOption { .. })));

    let inverted = PlotOptions { yaxis: AxisOptions::fixed(1.0, -1.0), ..PlotOptions::default() };
    let err = inverted.validate().unwrap_err();
    assert!(err.to_string().contains("yaxis"), "{err}");

    let mut negative = PlotOptions::default();
    negative.series.points.radius = -1.0;
    assert!(negative.validate().is_err());
}

#[test]
fn from_file_picks_format_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "[xaxis]\nmin = 1.0\nmax = 2.0").unwrap();
    let o = PlotOptions::from_file(toml_file.path()).unwrap();
    assert_eq!(o.xaxis, AxisOptions::fixed(1.0, 2.0));

    let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(json_file, r#"{{"legend": {{"show": false}}}}"#).unwrap();
    let o = PlotOptions::from_file(json_file.path()).unwrap();
    assert!(!o.legend.show);

    let other = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(matches!(PlotOptions::from_file(other.path()), Err(ChartError::InvalidOption { .. })));
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(Vec<Series>, PlotOptions)>,
}

impl PlotTarget for Recorder {
    fn plot(&mut self, series: &[Series], options: &PlotOptions) -> vitals_core::Result<()> {
        self.calls.push((series.to_vec(), options.clone()));
        Ok(())
    }
}

#[test]
fn plot_vitals_hands_series_and_config_over_once() {
    let s = |x: f64| x.sin();
    let d = |x: f64| x.cos();
    let p = |x: f64| (2.0 * x).sin();
    let fns = VitalFunctions { syst: &s, dias: &d, pulse: &p };

    let mut target = Recorder::default();
    plot_vitals(&mut target, &Domain::default(), &fns, &PlotOptions::default()).unwrap();

    assert_eq!(target.calls.len(), 1);
    let (series, options) = &target.calls[0];
    assert_eq!(series.len(), 3);
    assert_eq!((options.yaxis.min, options.yaxis.max), (Some(-1.1), Some(1.1)));
    assert_eq!((options.xaxis.min, options.xaxis.max), (Some(0.0), Some(9.0)));
}

#[test]
fn plot_vitals_does_not_plot_on_failure() {
    let s = |x: f64| x.sin();
    let d = |x: f64| x.ln(); // ln(0) = -inf
    let p = |x: f64| x;
    let fns = VitalFunctions { syst: &s, dias: &d, pulse: &p };

    let mut target = Recorder::default();
    let err = plot_vitals(&mut target, &Domain::default(), &fns, &PlotOptions::default()).unwrap_err();
    assert!(matches!(err, ChartError::NonFinite { .. }));
    assert!(target.calls.is_empty());
}

#[test]
fn shipped_configs_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs");
    let vitals = PlotOptions::from_file(root.join("vitals.toml")).expect("vitals.toml");
    assert_eq!(vitals, PlotOptions::default());

    let readings = PlotOptions::from_file(root.join("readings.toml")).expect("readings.toml");
    assert_eq!((readings.xaxis.min, readings.xaxis.max), (None, None));
    assert_eq!(readings.yaxis.label.as_deref(), Some("mmHg / bpm"));
    assert!(!readings.series.lines.fill);
}
