// File: crates/vitals-core/tests/target.rs
// Purpose: Plot targets (PNG file and flot JSON payload).

use vitals_core::{flot_payload, FlotJsonTarget, PlotOptions, PlotTarget, PngTarget, Series};

fn sample_series() -> Vec<Series> {
    vec![
        Series::with_data("syst(x)", vec![(0.0, 0.0), (0.5, 0.479)]),
        Series::with_data("dias(x)", vec![(0.0, 1.0), (0.5, 0.878)]),
    ]
}

#[test]
fn payload_has_series_then_options() {
    let v = flot_payload(&sample_series(), &PlotOptions::default()).unwrap();
    assert_eq!(v["series"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["series"][0]["label"], "syst(x)");
    assert_eq!(v["series"][1]["data"][0][1], 1.0);
    assert_eq!(v["series"][1]["data"][1][0], 0.5);
    assert_eq!(v["options"]["yaxis"]["min"], -1.1);
    assert_eq!(v["options"]["series"]["points"]["show"], true);
}

#[test]
fn json_target_writes_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/line-chart.json");
    let mut target = FlotJsonTarget::new(&path);
    target.plot(&sample_series(), &PlotOptions::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v, flot_payload(&sample_series(), &PlotOptions::default()).unwrap());
}

#[test]
fn png_target_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line-chart.png");
    let mut target = PngTarget::new(&path);
    target.render.draw_labels = false;
    target.plot(&sample_series(), &PlotOptions::default()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn png_target_rejects_invalid_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.png");
    let mut target = PngTarget::new(&path);
    let bad = PlotOptions { colors: vec!["#zzz".into()], ..PlotOptions::default() };
    assert!(target.plot(&sample_series(), &bad).is_err());
    assert!(!path.exists());
}

#[test]
fn json_target_rejects_invalid_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.json");
    let mut target = FlotJsonTarget::new(&path);
    let bad = PlotOptions { colors: vec!["#zzz".into()], ..PlotOptions::default() };
    assert!(target.plot(&sample_series(), &bad).is_err());
    assert!(!path.exists());

    let mut bad = PlotOptions::default();
    bad.series.points.radius = -1.0;
    assert!(target.plot(&sample_series(), &bad).is_err());
    assert!(!path.exists());
}
