// File: crates/vitals-core/tests/readings.rs
// Purpose: CSV readings loader and conversion to plot series.

use std::io::Write;

use approx::assert_relative_eq;
use vitals_core::{load_readings_csv, readings_to_series, Reading};

fn csv_file(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f
}

#[test]
fn loads_timestamped_readings_in_days() {
    let f = csv_file(
        "Date,Systolic,Diastolic,Pulse\n\
         2024-03-01 08:00,121,79,64\n\
         2024-03-01 20:00,128,83,70\n\
         2024-03-03,117,76,61\n",
    );
    let rows = load_readings_csv(f.path()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!((rows[0].syst, rows[0].dias, rows[0].pulse), (121.0, 79.0, 64.0));

    let series = readings_to_series(&rows);
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["syst", "dias", "pulse"]);

    let xs: Vec<f64> = series[0].xs().collect();
    assert_relative_eq!(xs[0], 0.0);
    assert_relative_eq!(xs[1], 0.5, epsilon = 1e-9);
    assert_relative_eq!(xs[2], 2.0 - 8.0 / 24.0, epsilon = 1e-9);
    assert_eq!(series[2].data[1].1, 70.0);
}

#[test]
fn bad_rows_are_skipped() {
    let f = csv_file(
        "time,syst,dias,pulse\n\
         2024-03-01T08:00:00Z,120,80,65\n\
         yesterday,119,79,66\n\
         2024-03-02T08:00:00Z,n/a,80,65\n\
         2024-03-03T08:00:00Z,118,78,\n\
         2024-03-04T08:00:00Z,122,81,67\n",
    );
    let rows = load_readings_csv(f.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].syst, 122.0);
}

#[test]
fn short_and_long_rows_do_not_abort_the_load() {
    let f = csv_file(
        "time,syst,dias,pulse\n\
         2024-03-01 08:00,121,79,64\n\
         2024-03-01 20:00,128,83\n\
         2024-03-02 08:00,119,78,62,extra\n\
         2024-03-02 20:00,124,80,68\n",
    );
    let rows = load_readings_csv(f.path()).unwrap();
    let syst: Vec<f64> = rows.iter().map(|r| r.syst).collect();
    assert_eq!(syst, [121.0, 119.0, 124.0]);
}

#[test]
fn without_a_time_column_rows_are_indexed() {
    let f = csv_file("hr,dias,syst\n60,70,110\n62,72,112\n");
    let rows = load_readings_csv(f.path()).unwrap();
    assert_eq!(rows[0], Reading { t: 0.0, syst: 110.0, dias: 70.0, pulse: 60.0 });
    assert_eq!(rows[1].t, 1.0);
}

#[test]
fn series_are_sorted_by_time() {
    let rows = vec![
        Reading { t: 5.0, syst: 130.0, dias: 85.0, pulse: 72.0 },
        Reading { t: 2.0, syst: 120.0, dias: 80.0, pulse: 66.0 },
    ];
    let series = readings_to_series(&rows);
    assert!(series.iter().all(|s| s.is_x_sorted()));
    assert_eq!(series[0].data, vec![(0.0, 120.0), (3.0, 130.0)]);
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_readings_csv("definitely/not/here.csv").is_err());
}
