// File: crates/vitals-core/src/readings.rs
// Summary: Blood-pressure readings from CSV (time, syst, dias, pulse) turned into plot series.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::Result;
use crate::series::Series;
use crate::vitals::VitalSign;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One measurement. `t` is in days for calendar timestamps, the raw value
/// for numeric time columns, or the row index when there is no time column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub t: f64,
    pub syst: f64,
    pub dias: f64,
    pub pulse: f64,
}

impl Reading {
    pub fn value(&self, sign: VitalSign) -> f64 {
        match sign {
            VitalSign::Systolic => self.syst,
            VitalSign::Diastolic => self.dias,
            VitalSign::Pulse => self.pulse,
        }
    }
}

/// Load readings; headers are matched case-insensitively.
pub fn load_readings_csv(path: impl AsRef<Path>) -> Result<Vec<Reading>> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    let out = read_readings(rdr)?;
    debug!(path = %path.display(), rows = out.len(), "loaded readings");
    Ok(out)
}

/// Same as [`load_readings_csv`] over any reader. Build it `flexible` so
/// short rows reach the per-row checks instead of aborting the load.
pub fn read_readings<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Reading>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_time = idx(&["time", "timestamp", "date", "datetime"]);
    let i_syst = idx(&["syst", "systolic"]);
    let i_dias = idx(&["dias", "diastolic"]);
    let i_pulse = idx(&["pulse", "heart_rate", "hr"]);

    if i_syst.is_none() || i_dias.is_none() || i_pulse.is_none() {
        warn!(?headers, "could not find one of syst/dias/pulse columns");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable row");
                continue;
            }
        };
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite())
        };

        let t = match i_time {
            Some(ix) => match rec.get(ix).and_then(parse_time) {
                Some(t) => t,
                None => {
                    warn!(row, "skipping reading with unparsable time");
                    continue;
                }
            },
            None => row as f64,
        };

        match (parse(i_syst), parse(i_dias), parse(i_pulse)) {
            (Some(syst), Some(dias), Some(pulse)) => out.push(Reading { t, syst, dias, pulse }),
            _ => warn!(row, "skipping reading with missing or non-numeric values"),
        }
    }
    Ok(out)
}

/// Seconds-since-epoch timestamps become days; plain numbers pass through.
fn parse_time(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<f64>() {
        return Some(n).filter(|n| n.is_finite());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp() as f64 / SECONDS_PER_DAY);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp() as f64 / SECONDS_PER_DAY);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp() as f64 / SECONDS_PER_DAY)
}

/// syst, dias and pulse series with x measured from the first reading.
/// Readings are sorted by time first so every series keeps x non-decreasing.
pub fn readings_to_series(readings: &[Reading]) -> Vec<Series> {
    let mut sorted = readings.to_vec();
    sorted.sort_by(|a, b| a.t.total_cmp(&b.t));
    let t0 = sorted.first().map(|r| r.t).unwrap_or(0.0);

    VitalSign::ALL
        .iter()
        .map(|&sign| {
            let data = sorted.iter().map(|r| (r.t - t0, r.value(sign))).collect();
            Series::with_data(sign.name(), data)
        })
        .collect()
}
