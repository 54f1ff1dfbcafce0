// File: crates/vitals-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `range / approx_ticks` to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(range: f64, approx_ticks: usize) -> f64 {
    let raw = range.abs() / approx_ticks.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at multiples of a nice step inside `[min, max]`.
pub fn ticks(min: f64, max: f64, approx_ticks: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min { return Vec::new(); }
    let step = nice_step(max - min, approx_ticks);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Format a tick value with as many decimals as its step needs.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    format!("{:.*}", decimals, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_for_default_axes() {
        assert_eq!(ticks(-1.1, 1.1, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(ticks(0.0, 9.0, 9), (0..=9).map(f64::from).collect::<Vec<_>>());
        assert!(ticks(1.0, 1.0, 5).is_empty());
    }

    #[test]
    fn tick_labels_follow_step() {
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(-1.0, 0.5), "-1.0");
        assert_eq!(format_tick(3.0, 1.0), "3");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
