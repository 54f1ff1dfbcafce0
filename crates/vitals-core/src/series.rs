// File: crates/vitals-core/src/series.rs
// Summary: Series model: a labeled, ordered run of (x, y) samples.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<(f64, f64)>, // (x, y), x non-decreasing
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.data.push((x, y));
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn first(&self) -> Option<(f64, f64)> { self.data.first().copied() }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(|&(x, _)| x)
    }

    /// True when x never decreases from one sample to the next.
    pub fn is_x_sorted(&self) -> bool {
        self.data.windows(2).all(|w| w[0].0 <= w[1].0)
    }
}
