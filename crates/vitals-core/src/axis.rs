// File: crates/vitals-core/src/axis.rs
// Summary: Resolved axis with label and range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Clamp `v` into `[min, max]`.
    pub fn clamp(&self, v: f64) -> f64 { v.max(self.min).min(self.max) }
}
