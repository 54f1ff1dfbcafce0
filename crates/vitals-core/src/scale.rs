// File: crates/vitals-core/src/scale.rs
// Summary: Linear data <-> pixel transform for one axis.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps `[vmin, vmax]` onto `[lo_px, hi_px]`. For a Y scale `lo_px` is the
/// bottom edge, so larger values move up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub lo_px: f32,
    pub hi_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(lo_px: f32, hi_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { lo_px, hi_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn horizontal(rect: &RectI32, axis: &Axis) -> Self {
        Self::new(rect.left as f32, rect.right as f32, axis.min, axis.max)
    }

    pub fn vertical(rect: &RectI32, axis: &Axis) -> Self {
        Self::new(rect.bottom as f32, rect.top as f32, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.lo_px + ((v - self.vmin) / span) as f32 * (self.hi_px - self.lo_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.vmax - self.vmin;
        let len = self.hi_px - self.lo_px;
        if len.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.lo_px) / len) as f64 * span
    }
}
