// File: crates/vitals-core/src/interact.rs
// Summary: Hover/click hit testing against rendered data points (grid.hoverable / grid.clickable).

use crate::chart::{Chart, Layout, RenderOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Hover,
    Click,
}

/// The data point under the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotItem {
    pub series_index: usize,
    pub data_index: usize,
    pub datapoint: (f64, f64),
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotEvent {
    pub kind: EventKind,
    /// Cursor position in data coordinates.
    pub pos: (f64, f64),
    pub item: Option<PlotItem>,
}

impl Chart {
    /// Hover at surface pixel `(px, py)`. `None` unless `grid.hoverable`.
    pub fn hover(&self, px: f32, py: f32, opts: &RenderOptions) -> Option<PlotEvent> {
        if !self.options.grid.hoverable {
            return None;
        }
        Some(self.event_at(EventKind::Hover, px, py, opts))
    }

    /// Click at surface pixel `(px, py)`. `None` unless `grid.clickable`.
    pub fn click(&self, px: f32, py: f32, opts: &RenderOptions) -> Option<PlotEvent> {
        if !self.options.grid.clickable {
            return None;
        }
        Some(self.event_at(EventKind::Click, px, py, opts))
    }

    fn event_at(&self, kind: EventKind, px: f32, py: f32, opts: &RenderOptions) -> PlotEvent {
        let layout = self.layout(opts);
        let pos = (layout.sx.from_px(px), layout.sy.from_px(py));
        PlotEvent { kind, pos, item: self.nearest_in(&layout, px, py) }
    }

    /// Nearest visible sample within `grid.mouseActiveRadius` pixels.
    /// On equal distance the earlier series wins.
    pub fn nearest_item(&self, px: f32, py: f32, opts: &RenderOptions) -> Option<PlotItem> {
        self.nearest_in(&self.layout(opts), px, py)
    }

    fn nearest_in(&self, layout: &Layout, px: f32, py: f32) -> Option<PlotItem> {
        let show = &self.options.series;
        if !(show.lines.show || show.points.show) {
            return None;
        }
        if !layout.rect.contains(px, py) {
            return None;
        }
        let radius = self.options.grid.mouse_active_radius;
        let max_d2 = radius * radius;

        let mut best: Option<(f32, usize, usize)> = None;
        for (si, s) in self.series.iter().enumerate() {
            for (di, &(x, y)) in s.data.iter().enumerate() {
                if !(layout.x_axis.contains(x) && layout.y_axis.contains(y)) {
                    continue;
                }
                let dx = layout.sx.to_px(x) - px;
                let dy = layout.sy.to_px(y) - py;
                let d2 = dx * dx + dy * dy;
                if d2 > max_d2 {
                    continue;
                }
                if best.map_or(true, |(bd, _, _)| d2 < bd) {
                    best = Some((d2, si, di));
                }
            }
        }

        best.map(|(_, si, di)| {
            let s = &self.series[si];
            PlotItem { series_index: si, data_index: di, datapoint: s.data[di], label: s.label.clone() }
        })
    }
}
