// File: crates/vitals-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG / RGBA) using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::{plot_rect, RectI32};
use crate::grid::{format_tick, nice_step, ticks};
use crate::options::PlotOptions;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::theme::{parse_color, with_opacity, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::resolve_axes;

/// Fill opacity when lines are filled without a gradient.
const FLAT_FILL_OPACITY: f64 = 0.4;
const LABEL_SIZE: f32 = 12.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Tick labels, axis labels and legend. Off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub options: PlotOptions,
    pub theme: Theme,
}

/// Pixel geometry of one render: plot rectangle plus both scales.
#[derive(Clone, Debug)]
pub(crate) struct Layout {
    pub rect: RectI32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub sx: LinearScale,
    pub sy: LinearScale,
}

impl Chart {
    pub fn new(options: PlotOptions) -> Self {
        Self { series: Vec::new(), options, theme: Theme::default() }
    }

    pub fn with_series(options: PlotOptions, series: Vec<Series>) -> Self {
        Self { series, options, theme: Theme::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Axes as drawn: configured bounds, autoscaled where none are set.
    pub fn axes(&self) -> (Axis, Axis) {
        resolve_axes(&self.options, &self.series)
    }

    pub(crate) fn layout(&self, opts: &RenderOptions) -> Layout {
        let rect = plot_rect(opts.width, opts.height, &opts.insets);
        let (x_axis, y_axis) = self.axes();
        let sx = LinearScale::horizontal(&rect, &x_axis);
        let sy = LinearScale::vertical(&rect, &y_axis);
        Layout { rect, x_axis, y_axis, sx, sy }
    }

    /// Palette color per series, in series order.
    pub fn series_colors(&self) -> Result<Vec<skia::Color>> {
        (0..self.series.len())
            .map(|i| match self.options.color_for(i) {
                Some(c) => parse_color(c),
                None => Ok(self.theme.axis_line),
            })
            .collect()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.paint(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Render("read pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn paint(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(ChartError::Render(format!("invalid surface size {}x{}", opts.width, opts.height)));
        }
        let colors = self.series_colors()?;
        let layout = self.layout(opts);
        debug!(
            width = opts.width,
            height = opts.height,
            series = self.series.len(),
            x = ?(layout.x_axis.min, layout.x_axis.max),
            y = ?(layout.y_axis.min, layout.y_axis.max),
            "rendering chart"
        );

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        draw_grid(canvas, &layout, &self.theme);

        // Data is clipped to the plot area; the x = 9.5 samples of the default
        // domain fall outside xaxis [0, 9].
        let r = &layout.rect;
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32),
            skia::ClipOp::Intersect,
            true,
        );
        for (s, &color) in self.series.iter().zip(&colors) {
            let lines = &self.options.series.lines;
            if lines.show && lines.fill {
                draw_fill(canvas, &layout, s, color, &self.options);
            }
            if lines.show && lines.line_width > 0.0 {
                draw_line(canvas, &layout, s, color, lines.line_width);
            }
            if self.options.series.points.show {
                draw_points(canvas, &layout, s, color, &self.options, self.theme.background);
            }
        }
        canvas.restore();

        draw_axes(canvas, &layout, &self.theme, opts.draw_labels);
        if opts.draw_labels && self.options.legend.show {
            draw_legend(canvas, &layout, &self.series, &colors, &self.theme);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn approx_ticks(px: i32, spacing: i32) -> usize {
    (px / spacing).max(2) as usize
}

fn x_ticks(layout: &Layout) -> (Vec<f64>, f64) {
    let n = approx_ticks(layout.rect.width(), 80);
    (ticks(layout.x_axis.min, layout.x_axis.max, n), nice_step(layout.x_axis.span(), n))
}

fn y_ticks(layout: &Layout) -> (Vec<f64>, f64) {
    let n = approx_ticks(layout.rect.height(), 60);
    (ticks(layout.y_axis.min, layout.y_axis.max, n), nice_step(layout.y_axis.span(), n))
}

fn label_font(size: f32) -> skia::Font {
    let mgr = skia::FontMgr::default();
    match mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::default()) {
        Some(tf) => skia::Font::from_typeface(tf, size),
        None => {
            let mut font = skia::Font::default();
            font.set_size(size);
            font
        }
    }
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let r = &layout.rect;
    let (xt, _) = x_ticks(layout);
    let (yt, _) = y_ticks(layout);
    // verticals
    for x in xt {
        let px = layout.sx.to_px(x);
        canvas.draw_line((px, r.top as f32), (px, r.bottom as f32), &paint);
    }
    // horizontals
    for y in yt {
        let py = layout.sy.to_px(y);
        canvas.draw_line((r.left as f32, py), (r.right as f32, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, layout: &Layout, theme: &Theme, draw_labels: bool) {
    let r = &layout.rect;
    let (l, t, rr, b) = (r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, rr, b), &axis_paint);

    if !draw_labels {
        return;
    }

    let font = label_font(LABEL_SIZE);
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);

    let (xt, xstep) = x_ticks(layout);
    for x in xt {
        let text = format_tick(x, xstep);
        let (w, _) = font.measure_str(&text, Some(&tick_paint));
        let px = layout.sx.to_px(x);
        canvas.draw_str(&text, (px - w * 0.5, b + LABEL_SIZE + 4.0), &font, &tick_paint);
    }
    let (yt, ystep) = y_ticks(layout);
    for y in yt {
        let text = format_tick(y, ystep);
        let (w, _) = font.measure_str(&text, Some(&tick_paint));
        let py = layout.sy.to_px(y);
        canvas.draw_str(&text, (l - w - 6.0, py + LABEL_SIZE * 0.35), &font, &tick_paint);
    }

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(theme.axis_label);
    label_paint.set_anti_alias(true);
    if !layout.x_axis.label.is_empty() {
        let (w, _) = font.measure_str(&layout.x_axis.label, Some(&label_paint));
        canvas.draw_str(&layout.x_axis.label, (rr - w, b + 2.0 * LABEL_SIZE + 6.0), &font, &label_paint);
    }
    if !layout.y_axis.label.is_empty() {
        canvas.draw_str(&layout.y_axis.label, (2.0, t - 4.0), &font, &label_paint);
    }
}

fn series_path(layout: &Layout, data: &[(f64, f64)]) -> Option<skia::Path> {
    let (&(x0, y0), rest) = data.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((layout.sx.to_px(x0), layout.sy.to_px(y0)));
    for &(x, y) in rest {
        path.line_to((layout.sx.to_px(x), layout.sy.to_px(y)));
    }
    Some(path)
}

fn draw_fill(canvas: &skia::Canvas, layout: &Layout, series: &Series, color: skia::Color, options: &PlotOptions) {
    let data = &series.data;
    if data.len() < 2 {
        return;
    }
    // Fill towards y = 0, kept inside the visible range.
    let base_px = layout.sy.to_px(layout.y_axis.clamp(0.0));
    let (first_x, _) = data[0];
    let (last_x, _) = data[data.len() - 1];

    let mut path = skia::Path::new();
    path.move_to((layout.sx.to_px(first_x), base_px));
    for &(x, y) in data {
        path.line_to((layout.sx.to_px(x), layout.sy.to_px(y)));
    }
    path.line_to((layout.sx.to_px(last_x), base_px));
    path.close();

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    let stops: Vec<skia::Color> = options
        .series
        .lines
        .fill_color
        .as_ref()
        .map(|g| g.opacities().map(|o| with_opacity(color, o)).collect())
        .unwrap_or_default();
    match stops.len() {
        0 => {
            paint.set_color(with_opacity(color, FLAT_FILL_OPACITY));
        }
        1 => {
            paint.set_color(stops[0]);
        }
        _ => {
            let r = &layout.rect;
            let cx = (r.left + r.right) as f32 * 0.5;
            let shader = skia::Shader::linear_gradient(
                ((cx, r.top as f32), (cx, r.bottom as f32)),
                stops.as_slice(),
                None,
                skia::TileMode::Clamp,
                None,
                None,
            );
            if let Some(shader) = shader {
                paint.set_shader(shader);
            } else {
                paint.set_color(stops[0]);
            }
        }
    }
    canvas.draw_path(&path, &paint);
}

fn draw_line(canvas: &skia::Canvas, layout: &Layout, series: &Series, color: skia::Color, width: f32) {
    if series.data.len() < 2 {
        return;
    }
    let Some(path) = series_path(layout, &series.data) else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);
}

fn draw_points(
    canvas: &skia::Canvas,
    layout: &Layout,
    series: &Series,
    color: skia::Color,
    options: &PlotOptions,
    background: skia::Color,
) {
    let radius = options.series.points.radius;
    if radius <= 0.0 {
        return;
    }
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(background);

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(options.series.lines.line_width.max(1.0));
    ring.set_color(color);

    for &(x, y) in &series.data {
        let center = (layout.sx.to_px(x), layout.sy.to_px(y));
        canvas.draw_circle(center, radius, &fill);
        canvas.draw_circle(center, radius, &ring);
    }
}

fn draw_legend(canvas: &skia::Canvas, layout: &Layout, series: &[Series], colors: &[skia::Color], theme: &Theme) {
    let labeled: Vec<(&Series, skia::Color)> = series
        .iter()
        .zip(colors.iter().copied())
        .filter(|(s, _)| !s.label.is_empty())
        .collect();
    if labeled.is_empty() {
        return;
    }

    let font = label_font(LABEL_SIZE);
    let mut text_paint = skia::Paint::default();
    text_paint.set_color(theme.axis_label);
    text_paint.set_anti_alias(true);

    let swatch = 10.0f32;
    let row_h = LABEL_SIZE + 6.0;
    let pad = 5.0f32;
    let text_w = labeled
        .iter()
        .map(|(s, _)| font.measure_str(&s.label, Some(&text_paint)).0)
        .fold(0.0f32, f32::max);
    let box_w = pad * 3.0 + swatch + text_w;
    let box_h = pad * 2.0 + row_h * labeled.len() as f32;

    // North-east corner of the plot area.
    let r = &layout.rect;
    let right = r.right as f32 - 9.0;
    let top = r.top as f32 + 9.0;
    let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut bg = skia::Paint::default();
    bg.set_color(theme.legend_background);
    canvas.draw_rect(frame, &bg);
    let mut border = skia::Paint::default();
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(theme.legend_border);
    canvas.draw_rect(frame, &border);

    let mut sw = skia::Paint::default();
    sw.set_anti_alias(true);
    for (i, (s, color)) in labeled.iter().enumerate() {
        let row_top = top + pad + row_h * i as f32;
        let sx = frame.left + pad;
        let sy = row_top + (row_h - swatch) * 0.5;
        sw.set_color(*color);
        canvas.draw_rect(skia::Rect::from_ltrb(sx, sy, sx + swatch, sy + swatch), &sw);
        canvas.draw_str(&s.label, (sx + swatch + pad, sy + swatch), &font, &text_paint);
    }
}
