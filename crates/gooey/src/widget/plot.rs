//! Data plots (line and bar series)
//!
//! A plot owns its [`PlotData`]. On insertion and on update the data is
//! normalized: bounds are scanned, a placeholder point one `x_step` before
//! the first sample is prepended at `min_y` so the series always has a
//! visible anchor left of its first sample, and points are stably sorted by
//! x. Drawing maps ticks and points linearly into the widget rectangle inset
//! by [`MARGIN`].

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::error::{GooeyError, GooeyResult};

/// Inset between the widget edge and the plotting area
pub const MARGIN: i32 = 40;

/// Width of one bar in bar plots
pub const BAR_WIDTH: i32 = 30;

/// Radius of the point markers on line plots
const MARKER_RADIUS: i32 = 3;

/// Series rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// Consecutive points joined by segments
    #[default]
    Line,
    /// One filled bar per point
    Bar,
}

/// A numeric series with axis steps and derived bounds
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// X coordinates
    pub x: Vec<f32>,
    /// Y coordinates, paired with `x` by index
    pub y: Vec<f32>,
    /// Spacing of x ticks
    pub x_step: f32,
    /// Spacing of y ticks
    pub y_step: f32,
    /// Rendering style
    pub kind: PlotKind,
    /// Caption drawn above the plot
    pub title: String,
    /// Caption under the x axis
    pub x_label: String,
    /// Caption left of the y axis
    pub y_label: String,
    /// Smallest x (derived)
    pub min_x: f32,
    /// Largest x (derived)
    pub max_x: f32,
    /// Smallest y (derived)
    pub min_y: f32,
    /// Largest y (derived)
    pub max_y: f32,
}

impl PlotData {
    /// Create a series; bounds are derived when the data is attached to a plot
    #[must_use]
    pub fn new(x: Vec<f32>, y: Vec<f32>, x_step: f32, y_step: f32) -> Self {
        Self {
            x,
            y,
            x_step,
            y_step,
            kind: PlotKind::Line,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the axis captions
    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x_tick_count(&self) -> usize {
        tick_count(self.min_x, self.max_x, self.x_step)
    }

    #[must_use]
    pub fn y_tick_count(&self) -> usize {
        tick_count(self.min_y, self.max_y, self.y_step)
    }

    fn scan_bounds(&mut self) {
        let fold = |values: &[f32]| {
            values
                .iter()
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
        };
        if self.x.is_empty() {
            (self.min_x, self.max_x, self.min_y, self.max_y) = (0.0, 0.0, 0.0, 0.0);
            return;
        }
        (self.min_x, self.max_x) = fold(&self.x);
        (self.min_y, self.max_y) = fold(&self.y);
    }

    /// Validate, prepend the placeholder point, sort by x and derive bounds
    ///
    /// The placeholder sits one `x_step` before the first sample as given,
    /// at the lowest y value.
    pub(crate) fn normalize(&mut self) -> GooeyResult<()> {
        if self.x.len() != self.y.len() {
            return Err(GooeyError::InvalidArgument(format!(
                "plot has {} x values but {} y values",
                self.x.len(),
                self.y.len()
            )));
        }
        let steps_ok = |s: f32| s.is_finite() && s > 0.0;
        if !steps_ok(self.x_step) || !steps_ok(self.y_step) {
            return Err(GooeyError::InvalidArgument(format!(
                "plot steps must be positive, got x_step {} and y_step {}",
                self.x_step, self.y_step
            )));
        }
        if self.x.iter().chain(&self.y).any(|v| !v.is_finite()) {
            return Err(GooeyError::InvalidArgument("plot values must be finite".to_string()));
        }

        self.scan_bounds();
        if self.x.is_empty() {
            return Ok(());
        }

        let placeholder = (self.x[0] - self.x_step, self.min_y);
        let mut points: Vec<(f32, f32)> = std::iter::once(placeholder)
            .chain(self.x.iter().copied().zip(self.y.iter().copied()))
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        (self.x, self.y) = points.into_iter().unzip();

        self.scan_bounds();
        Ok(())
    }
}

/// Number of ticks covering `[min, max]` at `step` spacing, both ends included
#[must_use]
pub fn tick_count(min: f32, max: f32, step: f32) -> usize {
    let mut range = max - min;
    if range == 0.0 {
        range = 1.0;
    }
    if step <= 0.0 {
        return 1;
    }
    ((range / step).ceil() as usize).saturating_add(1)
}

/// Pixel rectangle the series is mapped into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Chart widget
#[derive(Debug, Clone)]
pub struct Plot {
    pub(crate) header: WidgetHeader,
    data: PlotData,
}

impl Plot {
    /// Create a plot, normalizing `data`
    pub fn new(kind: PlotKind, mut data: PlotData, x: i32, y: i32, width: i32, height: i32) -> GooeyResult<Self> {
        data.kind = kind;
        data.normalize()?;
        Ok(Self {
            header: WidgetHeader::new(WidgetKind::Plot, x, y, width, height),
            data,
        })
    }

    /// Current series
    #[must_use]
    pub fn data(&self) -> &PlotData {
        &self.data
    }

    /// Replace the series; it is normalized exactly like on creation and
    /// keeps this plot's rendering style
    pub fn update(&mut self, mut data: PlotData) -> GooeyResult<()> {
        data.kind = self.data.kind;
        data.normalize()?;
        self.data = data;
        Ok(())
    }

    /// Plotting rectangle inside the margins
    #[must_use]
    pub fn area(&self) -> PlotArea {
        let h = self.header;
        PlotArea {
            left: h.x + MARGIN,
            top: h.y + MARGIN,
            right: h.x + h.width - MARGIN,
            bottom: h.y + h.height - MARGIN,
        }
    }

    /// Pixel position of point `index`
    #[must_use]
    pub fn project(&self, index: usize) -> Option<(i32, i32)> {
        let d = &self.data;
        let (&vx, &vy) = (d.x.get(index)?, d.y.get(index)?);
        let area = self.area();

        let nx = normalize(vx, d.min_x, d.x_tick_count(), d.x_step);
        let ny = normalize(vy, d.min_y, d.y_tick_count(), d.y_step);
        let px = area.left as f32 + nx * (area.right - area.left) as f32;
        let py = area.bottom as f32 - ny * (area.bottom - area.top) as f32;
        Some((px.round() as i32, py.round() as i32))
    }

    fn draw_grid(&self, painter: &mut Painter<'_>, area: PlotArea) {
        let theme = *painter.theme();
        let d = &self.data;
        let x_ticks = d.x_tick_count();
        let y_ticks = d.y_tick_count();

        for i in drawn_ticks(x_ticks, area.right - area.left) {
            let px = tick_position(area.left, area.right, i, x_ticks);
            painter.draw_line(px, area.top, px, area.bottom, theme.widget_base);
            let label = format!("{:.2}", d.min_x + i as f32 * d.x_step);
            let half = painter.text_width(&label) as i32 / 2;
            painter.draw_text(px - half, area.bottom + 15, &label, theme.neutral, DEFAULT_FONT_SIZE * 0.7);
        }

        for i in drawn_ticks(y_ticks, area.bottom - area.top) {
            let py = area.bottom - (tick_position(area.top, area.bottom, i, y_ticks) - area.top);
            painter.draw_line(area.left, py, area.right, py, theme.widget_base);
            let label = format!("{:.2}", d.min_y + i as f32 * d.y_step);
            let width = painter.text_width(&label) as i32;
            painter.draw_text(area.left - width - 5, py + 4, &label, theme.neutral, DEFAULT_FONT_SIZE * 0.7);
        }

        painter.draw_line(area.left, area.bottom, area.right, area.bottom, theme.neutral);
        painter.draw_line(area.left, area.top, area.left, area.bottom, theme.neutral);
    }

    fn draw_captions(&self, painter: &mut Painter<'_>, area: PlotArea) {
        let theme = *painter.theme();
        let h = self.header;
        let d = &self.data;

        if !d.title.is_empty() {
            let width = painter.text_width(&d.title) as i32;
            painter.draw_text(h.x + (h.width - width) / 2, h.y + 25, &d.title, theme.neutral, DEFAULT_FONT_SIZE);
        }
        if !d.x_label.is_empty() {
            let width = painter.text_width(&d.x_label) as i32;
            let cx = (area.left + area.right) / 2;
            painter.draw_text(cx - width / 2, h.y + h.height - 5, &d.x_label, theme.neutral, DEFAULT_FONT_SIZE * 0.8);
        }
        if !d.y_label.is_empty() {
            painter.draw_text(h.x + 2, area.top - 10, &d.y_label, theme.neutral, DEFAULT_FONT_SIZE * 0.8);
        }
    }

    fn draw_series(&self, painter: &mut Painter<'_>, area: PlotArea) {
        let color = painter.theme().primary;
        let points: Vec<(i32, i32)> = (0..self.data.len()).filter_map(|i| self.project(i)).collect();

        match self.data.kind {
            PlotKind::Line => {
                for pair in points.windows(2) {
                    painter.draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, color);
                }
                for &(px, py) in &points {
                    painter.fill_circle(px, py, MARKER_RADIUS, color);
                }
            }
            PlotKind::Bar => {
                for &(px, py) in &points {
                    let height = area.bottom - py;
                    if height > 0 {
                        painter.fill_rect(px - BAR_WIDTH / 2, py, BAR_WIDTH, height, color);
                    }
                }
            }
        }
    }
}

/// Fraction of the axis covered by `value`
fn normalize(value: f32, min: f32, ticks: usize, step: f32) -> f32 {
    let span = (ticks.saturating_sub(1)) as f32 * step;
    if span <= 0.0 {
        return 0.0;
    }
    (value - min) / span
}

/// Pixel of tick `i` out of `count` spread over `[start, end]`
fn tick_position(start: i32, end: i32, i: usize, count: usize) -> i32 {
    if count <= 1 {
        return start;
    }
    let (Ok(i), Ok(last)) = (i128::try_from(i), i128::try_from(count - 1)) else {
        return start;
    };
    let offset = i * (i128::from(end) - i128::from(start)) / last;
    i32::try_from(i128::from(start) + offset).unwrap_or(end)
}

/// Tick indices worth drawing along an axis `pixels` long
///
/// Dense axes are thinned to at most one tick per pixel.
fn drawn_ticks(count: usize, pixels: i32) -> impl Iterator<Item = usize> {
    let limit = usize::try_from(pixels.max(1)).unwrap_or(1) + 1;
    let stride = count.div_ceil(limit).max(1);
    (0..count).step_by(stride)
}

impl Widget for Plot {
    const KIND: WidgetKind = WidgetKind::Plot;
    const CAPACITY: usize = super::MAX_PLOT_COUNT;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Plot(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let theme = *painter.theme();
        let h = self.header;
        let area = self.area();

        painter.fill_rect(h.x, h.y, h.width, h.height, theme.base);
        painter.draw_rect(h.x, h.y, h.width, h.height, theme.neutral);
        self.draw_captions(painter, area);

        if self.data.is_empty() {
            let message = "No data";
            let width = painter.text_width(message) as i32;
            painter.draw_text(h.x + (h.width - width) / 2, h.y + h.height / 2, message, theme.neutral, DEFAULT_FONT_SIZE);
            return;
        }

        self.draw_grid(painter, area);
        self.draw_series(painter, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, DrawCommand, HeadlessBackend};
    use crate::theme::Theme;

    fn sample() -> PlotData {
        PlotData::new(vec![-1.0, 3.0, 4.0, 8.0], vec![4.0, 5.0, -8.0, 12.0], 2.0, 2.0)
    }

    #[test]
    fn test_tick_count() {
        assert_eq!(tick_count(0.0, 10.0, 2.0), 6);
        assert_eq!(tick_count(0.0, 9.0, 2.0), 6);
        // Degenerate range is treated as one unit
        assert_eq!(tick_count(5.0, 5.0, 1.0), 2);
        assert_eq!(tick_count(5.0, 5.0, 2.0), 2);
    }

    #[test]
    fn test_normalize_inserts_placeholder() {
        let plot = Plot::new(PlotKind::Line, sample(), 0, 0, 400, 300).unwrap();
        let data = plot.data();

        assert_eq!(data.len(), 5);
        assert_eq!(data.min_x, -3.0);
        assert_eq!(data.max_x, 8.0);
        assert_eq!(data.min_y, -8.0);
        assert_eq!(data.max_y, 12.0);
        assert_eq!(data.x, vec![-3.0, -1.0, 3.0, 4.0, 8.0]);
        assert_eq!(data.y, vec![-8.0, 4.0, 5.0, -8.0, 12.0]);
        assert!(data.x.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_keeps_pairs() {
        let data = PlotData::new(vec![5.0, 1.0, 3.0], vec![50.0, 10.0, 30.0], 1.0, 10.0);
        let plot = Plot::new(PlotKind::Bar, data, 0, 0, 400, 300).unwrap();
        // Placeholder goes one step before the first sample given (5.0)
        assert_eq!(plot.data().x, vec![1.0, 3.0, 4.0, 5.0]);
        assert_eq!(plot.data().y, vec![10.0, 30.0, 10.0, 50.0]);
        assert_eq!(plot.data().min_x, 1.0);
        assert_eq!(plot.data().kind, PlotKind::Bar);
    }

    #[test]
    fn test_empty_data() {
        let data = PlotData::new(Vec::new(), Vec::new(), 1.0, 1.0);
        let plot = Plot::new(PlotKind::Line, data, 0, 0, 200, 200).unwrap();
        assert!(plot.data().is_empty());
        assert_eq!(plot.project(0), None);
    }

    #[test]
    fn test_invalid_data() {
        let mismatched = PlotData::new(vec![1.0, 2.0], vec![1.0], 1.0, 1.0);
        assert!(Plot::new(PlotKind::Line, mismatched, 0, 0, 10, 10).is_err());

        let zero_step = PlotData::new(vec![1.0], vec![1.0], 0.0, 1.0);
        assert!(Plot::new(PlotKind::Line, zero_step, 0, 0, 10, 10).is_err());

        let nan = PlotData::new(vec![f32::NAN], vec![1.0], 1.0, 1.0);
        assert!(Plot::new(PlotKind::Line, nan, 0, 0, 10, 10).is_err());
    }

    #[test]
    fn test_update_renormalizes() {
        let mut plot = Plot::new(PlotKind::Bar, sample(), 0, 0, 400, 300).unwrap();
        plot.update(PlotData::new(vec![2.0, 0.0], vec![1.0, 3.0], 1.0, 1.0)).unwrap();

        // Placeholder at 2.0 - 1.0, sorted in among the samples
        let data = plot.data();
        assert_eq!(data.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(data.y, vec![3.0, 1.0, 1.0]);
        assert_eq!(data.min_x, 0.0);
        assert_eq!(data.max_y, 3.0);
        assert_eq!(data.kind, PlotKind::Bar);

        // A rejected update leaves the old series in place
        assert!(plot.update(PlotData::new(vec![1.0], vec![], 1.0, 1.0)).is_err());
        assert_eq!(plot.data().len(), 3);
    }

    #[test]
    fn test_dense_axis_is_thinned() {
        let data = PlotData::new(vec![0.0, 100_000.0], vec![0.0, 1.0], 0.01, 1.0);
        let plot = Plot::new(PlotKind::Line, data, 0, 0, 480, 480).unwrap();
        assert!(plot.data().x_tick_count() > 10_000_000);

        let mut backend = HeadlessBackend::new();
        let id = backend.create_window("plot", 500, 500);
        let theme = Theme::default();
        plot.draw(&mut Painter::new(&mut backend, &theme, id));

        // At most one vertical grid line per pixel of the 400px axis
        let vertical = backend
            .pending(id)
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { x1, x2, y1: 40, y2: 440, .. } if x1 == x2))
            .count();
        assert!(vertical > 1);
        assert!(vertical <= 402);
    }

    #[test]
    fn test_tick_math_stays_in_range() {
        assert_eq!(tick_position(40, 440, 0, usize::MAX), 40);
        assert_eq!(tick_position(40, 440, usize::MAX - 1, usize::MAX), 440);
        assert_eq!(tick_count(-3.0e38, 3.0e38, 1.0e-30), usize::MAX);
        assert_eq!(drawn_ticks(1_000_000, 99).count(), 100);
        assert_eq!(drawn_ticks(5, 400).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_projection_corners() {
        // x: -1..3 step 1 => 5 ticks, span 4; y: 0..4 step 1 => span 4
        let data = PlotData::new(vec![0.0, 3.0], vec![0.0, 4.0], 1.0, 1.0);
        let plot = Plot::new(PlotKind::Line, data, 0, 0, 480, 480).unwrap();
        let area = plot.area();
        assert_eq!(area, PlotArea { left: 40, top: 40, right: 440, bottom: 440 });

        // Placeholder (-1, 0) sits in the bottom-left corner
        assert_eq!(plot.project(0), Some((40, 440)));
        // (3, 4) is the top-right corner
        assert_eq!(plot.project(2), Some((440, 40)));
        // (0, 0) is one tick right of the corner
        assert_eq!(plot.project(1), Some((140, 440)));
    }

    #[test]
    fn test_draw_labels_and_series() {
        let mut backend = HeadlessBackend::new();
        let id = backend.create_window("plot", 500, 500);
        let theme = Theme::default();
        let data = PlotData::new(vec![0.0, 3.0], vec![0.0, 4.0], 1.0, 1.0).with_title("Growth");
        let plot = Plot::new(PlotKind::Bar, data, 0, 0, 480, 480).unwrap();

        plot.draw(&mut Painter::new(&mut backend, &theme, id));
        let commands = backend.pending(id);

        let texts: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"Growth"));
        assert!(texts.contains(&"-1.00"));
        assert!(texts.contains(&"3.00"));
        assert!(texts.contains(&"4.00"));

        // Only the (3, 4) point rises above the baseline
        let bars: Vec<&DrawCommand> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { width, .. } if *width == BAR_WIDTH))
            .collect();
        assert_eq!(
            bars,
            vec![&DrawCommand::FillRect {
                x: 425,
                y: 40,
                width: BAR_WIDTH,
                height: 400,
                color: theme.primary,
            }]
        );
    }
}
