//! Line chart component with Drawable and Touchable implementations
//!
//! The component owns the series, the delegate and every cached layout
//! product. Any input change reruns the planner, label layout and mapper
//! synchronously; drawing only reads the cache.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::{debug, warn};

use crate::config::ChartConfig;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};

use super::appearance::{HighlightMode, LineChartAppearance};
use super::axis::{AxisLabel, draw_x_axis_labels, draw_y_axis_labels};
use super::delegate::{DefaultDelegate, LineChartDelegate};
use super::graph::{
    draw_dot, draw_graph_fill, draw_graph_line, draw_highlight_column, draw_highlight_line,
    draw_value_label, highlight_column_span,
};
use super::grid::draw_grid;
use super::highlight::HighlightState;
use super::layout::{ChartMetrics, ChartRegions, label_abscissas, label_ordinates, split_bounds};
use super::mapper::ValueTransform;
use super::planner::{AxisPlan, LabellingMode, plan};
use super::ChartError;

/// Y-axis products of a successful plan
#[derive(Debug, Clone)]
struct YAxisLayout {
    plan: AxisPlan,
    transform: ValueTransform,
    /// Label centres, top to bottom, canvas-relative
    ordinates: Vec<f32>,
    labels: Vec<AxisLabel>,
    /// Screen points of the samples, canvas-relative
    points: Vec<Point>,
}

/// Single-series line chart
///
/// Generic over the delegate supplying titles, value text and highlight
/// gating; [`DefaultDelegate`] gives a plain read-only chart.
pub struct LineChart<L: LineChartDelegate = DefaultDelegate> {
    /// Bounding rectangle for the whole chart, labels included
    bounds: Rectangle,
    data_points: Vec<f64>,
    labelling_mode: LabellingMode,
    metrics: ChartMetrics,
    appearance: LineChartAppearance,
    delegate: L,
    regions: ChartRegions,
    /// Sample centres along the canvas, one per data point
    abscissas: Vec<f32>,
    x_labels: Vec<AxisLabel>,
    /// `None` while the series cannot be planned
    y_axis: Option<YAxisLayout>,
    highlight: HighlightState,
    /// Set while a gesture that started on the chart is in progress
    tracking: bool,
    dirty: bool,
}

impl<L: LineChartDelegate> LineChart<L> {
    /// Create an empty chart
    pub fn new(bounds: Rectangle, delegate: L) -> Self {
        let metrics = ChartMetrics::default();

        Self {
            bounds,
            data_points: Vec::new(),
            labelling_mode: LabellingMode::default(),
            metrics,
            appearance: LineChartAppearance::default(),
            delegate,
            regions: split_bounds(bounds, &metrics),
            abscissas: Vec::new(),
            x_labels: Vec::new(),
            y_axis: None,
            highlight: HighlightState::Idle,
            tracking: false,
            dirty: true,
        }
    }

    pub fn with_appearance(mut self, appearance: LineChartAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_metrics(mut self, metrics: ChartMetrics) -> Self {
        self.metrics = metrics;
        self.relayout();
        self
    }

    pub fn with_labelling_mode(mut self, mode: LabellingMode) -> Self {
        self.labelling_mode = mode;
        self.relayout();
        self
    }

    /// Apply labelling and metrics loaded from settings
    pub fn with_config(mut self, config: &ChartConfig) -> Self {
        self.labelling_mode = config.labelling;
        self.metrics = config.metrics;
        self.relayout();
        self
    }

    /// Replace the series. Clears any highlight.
    pub fn set_data_points(&mut self, data_points: Vec<f64>) {
        self.data_points = data_points;
        self.highlight = HighlightState::Idle;
        self.relayout();
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.relayout();
        }
    }

    pub fn set_appearance(&mut self, appearance: LineChartAppearance) {
        self.appearance = appearance;
        self.dirty = true;
    }

    pub fn set_labelling_mode(&mut self, mode: LabellingMode) {
        self.labelling_mode = mode;
        self.relayout();
    }

    pub fn set_metrics(&mut self, metrics: ChartMetrics) {
        self.metrics = metrics;
        self.relayout();
    }

    /// Ask the delegate again for titles and value text
    pub fn reload(&mut self) {
        self.relayout();
    }

    pub fn data_points(&self) -> &[f64] {
        &self.data_points
    }

    pub fn labelling_mode(&self) -> LabellingMode {
        self.labelling_mode
    }

    pub fn metrics(&self) -> &ChartMetrics {
        &self.metrics
    }

    pub fn appearance(&self) -> &LineChartAppearance {
        &self.appearance
    }

    pub fn highlighted(&self) -> HighlightState {
        self.highlight
    }

    /// Y-axis plan, or `None` when the series could not be planned
    pub fn axis_plan(&self) -> Option<&AxisPlan> {
        self.y_axis.as_ref().map(|axis| &axis.plan)
    }

    pub fn transform(&self) -> Option<&ValueTransform> {
        self.y_axis.as_ref().map(|axis| &axis.transform)
    }

    /// Sample centres along the canvas
    pub fn abscissas(&self) -> &[f32] {
        &self.abscissas
    }

    /// Y-axis label centres, top to bottom
    pub fn ordinates(&self) -> &[f32] {
        self.y_axis
            .as_ref()
            .map(|axis| axis.ordinates.as_slice())
            .unwrap_or_default()
    }

    pub fn x_labels(&self) -> &[AxisLabel] {
        &self.x_labels
    }

    pub fn y_labels(&self) -> &[AxisLabel] {
        self.y_axis
            .as_ref()
            .map(|axis| axis.labels.as_slice())
            .unwrap_or_default()
    }

    /// Mapped samples, canvas-relative
    pub fn points(&self) -> &[Point] {
        self.y_axis
            .as_ref()
            .map(|axis| axis.points.as_slice())
            .unwrap_or_default()
    }

    /// Grid and graph area in screen coordinates
    pub fn canvas(&self) -> Rectangle {
        self.regions.canvas
    }

    pub fn delegate(&self) -> &L {
        &self.delegate
    }

    /// Mutable delegate access; call [`reload`](Self::reload) afterwards if
    /// titles or formatting changed.
    pub fn delegate_mut(&mut self) -> &mut L {
        &mut self.delegate
    }

    /// Recompute regions, abscissas, the axis plan and mapped points
    fn relayout(&mut self) {
        self.regions = split_bounds(self.bounds, &self.metrics);
        self.dirty = true;

        let canvas = self.regions.canvas;
        let x_size = self.metrics.x_label_size;

        let titles: Vec<_> = (0..self.data_points.len())
            .map(|index| self.delegate.title_for_sample(index))
            .collect();
        let widths: Vec<u32> = titles
            .iter()
            .map(|title| title.as_ref().map_or(0, |text| x_size.text_width(text)))
            .collect();

        self.abscissas = label_abscissas(&widths, canvas.size.width);
        self.x_labels = titles
            .into_iter()
            .zip(&self.abscissas)
            .filter_map(|(title, &x)| title.map(|text| AxisLabel::new(text, x)))
            .collect();

        self.y_axis = match plan(&self.data_points, self.labelling_mode) {
            Ok(plan) => Some(self.layout_y_axis(plan)),
            Err(ChartError::EmptySeries) => {
                debug!("Line chart has no samples, skipping Y axis");
                None
            }
            Err(e) => {
                warn!("Line chart Y axis not planned: {}", e);
                None
            }
        };

        debug!(
            "Line chart relayout: {} samples, canvas {}x{}, {} Y labels",
            self.data_points.len(),
            canvas.size.width,
            canvas.size.height,
            self.ordinates().len()
        );
    }

    fn layout_y_axis(&self, plan: AxisPlan) -> YAxisLayout {
        let ordinates = label_ordinates(
            self.labelling_mode,
            plan.labels().len(),
            self.regions.y_labels.size.height,
            self.metrics.y_label_size.line_height(),
            &self.metrics,
        );

        let top_y = ordinates.first().copied().unwrap_or(0.0);
        let bottom_y = ordinates.last().copied().unwrap_or(top_y);
        let transform = ValueTransform::from_plan(&plan, top_y, bottom_y);

        let labels = plan
            .labels()
            .iter()
            .zip(&ordinates)
            .map(|(&value, &y)| AxisLabel::new(self.delegate.format_value(value), y))
            .collect();

        let points = self
            .abscissas
            .iter()
            .zip(&self.data_points)
            .map(|(&x, &value)| {
                Point::new(x.round() as i32, transform.map_value(value).round() as i32)
            })
            .collect();

        YAxisLayout {
            plan,
            transform,
            ordinates,
            labels,
            points,
        }
    }

    /// Route a press or drag at `point` through the highlight state machine
    fn track_pointer(&mut self, point: TouchPoint) {
        let x = (point.to_point().x - self.regions.canvas.top_left.x) as f32;
        let next = self.highlight.on_pointer(x, &self.abscissas, &self.delegate);
        self.set_highlight(next);
    }

    fn set_highlight(&mut self, next: HighlightState) {
        if next != self.highlight {
            self.highlight = next;
            self.dirty = true;
        }
    }

    fn draw_background<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.appearance.background))
            .draw(display)
    }

    /// Grid, fill and column highlight, clipped to the canvas
    fn draw_canvas_layers<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let canvas = self.regions.canvas;
        let abscissas: Vec<i32> = self.abscissas.iter().map(|x| x.round() as i32).collect();
        let ordinates: Vec<i32> = self.ordinates().iter().map(|y| y.round() as i32).collect();

        let mut translated = display.translated(canvas.top_left);
        let mut clipped = translated.clipped(&Rectangle::new(Point::zero(), canvas.size));

        draw_grid(
            &self.appearance.grid,
            canvas.size,
            &abscissas,
            &ordinates,
            &mut clipped,
        )?;
        draw_graph_fill(
            &self.appearance.graph.fill,
            self.points(),
            canvas.size,
            &mut clipped,
        )?;

        if self.appearance.highlight_mode == HighlightMode::Column {
            if let Some(span) = self
                .highlighted_point()
                .and_then(|(index, _)| {
                    highlight_column_span(&self.abscissas, index, canvas.size.width)
                })
            {
                draw_highlight_column(
                    span,
                    self.appearance.highlight_line.color,
                    canvas.size,
                    &mut clipped,
                )?;
            }
        }

        Ok(())
    }

    /// Highlight line, dot and value label
    fn draw_highlight<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Some((index, point)) = self.highlighted_point() else {
            return Ok(());
        };

        let canvas = self.regions.canvas;
        let mut translated = display.translated(canvas.top_left);

        if self.appearance.highlight_mode == HighlightMode::Abscissa {
            let mut clipped = translated.clipped(&Rectangle::new(Point::zero(), canvas.size));
            draw_highlight_line(
                point.x,
                &self.appearance.highlight_line,
                canvas.size,
                &mut clipped,
            )?;
        }

        draw_dot(
            point,
            self.appearance.dot_radius,
            self.appearance.dot_color,
            &mut translated,
        )?;

        if let Some(&value) = self.data_points.get(index) {
            let text = self.delegate.format_value(value);
            draw_value_label(
                text.as_str(),
                point,
                self.appearance.dot_radius,
                self.metrics.y_label_size,
                self.appearance.y_label_color,
                &mut translated,
            )?;
        }

        Ok(())
    }

    fn highlighted_point(&self) -> Option<(usize, Point)> {
        let index = self.highlight.index()?;
        let point = *self.points().get(index)?;
        Some((index, point))
    }
}

impl<L: LineChartDelegate> Drawable for LineChart<L> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Layered rendering: background → grid and fill → line → labels → highlight
        self.draw_background(display)?;
        self.draw_canvas_layers(display)?;

        draw_graph_line(
            &self.appearance.graph,
            self.points(),
            &mut display.translated(self.regions.canvas.top_left),
        )?;

        draw_y_axis_labels(
            self.y_labels(),
            self.regions.y_labels,
            &self.metrics,
            self.appearance.y_label_color,
            display,
        )?;
        draw_x_axis_labels(
            &self.x_labels,
            self.regions.x_labels,
            &self.metrics,
            self.appearance.x_label_color,
            display,
        )?;

        self.draw_highlight(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl<L: LineChartDelegate> Touchable for LineChart<L> {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) => {
                if !self.contains_point(point) {
                    return TouchResult::NotHandled;
                }
                self.tracking = true;
                self.track_pointer(point);
            }
            TouchEvent::Drag(point) => {
                if !self.tracking {
                    return TouchResult::NotHandled;
                }
                self.track_pointer(point);
            }
            TouchEvent::Release | TouchEvent::Cancel => {
                if !self.tracking {
                    return TouchResult::NotHandled;
                }
                self.tracking = false;
                let next = self.highlight.on_release();
                self.set_highlight(next);
            }
        }

        TouchResult::Handled
    }
}
