//! Chart region split and axis label placement
//!
//! The chart is divided into a Y-axis label column on the left, an X-axis
//! label row along the bottom and the canvas in between. Label centres are
//! reported back as plain canvas-relative positions: ordinates for Y-axis
//! labels and abscissas for X-axis labels.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::ui::styling::TextSize;

use super::constants::{
    DEFAULT_X_LABEL_TOP_MARGIN_PX, DEFAULT_Y_BOTTOM_LABEL_BOTTOM_MARGIN_PX,
    DEFAULT_Y_LABEL_MAX_WIDTH_PX, DEFAULT_Y_LABEL_RIGHT_MARGIN_PX,
    DEFAULT_Y_TOP_LABEL_TOP_MARGIN_PX,
};
use super::planner::LabellingMode;

/// Label column/row sizes and margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMetrics {
    /// Width of the Y-axis label column in pixels
    pub y_label_max_width: u32,
    /// Gap between Y-axis labels and the canvas in pixels
    pub y_label_right_margin: u32,
    /// Gap above the top Y-axis label in pixels
    pub y_top_label_top_margin: u32,
    /// Gap below the bottom Y-axis label in pixels
    pub y_bottom_label_bottom_margin: u32,
    /// Gap between the canvas and the X-axis labels in pixels
    pub x_label_top_margin: u32,
    /// Font for Y-axis labels
    pub y_label_size: TextSize,
    /// Font for X-axis labels
    pub x_label_size: TextSize,
}

impl Default for ChartMetrics {
    fn default() -> Self {
        Self {
            y_label_max_width: DEFAULT_Y_LABEL_MAX_WIDTH_PX,
            y_label_right_margin: DEFAULT_Y_LABEL_RIGHT_MARGIN_PX,
            y_top_label_top_margin: DEFAULT_Y_TOP_LABEL_TOP_MARGIN_PX,
            y_bottom_label_bottom_margin: DEFAULT_Y_BOTTOM_LABEL_BOTTOM_MARGIN_PX,
            x_label_top_margin: DEFAULT_X_LABEL_TOP_MARGIN_PX,
            y_label_size: TextSize::Medium,
            x_label_size: TextSize::Medium,
        }
    }
}

/// The three areas a chart's bounds are divided into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRegions {
    /// Grid and graph area
    pub canvas: Rectangle,
    /// Y-axis label column, same top and height as the canvas
    pub y_labels: Rectangle,
    /// X-axis label row, same left and width as the canvas
    pub x_labels: Rectangle,
}

/// Divide `bounds` into label column, label row and canvas.
pub fn split_bounds(bounds: Rectangle, metrics: &ChartMetrics) -> ChartRegions {
    let column_width = metrics.y_label_max_width.min(bounds.size.width);
    let row_height = metrics
        .x_label_top_margin
        .saturating_add(metrics.x_label_size.line_height())
        .min(bounds.size.height);

    let canvas_size = Size::new(
        bounds.size.width - column_width,
        bounds.size.height - row_height,
    );
    let canvas_top_left = bounds.top_left + Point::new(column_width as i32, 0);

    ChartRegions {
        canvas: Rectangle::new(canvas_top_left, canvas_size),
        y_labels: Rectangle::new(
            bounds.top_left,
            Size::new(column_width, canvas_size.height),
        ),
        x_labels: Rectangle::new(
            canvas_top_left + Point::new(0, canvas_size.height as i32),
            Size::new(canvas_size.width, row_height),
        ),
    }
}

/// Vertical centres of `count` Y-axis labels, top to bottom.
///
/// The first label sits `y_top_label_top_margin` below the column top and the
/// last one `y_bottom_label_bottom_margin` above its bottom. Min/max/average
/// labelling centres the middle label between the margins; fixed-step
/// labelling spaces labels by a whole-pixel step and pins the last one.
pub fn label_ordinates(
    mode: LabellingMode,
    count: usize,
    column_height: u32,
    label_height: u32,
    metrics: &ChartMetrics,
) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }

    let half_label = label_height as f32 / 2.0;
    let top = metrics.y_top_label_top_margin as f32 + half_label;
    let bottom = (column_height as f32 - metrics.y_bottom_label_bottom_margin as f32 - half_label)
        .max(top);

    if count == 1 {
        return vec![(top + bottom) / 2.0];
    }

    match mode {
        LabellingMode::MinMaxAverage { .. } if count == 3 => {
            let offset = (metrics.y_top_label_top_margin as f32
                - metrics.y_bottom_label_bottom_margin as f32)
                / 2.0;
            let middle = (column_height as f32 / 2.0 + offset).clamp(top, bottom);
            vec![top, middle, bottom]
        }
        _ => {
            let delta = ((bottom - top) / (count - 1) as f32).round();
            let mut ordinates: Vec<f32> = (0..count - 1)
                .map(|k| (top + k as f32 * delta).min(bottom))
                .collect();
            ordinates.push(bottom);
            ordinates
        }
    }
}

/// Horizontal centres of X-axis labels with the given rendered widths.
///
/// The first label is flush with the canvas left edge, the last with its right
/// edge, and the rest are evenly spread between. A single label is centred.
pub fn label_abscissas(widths: &[u32], canvas_width: u32) -> Vec<f32> {
    let canvas_width = canvas_width as f32;

    match widths {
        [] => Vec::new(),
        [_] => vec![canvas_width / 2.0],
        [first, .., last] => {
            let left = *first as f32 / 2.0;
            let right = canvas_width - *last as f32 / 2.0;
            let step = (right - left) / (widths.len() - 1) as f32;
            (0..widths.len()).map(|i| left + i as f32 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0, 0), Size::new(160, 120))
    }

    #[test]
    fn test_split_bounds() {
        let regions = split_bounds(bounds(), &ChartMetrics::default());

        assert_eq!(
            regions.canvas,
            Rectangle::new(Point::new(60, 0), Size::new(100, 102))
        );
        assert_eq!(
            regions.y_labels,
            Rectangle::new(Point::new(0, 0), Size::new(60, 102))
        );
        assert_eq!(
            regions.x_labels,
            Rectangle::new(Point::new(60, 102), Size::new(100, 18))
        );
    }

    #[test]
    fn test_split_tiny_bounds_does_not_underflow() {
        let tiny = Rectangle::new(Point::new(5, 5), Size::new(10, 4));
        let regions = split_bounds(tiny, &ChartMetrics::default());

        assert_eq!(regions.canvas.size, Size::new(0, 0));
    }

    #[test]
    fn test_min_max_average_ordinates() {
        let ordinates = label_ordinates(
            LabellingMode::MinMaxAverage { rounding_unit: 5.0 },
            3,
            102,
            10,
            &ChartMetrics::default(),
        );
        assert_eq!(ordinates, vec![21.0, 51.0, 81.0]);
    }

    #[test]
    fn test_min_max_average_middle_follows_margin_offset() {
        let metrics = ChartMetrics {
            y_top_label_top_margin: 30,
            y_bottom_label_bottom_margin: 10,
            ..ChartMetrics::default()
        };
        let ordinates = label_ordinates(LabellingMode::default(), 3, 100, 10, &metrics);
        assert_eq!(ordinates, vec![35.0, 60.0, 85.0]);
    }

    #[test]
    fn test_fixed_step_ordinates_use_whole_pixel_spacing() {
        let ordinates = label_ordinates(
            LabellingMode::FixedStep { step: 2.0 },
            9,
            102,
            10,
            &ChartMetrics::default(),
        );
        assert_eq!(
            ordinates,
            vec![21.0, 29.0, 37.0, 45.0, 53.0, 61.0, 69.0, 77.0, 81.0]
        );
    }

    #[test]
    fn test_single_ordinate_is_centred() {
        let ordinates = label_ordinates(
            LabellingMode::FixedStep { step: 5.0 },
            1,
            102,
            10,
            &ChartMetrics::default(),
        );
        assert_eq!(ordinates, vec![51.0]);
    }

    #[test]
    fn test_short_column_collapses_labels() {
        let ordinates =
            label_ordinates(LabellingMode::default(), 3, 20, 10, &ChartMetrics::default());
        assert_eq!(ordinates, vec![21.0, 21.0, 21.0]);
    }

    #[test]
    fn test_abscissas_span_canvas() {
        assert_eq!(label_abscissas(&[10, 20], 100), vec![5.0, 90.0]);
        assert_eq!(label_abscissas(&[0; 5], 100), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(label_abscissas(&[12], 100), vec![50.0]);
        assert!(label_abscissas(&[], 100).is_empty());
    }
}
