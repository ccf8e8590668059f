//! Data value <-> canvas coordinate mapping
//!
//! Canvas Y grows downward, so larger values map to smaller Y.

use super::constants::MIN_DATA_SPAN;
use super::planner::AxisPlan;

/// Affine map from data values to canvas Y
///
/// Anchored at the top and bottom Y-axis labels: `top_value` sits at `top_y`
/// and `bottom_value` at `bottom_y`. Rebuilt whenever the series or the
/// vertical extent of the chart changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransform {
    top_value: f64,
    bottom_value: f64,
    top_y: f32,
    bottom_y: f32,
    /// Canvas pixels per data unit; zero for a flat axis
    scale: f64,
}

impl ValueTransform {
    /// Build a transform from the two anchor labels.
    ///
    /// A zero data span (flat series on a label multiple) is allowed: every
    /// value then maps halfway between `top_y` and `bottom_y`.
    pub fn new(top_value: f64, bottom_value: f64, top_y: f32, bottom_y: f32) -> Self {
        let data_span = top_value - bottom_value;
        let scale = if data_span.is_finite() && data_span.abs() > MIN_DATA_SPAN {
            (bottom_y - top_y) as f64 / data_span
        } else {
            0.0
        };

        Self {
            top_value,
            bottom_value,
            top_y,
            bottom_y,
            scale,
        }
    }

    /// Build a transform for `plan` with its top and bottom labels centred at
    /// `top_y` and `bottom_y`.
    pub fn from_plan(plan: &AxisPlan, top_y: f32, bottom_y: f32) -> Self {
        Self::new(plan.top(), plan.bottom(), top_y, bottom_y)
    }

    /// Whether the axis has no data span to scale against
    pub fn is_flat(&self) -> bool {
        self.scale == 0.0
    }

    /// Canvas Y of `value`
    pub fn map_value(&self, value: f64) -> f32 {
        if self.is_flat() {
            return (self.top_y + self.bottom_y) / 2.0;
        }

        let data_offset = value - self.bottom_value;
        (self.bottom_y as f64 - data_offset * self.scale) as f32
    }

    /// Data value at canvas Y `y`; the bottom value for a flat axis
    pub fn invert(&self, y: f32) -> f64 {
        if self.is_flat() {
            return self.bottom_value;
        }

        self.bottom_value + (self.bottom_y - y) as f64 / self.scale
    }

    /// Value of the top anchor
    pub fn top_value(&self) -> f64 {
        self.top_value
    }

    /// Value of the bottom anchor
    pub fn bottom_value(&self) -> f64 {
        self.bottom_value
    }
}

/// Index of the abscissa closest to `x`.
///
/// Ties go to the lowest index. `None` only when `abscissas` is empty.
pub fn nearest_sample_index(x: f32, abscissas: &[f32]) -> Option<usize> {
    abscissas
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(index, _)| index)
}
