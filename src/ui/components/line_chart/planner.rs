//! Y-axis label planning
//!
//! Picks the values shown beside the horizontal grid lines. Positions are not
//! decided here; see [`super::layout`].

use log::warn;
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_ROUNDING_UNIT, MAX_Y_LABELS};
use super::{ChartError, ChartResult};

/// How Y-axis label values are chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LabellingMode {
    /// Three labels. The top one is the smallest multiple of `rounding_unit`
    /// at or above the data maximum, the bottom one the largest multiple at
    /// or below the data minimum, and the middle one their exact average.
    MinMaxAverage {
        /// Granularity of the top and bottom labels (must be > 0)
        rounding_unit: f64,
    },

    /// Labels at every multiple of `step` from the rounded-down minimum up to
    /// the rounded-up maximum.
    FixedStep {
        /// Distance between consecutive labels (must be > 0)
        step: f64,
    },
}

impl Default for LabellingMode {
    fn default() -> Self {
        Self::MinMaxAverage {
            rounding_unit: DEFAULT_ROUNDING_UNIT,
        }
    }
}

/// Resolved Y-axis bounds and label values
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPlan {
    top: f64,
    bottom: f64,
    /// Ordered top to bottom (descending)
    labels: Vec<f64>,
}

impl AxisPlan {
    /// Value of the top-most label
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Value of the bottom-most label
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Label values, top to bottom
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Data span covered by the axis
    pub fn span(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Plan the Y-axis labels for `series`.
///
/// Fails on an empty series, on non-finite samples and on a non-positive
/// rounding unit or step. Callers render no axis in that case.
pub fn plan(series: &[f64], mode: LabellingMode) -> ChartResult<AxisPlan> {
    let (min, max) = extremes(series)?;

    match mode {
        LabellingMode::MinMaxAverage { rounding_unit } => {
            plan_min_max_average(min, max, rounding_unit)
        }
        LabellingMode::FixedStep { step } => plan_fixed_step(min, max, step),
    }
}

fn extremes(series: &[f64]) -> ChartResult<(f64, f64)> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteSample { index });
        }
        min = min.min(value);
        max = max.max(value);
    }

    Ok((min, max))
}

fn plan_min_max_average(min: f64, max: f64, unit: f64) -> ChartResult<AxisPlan> {
    if !(unit.is_finite() && unit > 0.0) {
        warn!("Rejecting min/max/average rounding unit {}", unit);
        return Err(ChartError::InvalidRoundingUnit { unit });
    }

    let top = unit * (max / unit).ceil();
    let bottom = unit * (min / unit).floor();
    let average = (top + bottom) / 2.0;

    Ok(AxisPlan {
        top,
        bottom,
        labels: vec![top, average, bottom],
    })
}

fn plan_fixed_step(min: f64, max: f64, step: f64) -> ChartResult<AxisPlan> {
    if !(step.is_finite() && step > 0.0) {
        warn!("Rejecting fixed label step {}", step);
        return Err(ChartError::InvalidStep { step });
    }

    let top = step * (max / step).ceil();
    let bottom = step * (min / step).floor();

    // Already integral up to rounding error in the subtraction
    let gaps = ((top - bottom) / step).round();
    let count = (gaps as usize).saturating_add(1);
    if !gaps.is_finite() || count > MAX_Y_LABELS {
        warn!("Fixed step {} over [{}, {}] needs {} labels", step, bottom, top, count);
        return Err(ChartError::TooManyLabels {
            count,
            max: MAX_Y_LABELS,
        });
    }

    let labels = (0..count).map(|k| top - k as f64 * step).collect();

    Ok(AxisPlan {
        top,
        bottom,
        labels,
    })
}
