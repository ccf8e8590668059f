//! Line chart rendering for embedded displays
//!
//! A [`LineChart`] draws one data series over a labelled grid:
//!
//! - Y-axis labels planned either as min/max/average or at a fixed step
//!   (see [`LabellingMode`])
//! - X-axis labels titled per sample by a [`LineChartDelegate`]
//! - Solid or alternating-band grid fill, separate axis and grid line styles
//! - Solid or banded-gradient area fill under the polyline
//! - Touch highlighting of the sample nearest to the finger
//!
//! # Pipeline
//!
//! Replacing the series or resizing the chart runs
//! [`plan`] -> [`layout`] -> [`ValueTransform`] once and caches the
//! resulting screen points; drawing only replays the cache.
//!
//! # Examples
//!
//! ```ignore
//! use linechart::ui::components::line_chart::*;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Rectangle;
//!
//! let bounds = Rectangle::new(Point::new(0, 0), Size::new(320, 240));
//! let mut chart = LineChart::new(bounds, DefaultDelegate)
//!     .with_labelling_mode(LabellingMode::FixedStep { step: 2.0 });
//!
//! chart.set_data_points(vec![1.0, 10.0, 10.0, 11.0, 15.0]);
//! chart.draw(&mut display)?;
//! ```

use thiserror_no_std::Error;

// Module declarations
pub mod appearance;
mod axis;
mod component;
pub mod constants;
pub mod delegate;
mod graph;
mod grid;
pub mod highlight;
pub mod layout;
pub mod mapper;
pub mod planner;

// Re-export main types
pub use appearance::{
    GraphAppearance, GraphFillMode, GridAppearance, GridFillMode, HighlightMode, LineAttributes,
    LineChartAppearance,
};
pub use axis::AxisLabel;
pub use component::LineChart;
pub use delegate::{DefaultDelegate, LineChartDelegate};
pub use highlight::HighlightState;
pub use layout::{ChartMetrics, ChartRegions, label_abscissas, label_ordinates, split_bounds};
pub use mapper::{ValueTransform, nearest_sample_index};
pub use planner::{AxisPlan, LabellingMode, plan};

/// Error types for chart operations
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// No samples to plan an axis for
    #[error("Series is empty")]
    EmptySeries,

    /// A sample is NaN or infinite
    #[error("Sample {index} is not a finite number")]
    NonFiniteSample {
        /// Position of the offending sample
        index: usize,
    },

    /// Min/max/average rounding unit is zero, negative or not finite
    #[error("Rounding unit must be positive and finite (got {unit})")]
    InvalidRoundingUnit {
        /// The rejected unit
        unit: f64,
    },

    /// Fixed label step is zero, negative or not finite
    #[error("Label step must be positive and finite (got {step})")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },

    /// Fixed-step labelling would produce more labels than can be laid out
    #[error("Too many axis labels ({count}, max: {max})")]
    TooManyLabels {
        /// Labels the step would produce
        count: usize,
        /// Maximum allowed labels
        max: usize,
    },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
