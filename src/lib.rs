//! Line chart control for `embedded-graphics` displays
//!
//! Renders a single data series as a stroked and optionally filled polyline
//! over a labelled grid, and highlights the sample nearest to a touch.
//! Axis titles, value formatting and highlight gating are supplied by the
//! host through [`ui::components::line_chart::LineChartDelegate`].

pub mod config;
pub mod framebuffer;
pub mod ui;

pub use config::ChartConfig;
pub use framebuffer::FrameBuffer;
pub use ui::components::line_chart::{
    ChartError, ChartResult, DefaultDelegate, LineChart, LineChartDelegate,
};
