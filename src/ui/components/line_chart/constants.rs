//! Constants for line chart layout and rendering
//!
//! All magic numbers are defined here with descriptive names and units.

/// Rounding unit used by the default min/max/average labelling
pub const DEFAULT_ROUNDING_UNIT: f64 = 10.0;

/// Upper bound on Y-axis labels produced by fixed-step labelling
pub const MAX_Y_LABELS: usize = 64;

/// Data spans at or below this are treated as zero (flat series)
pub const MIN_DATA_SPAN: f64 = 1e-12;

/// Width of the Y-axis label column in pixels
pub const DEFAULT_Y_LABEL_MAX_WIDTH_PX: u32 = 60;

/// Gap between Y-axis labels and the canvas in pixels
pub const DEFAULT_Y_LABEL_RIGHT_MARGIN_PX: u32 = 8;

/// Gap above the top Y-axis label in pixels
pub const DEFAULT_Y_TOP_LABEL_TOP_MARGIN_PX: u32 = 16;

/// Gap below the bottom Y-axis label in pixels
pub const DEFAULT_Y_BOTTOM_LABEL_BOTTOM_MARGIN_PX: u32 = 16;

/// Gap between the canvas and the X-axis labels in pixels
pub const DEFAULT_X_LABEL_TOP_MARGIN_PX: u32 = 8;

/// Default axis line width in pixels
pub const DEFAULT_AXIS_LINE_WIDTH_PX: u32 = 2;

/// Default grid line width in pixels
pub const DEFAULT_GRID_LINE_WIDTH_PX: u32 = 1;

/// Default graph line width in pixels
pub const DEFAULT_GRAPH_LINE_WIDTH_PX: u32 = 1;

/// Default highlight line width in pixels
pub const DEFAULT_HIGHLIGHT_LINE_WIDTH_PX: u32 = 2;

/// Default highlight dot radius in pixels
pub const DEFAULT_DOT_RADIUS_PX: u32 = 4;

/// Vertical gap between the highlight dot and its value label in pixels
pub const HIGHLIGHT_LABEL_GAP_PX: i32 = 3;

/// Default number of bands in a gradient area fill
pub const DEFAULT_GRADIENT_BANDS: u8 = 8;
