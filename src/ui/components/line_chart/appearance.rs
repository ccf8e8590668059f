//! Declarative chart appearance
//!
//! Grid (background), graph (foreground) and highlight settings grouped into a
//! single [`LineChartAppearance`]. The default reproduces a dark graphite grid
//! with alternating columns and a brown area fill.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::styling::{
    AXIS_GRAY, GRAPH_BROWN, GRAPHITE_1, GRAPHITE_3, GRAPHITE_4, GRID_GRAY, HIGHLIGHT_BLUE,
    HIGHLIGHT_YELLOW, WHITE,
};

use super::constants::{
    DEFAULT_AXIS_LINE_WIDTH_PX, DEFAULT_DOT_RADIUS_PX, DEFAULT_GRAPH_LINE_WIDTH_PX,
    DEFAULT_GRID_LINE_WIDTH_PX, DEFAULT_HIGHLIGHT_LINE_WIDTH_PX,
};

// ============================================================================
// Lines
// ============================================================================

/// Stroke settings for a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAttributes {
    /// Line width in pixels; zero hides the line
    pub width: u32,
    /// Line color
    pub color: Rgb565,
}

impl LineAttributes {
    pub const fn new(width: u32, color: Rgb565) -> Self {
        Self { width, color }
    }

    /// Whether the line draws anything
    pub fn is_visible(&self) -> bool {
        self.width > 0
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Background fill of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridFillMode {
    /// One color across the canvas
    Solid(Rgb565),
    /// Horizontal bands between Y-axis grid lines, alternating colors
    AlternateRows { primary: Rgb565, secondary: Rgb565 },
    /// Vertical bands between X-axis grid lines, alternating colors
    AlternateColumns { primary: Rgb565, secondary: Rgb565 },
    /// Not rendered; the canvas is left unfilled
    Gradient,
}

/// Grid lines and fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAppearance {
    /// Left and bottom edges of the canvas
    pub axis: LineAttributes,
    /// Lines through the Y-axis label centres
    pub horizontal_lines: LineAttributes,
    /// Lines through the X-axis label centres
    pub vertical_lines: LineAttributes,
    pub fill: GridFillMode,
}

impl Default for GridAppearance {
    fn default() -> Self {
        Self {
            axis: LineAttributes::new(DEFAULT_AXIS_LINE_WIDTH_PX, AXIS_GRAY),
            horizontal_lines: LineAttributes::new(DEFAULT_GRID_LINE_WIDTH_PX, GRID_GRAY),
            vertical_lines: LineAttributes::new(DEFAULT_GRID_LINE_WIDTH_PX, GRID_GRAY),
            fill: GridFillMode::AlternateColumns {
                primary: GRAPHITE_3,
                secondary: GRAPHITE_4,
            },
        }
    }
}

// ============================================================================
// Graph
// ============================================================================

/// Fill of the area between the graph line and the canvas bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphFillMode {
    /// Line only
    None,
    /// One color
    Solid(Rgb565),
    /// Vertical gradient in `bands` steps, `top` at the line, `bottom` at the
    /// canvas bottom
    Gradient { top: Rgb565, bottom: Rgb565, bands: u8 },
}

/// Graph line and area fill
///
/// For fill only, set a fill mode and a zero `line.width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphAppearance {
    pub line: LineAttributes,
    pub fill: GraphFillMode,
}

impl Default for GraphAppearance {
    fn default() -> Self {
        Self {
            line: LineAttributes::new(DEFAULT_GRAPH_LINE_WIDTH_PX, Rgb565::BLACK),
            fill: GraphFillMode::Solid(GRAPH_BROWN),
        }
    }
}

// ============================================================================
// Highlighting
// ============================================================================

/// Marker drawn behind the highlighted sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMode {
    /// Vertical column spanned by the abscissas midway between the selected
    /// sample and each of its immediate neighbours
    Column,
    /// Vertical line through the selected sample
    #[default]
    Abscissa,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Complete chart appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChartAppearance {
    /// Fill of the whole chart bounds, labels included
    pub background: Rgb565,
    pub grid: GridAppearance,
    pub graph: GraphAppearance,
    pub highlight_mode: HighlightMode,
    /// Color and width of the highlight line; only the color is used for
    /// [`HighlightMode::Column`]
    pub highlight_line: LineAttributes,
    pub dot_radius: u32,
    pub dot_color: Rgb565,
    pub y_label_color: Rgb565,
    pub x_label_color: Rgb565,
}

impl Default for LineChartAppearance {
    fn default() -> Self {
        Self {
            background: GRAPHITE_1,
            grid: GridAppearance::default(),
            graph: GraphAppearance::default(),
            highlight_mode: HighlightMode::default(),
            highlight_line: LineAttributes::new(DEFAULT_HIGHLIGHT_LINE_WIDTH_PX, HIGHLIGHT_YELLOW),
            dot_radius: DEFAULT_DOT_RADIUS_PX,
            dot_color: HIGHLIGHT_BLUE,
            y_label_color: WHITE,
            x_label_color: WHITE,
        }
    }
}
