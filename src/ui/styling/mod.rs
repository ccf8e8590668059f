//! Styling primitives for chart rendering
//!
//! - [`colors`] - Color constants used by the default appearance, plus blending
//! - [`text`] - Text size presets and label measurement

pub mod colors;
pub mod text;

pub use colors::{
    AXIS_GRAY, GRAPH_BROWN, GRAPHITE_1, GRAPHITE_2, GRAPHITE_3, GRAPHITE_4, GRID_GRAY,
    HIGHLIGHT_BLUE, HIGHLIGHT_YELLOW, WHITE, lerp_color,
};
pub use text::{LabelText, MAX_LABEL_LENGTH, TextSize, label_text, value_text};
