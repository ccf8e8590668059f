// src/ui/mod.rs
//! UI building blocks for the line chart
//!
//! - Core traits for drawable and touchable elements
//! - Styling primitives (colors, text sizes)
//! - The line chart component itself

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::LineChart;
pub use styling::TextSize;
pub use self::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
