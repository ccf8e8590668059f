//! Color definitions for chart defaults
//!
//! All colors are RGB565, the native format of the target displays.
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

// ============================================================================
// Grid Colors
// ============================================================================

/// Darkest graphite - chart background
pub const GRAPHITE_1: Rgb565 = Rgb565::new(23 >> 3, 23 >> 2, 26 >> 3);

/// Dark graphite
pub const GRAPHITE_2: Rgb565 = Rgb565::new(46 >> 3, 46 >> 2, 51 >> 3);

/// Medium graphite - primary grid band
pub const GRAPHITE_3: Rgb565 = Rgb565::new(69 >> 3, 69 >> 2, 77 >> 3);

/// Light graphite - secondary grid band
pub const GRAPHITE_4: Rgb565 = Rgb565::new(92 >> 3, 92 >> 2, 102 >> 3);

/// Axis line color (70% white)
pub const AXIS_GRAY: Rgb565 = Rgb565::new(179 >> 3, 179 >> 2, 179 >> 3);

/// Grid line color (50% white)
pub const GRID_GRAY: Rgb565 = Rgb565::new(128 >> 3, 128 >> 2, 128 >> 3);

// ============================================================================
// Graph Colors
// ============================================================================

/// Area fill under the graph line
pub const GRAPH_BROWN: Rgb565 = Rgb565::new(153 >> 3, 102 >> 2, 51 >> 3);

/// Highlight line color
pub const HIGHLIGHT_YELLOW: Rgb565 = Rgb565::new(31, 63, 0);

/// Highlight dot color
pub const HIGHLIGHT_BLUE: Rgb565 = Rgb565::new(0, 0, 31);

/// Pure white - label text
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

// ============================================================================
// Blending
// ============================================================================

/// Linear blend between two colors, `t` clamped to `0.0..=1.0`.
pub fn lerp_color(start: Rgb565, end: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let (r0, g0, b0) = rgb565_to_rgb888(start);
    let (r1, g1, b1) = rgb565_to_rgb888(end);

    let r = r0 as f32 + (r1 as f32 - r0 as f32) * t;
    let g = g0 as f32 + (g1 as f32 - g0 as f32) * t;
    let b = b0 as f32 + (b1 as f32 - b0 as f32) * t;

    Rgb565::new(r as u8 >> 3, g as u8 >> 2, b as u8 >> 3)
}

fn rgb565_to_rgb888(color: Rgb565) -> (u8, u8, u8) {
    let (r5, g6, b5) = (color.r(), color.g(), color.b());

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8, g8, b8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_color(Rgb565::BLACK, WHITE, 0.0), Rgb565::BLACK);
        assert_eq!(lerp_color(Rgb565::BLACK, WHITE, 1.0), WHITE);
        assert_eq!(lerp_color(Rgb565::BLACK, WHITE, 7.0), WHITE);
    }
}
