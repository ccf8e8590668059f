//! Graph rendering: area fill, polyline and highlight marker
//!
//! All functions draw in canvas-relative coordinates.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Polyline, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::ui::styling::{TextSize, lerp_color};

use super::appearance::{GraphAppearance, GraphFillMode, LineAttributes};
use super::constants::HIGHLIGHT_LABEL_GAP_PX;
use super::grid::draw_line;

/// Fill the area between the polyline through `points` and the canvas bottom.
///
/// Equivalent to closing the point list with the two bottom corners below the
/// first and last point; drawn as one vertical stroke per pixel column.
pub(super) fn draw_graph_fill<D: DrawTarget<Color = Rgb565>>(
    fill: &GraphFillMode,
    points: &[Point],
    canvas: Size,
    display: &mut D,
) -> Result<(), D::Error> {
    let colors = match *fill {
        GraphFillMode::None => return Ok(()),
        GraphFillMode::Solid(color) => vec![color],
        GraphFillMode::Gradient { top, bottom, bands } => gradient_colors(top, bottom, bands),
    };

    let bottom = canvas.height as i32 - 1;

    match points {
        [] => Ok(()),
        [only] => draw_fill_column(only.x, only.y, bottom, &colors, display),
        _ => {
            for pair in points.windows(2) {
                let (start, end) = if pair[0].x <= pair[1].x {
                    (pair[0], pair[1])
                } else {
                    (pair[1], pair[0])
                };

                let dx = (end.x - start.x).max(1) as f32;
                for x in start.x..=end.x {
                    let t = (x - start.x) as f32 / dx;
                    let y_line = start.y + ((end.y - start.y) as f32 * t).round() as i32;
                    draw_fill_column(x, y_line, bottom, &colors, display)?;
                }
            }
            Ok(())
        }
    }
}

/// Colors of a banded gradient, first band at the line
fn gradient_colors(top: Rgb565, bottom: Rgb565, bands: u8) -> Vec<Rgb565> {
    let bands = bands.max(1) as usize;
    (0..bands)
        .map(|i| {
            let t = if bands > 1 {
                i as f32 / (bands - 1) as f32
            } else {
                0.0
            };
            lerp_color(top, bottom, t)
        })
        .collect()
}

/// One pixel column from `y_line` down to `bottom`, split evenly into bands.
fn draw_fill_column<D: DrawTarget<Color = Rgb565>>(
    x: i32,
    y_line: i32,
    bottom: i32,
    colors: &[Rgb565],
    display: &mut D,
) -> Result<(), D::Error> {
    if y_line > bottom || colors.is_empty() {
        return Ok(());
    }

    let height = (bottom - y_line + 1) as f32;
    let band_height = height / colors.len() as f32;

    for (index, color) in colors.iter().enumerate() {
        let start = y_line + (band_height * index as f32) as i32;
        let end = if index == colors.len() - 1 {
            bottom
        } else {
            y_line + (band_height * (index as f32 + 1.0)) as i32 - 1
        };

        if end >= start {
            Line::new(Point::new(x, start), Point::new(x, end))
                .into_styled(PrimitiveStyle::with_stroke(*color, 1))
                .draw(display)?;
        }
    }

    Ok(())
}

/// Stroke the polyline through `points`.
pub(super) fn draw_graph_line<D: DrawTarget<Color = Rgb565>>(
    appearance: &GraphAppearance,
    points: &[Point],
    display: &mut D,
) -> Result<(), D::Error> {
    if !appearance.line.is_visible() || points.len() < 2 {
        return Ok(());
    }

    Polyline::new(points)
        .into_styled(PrimitiveStyle::with_stroke(
            appearance.line.color,
            appearance.line.width,
        ))
        .draw(display)
}

/// Horizontal extent of the highlight column around sample `index`.
///
/// Runs from the midpoint with the previous abscissa to the midpoint with the
/// next one; the first and last columns extend to the canvas edges.
pub(super) fn highlight_column_span(
    abscissas: &[f32],
    index: usize,
    canvas_width: u32,
) -> Option<(i32, i32)> {
    let x = *abscissas.get(index)?;

    let left = match index.checked_sub(1).and_then(|i| abscissas.get(i)) {
        Some(prev) => (prev + x) / 2.0,
        None => 0.0,
    };
    let right = match abscissas.get(index + 1) {
        Some(next) => (x + next) / 2.0,
        None => canvas_width as f32,
    };

    Some((left.round() as i32, right.round() as i32))
}

/// Fill the highlight column `[left, right)` over the canvas height.
pub(super) fn draw_highlight_column<D: DrawTarget<Color = Rgb565>>(
    span: (i32, i32),
    color: Rgb565,
    canvas: Size,
    display: &mut D,
) -> Result<(), D::Error> {
    let (left, right) = span;
    if right <= left || canvas.height == 0 {
        return Ok(());
    }

    Rectangle::new(
        Point::new(left, 0),
        Size::new((right - left) as u32, canvas.height),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
}

/// Vertical highlight line at `x`
pub(super) fn draw_highlight_line<D: DrawTarget<Color = Rgb565>>(
    x: i32,
    attributes: &LineAttributes,
    canvas: Size,
    display: &mut D,
) -> Result<(), D::Error> {
    let bottom = canvas.height as i32 - 1;
    draw_line(Point::new(x, 0), Point::new(x, bottom), attributes, display)
}

/// Dot at the highlighted sample
pub(super) fn draw_dot<D: DrawTarget<Color = Rgb565>>(
    center: Point,
    radius: u32,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    if radius == 0 {
        return Ok(());
    }

    Circle::with_center(center, radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Value text centred above the dot
pub(super) fn draw_value_label<D: DrawTarget<Color = Rgb565>>(
    text: &str,
    center: Point,
    radius: u32,
    size: TextSize,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    if text.is_empty() {
        return Ok(());
    }

    let character_style = MonoTextStyle::new(size.font(), color);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Bottom)
        .build();
    let anchor = center - Point::new(0, radius as i32 + HIGHLIGHT_LABEL_GAP_PX);

    Text::with_text_style(text, anchor, character_style, text_style).draw(display)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    const CANVAS: Size = Size::new(100, 50);

    #[test]
    fn test_solid_fill_below_line_only() {
        let mut fb = FrameBuffer::new(CANVAS);
        let points = [Point::new(0, 20), Point::new(99, 20)];

        draw_graph_fill(&GraphFillMode::Solid(Rgb565::RED), &points, CANVAS, &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(50, 19)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(50, 20)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(50, 49)), Some(Rgb565::RED));
    }

    #[test]
    fn test_fill_follows_slope() {
        let mut fb = FrameBuffer::new(CANVAS);
        let points = [Point::new(0, 40), Point::new(40, 0)];

        draw_graph_fill(&GraphFillMode::Solid(Rgb565::RED), &points, CANVAS, &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(10, 25)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(10, 35)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(60, 45)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_gradient_fill_bands() {
        let mut fb = FrameBuffer::new(CANVAS);
        let points = [Point::new(0, 0), Point::new(99, 0)];
        let fill = GraphFillMode::Gradient {
            top: Rgb565::RED,
            bottom: Rgb565::BLUE,
            bands: 2,
        };

        draw_graph_fill(&fill, &points, CANVAS, &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(5, 2)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(5, 48)), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_no_fill_draws_nothing() {
        let mut fb = FrameBuffer::new(CANVAS);
        let points = [Point::new(0, 0), Point::new(99, 0)];

        draw_graph_fill(&GraphFillMode::None, &points, CANVAS, &mut fb).unwrap();

        assert!(!fb.is_dirty());
    }

    #[test]
    fn test_line_needs_two_points_and_width() {
        let mut fb = FrameBuffer::new(CANVAS);
        let visible = GraphAppearance {
            line: LineAttributes::new(1, Rgb565::WHITE),
            fill: GraphFillMode::None,
        };
        let hidden = GraphAppearance {
            line: LineAttributes::new(0, Rgb565::WHITE),
            ..visible
        };

        draw_graph_line(&visible, &[Point::new(3, 3)], &mut fb).unwrap();
        draw_graph_line(&hidden, &[Point::new(0, 10), Point::new(99, 10)], &mut fb).unwrap();
        assert!(!fb.is_dirty());

        draw_graph_line(&visible, &[Point::new(0, 10), Point::new(99, 10)], &mut fb).unwrap();
        assert_eq!(fb.pixel(Point::new(50, 10)), Some(Rgb565::WHITE));
    }

    #[test]
    fn test_column_span_uses_neighbour_midpoints() {
        let abscissas = [0.0, 25.0, 50.0, 75.0, 100.0];

        assert_eq!(highlight_column_span(&abscissas, 0, 100), Some((0, 13)));
        assert_eq!(highlight_column_span(&abscissas, 2, 100), Some((38, 63)));
        assert_eq!(highlight_column_span(&abscissas, 4, 100), Some((88, 100)));
        assert_eq!(highlight_column_span(&abscissas, 5, 100), None);
        assert_eq!(highlight_column_span(&[50.0], 0, 100), Some((0, 100)));
    }

    #[test]
    fn test_dot_is_centred() {
        let mut fb = FrameBuffer::new(CANVAS);

        draw_dot(Point::new(20, 20), 3, Rgb565::BLUE, &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(20, 20)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(23, 20)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(25, 20)), Some(Rgb565::BLACK));
    }
}
