//! Grid rendering for the chart background
//!
//! Draws in canvas-relative coordinates: callers pass a target translated to
//! the canvas origin and clipped to its size.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use super::appearance::{GridAppearance, GridFillMode, LineAttributes};

/// Draw grid fill, then axes and grid lines.
///
/// `abscissas` and `ordinates` are whole-pixel canvas positions of the
/// vertical and horizontal grid lines.
pub(super) fn draw_grid<D: DrawTarget<Color = Rgb565>>(
    appearance: &GridAppearance,
    canvas: Size,
    abscissas: &[i32],
    ordinates: &[i32],
    display: &mut D,
) -> Result<(), D::Error> {
    draw_fill(&appearance.fill, canvas, abscissas, ordinates, display)?;
    draw_lines(appearance, canvas, abscissas, ordinates, display)
}

fn draw_fill<D: DrawTarget<Color = Rgb565>>(
    fill: &GridFillMode,
    canvas: Size,
    abscissas: &[i32],
    ordinates: &[i32],
    display: &mut D,
) -> Result<(), D::Error> {
    let width = canvas.width as i32;
    let height = canvas.height as i32;

    match *fill {
        GridFillMode::Solid(color) => fill_rect(0, 0, width, height, color, display),
        GridFillMode::AlternateRows { primary, secondary } => {
            let edges = band_edges(ordinates, height);
            for (index, band) in edges.windows(2).enumerate() {
                let color = if index % 2 == 0 { primary } else { secondary };
                fill_rect(0, band[0], width, band[1], color, display)?;
            }
            Ok(())
        }
        GridFillMode::AlternateColumns { primary, secondary } => {
            let edges = band_edges(abscissas, width);
            for (index, band) in edges.windows(2).enumerate() {
                let color = if index % 2 == 0 { primary } else { secondary };
                fill_rect(band[0], 0, band[1], height, color, display)?;
            }
            Ok(())
        }
        GridFillMode::Gradient => Ok(()),
    }
}

/// Band boundaries: the grid lines, extended to both canvas edges.
fn band_edges(lines: &[i32], extent: i32) -> Vec<i32> {
    let mut edges = Vec::with_capacity(lines.len() + 2);
    if lines.first() != Some(&0) {
        edges.push(0);
    }
    edges.extend_from_slice(lines);
    if edges.last() != Some(&extent) {
        edges.push(extent);
    }
    edges
}

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
fn fill_rect<D: DrawTarget<Color = Rgb565>>(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    if x1 <= x0 || y1 <= y0 {
        return Ok(());
    }

    Rectangle::with_corners(Point::new(x0, y0), Point::new(x1 - 1, y1 - 1))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

fn draw_lines<D: DrawTarget<Color = Rgb565>>(
    appearance: &GridAppearance,
    canvas: Size,
    abscissas: &[i32],
    ordinates: &[i32],
    display: &mut D,
) -> Result<(), D::Error> {
    let right = canvas.width as i32 - 1;
    let bottom = canvas.height as i32 - 1;

    // Axes: left edge, then bottom edge
    draw_line(Point::new(0, 0), Point::new(0, bottom), &appearance.axis, display)?;
    draw_line(
        Point::new(0, bottom),
        Point::new(right, bottom),
        &appearance.axis,
        display,
    )?;

    for &x in abscissas {
        draw_line(
            Point::new(x, 0),
            Point::new(x, bottom),
            &appearance.vertical_lines,
            display,
        )?;
    }

    for &y in ordinates {
        draw_line(
            Point::new(0, y),
            Point::new(right, y),
            &appearance.horizontal_lines,
            display,
        )?;
    }

    Ok(())
}

pub(super) fn draw_line<D: DrawTarget<Color = Rgb565>>(
    start: Point,
    end: Point,
    attributes: &LineAttributes,
    display: &mut D,
) -> Result<(), D::Error> {
    if !attributes.is_visible() {
        return Ok(());
    }

    Line::new(start, end)
        .into_styled(PrimitiveStyle::with_stroke(attributes.color, attributes.width))
        .draw(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    const CANVAS: Size = Size::new(40, 30);

    fn hidden_lines(fill: GridFillMode) -> GridAppearance {
        GridAppearance {
            axis: LineAttributes::new(0, Rgb565::WHITE),
            horizontal_lines: LineAttributes::new(0, Rgb565::WHITE),
            vertical_lines: LineAttributes::new(0, Rgb565::WHITE),
            fill,
        }
    }

    #[test]
    fn test_band_edges_extend_to_canvas() {
        assert_eq!(band_edges(&[10, 20], 30), vec![0, 10, 20, 30]);
        assert_eq!(band_edges(&[0, 15, 30], 30), vec![0, 15, 30]);
        assert_eq!(band_edges(&[], 30), vec![0, 30]);
    }

    #[test]
    fn test_alternate_rows_by_band_parity() {
        let mut fb = FrameBuffer::new(CANVAS);
        let appearance = hidden_lines(GridFillMode::AlternateRows {
            primary: Rgb565::RED,
            secondary: Rgb565::GREEN,
        });

        draw_grid(&appearance, CANVAS, &[], &[10, 20], &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(5, 5)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(5, 10)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(5, 19)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(5, 25)), Some(Rgb565::RED));
    }

    #[test]
    fn test_alternate_columns_by_band_parity() {
        let mut fb = FrameBuffer::new(CANVAS);
        let appearance = hidden_lines(GridFillMode::AlternateColumns {
            primary: Rgb565::RED,
            secondary: Rgb565::GREEN,
        });

        draw_grid(&appearance, CANVAS, &[0, 20, 40], &[], &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(3, 3)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(25, 3)), Some(Rgb565::GREEN));
    }

    #[test]
    fn test_gradient_grid_fill_is_not_drawn() {
        let mut fb = FrameBuffer::new(CANVAS);
        draw_grid(&hidden_lines(GridFillMode::Gradient), CANVAS, &[], &[], &mut fb).unwrap();
        assert!(!fb.is_dirty());
    }

    #[test]
    fn test_lines_drawn_over_fill() {
        let mut fb = FrameBuffer::new(CANVAS);
        let appearance = GridAppearance {
            axis: LineAttributes::new(1, Rgb565::WHITE),
            horizontal_lines: LineAttributes::new(1, Rgb565::YELLOW),
            vertical_lines: LineAttributes::new(1, Rgb565::CYAN),
            fill: GridFillMode::Solid(Rgb565::BLUE),
        };

        draw_grid(&appearance, CANVAS, &[20], &[10], &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(0, 5)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(5, 29)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(20, 5)), Some(Rgb565::CYAN));
        assert_eq!(fb.pixel(Point::new(5, 10)), Some(Rgb565::YELLOW));
        assert_eq!(fb.pixel(Point::new(5, 5)), Some(Rgb565::BLUE));
    }
}
