//! Axis label rendering
//!
//! Labels are positioned with `embedded-layout` against a reference box built
//! around each label centre, so text of any width lines up on its tick.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_layout::prelude::*;

use crate::ui::styling::LabelText;

use super::layout::ChartMetrics;

/// Text of an axis label and its centre along the axis, canvas-relative
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    text: LabelText,
    center: f32,
}

impl AxisLabel {
    pub fn new(text: LabelText, center: f32) -> Self {
        Self { text, center }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Ordinate for Y-axis labels, abscissa for X-axis labels
    pub fn center(&self) -> f32 {
        self.center
    }
}

/// Draw Y-axis labels right-aligned in `column`, leaving the right margin.
pub(super) fn draw_y_axis_labels<D: DrawTarget<Color = Rgb565>>(
    labels: &[AxisLabel],
    column: Rectangle,
    metrics: &ChartMetrics,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let width = column.size.width.saturating_sub(metrics.y_label_right_margin);
    if width == 0 {
        return Ok(());
    }

    let style = MonoTextStyle::new(metrics.y_label_size.font(), color);
    let height = metrics.y_label_size.line_height();

    for label in labels {
        let center_y = column.top_left.y + label.center.round() as i32;
        let reference = Rectangle::new(
            Point::new(column.top_left.x, center_y - height as i32 / 2),
            Size::new(width, height),
        );

        Text::new(label.text(), Point::zero(), style)
            .align_to(&reference, horizontal::Right, vertical::Center)
            .draw(display)?;
    }

    Ok(())
}

/// Draw X-axis labels centred on their abscissa, below the top margin of `row`.
pub(super) fn draw_x_axis_labels<D: DrawTarget<Color = Rgb565>>(
    labels: &[AxisLabel],
    row: Rectangle,
    metrics: &ChartMetrics,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = MonoTextStyle::new(metrics.x_label_size.font(), color);
    let top = row.top_left.y + metrics.x_label_top_margin as i32;

    for label in labels {
        let reference = Rectangle::new(
            Point::new(row.top_left.x + label.center.round() as i32, top),
            Size::new(1, metrics.x_label_size.line_height()),
        );

        Text::new(label.text(), Point::zero(), style)
            .align_to(&reference, horizontal::Center, vertical::Top)
            .draw(display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::styling::label_text;

    /// Columns holding at least one pixel of `color`
    fn columns_with(fb: &FrameBuffer, size: Size, color: Rgb565) -> Vec<i32> {
        (0..size.width as i32)
            .filter(|&x| {
                (0..size.height as i32).any(|y| fb.pixel(Point::new(x, y)) == Some(color))
            })
            .collect()
    }

    /// Rows holding at least one pixel of `color`
    fn rows_with(fb: &FrameBuffer, size: Size, color: Rgb565) -> Vec<i32> {
        (0..size.height as i32)
            .filter(|&y| {
                (0..size.width as i32).any(|x| fb.pixel(Point::new(x, y)) == Some(color))
            })
            .collect()
    }

    #[test]
    fn test_y_label_right_aligned_before_margin() {
        let size = Size::new(60, 100);
        let mut fb = FrameBuffer::new(size);
        let labels = [AxisLabel::new(label_text("40"), 50.0)];

        draw_y_axis_labels(
            &labels,
            Rectangle::new(Point::zero(), size),
            &ChartMetrics::default(),
            Rgb565::WHITE,
            &mut fb,
        )
        .unwrap();

        let columns = columns_with(&fb, size, Rgb565::WHITE);
        assert!(!columns.is_empty());
        assert!(columns.iter().all(|&x| x >= 40 && x < 52));

        let rows = rows_with(&fb, size, Rgb565::WHITE);
        assert!(rows.iter().all(|&y| y >= 45 && y < 55));
    }

    #[test]
    fn test_x_label_centred_on_abscissa() {
        let size = Size::new(100, 20);
        let mut fb = FrameBuffer::new(size);
        let labels = [AxisLabel::new(label_text("Mon"), 50.0)];

        draw_x_axis_labels(
            &labels,
            Rectangle::new(Point::zero(), size),
            &ChartMetrics::default(),
            Rgb565::WHITE,
            &mut fb,
        )
        .unwrap();

        let columns = columns_with(&fb, size, Rgb565::WHITE);
        assert!(columns.iter().all(|&x| x >= 41 && x < 60));

        let rows = rows_with(&fb, size, Rgb565::WHITE);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&y| y >= 8));
    }
}
