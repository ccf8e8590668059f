//! Heap-backed framebuffer with per-pixel change detection.
//!
//! Charts draw into this RAM buffer; afterwards only the rectangular region
//! containing changed pixels is flushed to the real display in one
//! `fill_contiguous` call.

use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }
}

/// In-memory `DrawTarget<Color = Rgb565>` of arbitrary size.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a framebuffer filled with black pixels.
    pub fn new(size: Size) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;

        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
            dirty: None,
        }
    }

    /// Color at `point`, or `None` outside the buffer.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        let (x, y) = self.index_of(point)?;
        Some(self.pixels[y * self.width + x])
    }

    /// Whether any pixel changed since the last flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    fn index_of(&self, point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to `display`, then reset the dirty state.
    ///
    /// A no-op when nothing changed.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let height = rect.max_y - rect.min_y + 1;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            width, height, rect.min_x, rect.min_y
        );

        let area = Rectangle::new(
            Point::new(rect.min_x as i32, rect.min_y as i32),
            Size::new(width as u32, height as u32),
        );

        let pixels = &self.pixels;
        let stride = self.width;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some((x, y)) = self.index_of(coord) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_out_of_bounds_pixels_are_ignored() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        Pixel(Point::new(-1, 2), Rgb565::RED).draw(&mut fb).unwrap();
        Pixel(Point::new(4, 0), Rgb565::RED).draw(&mut fb).unwrap();

        assert!(!fb.is_dirty());
        assert_eq!(fb.pixel(Point::new(-1, 2)), None);
    }

    #[test]
    fn test_fill_solid_clamps_negative_origin() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(Point::new(0, 0)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_flush_sends_only_dirty_region() {
        let mut fb = FrameBuffer::new(Size::new(8, 8));
        Pixel(Point::new(2, 3), Rgb565::RED).draw(&mut fb).unwrap();
        Pixel(Point::new(5, 4), Rgb565::BLUE).draw(&mut fb).unwrap();

        let mut target = FrameBuffer::new(Size::new(8, 8));
        fb.flush(&mut target).unwrap();

        assert!(!fb.is_dirty());
        assert_eq!(target.pixel(Point::new(2, 3)), Some(Rgb565::RED));
        assert_eq!(target.pixel(Point::new(5, 4)), Some(Rgb565::BLUE));
        assert_eq!(target.pixel(Point::new(0, 0)), Some(Rgb565::BLACK));
    }
}
