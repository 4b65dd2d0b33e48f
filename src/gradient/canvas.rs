use std::ops::{Deref, DerefMut};

use image::{ImageBuffer, Rgb, Rgba};

use super::Rect;

/// A drawable rectangle of pixels.
///
/// Gradients render into canvases. A canvas covers the half-open rectangle
/// returned by [`Canvas::bounds`] and silently ignores writes to pixels
/// outside that rectangle.
pub trait Canvas {
    /// Get the bounds of this canvas.
    fn bounds(&self) -> Rect;

    /// Set the pixel at the given position to the given RGBA color.
    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]);
}

#[inline]
fn to_offset(x: i32, y: i32) -> Option<(u32, u32)> {
    Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
}

impl<C> Canvas for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]> + DerefMut,
{
    fn bounds(&self) -> Rect {
        Rect::with_size(self.width(), self.height())
    }

    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if let Some((x, y)) = to_offset(x, y) {
            if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(rgba);
            }
        }
    }
}

/// RGB images drop the alpha channel.
impl<C> Canvas for ImageBuffer<Rgb<u8>, C>
where
    C: Deref<Target = [u8]> + DerefMut,
{
    fn bounds(&self) -> Rect {
        Rect::with_size(self.width(), self.height())
    }

    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if let Some((x, y)) = to_offset(x, y) {
            if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
                let [r, g, b, _] = rgba;
                *pixel = Rgb([r, g, b]);
            }
        }
    }
}

// ====================================================================================================================

/// A rectangular window into another canvas.
///
/// The viewport's bounds are the intersection of the given rectangle with the
/// underlying canvas's bounds. Coordinates are shared with the underlying
/// canvas, so rendering a gradient into a viewport fits the gradient to the
/// viewport while leaving pixels outside the viewport untouched.
///
/// ```
/// # use prettyramp::gradient::{Canvas, Rect, Viewport};
/// # use image::RgbaImage;
/// let mut image = RgbaImage::new(10, 10);
/// let mut viewport = Viewport::new(&mut image, Rect::new(5, 5, 20, 20));
/// assert_eq!(viewport.bounds(), Rect::new(5, 5, 10, 10));
///
/// viewport.set_pixel(2, 2, [255, 255, 255, 255]);
/// viewport.set_pixel(7, 7, [255, 255, 255, 255]);
/// assert_eq!(image.get_pixel(2, 2).0, [0, 0, 0, 0]);
/// assert_eq!(image.get_pixel(7, 7).0, [255, 255, 255, 255]);
/// ```
#[derive(Debug)]
pub struct Viewport<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    bounds: Rect,
}

impl<'a, C: Canvas + ?Sized> Viewport<'a, C> {
    /// Create a new viewport.
    pub fn new(canvas: &'a mut C, bounds: Rect) -> Self {
        let bounds = canvas.bounds().intersect(&bounds);
        Self { canvas, bounds }
    }
}

impl<C: Canvas + ?Sized> Canvas for Viewport<'_, C> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if self.bounds.contains(x, y) {
            self.canvas.set_pixel(x, y, rgba);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Canvas, Viewport};
    use crate::gradient::Rect;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn test_image_buffers() {
        let mut rgba = RgbaImage::new(3, 2);
        assert_eq!(rgba.bounds(), Rect::new(0, 0, 3, 2));
        rgba.set_pixel(1, 1, [1, 2, 3, 4]);
        rgba.set_pixel(-1, 0, [9, 9, 9, 9]);
        rgba.set_pixel(3, 0, [9, 9, 9, 9]);
        assert_eq!(rgba.get_pixel(1, 1).0, [1, 2, 3, 4]);
        assert_eq!(rgba.pixels().filter(|p| p.0 == [9, 9, 9, 9]).count(), 0);

        let mut rgb = RgbImage::new(2, 3);
        assert_eq!(rgb.bounds(), Rect::new(0, 0, 2, 3));
        rgb.set_pixel(0, 2, [5, 6, 7, 255]);
        rgb.set_pixel(0, 3, [9, 9, 9, 255]);
        assert_eq!(rgb.get_pixel(0, 2).0, [5, 6, 7]);
    }

    #[test]
    fn test_viewport() {
        let mut image = RgbaImage::new(4, 4);
        {
            let mut viewport = Viewport::new(&mut image, Rect::new(-2, 1, 2, 3));
            assert_eq!(viewport.bounds(), Rect::new(0, 1, 2, 3));
            for y in -1..5 {
                for x in -1..5 {
                    viewport.set_pixel(x, y, [255, 0, 0, 255]);
                }
            }
        }

        for (x, y, pixel) in image.enumerate_pixels() {
            let inside = x < 2 && (1..3).contains(&y);
            assert_eq!(pixel.0[0] == 255, inside, "pixel at ({}, {})", x, y);
        }
    }
}
