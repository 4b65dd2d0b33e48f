use super::{AngleSpec, Canvas, Gradient, GradientOptions, Palette, Ramp};
use crate::error::GradientError;
use crate::Float;

/// A linear gradient.
///
/// The gradient runs along its angle, which defaults to bottom-to-top. It
/// starts at the canvas corner that is furthest behind and ends at the corner
/// that is furthest ahead, with colors constant along lines perpendicular to
/// the angle.
///
/// # Edges
///
/// Positions are projections of pixel coordinates, while the ramp's extent
/// comes from the canvas's corners, whose maximum coordinates are exclusive.
/// A pixel therefore lands on the first color only if it sits on the
/// minimum corner's side of the canvas. Gradients heading right, down, or
/// down-right start with the first stop's color and end with the last
/// one. Gradients heading up or left instead start one step into the ramp
/// and repeat the last color on their final step. For example, the bottom
/// row of a 10 by 10 canvas with the default angle shows the ramp's second
/// color.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    ramp: Ramp,
    angle: AngleSpec,
}

impl LinearGradient {
    /// Create a new linear gradient.
    ///
    /// This method ignores the center.
    pub fn new(options: GradientOptions) -> Result<Self, GradientError> {
        let finalized = options.finalize()?;
        Ok(Self {
            ramp: finalized.ramp,
            angle: finalized.angle,
        })
    }

    /// Get the angle.
    pub fn angle(&self) -> AngleSpec {
        self.angle
    }
}

impl Gradient for LinearGradient {
    fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let bounds = canvas.bounds();
        let radians = self.angle.resolve(&bounds);

        // The canvas's y axis points down.
        let (dx, dy) = (radians.cos(), -radians.sin());
        let project = |x: i32, y: i32| x as Float * dx + y as Float * dy;

        let (min, max) = bounds
            .corners()
            .iter()
            .map(|p| project(p.x, p.y))
            .fold((Float::INFINITY, Float::NEG_INFINITY), |(min, max), d| {
                (min.min(d), max.max(d))
            });
        let palette = Palette::new(&self.ramp, (max - min).round() as usize);

        log::trace!(
            "rendering {} pixels along ({:.3}, {:.3}) across {:?}",
            palette.len(),
            dx,
            dy,
            bounds
        );

        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                let t = (project(x, y) - min).round() as i64;
                canvas.set_pixel(x, y, palette.at(t));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::LinearGradient;
    use crate::error::GradientError;
    use crate::gradient::{Direction, Gradient, GradientOptions, Rect, Viewport};
    use crate::Color;
    use image::RgbaImage;

    fn options() -> GradientOptions {
        GradientOptions::new()
            .with_color_stop(Color::from_24bit(255, 0, 0), 0.0)
            .with_color_stop(Color::from_24bit(0, 0, 255), 1.0)
    }

    #[test]
    fn test_bottom_to_top() -> Result<(), GradientError> {
        let gradient = LinearGradient::new(options().with_angle(0.0))?;
        let mut image = RgbaImage::new(10, 10);
        gradient.render(&mut image);

        let mut previous = 0;
        for y in (0..10).rev() {
            let row = *image.get_pixel(0, y);
            for x in 1..10 {
                assert_eq!(*image.get_pixel(x, y), row);
            }

            assert_eq!(row.0[3], 255);
            assert!(previous <= row.0[2], "blue at row {}", y);
            previous = row.0[2];
        }

        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert!(image.get_pixel(0, 9).0[0] > image.get_pixel(0, 0).0[0]);
        Ok(())
    }

    #[test]
    fn test_left_to_right() -> Result<(), GradientError> {
        let gradient = LinearGradient::new(options().with_direction(Direction::Right))?;
        let mut image = RgbaImage::new(4, 2);
        gradient.render(&mut image);

        for y in 0..2 {
            assert_eq!(image.get_pixel(0, y).0, [255, 0, 0, 255]);
            assert_eq!(image.get_pixel(3, y).0, [0, 0, 255, 255]);
        }
        Ok(())
    }

    #[test]
    fn test_degenerate_canvas() -> Result<(), GradientError> {
        let gradient = LinearGradient::new(options())?;

        let mut empty = RgbaImage::new(0, 0);
        gradient.render(&mut empty);

        let mut row = RgbaImage::new(5, 1);
        gradient.render(&mut row);
        for pixel in row.pixels() {
            assert_eq!(pixel.0, [255, 0, 0, 255]);
        }

        let mut image = RgbaImage::new(8, 8);
        let mut viewport = Viewport::new(&mut image, Rect::new(2, 2, 2, 6));
        gradient.render(&mut viewport);
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
        Ok(())
    }

    #[test]
    fn test_far_edges() -> Result<(), GradientError> {
        let gradient = LinearGradient::new(options().with_angle(0.0))?;
        let mut image = RgbaImage::new(10, 10);
        gradient.render(&mut image);
        assert_eq!(image.get_pixel(4, 9).0, [227, 0, 28, 255]);
        assert_eq!(image.get_pixel(4, 1).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(4, 0).0, [0, 0, 255, 255]);

        let right = LinearGradient::new(options().with_direction(Direction::Right))?;
        let left = LinearGradient::new(options().with_direction(Direction::Left))?;
        let mut forward = RgbaImage::new(4, 1);
        let mut backward = RgbaImage::new(4, 1);
        right.render(&mut forward);
        left.render(&mut backward);

        let pixels = |image: &RgbaImage| image.pixels().map(|p| p.0).collect::<Vec<_>>();
        assert_eq!(
            pixels(&forward),
            [[255, 0, 0, 255], [170, 0, 85, 255], [85, 0, 170, 255], [0, 0, 255, 255]]
        );
        assert_eq!(
            pixels(&backward),
            [[0, 0, 255, 255], [0, 0, 255, 255], [85, 0, 170, 255], [170, 0, 85, 255]]
        );
        Ok(())
    }
}
