//! Deferred geometry, resolved against a canvas's bounds at render time.

use crate::core::QUARTER_TURN;
use crate::Float;

/// A pixel position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle of pixel positions.
///
/// The rectangle is half-open, i.e., it covers `min_x..max_x` horizontally
/// and `min_y..max_y` vertically. Its corners, however, are the four extreme
/// points including the maximum coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a new rectangle with the given size, anchored at the origin.
    pub const fn with_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Get the width, which is zero for inverted rectangles.
    pub fn width(&self) -> i32 {
        self.max_x.saturating_sub(self.min_x).max(0)
    }

    /// Get the height, which is zero for inverted rectangles.
    pub fn height(&self) -> i32 {
        self.max_y.saturating_sub(self.min_y).max(0)
    }

    /// Determine whether this rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }

    /// Determine whether this rectangle covers the given pixel.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// Get the four corners, in order top-left, top-right, bottom-left, and
    /// bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.min_x, self.max_y),
            Point::new(self.max_x, self.max_y),
        ]
    }

    /// Intersect this rectangle with another one.
    #[must_use = "method returns a new rectangle and does not mutate original value"]
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }
}

// ====================================================================================================================

/// A symbolic gradient direction.
///
/// Corner directions depend on the aspect ratio of the canvas and, for conic
/// gradients, on the center.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    #[default]
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Direction {
    /// Determine the angle in radians, measured counter-clockwise from the
    /// positive x axis with y pointing up. The extents are the distances to
    /// the left, top, right, and bottom edges.
    fn radians(&self, left: Float, up: Float, right: Float, down: Float) -> Float {
        match self {
            Self::TopLeft => up.atan2(-left),
            Self::Top => QUARTER_TURN,
            Self::TopRight => up.atan2(right),
            Self::Right => 0.0,
            Self::BottomRight => (-down).atan2(right),
            Self::Bottom => 3.0 * QUARTER_TURN,
            Self::BottomLeft => (-down).atan2(-left),
            Self::Left => 2.0 * QUARTER_TURN,
        }
    }
}

/// A deferred angle.
///
/// Explicit angles follow CSS: 0° points to the top and angles increase
/// clockwise. Resolution converts them into the mathematical convention, with
/// radians measured counter-clockwise from the positive x axis and y pointing
/// up. The default points to the top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AngleSpec {
    Degrees(Float),
    Direction(Direction),
}

impl Default for AngleSpec {
    fn default() -> Self {
        Self::Direction(Direction::Top)
    }
}

impl AngleSpec {
    /// Resolve this angle for the given bounds.
    ///
    /// ```
    /// # use prettyramp::gradient::{AngleSpec, Direction, Rect};
    /// let bounds = Rect::with_size(20, 10);
    /// let right = AngleSpec::Degrees(90.0).resolve(&bounds);
    /// assert!(right.abs() < 1e-12);
    /// let corner = AngleSpec::Direction(Direction::TopRight).resolve(&bounds);
    /// assert!((corner - 0.5_f64.atan()).abs() < 1e-12);
    /// ```
    pub fn resolve(&self, bounds: &Rect) -> Float {
        match self {
            Self::Degrees(degrees) => from_css_degrees(*degrees),
            Self::Direction(direction) => {
                let width = bounds.width() as Float;
                let height = bounds.height() as Float;
                direction.radians(width, height, width, height)
            }
        }
    }

    /// Resolve this angle for the given bounds and center. Corner directions
    /// point from the center to the corner.
    pub fn resolve_around(&self, bounds: &Rect, center: Point) -> Float {
        match self {
            Self::Degrees(degrees) => from_css_degrees(*degrees),
            Self::Direction(direction) => {
                let span = |from: i32, to: i32| (i64::from(to) - i64::from(from)) as Float;
                direction.radians(
                    span(bounds.min_x, center.x),
                    span(bounds.min_y, center.y),
                    span(center.x, bounds.max_x),
                    span(center.y, bounds.max_y),
                )
            }
        }
    }
}

#[inline]
fn from_css_degrees(degrees: Float) -> Float {
    (90.0 - degrees).rem_euclid(360.0).to_radians()
}

/// A deferred point.
///
/// Absolute points are pixel positions. Relative points are fractions of the
/// canvas's width and height, offset by its minimum corner. The default is the
/// center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointSpec {
    Absolute { x: i32, y: i32 },
    Relative { x: Float, y: Float },
}

impl Default for PointSpec {
    fn default() -> Self {
        Self::Relative { x: 0.5, y: 0.5 }
    }
}

impl PointSpec {
    /// Resolve this point for the given bounds.
    ///
    /// ```
    /// # use prettyramp::gradient::{Point, PointSpec, Rect};
    /// let bounds = Rect::new(10, 10, 30, 20);
    /// assert_eq!(PointSpec::default().resolve(&bounds), Point::new(20, 15));
    /// ```
    pub fn resolve(&self, bounds: &Rect) -> Point {
        match *self {
            Self::Absolute { x, y } => Point::new(x, y),
            Self::Relative { x, y } => Point::new(
                bounds
                    .min_x
                    .saturating_add((x * bounds.width() as Float).round() as i32),
                bounds
                    .min_y
                    .saturating_add((y * bounds.height() as Float).round() as i32),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AngleSpec, Direction, Point, PointSpec, Rect};
    use crate::assert_close_enough;
    use crate::Float;

    const PI: Float = std::f64::consts::PI as Float;

    #[test]
    fn test_rect() {
        let rect = Rect::new(2, 3, 12, 8);
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 5);
        assert!(!rect.is_empty());
        assert!(rect.contains(2, 3));
        assert!(!rect.contains(12, 3));
        assert_eq!(rect.corners()[3], Point::new(12, 8));
        assert!(Rect::with_size(0, 5).is_empty());
        assert_eq!(
            rect.intersect(&Rect::with_size(4, 4)),
            Rect::new(2, 3, 4, 4)
        );
        assert!(rect.intersect(&Rect::new(20, 20, 30, 30)).is_empty());
        assert_eq!(Rect::new(5, 5, 0, 0).width(), 0);
        assert_eq!(Rect::new(i32::MIN, 0, i32::MAX, 1).width(), i32::MAX);
    }

    #[test]
    fn test_explicit_angles() {
        let bounds = Rect::with_size(10, 10);
        assert_close_enough!(AngleSpec::Degrees(0.0).resolve(&bounds), PI / 2.0);
        assert_close_enough!(AngleSpec::Degrees(90.0).resolve(&bounds), 0.0);
        assert_close_enough!(AngleSpec::Degrees(180.0).resolve(&bounds), 3.0 * PI / 2.0);
        assert_close_enough!(AngleSpec::Degrees(270.0).resolve(&bounds), PI);
        assert_close_enough!(AngleSpec::Degrees(-90.0).resolve(&bounds), PI);
        assert_close_enough!(AngleSpec::default().resolve(&bounds), PI / 2.0);
    }

    #[test]
    fn test_directions() {
        let bounds = Rect::with_size(10, 10);
        let resolve = |direction| AngleSpec::Direction(direction).resolve(&bounds);

        assert_close_enough!(resolve(Direction::Top), PI / 2.0);
        assert_close_enough!(resolve(Direction::Right), 0.0);
        assert_close_enough!(resolve(Direction::Bottom), 3.0 * PI / 2.0);
        assert_close_enough!(resolve(Direction::Left), PI);
        assert_close_enough!(resolve(Direction::TopRight), PI / 4.0);
        assert_close_enough!(resolve(Direction::TopLeft), 3.0 * PI / 4.0);
        assert_close_enough!(resolve(Direction::BottomRight), -PI / 4.0);
        assert_close_enough!(resolve(Direction::BottomLeft), -3.0 * PI / 4.0);

        // Off-center, the corner direction points from center to corner.
        let center = Point::new(2, 5);
        assert_close_enough!(
            AngleSpec::Direction(Direction::TopLeft).resolve_around(&bounds, center),
            (5.0 as Float).atan2(-2.0)
        );
        assert_close_enough!(
            AngleSpec::Direction(Direction::BottomRight).resolve_around(&bounds, center),
            (-5.0 as Float).atan2(8.0)
        );
    }

    #[test]
    fn test_points() {
        let bounds = Rect::new(0, 0, 5, 9);
        assert_eq!(PointSpec::default().resolve(&bounds), Point::new(3, 5));
        assert_eq!(
            PointSpec::Relative { x: 0.0, y: 1.0 }.resolve(&bounds),
            Point::new(0, 9)
        );
        assert_eq!(
            PointSpec::Absolute { x: -4, y: 40 }.resolve(&bounds),
            Point::new(-4, 40)
        );
    }
}
