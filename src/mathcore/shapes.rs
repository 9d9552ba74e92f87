//! `mathcore::shapes` submodule implements axis-aligned rectangle which is the only shape
//! this engine layer needs - widget areas, panel extents and hit testing are all rectangular.
//!

use crate::mathcore::vectors::Point;

/// [`Rect`] struct represents axis-aligned rectangle given by its top-left corner and size.
///
/// # Example
/// ```rust
/// # use driftengine::mathcore::{shapes::Rect, vectors::Point};
/// let rect: Rect = Rect::new(Point { x: 10.0, y: 20.0 }, 100.0, 50.0);
/// assert!(rect.contains(Point { x: 50.0, y: 40.0 }));
/// assert!(!rect.contains(Point { x: 50.0, y: 80.0 }));
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner of rectangle.
    ///
    pub position: Point,
    /// Width of rectangle.
    ///
    pub width: f32,
    /// Height of rectangle.
    ///
    pub height: f32,
}
impl Rect {
    /// Initializes [`Rect`] from its top-left corner and size.
    ///
    pub fn new(position: Point, width: f32, height: f32) -> Self {
        Rect {
            position,
            width,
            height,
        }
    }

    /// Returns x coordinate of left edge.
    ///
    pub fn left(&self) -> f32 {
        self.position.x
    }
    /// Returns x coordinate of right edge.
    ///
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }
    /// Returns y coordinate of top edge.
    ///
    pub fn top(&self) -> f32 {
        self.position.y
    }
    /// Returns y coordinate of bottom edge.
    ///
    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    /// Returns center point of rectangle.
    ///
    pub fn center(&self) -> Point {
        Point {
            x: self.position.x + self.width * 0.5,
            y: self.position.y + self.height * 0.5,
        }
    }

    /// Returns whether given point lies inside rectangle.
    ///
    /// Left and top edges are inclusive, right and bottom edges are exclusive,
    /// so adjacent rectangles do not both claim their shared edge.
    ///
    pub fn contains(&self, point: Point) -> bool {
        self.left() <= point.x && point.x < self.right() && self.top() <= point.y && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn edges() {
        let rect: Rect = Rect::new(Point { x: 10.0, y: 20.0 }, 100.0, 50.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), Point { x: 60.0, y: 45.0 });
    }

    #[test]
    fn containment() {
        let rect: Rect = Rect::new(Point { x: 0.0, y: 0.0 }, 10.0, 10.0);

        assert!(rect.contains(Point { x: 0.0, y: 0.0 }));
        assert!(rect.contains(Point { x: 9.9, y: 9.9 }));

        // right and bottom edges are exclusive
        assert!(!rect.contains(Point { x: 10.0, y: 5.0 }));
        assert!(!rect.contains(Point { x: 5.0, y: 10.0 }));
        assert!(!rect.contains(Point { x: -0.1, y: 5.0 }));
    }
}
