//! `mathcore::vectors` submodule implements 2-dimensional vector which is used to represent
//! positions, offsets and sizes on the screen.
//!

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`Vector2`] struct represents 2-dimensional vector with `f32` components.
///
/// # Example
/// ```rust
/// # use driftengine::mathcore::vectors::Vector2;
/// let vector: Vector2 = Vector2 { x: 3.0, y: 4.0 } + Vector2::one();
/// assert_eq!(vector.elements(), [4.0, 5.0]);
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,
    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Initializes vector with zeroes.
    ///
    pub fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }
    /// Initializes vector with ones.
    ///
    pub fn one() -> Self {
        Vector2 { x: 1.0, y: 1.0 }
    }

    /// Returns vector elements packed in array.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(elements: [f32; 2]) -> Self {
        Vector2 {
            x: elements[0],
            y: elements[1],
        }
    }
}
impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Add<Self> for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub<Self> for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Vector2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl AddAssign<Self> for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Type alias for [`Vector2`].
///
/// [`Point`] is used in context of coordinates on the screen,
/// whereas `Vector2` is used in context of offsets and deltas.
///
pub type Point = Vector2;

#[cfg(test)]
mod tests {
    use super::{Point, Vector2};

    #[test]
    fn vector2() {
        assert_eq!(Vector2::zero(), Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(Vector2::one(), Vector2 { x: 1.0, y: 1.0 });

        let vec1: Vector2 = Vector2::from([3.0, 4.0]);
        assert_eq!(vec1.elements(), [3.0, 4.0]);

        assert_eq!(vec1 + Vector2::from([1.0, 2.0]), Vector2::from([4.0, 6.0]));
        assert_eq!(vec1 - Vector2::from([1.0, 2.0]), Vector2::from([2.0, 2.0]));
        assert_eq!(vec1 * 2.0, Vector2::from([6.0, 8.0]));
        assert_eq!(vec1 / 2.0, Vector2::from([1.5, 2.0]));
        assert_eq!(-vec1, Vector2::from([-3.0, -4.0]));

        let mut vec2: Vector2 = Vector2::zero();
        vec2 += vec1;
        assert_eq!(vec2.elements(), [3.0, 4.0]);
        vec2 -= Vector2::one();
        assert_eq!(vec2.elements(), [2.0, 3.0]);
        vec2 *= 3.0;
        assert_eq!(vec2.elements(), [6.0, 9.0]);
        vec2 /= 2.0;
        assert_eq!(vec2.elements(), [3.0, 4.5]);
    }

    #[test]
    fn point_alias() {
        let point: Point = Point { x: 1.0, y: 2.0 };
        assert_eq!(point, Vector2 { x: 1.0, y: 2.0 });
    }
}
