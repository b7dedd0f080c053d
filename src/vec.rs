//! Planar vector type used for positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector in world coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Vector with both components set to the same value.
    pub fn splat(value: F) -> Self { Vec2 { x: value, y: value } }

    /// Build from `f64` components, for constants.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Vec2 { x: F::from_f64(x), y: F::from_f64(y) }
    }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    /// Both components are finite.
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2::new(1.0f64, 2.0);
        v += Vec2::new(0.5, 0.5);
        assert_eq!(v, Vec2::new(1.5, 2.5));
        v -= Vec2::splat(1.5);
        assert_eq!(v, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec2::new(1.0f32, 2.0).is_finite());
        assert!(!Vec2::new(f32::NAN, 2.0).is_finite());
    }
}
