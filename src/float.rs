//! Floating-point abstraction so the sandbox runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations needed by particles, the solver and the drag controller.
///
/// Implemented for `f32` and `f64`. Transcendental math goes through `libm`
/// so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f64 (for constants and configuration).
    fn from_f64(v: f64) -> Self;
    /// Lossy conversion back to f32, for render buffers.
    fn to_f32(self) -> f32;
    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn to_f32(self) -> f32 { self }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f64(v: f64) -> Self { v }
    fn to_f32(self) -> f32 { self as f32 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_constants_survive_conversion() {
        assert_eq!(<f64 as Float>::from_f64(0.1), 0.1);
        assert_eq!(<f32 as Float>::from_f64(0.1), 0.1f32);
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.0f32));
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
    }
}
