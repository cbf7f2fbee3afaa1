use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Numeric type usable as a box side or coordinate.
///
/// Implemented for `u32`, `u64` (pixel sizes) and `f32`, `f64` (real-valued layouts).
/// Area and fill are always computed in `f64`, whatever `T` is.
pub trait Dimension:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Debug + Send + Sync + 'static
{
    fn zero() -> Self;
    /// True if the value is finite and strictly positive.
    fn is_valid_extent(self) -> bool;
    fn to_f64(self) -> f64;
    /// Rounds `v` up to the next representable value of `Self`.
    fn from_f64_ceil(v: f64) -> Self;
    /// `self + rhs`, or `None` if the sum is not representable (integer overflow, float infinity).
    fn checked_add(self, rhs: Self) -> Option<Self>;

    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl Dimension for u32 {
    #[inline]
    fn zero() -> Self {
        0
    }
    #[inline]
    fn is_valid_extent(self) -> bool {
        self > 0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64_ceil(v: f64) -> Self {
        // `as` saturates; NaN maps to 0
        v.ceil() as u32
    }
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        u32::checked_add(self, rhs)
    }
}

impl Dimension for u64 {
    #[inline]
    fn zero() -> Self {
        0
    }
    #[inline]
    fn is_valid_extent(self) -> bool {
        self > 0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64_ceil(v: f64) -> Self {
        v.ceil() as u64
    }
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        u64::checked_add(self, rhs)
    }
}

impl Dimension for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn is_valid_extent(self) -> bool {
        self.is_finite() && self > 0.0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64_ceil(v: f64) -> Self {
        v.ceil() as f32
    }
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }
}

impl Dimension for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn is_valid_extent(self) -> bool {
        self.is_finite() && self > 0.0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64_ceil(v: f64) -> Self {
        v.ceil()
    }
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }
}
