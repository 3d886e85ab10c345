//! Geometry primitives shared by the style model and the layout algorithm.
//!
//! # Undefined values
//!
//! Layout values are plain `f32`. A value that has not been decided yet
//! (an auto width, an unset offset, an unconstrained budget) is [`UNDEFINED`],
//! which is NaN. Arithmetic never sees an undefined value without an explicit
//! [`is_undefined`] check first, so NaN cannot leak into a defined result.
//!
//! # Comparison
//!
//! Re-layout short-circuiting compares floats with [`floats_equal`], which
//! treats two undefined values as equal and uses a fixed absolute tolerance.

mod axis;
mod style_space;

pub use axis::*;
pub use style_space::*;

/// Sentinel for "no value".
pub const UNDEFINED: f32 = f32::NAN;

/// Absolute tolerance used when comparing layout values.
pub const EPSILON: f32 = 0.000_01;

/// Whether `value` is the undefined sentinel.
#[inline]
pub fn is_undefined(value: f32) -> bool {
    value.is_nan()
}

/// Whether `value` holds a real number.
#[inline]
pub fn is_defined(value: f32) -> bool {
    !value.is_nan()
}

/// Near-equality with [`EPSILON`] tolerance.
///
/// Two undefined values compare equal; defined vs. undefined never does.
#[inline]
pub fn floats_equal(a: f32, b: f32) -> bool {
    if is_undefined(a) {
        return is_undefined(b);
    }
    if is_undefined(b) {
        return false;
    }
    (a - b).abs() < EPSILON
}

/// Exact equality that treats two undefined values as equal.
#[inline]
pub fn values_equal(a: f32, b: f32) -> bool {
    if is_undefined(a) {
        return is_undefined(b);
    }
    a == b
}

/// Width/height pair, returned by measurement callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
