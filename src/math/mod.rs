//! Numeric kernels used by every channel, swappable through the [`Kernels`] trait
//! so that channel equations can be checked against exact math separately from
//! the error introduced by the fast exponential approximation.

use std::fmt::Debug;


/// A set of scalar math primitives used by the channel equations
pub trait Kernels: Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static {
    /// Exponential function
    fn exp(x: f32) -> f32;
    /// `x` raised to the power of `y`
    fn pow(x: f32, y: f32) -> f32 {
        x.powf(y)
    }
    /// Natural logarithm
    fn log(x: f32) -> f32 {
        x.ln()
    }
    /// Absolute value
    fn abs(x: f32) -> f32 {
        x.abs()
    }
}

/// Fast approximate kernels, exponential is a quartic spline correction of
/// Schraudolph's bit manipulation method, monotonic and exact at `0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FastKernels;

/// Reference kernels backed by the standard library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExactKernels;

// below this the result underflows to zero
const FAST_EXP_MIN: f32 = -88.02969;
// at or above this the integer exponent would overflow
const FAST_EXP_MAX: f32 = 88.72;

/// Approximates `e^x` by writing a scaled `x` straight into the bits of an `f32`
/// and correcting the mantissa with a quartic spline
pub fn fast_exp(x: f32) -> f32 {
    if x <= FAST_EXP_MIN {
        return 0.;
    }
    if x >= FAST_EXP_MAX {
        return f32::INFINITY;
    }

    let mut i = (12102203. * x) as i32 + (127 << 23);
    let m = (i >> 7) & 0xFFFF;
    i += ((((((((((3537 * m) >> 16) + 13668) * m) >> 18) + 15817) * m) >> 14) - 80470) * m) >> 11;

    f32::from_bits(i as u32)
}

impl Kernels for FastKernels {
    fn exp(x: f32) -> f32 {
        fast_exp(x)
    }
}

impl Kernels for ExactKernels {
    fn exp(x: f32) -> f32 {
        x.exp()
    }
}
