/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Tolerance-based comparison of floating point data.
//!
//! [`Tolerances`] is the single numeric-equality policy used throughout dmat.
//! The same type drives both the "is this pivot effectively zero" decisions made
//! during elimination and the `assert_close!` family of test macros.

use ::failure::Fail;
use ::serde::{Deserialize, Serialize};

/// Default relative tolerance for `assert_close!` when none is given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Tolerances used by `assert_close!` when none are given.
pub const ASSERT_TOLERANCES: Tolerances = Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL };

/// Asserts that two values are close, panicking with a description of the
/// first mismatch if they are not.
///
/// ```
/// # #[macro_use] extern crate dmat_assert_close;
/// # fn main() {
/// assert_close!(1.0, 1.0 + 1e-12);
/// assert_close!(abs=1e-8, 0.0, 1e-10);
/// assert_close!(rel=1e-3, abs=1e-8, vec![1.0, 2.0], vec![1.0, 2.001], "in {}", "a vector");
/// # }
/// ```
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => { $crate::__assert_close_impl!{@args [$($t)*] []} };
}

/// `assert_close!` that only runs with debug assertions enabled.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    (@args [abs=$tol:expr, $($rest:tt)*] [$($field:tt)*]) => {
        $crate::__assert_close_impl!{@args [$($rest)*] [$($field)* abs: $tol,]}
    };
    (@args [rel=$tol:expr, $($rest:tt)*] [$($field:tt)*]) => {
        $crate::__assert_close_impl!{@args [$($rest)*] [$($field)* rel: $tol,]}
    };
    (@args [$a:expr, $b:expr $(,)*] $fields:tt) => {
        $crate::__assert_close_impl!{@check $fields [$a, $b] ["not nearly equal!"]}
    };
    (@args [$a:expr, $b:expr, $($fmt:tt)+] $fields:tt) => {
        $crate::__assert_close_impl!{@check $fields [$a, $b] [$($fmt)+]}
    };
    (@check [$($field:tt)*] [$a:expr, $b:expr] [$($fmt:tt)+]) => {{
        let a = $a;
        let b = $b;
        let tol = $crate::Tolerances { $($field)* ..$crate::ASSERT_TOLERANCES };
        if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
            panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, a, b, e,
            );
        }
    }};
}

/// A numeric-equality policy.
///
/// Two values `a` and `b` are considered equal when they are identical, or when
/// `|a - b| < max(abs, rel * |a|, rel * |b|)`.
///
/// The `Default` is [`Tolerances::machine_epsilon`], which reduces to
/// `|a - b| < f64::EPSILON`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self { Tolerances::machine_epsilon() }
}

impl Tolerances {
    /// Purely absolute tolerance of one machine epsilon.
    pub const fn machine_epsilon() -> Self
    { Tolerances { abs: ::std::f64::EPSILON, rel: 0.0 } }

    pub const fn abs(abs: f64) -> Self
    { Tolerances { abs, rel: 0.0 } }

    pub const fn rel(rel: f64) -> Self
    { Tolerances { abs: 0.0, rel } }

    /// Exact comparison.
    pub const fn exact() -> Self
    { Tolerances { abs: 0.0, rel: 0.0 } }

    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool
    { __is_close(a, b, *self) }

    /// Whether `x` is numerically indistinguishable from zero.
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool
    { __is_close(x, 0.0, *self) }
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // Same algorithm as Python's math.isclose.
    debug_assert!(rel >= 0.0);
    debug_assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // general values and NaN
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Fail)]
pub enum CheckCloseError {
    #[fail(display = "failed at:\n  left: {:?}\n right: {:?}\n   tol: {:?}", left, right, tol)]
    NotClose { left: f64, right: f64, tol: Tolerances },

    #[fail(display = "shapes differ: {} versus {}", left, right)]
    Shape { left: String, right: String },
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match tol.is_close(*self, *other) {
            true => Ok(()),
            false => Err(CheckCloseError::NotClose { left: *self, right: *other, tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.len() != other.len() {
            return Err(CheckCloseError::Shape {
                left: format!("len {}", self.len()),
                right: format!("len {}", other.len()),
            });
        }
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}
