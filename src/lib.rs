//! Exact fractions and complex numbers, generic over their components.
//!
//! [Fraction] and [Complex] work the same for the primitive signed integers, [num_bigint::BigInt],
//! [rust_decimal::Decimal] and for [Fraction] itself. Components only need the small capability
//! traits of this crate ([Ring], [Compare], [Cancel], [Quotient], [AsRational]), which are
//! implemented for all of those.
//!
//! Nothing is rounded implicitly:
//! - Fraction arithmetic doesn't reduce. Call [Fraction::normalize] and [Fraction::reduce]
//!   when the canonical form is needed. `==` compares the stored pair, [Fraction::equivalent]
//!   compares values.
//! - The order of fractions comes from cross multiplication, see [Compare].
//! - Complex division widens into the [Quotient] type, e.g. `Complex<i64>` divides into
//!   `Complex<Fraction<i64>>`.
//! - Irrational results (absolute value, argument) are [rust_decimal::Decimal]s rounded
//!   according to an explicit [MathContext].
//!
//! Failures are reported as [ArithmeticError]. The operators `/` and `/=` panic instead,
//! like integer division does.
//!
//! # Limitations
//! Fixed width components can overflow. Arithmetic doesn't reduce, so the components of
//! [IntFraction] grow quickly. Use [BigFraction] if that is a concern.
//!
//! [rust_decimal::Decimal] has at most 28 fractional digits, and its products are rounded to them.
//! The arithmetic of [DecimalFraction] and [DecimalComplex] is only exact while that doesn't
//! happen. Comparisons, [Complex::abs] and the decimal conversions stay exact regardless.
//! Division by a tiny [DecimalComplex] off the axes fails with [ArithmeticError::NotRepresentable].

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod approx;
pub mod complex;
mod context;
mod error;
mod float;
pub mod fraction;
mod num;
mod power;

pub use complex::{Complex, PolarForm};
pub use context::*;
pub use error::*;
pub use fraction::Fraction;
pub use num::*;
pub use power::*;

use num_bigint::BigInt;
use rust_decimal::Decimal;

pub type IntFraction = Fraction<i64>;
pub type BigFraction = Fraction<BigInt>;
pub type DecimalFraction = Fraction<Decimal>;

pub type IntComplex = Complex<i64>;
pub type BigComplex = Complex<BigInt>;
pub type DecimalComplex = Complex<Decimal>;
/// Closed under division, the quotient type of [IntComplex].
pub type FractionComplex = Complex<Fraction<i64>>;
