//! Precision and rounding policy for every operation, that has to leave the exact domain.

use crate::error::{ArithmeticError, Result};

/// How an exact value is fitted to the requested number of digits.
///
/// The directed modes are named after the direction, in which the magnitude or the value moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour.
    NearestEven,
    /// Round to nearest, ties away from zero.
    NearestAway,
    /// Round towards +∞.
    ToPositive,
    /// Round towards -∞.
    ToNegative,
    /// Truncate.
    ToZero,
    /// Round away from zero.
    AwayZero,
    /// Round to the odd neighbour if inexact.
    ToOdd,
    /// Fail with [ArithmeticError::NotRepresentable] instead of rounding.
    Unnecessary,
}

/// Number of significant decimal digits and the rounding mode used to get there.
///
/// There is no `Default`. Every approximating operation takes a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// The largest precision, that always fits the 96 bit mantissa of [rust_decimal::Decimal].
    pub const MAX_PRECISION: u32 = 28;
    /// The largest scale (digits after the decimal point) of a [rust_decimal::Decimal].
    pub const MAX_SCALE: u32 = 28;

    /// 7 digits, round half even.
    pub const DECIMAL32: Self = Self::new_raw(7, RoundingMode::NearestEven);
    /// 16 digits, round half even.
    pub const DECIMAL64: Self = Self::new_raw(16, RoundingMode::NearestEven);
    /// 28 digits, round half even. (IEEE decimal128 has 34 digits, which don't fit a [rust_decimal::Decimal])
    pub const DECIMAL128_COMPAT: Self = Self::new_raw(Self::MAX_PRECISION, RoundingMode::NearestEven);

    const fn new_raw(precision: u32, rounding: RoundingMode) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Create a context with `precision` significant digits.
    ///
    /// Fails with [ArithmeticError::InvalidPrecision] unless `1 <= precision <= 28`.
    pub const fn new(precision: u32, rounding: RoundingMode) -> Result<Self> {
        if precision == 0 || precision > Self::MAX_PRECISION {
            return Err(ArithmeticError::InvalidPrecision(precision));
        }
        Ok(Self::new_raw(precision, rounding))
    }

    /// Exact context: maximal precision and no rounding allowed.
    pub const fn exact() -> Self {
        Self::new_raw(Self::MAX_PRECISION, RoundingMode::Unnecessary)
    }

    /// Sets the rounding mode.
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub const fn precision(&self) -> u32 {
        self.precision
    }

    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}
