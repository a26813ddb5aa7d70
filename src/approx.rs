//! Decimal approximations of exact values.
//!
//! Every value that enters here is an exact rational ([AsRational](crate::AsRational)).
//! Quotients and square roots are correctly rounded: the digits are found by integer division
//! (or integer square root) and the rounding direction is decided by an exact comparison of the
//! discarded part against half a unit in the last place.
//! The arctangent is evaluated in fixed point with guard digits beyond the largest [Decimal] scale,
//! and then rounded like a quotient.

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

use crate::context::{MathContext, RoundingMode};
use crate::error::{ArithmeticError, Result};
use crate::fraction::Fraction;
use crate::num::Zero;

/// Where the discarded part of a truncated magnitude lies, measured in units of the last kept digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Discarded {
    Zero,
    BelowHalf,
    Half,
    AboveHalf,
}

impl Discarded {
    fn classify(exact: bool, twice_vs_unit: Ordering) -> Self {
        if exact {
            return Discarded::Zero;
        }
        match twice_vs_unit {
            Ordering::Less => Discarded::BelowHalf,
            Ordering::Equal => Discarded::Half,
            Ordering::Greater => Discarded::AboveHalf,
        }
    }
}

fn pow10(n: u32) -> BigUint {
    BigUint::from(10u8).pow(n)
}

/// Decide, whether the truncated magnitude `q` has to be incremented by one.
fn round_up(mode: RoundingMode, negative: bool, q: &BigUint, discarded: Discarded) -> Result<bool> {
    if discarded == Discarded::Zero {
        return Ok(false);
    }
    Ok(match mode {
        RoundingMode::NearestEven => match discarded {
            Discarded::AboveHalf => true,
            Discarded::Half => q.bit(0),
            _ => false,
        },
        RoundingMode::NearestAway => matches!(discarded, Discarded::Half | Discarded::AboveHalf),
        RoundingMode::ToPositive => !negative,
        RoundingMode::ToNegative => negative,
        RoundingMode::ToZero => false,
        RoundingMode::AwayZero => true,
        RoundingMode::ToOdd => !q.bit(0),
        RoundingMode::Unnecessary => return Err(ArithmeticError::NotRepresentable),
    })
}

/// Estimate of `floor(log10(2^bits))`, off by at most one.
fn log10_estimate(bits: i64) -> i64 {
    (bits * 30103).div_euclid(100_000)
}

/// Find the scale `k`, such that `truncate(k)` (the magnitude times `10^k`, truncated)
/// has exactly `ctx.precision()` digits, then round and build the decimal.
///
/// `estimate` is an estimate of `floor(log10(magnitude))`.
fn round_scaled<F>(estimate: i64, negative: bool, ctx: &MathContext, truncate: F) -> Result<Decimal>
where
    F: Fn(i64) -> (BigUint, Discarded),
{
    let precision = ctx.precision();
    let max_scale = i64::from(MathContext::MAX_SCALE);
    let lower = pow10(precision - 1);
    let upper = pow10(precision);

    let mut k = i64::from(precision) - 1 - estimate;
    let mut scaled = truncate(k);
    loop {
        if scaled.0 >= upper {
            k -= 1;
        } else if scaled.0 < lower && k < max_scale {
            k += 1;
        } else {
            break;
        }
        scaled = truncate(k);
    }
    if k > max_scale {
        // the value is too small to show all requested digits
        k = max_scale;
        scaled = truncate(k);
    }
    trace!(scale = k, precision, "found decimal scale");

    let (mut q, discarded) = scaled;
    if round_up(ctx.rounding(), negative, &q, discarded)? {
        q += 1u32;
    }
    let (mantissa, scale) = if k >= 0 {
        (q, k as u32)
    } else {
        (q * pow10(k.unsigned_abs() as u32), 0)
    };
    let mantissa = mantissa.to_i128().ok_or(ArithmeticError::OutOfRange)?;
    let mantissa = if negative { -mantissa } else { mantissa };
    Decimal::try_from_i128_with_scale(mantissa, scale)
        .map(|d| d.normalize())
        .map_err(|_| ArithmeticError::OutOfRange)
}

/// Split a fraction into its magnitude parts and the sign of the value.
fn magnitude(value: &Fraction<BigInt>) -> (&BigUint, &BigUint, bool) {
    let negative = value.numer().sign() != Sign::NoSign
        && ((value.numer().sign() == Sign::Minus) != (value.denom().sign() == Sign::Minus));
    (value.numer().magnitude(), value.denom().magnitude(), negative)
}

/// `n * 10^k / d` truncated, and the discarded part.
fn div_truncated(n: &BigUint, d: &BigUint, k: i64) -> (BigUint, Discarded) {
    let (num, den) = if k >= 0 {
        (n * pow10(k as u32), d.clone())
    } else {
        (n.clone(), d * pow10(k.unsigned_abs() as u32))
    };
    let q = &num / &den;
    let r = num - &q * &den;
    let discarded = Discarded::classify(r == BigUint::ZERO, (&r + &r).cmp(&den));
    (q, discarded)
}

/// `sqrt(n / d) * 10^k` truncated, and the discarded part.
fn sqrt_truncated(n: &BigUint, d: &BigUint, k: i64) -> (BigUint, Discarded) {
    let (num, den) = if k >= 0 {
        (n * pow10(2 * k as u32), d.clone())
    } else {
        (n.clone(), d * pow10(2 * k.unsigned_abs() as u32))
    };
    // floor(sqrt(floor(x))) == floor(sqrt(x)) for x >= 0
    let q = (&num / &den).sqrt();
    let exact = &q * &q * &den == num;
    // compare x with (q + 1/2)^2, i.e. 4 * num with (2q + 1)^2 * den
    let odd = &q + &q + 1u32;
    let discarded = Discarded::classify(exact, (&num * 4u32).cmp(&(&odd * &odd * &den)));
    (q, discarded)
}

/// Round the exact value to a decimal according to `ctx`.
///
/// Fails with [ArithmeticError::NotRepresentable] for [RoundingMode::Unnecessary] if rounding is needed,
/// or with [ArithmeticError::OutOfRange] if the value doesn't fit a [Decimal].
pub fn to_decimal(value: &Fraction<BigInt>, ctx: &MathContext) -> Result<Decimal> {
    let (n, d, negative) = magnitude(value);
    if *n == BigUint::ZERO {
        return Ok(Decimal::ZERO);
    }
    let bits = n.bits() as i64 - d.bits() as i64;
    round_scaled(log10_estimate(bits), negative, ctx, |k| div_truncated(n, d, k))
}

/// Correctly rounded square root of a non negative exact value.
///
/// Fails with [ArithmeticError::NotRepresentable] for negative values.
pub fn sqrt(value: &Fraction<BigInt>, ctx: &MathContext) -> Result<Decimal> {
    let (n, d, negative) = magnitude(value);
    if *n == BigUint::ZERO {
        return Ok(Decimal::ZERO);
    }
    if negative {
        return Err(ArithmeticError::NotRepresentable);
    }
    let bits = n.bits() as i64 - d.bits() as i64;
    round_scaled(log10_estimate(bits).div_euclid(2), false, ctx, |k| {
        sqrt_truncated(n, d, k)
    })
}

/// The nearest `f64`, up to an error in the last place.
///
/// Both components are cut to their 64 leading bits before dividing, so huge numerators and
/// denominators don't turn into `inf / inf`.
pub fn to_f64(value: &Fraction<BigInt>) -> f64 {
    let (n, d, negative) = magnitude(value);
    let n_shift = n.bits().saturating_sub(64);
    let d_shift = d.bits().saturating_sub(64);
    let n = (n >> n_shift).to_u64().unwrap_or(u64::MAX) as f64;
    let d = (d >> d_shift).to_u64().unwrap_or(u64::MAX) as f64;
    let q = scale_pow2(n / d, n_shift as i64 - d_shift as i64);
    if negative { -q } else { q }
}

/// `x * 2^e`, in steps of `2^±512` so every factor is a normal float.
fn scale_pow2(mut x: f64, mut e: i64) -> f64 {
    let pow2 = |e: i64| f64::from_bits(((1023 + e) as u64) << 52);
    while e >= 512 && x.is_finite() {
        x *= pow2(512);
        e -= 512;
    }
    while e <= -512 && x != 0.0 {
        x *= pow2(-512);
        e += 512;
    }
    if e.abs() >= 512 {
        return x;
    }
    x * pow2(e)
}

/// Fractional digits of the fixed point arithmetic behind [atan2].
const WORK_DIGITS: u32 = MathContext::MAX_SCALE + 12;

/// Fixed point numbers `x / 10^WORK_DIGITS`, stored as the integer `x`.
struct Fixed {
    one: BigInt,
}

impl Fixed {
    fn new() -> Self {
        Fixed {
            one: BigInt::from(10u8).pow(WORK_DIGITS),
        }
    }
    fn from_ratio(&self, n: &BigInt, d: &BigInt) -> BigInt {
        n * &self.one / d
    }
    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b / &self.one
    }
    fn div(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * &self.one / b
    }
    /// Only for `a >= 0`.
    fn sqrt(&self, a: &BigInt) -> BigInt {
        (a * &self.one).sqrt()
    }

    /// Taylor series, only for `|t| < 1`. Converges fast for `|t| <= 0.2`.
    fn atan_series(&self, t: &BigInt) -> BigInt {
        let t2 = self.mul(t, t);
        let mut power = t.clone();
        let mut sum = BigInt::ZERO;
        let mut k = 0u32;
        while !power.is_zero() {
            let term = &power / BigInt::from(2 * k + 1);
            if k % 2 == 0 {
                sum += term;
            } else {
                sum -= term;
            }
            power = self.mul(&power, &t2);
            k += 1;
        }
        trace!(terms = k, "arctangent series converged");
        sum
    }

    /// Machin's formula `π = 16 atan(1/5) - 4 atan(1/239)`.
    fn pi(&self) -> BigInt {
        let one = BigInt::from(1u8);
        let a = self.atan_series(&self.from_ratio(&one, &BigInt::from(5u8)));
        let b = self.atan_series(&self.from_ratio(&one, &BigInt::from(239u8)));
        a * 16u32 - b * 4u32
    }

    fn atan(&self, t: &BigInt, pi: &BigInt) -> BigInt {
        if t.sign() == Sign::Minus {
            return -self.atan(&-t, pi);
        }
        if *t > self.one {
            return pi / 2u32 - self.atan(&self.div(&self.one, t), pi);
        }
        // atan(t) = 2 atan(t / (1 + sqrt(1 + t^2))), three times brings t below 0.1
        let mut t = t.clone();
        for _ in 0..3 {
            let hyp = self.sqrt(&(&self.one + self.mul(&t, &t)));
            t = self.div(&t, &(&self.one + hyp));
        }
        self.atan_series(&t) * 8u32
    }
}

/// The angle of the point `(x, y)` in `(-π, π]`, rounded according to `ctx`.
///
/// Fails with [ArithmeticError::UndefinedArgument] at the origin.
pub fn atan2(y: &Fraction<BigInt>, x: &Fraction<BigInt>, ctx: &MathContext) -> Result<Decimal> {
    let (yn, _, y_negative) = magnitude(y);
    let (xn, _, x_negative) = magnitude(x);
    let y_zero = *yn == BigUint::ZERO;
    let x_zero = *xn == BigUint::ZERO;
    if x_zero && y_zero {
        return Err(ArithmeticError::UndefinedArgument);
    }
    let fixed = Fixed::new();
    let pi = fixed.pi();
    let angle = if x_zero {
        let half = &pi / 2u32;
        if y_negative { -half } else { half }
    } else {
        // y/x = (yn * xd) / (yd * xn), signs included
        let t = fixed.from_ratio(&(y.numer() * x.denom()), &(y.denom() * x.numer()));
        let base = fixed.atan(&t, &pi);
        if !x_negative {
            base
        } else if y_negative {
            base - pi
        } else {
            base + pi
        }
    };
    let negative = angle.sign() == Sign::Minus;
    let one = fixed.one.magnitude();
    let bits = angle.magnitude().bits() as i64 - one.bits() as i64;
    if angle.magnitude() == &BigUint::ZERO {
        return Ok(Decimal::ZERO);
    }
    round_scaled(log10_estimate(bits), negative, ctx, |k| {
        div_truncated(angle.magnitude(), one, k)
    })
}
