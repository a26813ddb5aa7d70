//! Exact conversion of binary floating point numbers into fractions.
//!
//! Every finite float is a dyadic rational `mantissa * 2^exponent`, so the conversion never rounds.
//! It only fails for NaN and the infinities, or if the integer type is too small.

use num_bigint::BigInt;

use crate::error::{ArithmeticError, Result};
use crate::fraction::Fraction;

// adapted from num_traits
// returns f = mantissa * 2^exponent, with an odd mantissa unless it is zero
fn integer_decode_f32(f: f32) -> Option<(i32, i16)> {
    if !f.is_finite() {
        return None;
    }
    if f == 0.0 {
        return Some((0, 0));
    }
    let bits: u32 = f.to_bits();
    let mut exponent: i16 = ((bits >> 23) & 0xff) as i16;
    let mut mantissa = bits & 0x7fffff;
    if exponent == 0 {
        // subnormal
        exponent = 1;
    } else {
        mantissa |= 0x800000;
    }
    exponent -= 127 + 23;
    let c = mantissa.trailing_zeros();
    mantissa >>= c;
    exponent += c as i16;
    let mantissa = if bits >> 31 == 0 {
        mantissa as i32
    } else {
        -(mantissa as i32)
    };
    Some((mantissa, exponent))
}

// adapted from num_traits
// returns f = mantissa * 2^exponent, with an odd mantissa unless it is zero
fn integer_decode_f64(f: f64) -> Option<(i64, i16)> {
    if !f.is_finite() {
        return None;
    }
    if f == 0.0 {
        return Some((0, 0));
    }
    let bits: u64 = f.to_bits();
    let mut exponent: i16 = ((bits >> 52) & 0x7ff) as i16;
    let mut mantissa = bits & 0xfffffffffffff;
    if exponent == 0 {
        exponent = 1;
    } else {
        mantissa |= 0x10000000000000;
    }
    exponent -= 1023 + 52;
    let c = mantissa.trailing_zeros();
    mantissa >>= c;
    exponent += c as i16;
    let mantissa = if bits >> 63 == 0 {
        mantissa as i64
    } else {
        -(mantissa as i64)
    };
    Some((mantissa, exponent))
}

// note, f32::MAX can be represented using u128, but not using i128.
macro_rules! impl_try_from {
    ($float:ident, $integer_decode:ident, $($int:ident),+) => {
        $(impl TryFrom<$float> for Fraction<$int> {
            type Error = ArithmeticError;
            /// Fails with [ArithmeticError::NotFinite] for NaN and ±∞,
            /// or [ArithmeticError::OutOfRange] if numerator or denominator overflow.
            fn try_from(value: $float) -> Result<Self> {
                let (mantissa, exponent) = $integer_decode(value).ok_or(ArithmeticError::NotFinite)?;
                let numer = mantissa as $int; // this is why no smaller integers are implemented.
                if exponent <= 0 {
                    let shift = exponent.unsigned_abs() as u32;
                    // 1 << (BITS - 1) would be negative
                    if shift >= $int::BITS - 1 {
                        return Err(ArithmeticError::OutOfRange);
                    }
                    Ok(Fraction::new_raw(numer, 1 << shift))
                } else {
                    let shift = exponent as u32;
                    match numer.checked_shl(shift) {
                        Some(x) if x >> shift == numer => Ok(Fraction::new_raw(x, 1)),
                        _ => Err(ArithmeticError::OutOfRange),
                    }
                }
            }
        })+
    };
}
impl_try_from!(f32, integer_decode_f32, i32, i64, i128);
impl_try_from!(f64, integer_decode_f64, i64, i128);

macro_rules! impl_try_from_big {
    ($float:ident, $integer_decode:ident) => {
        impl TryFrom<$float> for Fraction<BigInt> {
            type Error = ArithmeticError;
            /// Fails with [ArithmeticError::NotFinite] for NaN and ±∞.
            fn try_from(value: $float) -> Result<Self> {
                let (mantissa, exponent) = $integer_decode(value).ok_or(ArithmeticError::NotFinite)?;
                let numer = BigInt::from(mantissa);
                let one = BigInt::from(1u8);
                Ok(if exponent <= 0 {
                    Fraction::new_raw(numer, one << exponent.unsigned_abs())
                } else {
                    Fraction::new_raw(numer << exponent as u32, one)
                })
            }
        }
    };
}
impl_try_from_big!(f32, integer_decode_f32);
impl_try_from_big!(f64, integer_decode_f64);
