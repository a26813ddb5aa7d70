//! Exact fractions `p/q` over any [Ring] component.
//!
//! Arithmetic never reduces on its own. `1/2 + 1/2` is `4/4`, and stays that way until
//! [Fraction::reduce] is called. Consequently `==` compares the stored pair, while
//! [Fraction::equivalent] and [Compare] work with the value.

use core::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::*,
};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use take_mut::take;

use crate::approx;
use crate::context::MathContext;
use crate::error::{ArithmeticError, Result};
use crate::num::*;
use crate::power::PowerU;

/// A fraction, or rational number `p/q` with `q != 0`.
///
/// The denominator is only guaranteed to be nonzero. Its sign and the common factors
/// of numerator and denominator are left as they are, until [Fraction::normalize]
/// and [Fraction::reduce] are called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<T> {
    numer: T,
    denom: T,
}

impl<T> Fraction<T> {
    /// Construct without checking the denominator. Every caller guarantees `denom != 0`.
    pub(crate) const fn new_raw(numer: T, denom: T) -> Self {
        Fraction { numer, denom }
    }

    pub const fn numer(&self) -> &T {
        &self.numer
    }

    pub const fn denom(&self) -> &T {
        &self.denom
    }

    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

impl<T: Zero> Fraction<T> {
    /// Create the fraction `numer/denom`.
    ///
    /// Fails with [ArithmeticError::ZeroDenominator] if `denom` is zero.
    pub fn new(numer: T, denom: T) -> Result<Self> {
        if denom.is_zero() {
            return Err(ArithmeticError::ZeroDenominator);
        }
        Ok(Fraction { numer, denom })
    }

    /// `true` if the fraction has a multiplicative inverse, i.e. the numerator is not zero.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        !self.numer.is_zero()
    }
}

impl<T: One> Fraction<T> {
    /// `value/1`
    pub fn from_integer(value: T) -> Self {
        Self::from(value)
    }
}

impl<T: Ring> Fraction<T> {
    /// `a/b + c/d = (a*d + c*b)/(b*d)`, not reduced.
    pub fn add(self, other: Self) -> Self {
        Fraction {
            numer: self.numer * other.denom.clone() + other.numer * self.denom.clone(),
            denom: self.denom * other.denom,
        }
    }

    /// `a/b - c/d = (a*d - c*b)/(b*d)`, not reduced.
    pub fn subtract(self, other: Self) -> Self {
        Fraction {
            numer: self.numer * other.denom.clone() - other.numer * self.denom.clone(),
            denom: self.denom * other.denom,
        }
    }

    /// `a/b * c/d = (a*c)/(b*d)`, not reduced.
    pub fn multiply(self, other: Self) -> Self {
        Fraction {
            numer: self.numer * other.numer,
            denom: self.denom * other.denom,
        }
    }

    /// `a/b / c/d = (a*d)/(b*c)`, not reduced.
    ///
    /// Fails with [ArithmeticError::DivisionByZero] if `other` is not invertible.
    pub fn divide(self, other: Self) -> Result<Self> {
        if !other.is_invertible() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Fraction {
            numer: self.numer * other.denom,
            denom: self.denom * other.numer,
        })
    }

    /// Integer power. `pow(0)` is `1/1`, even for a zero base.
    ///
    /// Fails with [ArithmeticError::NotInvertible] for negative exponents of a zero fraction.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        match exponent.cmp(&0) {
            Ordering::Equal => Ok(Self::one()),
            Ordering::Greater => Ok(self.powu(exponent.unsigned_abs())),
            Ordering::Less => Ok(self.clone().invert()?.powu(exponent.unsigned_abs())),
        }
    }

    pub fn negate(self) -> Self {
        Fraction {
            numer: -self.numer,
            denom: self.denom,
        }
    }

    /// Swap numerator and denominator.
    ///
    /// Fails with [ArithmeticError::NotInvertible] if the numerator is zero.
    pub fn invert(self) -> Result<Self> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NotInvertible);
        }
        Ok(Fraction {
            numer: self.denom,
            denom: self.numer,
        })
    }

    /// Multiply numerator and denominator by `factor`. The value doesn't change.
    ///
    /// Fails with [ArithmeticError::ZeroDenominator] if `factor` is zero.
    pub fn expand(self, factor: T) -> Result<Self> {
        if factor.is_zero() {
            return Err(ArithmeticError::ZeroDenominator);
        }
        Ok(Fraction {
            numer: self.numer * factor.clone(),
            denom: self.denom * factor,
        })
    }

    /// `a/b + 1 = (a + b)/b`
    pub fn inc(self) -> Self {
        Fraction {
            numer: self.numer + self.denom.clone(),
            denom: self.denom,
        }
    }

    /// `a/b - 1 = (a - b)/b`
    pub fn dec(self) -> Self {
        Fraction {
            numer: self.numer - self.denom.clone(),
            denom: self.denom,
        }
    }
}

impl<T: Ring + Compare> Fraction<T> {
    /// Move the sign into the numerator, so the denominator is positive.
    /// All zeros become `0/1`.
    pub fn normalize(self) -> Self {
        if self.numer.is_zero() {
            return Self::zero();
        }
        if self.denom.is_negative() {
            Fraction {
                numer: -self.numer,
                denom: -self.denom,
            }
        } else {
            self
        }
    }

    /// Absolute value of numerator and denominator independently.
    pub fn abs(self) -> Self {
        Fraction {
            numer: Sign::abs(&self.numer),
            denom: Sign::abs(&self.denom),
        }
    }

    /// -1, 0 or 1, the product of the signs of numerator and denominator.
    pub fn signum(&self) -> i32 {
        self.numer.signum() * self.denom.signum()
    }

    /// `true` if the value is one.
    pub fn is_unit(&self) -> bool {
        self.numer.compare(&self.denom) == Ordering::Equal
    }

    /// `true` if `|self| < 1`.
    pub fn is_proper(&self) -> bool {
        Sign::abs(&self.numer).less_than(&Sign::abs(&self.denom))
    }
}

impl<T: Ring + Compare + Cancel> Fraction<T> {
    /// Divide numerator and denominator by their greatest common divisor.
    /// The placement of the sign is kept, e.g. `-2/-4` becomes `-1/-2`.
    pub fn reduce(self) -> Self {
        let (numer, denom) = self.numer.cancel(self.denom);
        Fraction { numer, denom }
    }

    /// `true` if numerator and denominator have no common factor.
    pub fn is_irreducible(&self) -> bool {
        gcd(self.numer.clone(), self.denom.clone()).is_one()
    }

    /// `true` if the reduced denominator is a power of two.
    pub fn is_dyadic(&self) -> bool {
        let one = T::one();
        let two = T::one() + T::one();
        let mut d = self.clone().normalize().reduce().denom;
        while d.greater_than(&one) {
            let (q, r) = d.div_rem_euclid(&two);
            if !r.is_zero() {
                return false;
            }
            d = q;
        }
        d.compare(&one) == Ordering::Equal
    }

    /// The integer part, rounded towards zero.
    pub fn trunc(&self) -> T {
        let f = self.clone().normalize();
        let (q, r) = f.numer.div_rem_euclid(&f.denom);
        // euclidean division rounds towards -oo for positive denominators
        if !r.is_zero() && f.numer.is_negative() {
            q + T::one()
        } else {
            q
        }
    }

    /// The value as component, if it is integral.
    ///
    /// Fails with [ArithmeticError::NotIntegral] otherwise.
    pub fn to_integer_exact(&self) -> Result<T> {
        let (q, r) = self.numer.div_rem_euclid(&self.denom);
        if !r.is_zero() {
            return Err(ArithmeticError::NotIntegral);
        }
        // exact, so q * denom == numer for either sign of the denominator
        Ok(q)
    }
}

impl<T: Ring + Compare + Cancel + Equivalent> Fraction<T> {
    /// Mathematical equality: both sides are normalized and reduced first.
    pub fn equivalent(&self, other: &Self) -> bool {
        let a = self.clone().normalize().reduce();
        let b = other.clone().normalize().reduce();
        a.numer.equivalent(&b.numer) && a.denom.equivalent(&b.denom)
    }
}

impl<T: AsRational> Fraction<T> {
    /// The value rounded to a decimal according to `ctx`.
    pub fn to_decimal(&self, ctx: &MathContext) -> Result<Decimal> {
        approx::to_decimal(&self.as_rational(), ctx)
    }

    /// The value as decimal without rounding.
    ///
    /// Fails with [ArithmeticError::NotRepresentable] if that is impossible, e.g. for `1/3`.
    pub fn to_decimal_exact(&self) -> Result<Decimal> {
        approx::to_decimal(&self.as_rational(), &MathContext::exact())
    }
}

impl<T: Zero + One> Default for Fraction<T> {
    fn default() -> Self {
        Fraction {
            numer: T::zero(),
            denom: T::one(),
        }
    }
}

impl<T: Ring> Zero for Fraction<T> {
    fn zero() -> Self {
        Fraction {
            numer: T::zero(),
            denom: T::one(),
        }
    }
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: Ring> One for Fraction<T> {
    fn one() -> Self {
        Fraction {
            numer: T::one(),
            denom: T::one(),
        }
    }
    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

impl<T: Ring + Compare> Compare for Fraction<T> {
    /// Cross multiplication of the normalized fractions.
    fn compare(&self, other: &Self) -> Ordering {
        let a = self.clone().normalize();
        let b = other.clone().normalize();
        a.numer.compare_products(&b.denom, &b.numer, &a.denom)
    }
}

impl<T: Ring + Compare + Cancel + Equivalent> Equivalent for Fraction<T> {
    fn equivalent(&self, other: &Self) -> bool {
        Fraction::equivalent(self, other)
    }
}

impl<T: Ring + Compare> RemEuclid for Fraction<T> {
    /// Fractions are always exactly divisible. Division by zero panics.
    fn div_rem_euclid(&self, div: &Self) -> (Self, Self) {
        (self.clone() / div.clone(), Self::zero())
    }
    fn is_valid_euclid(&self) -> bool {
        self.signum() >= 0
    }
}

impl<T: Ring> Quotient for Fraction<T> {
    type Output = Fraction<T>;
    #[inline]
    fn widen(self) -> Self {
        self
    }
    fn exact_div(self, divisor: Self) -> Result<Self> {
        self.divide(divisor)
    }
}

impl<T: AsRational> AsRational for Fraction<T> {
    /// `(a/b) / (c/d) = (a*d)/(b*c)` with `a/b`, `c/d` the values of the components.
    fn as_rational(&self) -> Fraction<BigInt> {
        let n = self.numer.as_rational();
        let d = self.denom.as_rational();
        Fraction {
            numer: n.numer * d.denom,
            denom: n.denom * d.numer,
        }
    }
}

impl<T: One> From<T> for Fraction<T> {
    fn from(value: T) -> Self {
        Fraction {
            numer: value,
            denom: T::one(),
        }
    }
}

impl<T> From<Fraction<T>> for (T, T) {
    fn from(value: Fraction<T>) -> Self {
        (value.numer, value.denom)
    }
}

impl<T: Ring> Neg for Fraction<T> {
    type Output = Fraction<T>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident, $named:ident) => {
        impl<T: Ring> $Add for Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $add(self, rhs: Self) -> Self::Output {
                self.$named(rhs)
            }
        }
        impl<'a, T: Ring> $Add for &'a Fraction<T> {
            type Output = Fraction<T>;
            #[inline]
            fn $add(self, rhs: Self) -> Self::Output {
                self.clone().$named(rhs.clone())
            }
        }
    };
}
impl_add!(Add, add, add);
impl_add!(Sub, sub, subtract);
impl_add!(Mul, mul, multiply);

impl<T: Ring> Div for Fraction<T> {
    type Output = Fraction<T>;
    /// # Panics
    /// If `rhs` is zero, just like integer division.
    fn div(self, rhs: Self) -> Self::Output {
        match self.divide(rhs) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        }
    }
}
impl<'a, T: Ring> Div for &'a Fraction<T> {
    type Output = Fraction<T>;
    /// # Panics
    /// If `rhs` is zero, just like integer division.
    fn div(self, rhs: Self) -> Self::Output {
        self.clone() / rhs.clone()
    }
}

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, $Add:ident, $add_assign:ident, $add:ident),+) => {
        $(impl<T: Ring> $AddAssign for Fraction<T> {
            fn $add_assign(&mut self, rhs: Fraction<T>) {
                take(self, |x| $Add::$add(x, rhs));
            }
        }
        impl<'a, T: Ring> $AddAssign<&'a Fraction<T>> for Fraction<T> {
            fn $add_assign(&mut self, rhs: &'a Fraction<T>) {
                take(self, |x| $Add::$add(x, rhs.clone()));
            }
        })+
    };
}
forward_assign_impl!(
    AddAssign, Add, add_assign, add, SubAssign, Sub, sub_assign, sub, MulAssign, Mul, mul_assign,
    mul, DivAssign, Div, div_assign, div
);

impl<T: Ring> Sum for Fraction<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), |acc, c| acc + c)
    }
}
impl<'a, T: Ring> Sum<&'a Fraction<T>> for Fraction<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Fraction<T>>,
    {
        iter.fold(Self::zero(), |acc, c| acc + c.clone())
    }
}

impl<T: Ring> Product for Fraction<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::one(), |acc, c| acc * c)
    }
}
impl<'a, T: Ring> Product<&'a Fraction<T>> for Fraction<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Fraction<T>>,
    {
        iter.fold(Self::one(), |acc, c| acc * c.clone())
    }
}

/// Truncating conversions. `None` only if the integer part is out of range.
impl<T: Ring + Compare + Cancel + ToPrimitive + AsRational> ToPrimitive for Fraction<T> {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }
    fn to_i128(&self) -> Option<i128> {
        self.trunc().to_i128()
    }
    fn to_u128(&self) -> Option<u128> {
        self.trunc().to_u128()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(approx::to_f64(&self.as_rational()))
    }
}

macro_rules! impl_to_exact {
    ($($to_exact:ident, $to:ident, $int:ty),+) => {
        impl<T: Ring + Compare + Cancel + ToPrimitive> Fraction<T> {
            $(
            #[doc = concat!("The value as `", stringify!($int), "`, failing with [ArithmeticError::NotIntegral]")]
            #[doc = "or [ArithmeticError::OutOfRange] instead of truncating."]
            pub fn $to_exact(&self) -> Result<$int> {
                self.to_integer_exact()?
                    .$to()
                    .ok_or(ArithmeticError::OutOfRange)
            }
            )+
        }
    };
}
impl_to_exact!(
    to_i8_exact, to_i8, i8, to_i16_exact, to_i16, i16, to_i32_exact, to_i32, i32, to_i64_exact,
    to_i64, i64, to_i128_exact, to_i128, i128, to_u8_exact, to_u8, u8, to_u16_exact, to_u16, u16,
    to_u32_exact, to_u32, u32, to_u64_exact, to_u64, u64, to_u128_exact, to_u128, u128
);
