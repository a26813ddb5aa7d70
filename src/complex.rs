//! Exact complex numbers `re + im*i` over any [Ring] component.
//!
//! Division leaves integers and decimals, so [Complex::divide], [Complex::invert] and negative
//! powers return a `Complex` of the [Quotient] type, e.g. `Complex<i64> / Complex<i64>` is a
//! `Complex<Fraction<i64>>`. The absolute value and the argument are irrational in general.
//! They are approximated as [Decimal] under an explicit [MathContext].

use core::iter::{Product, Sum};
use core::ops::*;
use rust_decimal::Decimal;
use take_mut::take;

use crate::approx;
use crate::context::MathContext;
use crate::error::{ArithmeticError, Result};
use crate::num::*;
use crate::power::PowerU;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Absolute value and argument of a complex number, both rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolarForm {
    pub modulus: Decimal,
    /// In radians, in `(-π, π]`.
    pub argument: Decimal,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Zero> Complex<T> {
    pub fn real(re: T) -> Self {
        Self {
            re,
            im: Zero::zero(),
        }
    }
    pub fn imag(im: T) -> Self {
        Self {
            re: Zero::zero(),
            im,
        }
    }
}

impl<T: Zero + One> Complex<T> {
    pub fn i() -> Self {
        Self {
            re: Zero::zero(),
            im: One::one(),
        }
    }
}

impl<T: Ring> Complex<T> {
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    pub fn subtract(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    pub fn multiply(self, other: Self) -> Self {
        Self {
            re: self.re.clone() * other.re.clone() - self.im.clone() * other.im.clone(),
            im: self.re * other.im + self.im * other.re,
        }
    }

    pub fn negate(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }

    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// The square of the absolute value, `re² + im²`. Exact, except for tiny [Decimal] components.
    pub fn abs_pow2(&self) -> T {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    /// `true` if `|z| = 1`, e.g. for `±1` and `±i`.
    pub fn is_unit(&self) -> bool {
        self.abs_pow2().is_one()
    }

    /// `true` if `z` has a multiplicative inverse, i.e. `|z| != 0`.
    pub fn is_invertible(&self) -> bool {
        !(self.re.is_zero() && self.im.is_zero())
    }
}

impl<T: Ring + Quotient> Complex<T> {
    /// The same value in the quotient type.
    pub fn widen(self) -> Complex<QuotientOf<T>> {
        Complex {
            re: self.re.widen(),
            im: self.im.widen(),
        }
    }

    /// `1/z = conj(z) / |z|²`
    ///
    /// Fails with [ArithmeticError::NotInvertible] if `z` is zero.
    pub fn invert(self) -> Result<Complex<QuotientOf<T>>> {
        if !self.is_invertible() {
            return Err(ArithmeticError::NotInvertible);
        }
        let n = self.abs_pow2();
        if n.is_zero() {
            return Self::one().divide_on_axis(self);
        }
        Ok(Complex {
            re: self.re.exact_div(n.clone())?,
            im: (-self.im).exact_div(n)?,
        })
    }

    /// `z/w = z * conj(w) / |w|²`, computed exactly in the quotient type.
    ///
    /// Fails with [ArithmeticError::DivisionByZero] if `w` is zero.
    pub fn divide(self, other: Self) -> Result<Complex<QuotientOf<T>>> {
        if !other.is_invertible() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let n = other.abs_pow2();
        if n.is_zero() {
            return self.divide_on_axis(other);
        }
        let z = self.multiply(other.conjugate());
        Ok(Complex {
            re: z.re.exact_div(n.clone())?,
            im: z.im.exact_div(n)?,
        })
    }

    /// Division by a nonzero `w` whose square `|w|²` rounded to zero.
    /// Only possible without squaring, if `w` is real or imaginary.
    fn divide_on_axis(self, other: Self) -> Result<Complex<QuotientOf<T>>> {
        if other.im.is_zero() {
            Ok(Complex {
                re: self.re.exact_div(other.re.clone())?,
                im: self.im.exact_div(other.re)?,
            })
        } else if other.re.is_zero() {
            // (a + bi) / ci = b/c - (a/c)i
            Ok(Complex {
                re: self.im.exact_div(other.im.clone())?,
                im: (-self.re).exact_div(other.im)?,
            })
        } else {
            Err(ArithmeticError::NotRepresentable)
        }
    }

    /// Integer power. `pow(0)` is one, even for zero.
    ///
    /// Fails with [ArithmeticError::NotInvertible] for negative exponents of zero.
    pub fn pow(&self, exponent: i64) -> Result<Complex<QuotientOf<T>>> {
        if exponent >= 0 {
            Ok(self.powu(exponent.unsigned_abs()).widen())
        } else {
            Ok(self.clone().invert()?.powu(exponent.unsigned_abs()))
        }
    }
}

impl<T: Ring + AsRational> Complex<T> {
    /// `|z|`, correctly rounded according to `ctx`.
    pub fn abs(&self, ctx: &MathContext) -> Result<Decimal> {
        let re = self.re.as_rational();
        let im = self.im.as_rational();
        approx::sqrt(&re.clone().multiply(re).add(im.clone().multiply(im)), ctx)
    }

    /// The angle `atan2(im, re)` in radians, in `(-π, π]`.
    ///
    /// Fails with [ArithmeticError::UndefinedArgument] if `z` is zero.
    pub fn argument(&self, ctx: &MathContext) -> Result<Decimal> {
        approx::atan2(&self.im.as_rational(), &self.re.as_rational(), ctx)
    }

    /// Fails with [ArithmeticError::UndefinedArgument] if `z` is zero.
    pub fn to_polar_form(&self, ctx: &MathContext) -> Result<PolarForm> {
        let argument = self.argument(ctx)?;
        Ok(PolarForm {
            modulus: self.abs(ctx)?,
            argument,
        })
    }
}

impl<T: Equivalent> Complex<T> {
    /// Numeric equality of both components.
    /// Unlike `==` this treats `Complex(1/2, 0)` and `Complex(2/4, 0)` as equal.
    pub fn equals_by_comparing(&self, other: &Self) -> bool {
        self.re.equivalent(&other.re) && self.im.equivalent(&other.im)
    }
}

impl<T: Equivalent> Equivalent for Complex<T> {
    fn equivalent(&self, other: &Self) -> bool {
        self.equals_by_comparing(other)
    }
}

impl<T: Ring> Zero for Complex<T> {
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
    fn zero() -> Self {
        Self {
            re: Zero::zero(),
            im: Zero::zero(),
        }
    }
}

impl<T: Ring> One for Complex<T> {
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
    fn one() -> Self {
        Self {
            re: One::one(),
            im: Zero::zero(),
        }
    }
}

impl<T: Zero> From<T> for Complex<T> {
    fn from(value: T) -> Self {
        Self::real(value)
    }
}

impl<T: Ring> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! impl_add {
    ($Add:ident, $add:ident, $named:ident) => {
        impl<T: Ring> $Add for Complex<T> {
            type Output = Complex<T>;
            #[inline]
            fn $add(self, rhs: Complex<T>) -> Self::Output {
                self.$named(rhs)
            }
        }
        impl<'a, T: Ring> $Add for &'a Complex<T> {
            type Output = Complex<T>;
            #[inline]
            fn $add(self, rhs: &'a Complex<T>) -> Self::Output {
                self.clone().$named(rhs.clone())
            }
        }
    };
}
impl_add!(Add, add, add);
impl_add!(Sub, sub, subtract);
impl_add!(Mul, mul, multiply);

macro_rules! impl_add_real {
    ($Add:ident, $add:ident) => {
        impl<T: Ring> $Add<T> for Complex<T> {
            type Output = Complex<T>;
            fn $add(self, rhs: T) -> Self::Output {
                Complex {
                    re: self.re.$add(rhs),
                    im: self.im,
                }
            }
        }
        // can't implement the reverse, because Rust doesn't allow it.
    };
}
impl_add_real!(Add, add);
impl_add_real!(Sub, sub);

impl<T: Ring> Mul<T> for Complex<T> {
    type Output = Complex<T>;
    fn mul(self, rhs: T) -> Self::Output {
        Complex {
            re: self.re * rhs.clone(),
            im: self.im * rhs,
        }
    }
}

impl<T: Ring + Quotient> Div for Complex<T> {
    type Output = Complex<QuotientOf<T>>;
    /// # Panics
    /// If `rhs` is zero, just like integer division.
    fn div(self, rhs: Self) -> Self::Output {
        match self.divide(rhs) {
            Ok(z) => z,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! forward_assign_impl {
    ($($AddAssign:ident, $Add:ident, $add_assign:ident, $add:ident),+) => {
        $(impl<T: Ring> $AddAssign for Complex<T> {
            fn $add_assign(&mut self, rhs: Complex<T>) {
                take(self, |x| $Add::$add(x, rhs));
            }
        }
        impl<'a, T: Ring> $AddAssign<&'a Complex<T>> for Complex<T> {
            fn $add_assign(&mut self, rhs: &'a Complex<T>) {
                take(self, |x| $Add::$add(x, rhs.clone()));
            }
        }
        impl<T: Ring> $AddAssign<T> for Complex<T> {
            fn $add_assign(&mut self, rhs: T) {
                take(self, |x| $Add::$add(x, rhs));
            }
        })+
    };
}
forward_assign_impl!(
    AddAssign, Add, add_assign, add, SubAssign, Sub, sub_assign, sub, MulAssign, Mul, mul_assign,
    mul
);

impl<T: Ring> Sum for Complex<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), |acc, c| acc + c)
    }
}
impl<'a, T: Ring> Sum<&'a Complex<T>> for Complex<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex<T>>,
    {
        iter.fold(Self::zero(), |acc, c| acc + c.clone())
    }
}

impl<T: Ring> Product for Complex<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::one(), |acc, c| acc * c)
    }
}
impl<'a, T: Ring> Product<&'a Complex<T>> for Complex<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex<T>>,
    {
        iter.fold(Self::one(), |acc, c| acc * c.clone())
    }
}
