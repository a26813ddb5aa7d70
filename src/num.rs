use core::{cmp::Ordering, fmt::Debug, ops::*};

use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::fraction::Fraction;

/// Defines an additive identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a + 0 = a       ∀ a ∈ Self
/// 0 + a = a       ∀ a ∈ Self
/// ```
pub trait Zero: Sized + Add<Self, Output = Self> {
    /// Returns the additive identity element of `Self`, `0`.
    fn zero() -> Self;

    /// Returns `true` if `self` is equal to the additive identity.
    fn is_zero(&self) -> bool;
}

/// Defines a multiplicative identity element for `Self`.
///
/// # Laws
///
/// ```text
/// a * 1 = a       ∀ a ∈ Self
/// 1 * a = a       ∀ a ∈ Self
/// ```
pub trait One: Sized + Mul<Self, Output = Self> {
    /// Returns the multiplicative identity element of `Self`, `1`.
    fn one() -> Self;

    /// Returns `true` if `self` is equal to the multiplicative identity.
    fn is_one(&self) -> bool;
}

macro_rules! zero_one_impl {
    ($($t:ty),+; $z:expr, $o:expr) => {
        $(impl Zero for $t {
            #[inline(always)]
            fn zero() -> $t {
                $z
            }
            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == $z
            }
        }
        impl One for $t {
            #[inline(always)]
            fn one() -> $t {
                $o
            }
            #[inline(always)]
            fn is_one(&self) -> bool {
                *self == $o
            }
        })+
    };
}
zero_one_impl!(isize, i8, i16, i32, i64, i128; 0, 1);
zero_one_impl!(BigInt; BigInt::ZERO, BigInt::from(1i8));
zero_one_impl!(Decimal; Decimal::ZERO, Decimal::ONE);

/// Any type with [Zero] and [One] that can be negated, added, subtracted and multiplied.
///
/// This is the minimal capability of a component of [Fraction] or [crate::complex::Complex].
/// All operations are required to be exact. [Decimal] is the exception: products below `10^-28`
/// are rounded to the last representable digit.
pub trait Ring:
    Clone + Debug + PartialEq + Zero + One + Neg<Output = Self> + Sub<Output = Self>
{
}
impl<T: Clone + Debug + PartialEq + Zero + One + Neg<Output = T> + Sub<Output = T>> Ring for T {}

/// A total order given by a single three way comparison.
///
/// All relational predicates are derived from [Compare::compare], so they can't disagree.
/// This is not [Ord]: for [Fraction] the order compares values,
/// while `==` compares the stored representation.
pub trait Compare {
    fn compare(&self, other: &Self) -> Ordering;

    /// Compare the products `self * b` and `c * d`.
    ///
    /// Components whose multiplication can round override this with an exact comparison.
    fn compare_products(&self, b: &Self, c: &Self, d: &Self) -> Ordering
    where
        Self: Clone + Mul<Output = Self>,
    {
        (self.clone() * b.clone()).compare(&(c.clone() * d.clone()))
    }

    #[inline]
    fn less_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }
    #[inline]
    fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
    #[inline]
    fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }
    #[inline]
    fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

macro_rules! impl_compare_ord {
    ($($T:ty),+) => {
        $(impl Compare for $T {
            #[inline(always)]
            fn compare(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })+
    };
}
impl_compare_ord!(isize, i8, i16, i32, i64, i128, BigInt);

impl Compare for Decimal {
    #[inline(always)]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    /// Exact, the products are formed as big integer fractions.
    fn compare_products(&self, b: &Self, c: &Self, d: &Self) -> Ordering {
        let left = self.as_rational().multiply(b.as_rational());
        let right = c.as_rational().multiply(d.as_rational());
        left.compare(&right)
    }
}

/// The smaller of the two values. Returns `a` if they compare equal.
#[must_use]
pub fn min<T: Compare>(a: T, b: T) -> T {
    if b.less_than(&a) { b } else { a }
}

/// The larger of the two values. Returns `a` if they compare equal.
#[must_use]
pub fn max<T: Compare>(a: T, b: T) -> T {
    if b.greater_than(&a) { b } else { a }
}

/// Sign related functions, derived from [Compare] against [Zero].
pub trait Sign: Compare + Zero + Neg<Output = Self> + Clone {
    /// -1, 0 or 1.
    #[must_use]
    fn signum(&self) -> i32 {
        match self.compare(&Self::zero()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
    #[must_use]
    fn is_negative(&self) -> bool {
        self.compare(&Self::zero()) == Ordering::Less
    }
    /// absolute value of the number.
    #[must_use]
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }
}
impl<T: Compare + Zero + Neg<Output = T> + Clone> Sign for T {}

/// Numeric equality, as opposed to the structural equality of [PartialEq].
///
/// For the primitive components both coincide. For [Fraction] `3/6` and `1/2` are equivalent, but not equal.
pub trait Equivalent {
    #[must_use]
    fn equivalent(&self, other: &Self) -> bool;
}

macro_rules! impl_equivalent_eq {
    ($($T:ty),+) => {
        $(impl Equivalent for $T {
            #[inline(always)]
            fn equivalent(&self, other: &Self) -> bool {
                self == other
            }
        })+
    };
}
// `Decimal` equality already ignores the scale, so `1.0 == 1.00`.
impl_equivalent_eq!(isize, i8, i16, i32, i64, i128, BigInt, Decimal);

/// like [Rem<T, Output = T>] but with euclidean division, so the remainder `r` is bounded by the denominator `d` e.g. with `0 <= r < |d|`.
/// A valid (but trivial) implementation would be, to always return zero.
pub trait RemEuclid: Sized {
    /// Compute the euclidean division and remainder.
    fn div_rem_euclid(&self, div: &Self) -> (Self, Self);
    /// Return, whether the number could be the result of a euclidean remainder.
    /// Note, that zero is always "valid euclid".
    /// For all x: x or -x need to be "valid euclid".
    fn is_valid_euclid(&self) -> bool;
}

macro_rules! impl_rem_euclid {
    ($($T:ty),+) => {
        $(impl RemEuclid for $T {
            fn div_rem_euclid(&self, div: &Self) -> (Self, Self) {
                (self.div_euclid(*div), self.rem_euclid(*div))
            }
            fn is_valid_euclid(&self) -> bool {
                self >= &0
            }
        })+
    };
}
impl_rem_euclid!(isize, i8, i16, i32, i64, i128);

impl RemEuclid for BigInt {
    fn div_rem_euclid(&self, div: &Self) -> (Self, Self) {
        use num_traits::Euclid;
        (Euclid::div_euclid(self, div), Euclid::rem_euclid(self, div))
    }
    fn is_valid_euclid(&self) -> bool {
        self >= &BigInt::ZERO
    }
}

impl RemEuclid for Decimal {
    /// The quotient is an integer valued decimal, the remainder is exact,
    /// as both operands are multiples of `10^-28`.
    fn div_rem_euclid(&self, div: &Self) -> (Self, Self) {
        let mut r = *self % *div;
        let mut q = (*self - r) / *div;
        if r < Decimal::ZERO {
            if *div > Decimal::ZERO {
                r += *div;
                q -= Decimal::ONE;
            } else {
                r -= *div;
                q += Decimal::ONE;
            }
        }
        (q, r)
    }
    fn is_valid_euclid(&self) -> bool {
        *self >= Decimal::ZERO
    }
}

/// Calculates the Greatest Common Divisor (GCD) of the number and
/// `other`. The result is always `result.is_valid_euclid() == true` (usually that means > 0).
/// If both are zero, it returns one, so it can always be used as a divisor.
#[must_use]
pub fn gcd<T: Zero + One + Sub<Output = T> + RemEuclid>(mut a: T, mut b: T) -> T {
    if a.is_zero() {
        return if b.is_zero() {
            T::one()
        } else if b.is_valid_euclid() {
            b
        } else {
            T::zero() - b
        };
    }
    while !b.is_zero() {
        (b, a) = (a.div_rem_euclid(&b).1, b);
    }
    if a.is_valid_euclid() {
        a
    } else {
        T::zero() - a
    }
}

/// Divide two numbers by their [gcd].
pub trait Cancel: Sized + Clone + Zero + One + Sub<Output = Self> + PartialEq + RemEuclid {
    #[must_use]
    fn cancel(self, b: Self) -> (Self, Self);
}
impl<T: Clone + Zero + One + PartialEq + Sub<Output = T> + Div<Output = T> + RemEuclid> Cancel
    for T
{
    fn cancel(self, b: Self) -> (Self, Self) {
        if self == b {
            if self.is_zero() {
                return (T::zero(), T::zero());
            } else if self.is_valid_euclid() {
                return (T::one(), T::one());
            } else {
                return (T::zero() - T::one(), T::zero() - T::one());
            }
        }
        let gcd = gcd(self.clone(), b.clone());
        (self / gcd.clone(), b / gcd)
    }
}

/// Exact division, whose result may only exist in a wider type.
///
/// The integer and decimal components widen into [Fraction], fractions are closed under division.
pub trait Quotient: Sized {
    type Output: Ring;
    /// Embed `self` into the quotient type without changing its value.
    #[must_use]
    fn widen(self) -> Self::Output;
    /// Compute `self / divisor` exactly.
    ///
    /// Fails with [crate::ArithmeticError::DivisionByZero] if `divisor` is zero.
    fn exact_div(self, divisor: Self) -> Result<Self::Output>;
}

/// The type, in which `T` is closed under division.
pub type QuotientOf<T> = <T as Quotient>::Output;

macro_rules! impl_quotient_fraction {
    ($($T:ty),+) => {
        $(impl Quotient for $T {
            type Output = Fraction<$T>;
            #[inline]
            fn widen(self) -> Fraction<$T> {
                Fraction::from(self)
            }
            fn exact_div(self, divisor: Self) -> Result<Fraction<$T>> {
                if divisor.is_zero() {
                    return Err(crate::ArithmeticError::DivisionByZero);
                }
                Ok(Fraction::new_raw(self, divisor).normalize().reduce())
            }
        })+
    };
}
impl_quotient_fraction!(isize, i8, i16, i32, i64, i128, BigInt, Decimal);

/// The exact value of a number as a fraction of big integers.
///
/// This is the entry point for all decimal approximations in [crate::approx].
pub trait AsRational {
    /// The returned fraction has a nonzero denominator, but is neither reduced nor normalized.
    #[must_use]
    fn as_rational(&self) -> Fraction<BigInt>;
}

macro_rules! impl_as_rational_int {
    ($($T:ty),+) => {
        $(impl AsRational for $T {
            #[inline]
            fn as_rational(&self) -> Fraction<BigInt> {
                Fraction::from(BigInt::from(*self))
            }
        })+
    };
}
impl_as_rational_int!(isize, i8, i16, i32, i64, i128);

impl AsRational for BigInt {
    #[inline]
    fn as_rational(&self) -> Fraction<BigInt> {
        Fraction::from(self.clone())
    }
}

impl AsRational for Decimal {
    /// `mantissa / 10^scale`
    fn as_rational(&self) -> Fraction<BigInt> {
        Fraction::new_raw(
            BigInt::from(self.mantissa()),
            BigInt::from(10u8).pow(self.scale()),
        )
    }
}
