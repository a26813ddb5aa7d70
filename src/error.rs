//! The single error type of the crate.
//!
//! Every failure is local and synchronous. [ArithmeticError::kind] sorts the variants into
//! the three classes callers usually care about: a violated precondition on an argument,
//! an operation that is undefined for the receiver's current value, and a conversion that
//! could not be performed exactly.

use thiserror::Error;

/// Result type alias for fallible arithmetic.
pub type Result<T> = core::result::Result<T, ArithmeticError>;

/// The class of an [ArithmeticError].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument violates a precondition, e.g. a zero denominator or divisor.
    InvalidArgument,
    /// The receiver's value does not admit the operation, e.g. inverting zero.
    InvalidState,
    /// An exact conversion was requested, but the value is not exactly representable.
    Inexact,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    #[error("denominator must not be zero")]
    ZeroDenominator,

    #[error("division by a value that has no inverse")]
    DivisionByZero,

    #[error("value is not finite (NaN or ±∞)")]
    NotFinite,

    #[error("precision {0} is outside of 1..=28 significant digits")]
    InvalidPrecision(u32),

    #[error("value has no multiplicative inverse")]
    NotInvertible,

    #[error("the argument (angle) of zero is undefined")]
    UndefinedArgument,

    #[error("value is not integral")]
    NotIntegral,

    #[error("value can not be represented without rounding")]
    NotRepresentable,

    #[error("value is out of range for the target type")]
    OutOfRange,
}

impl ArithmeticError {
    /// Classify the error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroDenominator
            | Self::DivisionByZero
            | Self::NotFinite
            | Self::InvalidPrecision(_) => ErrorKind::InvalidArgument,
            Self::NotInvertible | Self::UndefinedArgument => ErrorKind::InvalidState,
            Self::NotIntegral | Self::NotRepresentable | Self::OutOfRange => ErrorKind::Inexact,
        }
    }
}
