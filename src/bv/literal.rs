// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::{Error, Result, SignedWord, WidthInt, Word};
use std::fmt::{Display, Formatter};

/// A plain integer as handed to a constructor or operator.
///
/// Stored as sign and magnitude so that the whole range of both `i128` and `u128` can be
/// expressed. There is no negative zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    negative: bool,
    magnitude: Word,
}

impl Literal {
    pub const ZERO: Self = Self::from_u128(0);

    pub const fn from_u128(value: u128) -> Self {
        Self {
            negative: false,
            magnitude: value,
        }
    }

    pub const fn from_i128(value: i128) -> Self {
        Self {
            negative: value < 0,
            magnitude: value.unsigned_abs(),
        }
    }

    /// A zero magnitude is never negative.
    pub const fn from_sign_magnitude(negative: bool, magnitude: Word) -> Self {
        Self {
            negative: negative && magnitude != 0,
            magnitude,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> Word {
        self.magnitude
    }

    /// Number of digits in the binary representation of the magnitude.
    pub fn bit_length(&self) -> WidthInt {
        Word::BITS - self.magnitude.leading_zeros()
    }

    /// Minimum number of bits needed to hold this value. Zero and negative values need one
    /// extra bit for the sign.
    pub fn bits_needed(&self) -> WidthInt {
        if !self.negative && self.magnitude > 0 {
            self.bit_length()
        } else {
            self.bit_length() + 1
        }
    }

    /// Two's complement encoding modulo `2^128`.
    #[inline]
    pub(crate) fn to_word_wrapping(self) -> Word {
        if self.negative {
            self.magnitude.wrapping_neg()
        } else {
            self.magnitude
        }
    }

    /// Operands of bitwise operators, comparisons and shifts must not be negative.
    #[inline]
    pub(crate) fn non_negative(self) -> Result<Word> {
        if self.negative {
            Err(Error::NegativeOperandNotAllowed(self))
        } else {
            Ok(self.magnitude)
        }
    }

    pub fn to_i128(&self) -> Option<SignedWord> {
        if self.negative {
            0i128.checked_sub_unsigned(self.magnitude)
        } else {
            SignedWord::try_from(self.magnitude).ok()
        }
    }

    pub fn to_u128(&self) -> Option<Word> {
        (!self.negative).then_some(self.magnitude)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Literal {
            fn from(value: $ty) -> Self {
                Self::from_i128(value as i128)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Literal {
            fn from(value: $ty) -> Self {
                Self::from_u128(value as u128)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
