// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Operators with Verilog-style result width inference.

use crate::bv::arithmetic;
use crate::{BitVecValue, Error, Literal, Result, WidthDescriptor, Word};
use strum::{Display, EnumIter};

/// Right hand side of a binary operator.
///
/// The result width of an operator depends on whether the other side is a bit-vector with a
/// known width or a plain integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    BitVec(&'a BitVecValue),
    Int(Literal),
}

impl Operand<'_> {
    /// The integer this operand stands for. Bit-vectors contribute their unsigned value.
    pub fn literal(&self) -> Literal {
        match self {
            Operand::BitVec(value) => Literal::from(value.as_unsigned()),
            Operand::Int(value) => *value,
        }
    }
}

impl<'a> From<&'a BitVecValue> for Operand<'a> {
    fn from(value: &'a BitVecValue) -> Self {
        Operand::BitVec(value)
    }
}

impl From<Literal> for Operand<'_> {
    fn from(value: Literal) -> Self {
        Operand::Int(value)
    }
}

macro_rules! impl_operand_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Operand<'_> {
            fn from(value: $ty) -> Self {
                Operand::Int(Literal::from(value))
            }
        })*
    };
}

impl_operand_from_int!(i8, i16, i32, i64, i128, isize);
impl_operand_from_int!(u8, u16, u32, u64, u128, usize);

/// Binary operators. `Display` renders the operator symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BinOp {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = "//")]
    FloorDiv,
    #[strum(to_string = "%")]
    Rem,
    #[strum(to_string = "&")]
    And,
    #[strum(to_string = "|")]
    Or,
    #[strum(to_string = "^")]
    Xor,
    #[strum(to_string = "<<")]
    ShiftLeft,
    #[strum(to_string = ">>")]
    ShiftRight,
    #[strum(to_string = "**")]
    Pow,
    #[strum(to_string = "divmod")]
    DivMod,
}

impl BinOp {
    /// Operators that may appear with a plain integer on the left hand side.
    pub fn is_reflectable(&self) -> bool {
        matches!(
            self,
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::And | BinOp::Or | BinOp::Xor
        )
    }
}

/// Declares a shorthand for [`BitVecValue::binary`] and one for
/// [`BitVecValue::reflected`] per operator.
macro_rules! declare_bin_fns {
    ($($op:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Shorthand for [`BitVecValue::binary`] with [`BinOp::" $op "`]."]
                pub fn [<$op:snake>]<'a>(
                    &self,
                    rhs: impl Into<Operand<'a>>,
                ) -> Result<BitVecValue> {
                    self.binary(BinOp::$op, rhs)
                }

                #[doc = "Shorthand for [`BitVecValue::reflected`] with [`BinOp::" $op "`]."]
                pub fn [<r $op:snake>](&self, lhs: impl Into<Literal>) -> Result<BitVecValue> {
                    self.reflected(BinOp::$op, lhs)
                }
            )*
        }
    };
}

impl BitVecValue {
    /// Applies `self op rhs`.
    ///
    /// | op          | both bit-vectors     | plain integer `rhs`       |
    /// |-------------|----------------------|---------------------------|
    /// | `+`, `-`    | `max(n, m) + 1`      | `n`, wraps                |
    /// | `*`         | `n + m`              | `2 * n`, wraps            |
    /// | `/`, `//`   | `n`                  | `n`, floor division       |
    /// | `%`         | `min(n, m)`          | `n`, floor modulo         |
    /// | `&`,`\|`,`^`| `max(n, m)`          | `n`, `rhs >= 0`           |
    /// | `<<`, `>>`  | `n`                  | `n`, `rhs >= 0`           |
    ///
    /// Fails with [`Error::InvalidWidth`] if the inferred width exceeds [`crate::MAX_WIDTH`].
    pub fn binary<'a>(&self, op: BinOp, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        match rhs.into() {
            Operand::BitVec(rhs) => self.binary_with_bits(op, rhs),
            Operand::Int(rhs) => self.binary_with_int(op, rhs),
        }
    }

    /// Applies `lhs op self` for a plain integer `lhs`. The result has the width of `self`,
    /// except for `*` which doubles it. Division, modulo and shifts need to know the width of
    /// the left hand side and are therefore not supported.
    pub fn reflected(&self, op: BinOp, lhs: impl Into<Literal>) -> Result<BitVecValue> {
        let lhs = lhs.into();
        match op {
            BinOp::Sub => Ok(BitVecValue::wrapped(
                self.descriptor(),
                lhs.to_word_wrapping().wrapping_sub(self.as_unsigned()),
            )),
            op if op.is_reflectable() => self.binary_with_int(op, lhs),
            op => Err(Error::UnsupportedOperation { op }),
        }
    }

    fn binary_with_bits(&self, op: BinOp, rhs: &BitVecValue) -> Result<BitVecValue> {
        let (a, b) = (self.as_unsigned(), rhs.as_unsigned());
        let wider = self.wider_descriptor(rhs);
        match op {
            BinOp::Add => BitVecValue::wrapped_to(wider.nbits() + 1, a.wrapping_add(b)),
            BinOp::Sub => BitVecValue::wrapped_to(wider.nbits() + 1, a.wrapping_sub(b)),
            BinOp::Mul => BitVecValue::wrapped_to(self.width() + rhs.width(), a.wrapping_mul(b)),
            BinOp::Div | BinOp::FloorDiv => {
                let quotient = a.checked_div(b).ok_or(Error::DivisionByZero)?;
                Ok(BitVecValue::wrapped(self.descriptor(), quotient))
            }
            BinOp::Rem => {
                let remainder = a.checked_rem(b).ok_or(Error::DivisionByZero)?;
                let narrower = if self.width() <= rhs.width() {
                    self.descriptor()
                } else {
                    rhs.descriptor()
                };
                Ok(BitVecValue::wrapped(narrower, remainder))
            }
            BinOp::And => Ok(BitVecValue::wrapped(wider, a & b)),
            BinOp::Or => Ok(BitVecValue::wrapped(wider, a | b)),
            BinOp::Xor => Ok(BitVecValue::wrapped(wider, a ^ b)),
            BinOp::ShiftLeft => Ok(self.shifted_left(b)),
            BinOp::ShiftRight => Ok(self.shifted_right(b)),
            BinOp::Pow | BinOp::DivMod => Err(Error::UnsupportedOperation { op }),
        }
    }

    fn binary_with_int(&self, op: BinOp, rhs: Literal) -> Result<BitVecValue> {
        let a = self.as_unsigned();
        let b = rhs.to_word_wrapping();
        let own = self.descriptor();
        match op {
            BinOp::Add => Ok(BitVecValue::wrapped(own, a.wrapping_add(b))),
            BinOp::Sub => Ok(BitVecValue::wrapped(own, a.wrapping_sub(b))),
            BinOp::Mul => BitVecValue::wrapped_to(2 * self.width(), a.wrapping_mul(b)),
            BinOp::Div | BinOp::FloorDiv => {
                let quotient = arithmetic::floor_div(a, rhs).ok_or(Error::DivisionByZero)?;
                Ok(BitVecValue::wrapped(own, quotient))
            }
            BinOp::Rem => {
                let remainder = arithmetic::floor_mod(a, rhs).ok_or(Error::DivisionByZero)?;
                Ok(BitVecValue::wrapped(own, remainder))
            }
            BinOp::And => Ok(BitVecValue::wrapped(own, a & rhs.non_negative()?)),
            BinOp::Or => Ok(BitVecValue::wrapped(own, a | rhs.non_negative()?)),
            BinOp::Xor => Ok(BitVecValue::wrapped(own, a ^ rhs.non_negative()?)),
            BinOp::ShiftLeft => Ok(self.shifted_left(rhs.non_negative()?)),
            BinOp::ShiftRight => Ok(self.shifted_right(rhs.non_negative()?)),
            BinOp::Pow | BinOp::DivMod => Err(Error::UnsupportedOperation { op }),
        }
    }

    declare_bin_fns!(
        Add, Sub, Mul, Div, FloorDiv, Rem, And, Or, Xor, ShiftLeft, ShiftRight, Pow, DivMod,
    );

    /// Bitwise inversion. The width does not change.
    pub fn not(&self) -> BitVecValue {
        BitVecValue::wrapped(self.descriptor(), !self.as_unsigned())
    }

    #[inline]
    fn shifted_left(&self, amount: Word) -> BitVecValue {
        let value = arithmetic::shift_left(self.as_unsigned(), amount, self.width());
        BitVecValue::wrapped(self.descriptor(), value)
    }

    /// Logical shift, no sign extension.
    #[inline]
    fn shifted_right(&self, amount: Word) -> BitVecValue {
        let value = arithmetic::shift_right(self.as_unsigned(), amount, self.width());
        BitVecValue::wrapped(self.descriptor(), value)
    }

    #[inline]
    fn wider_descriptor(&self, rhs: &BitVecValue) -> &'static WidthDescriptor {
        if self.width() >= rhs.width() {
            self.descriptor()
        } else {
            rhs.descriptor()
        }
    }

    fn compare<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        cmp: fn(&Word, &Word) -> bool,
    ) -> Result<BitVecValue> {
        let rhs = match rhs.into() {
            Operand::BitVec(value) => value.as_unsigned(),
            Operand::Int(value) => value.non_negative()?,
        };
        Ok(BitVecValue::from_bool(cmp(&self.as_unsigned(), &rhs)))
    }

    /// 1-bit result of `self == rhs`. Only the values are compared, widths may differ.
    /// Negative integers are rejected.
    pub fn is_equal<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        self.compare(rhs, |a, b| a == b)
    }

    pub fn is_not_equal<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        self.compare(rhs, |a, b| a != b)
    }

    /// Like [`BitVecValue::is_equal`], a missing value is never equal.
    pub fn is_equal_opt<'a, R: Into<Operand<'a>>>(&self, rhs: Option<R>) -> Result<BitVecValue> {
        match rhs {
            Some(rhs) => self.is_equal(rhs),
            None => Ok(BitVecValue::fals()),
        }
    }

    pub fn is_not_equal_opt<'a, R: Into<Operand<'a>>>(
        &self,
        rhs: Option<R>,
    ) -> Result<BitVecValue> {
        match rhs {
            Some(rhs) => self.is_not_equal(rhs),
            None => Ok(BitVecValue::tru()),
        }
    }

    pub fn is_less<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        self.compare(rhs, |a, b| a < b)
    }

    pub fn is_less_or_equal<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        self.compare(rhs, |a, b| a <= b)
    }

    pub fn is_greater<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        self.compare(rhs, |a, b| a > b)
    }

    pub fn is_greater_or_equal<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<BitVecValue> {
        self.compare(rhs, |a, b| a >= b)
    }
}

impl std::ops::Not for BitVecValue {
    type Output = BitVecValue;

    fn not(self) -> Self::Output {
        BitVecValue::not(&self)
    }
}

impl std::ops::Not for &BitVecValue {
    type Output = BitVecValue;

    fn not(self) -> Self::Output {
        BitVecValue::not(self)
    }
}

/// Bitwise operators between two bit-vectors can never fail.
macro_rules! impl_bitwise_op {
    ($trait:ident) => {
        paste::paste! {
            impl std::ops::$trait<&BitVecValue> for &BitVecValue {
                type Output = BitVecValue;

                fn [<$trait:lower>](self, rhs: &BitVecValue) -> Self::Output {
                    let (a, b) = (self.as_unsigned(), rhs.as_unsigned());
                    let value = std::ops::$trait::[<$trait:lower>](a, b);
                    BitVecValue::wrapped(self.wider_descriptor(rhs), value)
                }
            }

            impl std::ops::$trait for BitVecValue {
                type Output = BitVecValue;

                fn [<$trait:lower>](self, rhs: BitVecValue) -> Self::Output {
                    std::ops::$trait::[<$trait:lower>](&self, &rhs)
                }
            }
        }
    };
}

impl_bitwise_op!(BitAnd);
impl_bitwise_op!(BitOr);
impl_bitwise_op!(BitXor);

impl std::ops::Shl<u32> for &BitVecValue {
    type Output = BitVecValue;

    fn shl(self, rhs: u32) -> Self::Output {
        self.shifted_left(rhs as Word)
    }
}

impl std::ops::Shl<&BitVecValue> for &BitVecValue {
    type Output = BitVecValue;

    fn shl(self, rhs: &BitVecValue) -> Self::Output {
        self.shifted_left(rhs.as_unsigned())
    }
}

impl std::ops::Shr<u32> for &BitVecValue {
    type Output = BitVecValue;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shifted_right(rhs as Word)
    }
}

impl std::ops::Shr<&BitVecValue> for &BitVecValue {
    type Output = BitVecValue;

    fn shr(self, rhs: &BitVecValue) -> Self::Output {
        self.shifted_right(rhs.as_unsigned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn bv(width: u32, value: i128) -> BitVecValue {
        BitVecValue::new(width, value).unwrap()
    }

    #[test]
    fn test_op_symbols() {
        assert_eq!(BinOp::ShiftLeft.to_string(), "<<");
        assert_eq!(
            Error::UnsupportedOperation { op: BinOp::Pow }.to_string(),
            "unsupported operation `**`"
        );
    }

    #[test]
    fn test_reflected_support() {
        let x = bv(4, 3);
        for op in BinOp::iter() {
            let res = x.reflected(op, 5);
            if op.is_reflectable() {
                assert!(res.is_ok(), "{op}");
            } else {
                assert_eq!(res, Err(Error::UnsupportedOperation { op }));
            }
        }
    }

    #[test]
    fn test_unsupported() {
        let x = bv(4, 3);
        let pow = Error::UnsupportedOperation { op: BinOp::Pow };
        assert_eq!(x.pow(2), Err(pow));
        let unsupported = |res: Result<BitVecValue>| {
            matches!(res, Err(Error::UnsupportedOperation { .. }))
        };
        assert!(unsupported(x.div_mod(&x)));
        assert!(unsupported(x.rdiv(2)));
        assert!(unsupported(x.rshift_left(2)));
    }

    #[test]
    fn test_invert() {
        assert_eq!(!bv(4, 0b0001), 0b1110);
        assert_eq!(bv(4, 0b1001).not(), 0b0110);
        let x = bv(16, 0b1111000011110000);
        assert_eq!(!&x, 0b0000111100001111);
        assert_eq!((!x).width(), 16);
    }

    #[test]
    fn test_std_bitwise_ops() {
        let x = bv(8, 0b11001100);
        let y = bv(4, 0b1010);
        let (rx, ry) = (&x, &y);
        assert_eq!(rx & ry, 0b1000);
        assert_eq!((x | y).width(), 8);
        assert_eq!(x ^ y, 0b11000110);
        assert_eq!(&x << 4u32, 0b11000000);
        assert_eq!(&x >> &y, 0);
        assert_eq!(&x >> 2u32, 0b110011);
    }

    #[test]
    fn test_operand_literal() {
        let x = bv(4, -2);
        assert_eq!(Operand::from(&x).literal(), Literal::from(14));
        assert_eq!(Operand::from(-2).literal(), Literal::from(-2));
    }
}
