// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// basic bit manipulation on the canonical word encoding

use crate::{Literal, SignedWord, WidthInt, Word};

/// All ones in the `bits` least significant positions.
#[inline]
pub const fn mask(bits: WidthInt) -> Word {
    if bits >= Word::BITS {
        Word::MAX
    } else {
        ((1 as Word) << bits) - 1
    }
}

#[inline]
pub(crate) fn is_neg(value: Word, width: WidthInt) -> bool {
    debug_assert!(width > 0);
    is_bit_set(value, width - 1)
}

/// Two's complement decode: a set msb is extended into all unused bits.
#[inline]
pub(crate) fn to_signed(value: Word, width: WidthInt) -> SignedWord {
    if is_neg(value, width) {
        let extra_sign_bits = !mask(width);
        (value | extra_sign_bits) as SignedWord
    } else {
        value as SignedWord
    }
}

#[inline]
pub(crate) fn is_bit_set(value: Word, pos: WidthInt) -> bool {
    value.checked_shr(pos).is_some_and(|v| v & 1 == 1)
}

#[inline]
pub(crate) fn set_bit(value: Word, pos: WidthInt) -> Word {
    value | (1 << pos)
}

#[inline]
pub(crate) fn clear_bit(value: Word, pos: WidthInt) -> Word {
    value & !(1 << pos)
}

/// Extracts bits `[start, stop)` and moves them to the lsb.
#[inline]
pub(crate) fn slice(value: Word, start: WidthInt, stop: WidthInt) -> Word {
    debug_assert!(start < stop);
    let m = mask(stop - start);
    (value & (m << start)) >> start
}

/// Replaces bits `[start, stop)` of `dst` with the lsbs of `value`.
#[inline]
pub(crate) fn assign_slice(dst: Word, start: WidthInt, stop: WidthInt, value: Word) -> Word {
    debug_assert!(start < stop);
    let ones = mask(stop - start);
    let cleared = dst & !(ones << start);
    cleared | ((value & ones) << start)
}

#[inline]
pub(crate) fn shift_left(value: Word, amount: Word, width: WidthInt) -> Word {
    // shifting by the full width or more leaves nothing behind
    if amount >= width as Word {
        0
    } else {
        (value << amount) & mask(width)
    }
}

#[inline]
pub(crate) fn shift_right(value: Word, amount: Word, width: WidthInt) -> Word {
    if amount >= width as Word {
        0
    } else {
        value >> amount
    }
}

/// Division rounding towards negative infinity. `None` if `b` is zero.
/// The result is returned in two's complement.
#[inline]
pub(crate) fn floor_div(a: Word, b: Literal) -> Option<Word> {
    let divisor = b.magnitude();
    let quotient = a.checked_div(divisor)?;
    if b.is_negative() {
        let rounded = if a % divisor == 0 {
            quotient
        } else {
            quotient + 1
        };
        Some(rounded.wrapping_neg())
    } else {
        Some(quotient)
    }
}

/// Remainder that takes the sign of the divisor. `None` if `b` is zero.
#[inline]
pub(crate) fn floor_mod(a: Word, b: Literal) -> Option<Word> {
    let divisor = b.magnitude();
    let remainder = a.checked_rem(divisor)?;
    if b.is_negative() && remainder != 0 {
        Some(remainder.wrapping_sub(divisor))
    } else {
        Some(remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(1), 1);
        assert_eq!(mask(4), 0b1111);
        assert_eq!(mask(127), u128::MAX >> 1);
        assert_eq!(mask(128), u128::MAX);
    }

    #[test]
    fn test_to_signed() {
        assert_eq!(to_signed(0b1111, 4), -1);
        assert_eq!(to_signed(0b1000, 4), -8);
        assert_eq!(to_signed(0b0111, 4), 7);
        assert_eq!(to_signed(1, 1), -1);
        assert_eq!(to_signed(1 << 127, 128), i128::MIN);
    }

    #[test]
    fn test_slice() {
        assert_eq!(slice(0b1100, 2, 4), 0b11);
        assert_eq!(slice(0b1100, 1, 3), 0b10);
        assert_eq!(slice(u128::MAX, 0, 128), u128::MAX);
        assert_eq!(assign_slice(0b1100, 0, 1, 1), 0b1101);
        assert_eq!(assign_slice(0b1111, 1, 3, 0), 0b1001);
        // only the lsbs of the value are used
        assert_eq!(assign_slice(0, 1, 3, u128::MAX), 0b0110);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift_left(0b1100, 4, 8), 0b1100_0000);
        assert_eq!(shift_left(0b1100, 6, 8), 0);
        assert_eq!(shift_left(0b1100, 8, 8), 0);
        assert_eq!(shift_left(1, 127, 128), 1 << 127);
        assert_eq!(shift_left(1, u128::MAX, 128), 0);
        assert_eq!(shift_right(0b1100_0000, 7, 8), 1);
        assert_eq!(shift_right(0b1100_0000, 300, 8), 0);
    }

    #[test]
    fn test_floor_div_mod() {
        assert_eq!(floor_div(7, Literal::from(2)), Some(3));
        assert_eq!(floor_div(7, Literal::from(-2)), Some((-4i128) as u128));
        assert_eq!(floor_div(6, Literal::from(-2)), Some((-3i128) as u128));
        assert_eq!(floor_div(7, Literal::from(0)), None);
        assert_eq!(floor_mod(7, Literal::from(3)), Some(1));
        assert_eq!(floor_mod(7, Literal::from(-3)), Some((-2i128) as u128));
        assert_eq!(floor_mod(6, Literal::from(-3)), Some(0));
        assert_eq!(floor_mod(6, Literal::from(0)), None);
    }
}
