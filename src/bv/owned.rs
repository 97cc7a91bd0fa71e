// Copyright 2023-2024 The Regents of the University of California
// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::bv::arithmetic;
use crate::bv::width::BIT;
use crate::{
    width_descriptor, Error, Literal, Operand, Result, SignedWord, WidthDescriptor, WidthInt, Word,
};
use std::hash::{Hash, Hasher};
use std::ops::{Bound, RangeBounds};

/// A bit-vector value with a fixed width.
///
/// The value is stored as an unsigned integer which is always masked to the width.
/// Equality, ordering and hashing only look at that unsigned value, the width is ignored.
#[derive(Clone, Copy)]
pub struct BitVecValue {
    width: &'static WidthDescriptor,
    bits: Word,
}

impl BitVecValue {
    /// Range checked constructor. Accepts plain integers in
    /// `[signed_min, signed_max]` as well as other bit-vector values, which are
    /// reinterpreted through their unsigned value.
    pub fn new<'a>(width: WidthInt, value: impl Into<Operand<'a>>) -> Result<Self> {
        Self::with_descriptor(width_descriptor(width)?, value, false)
    }

    /// Like [`BitVecValue::new`] but drops all bits that do not fit instead of failing.
    pub fn truncated<'a>(width: WidthInt, value: impl Into<Operand<'a>>) -> Result<Self> {
        Self::with_descriptor(width_descriptor(width)?, value, true)
    }

    pub fn with_descriptor<'a>(
        width: &'static WidthDescriptor,
        value: impl Into<Operand<'a>>,
        truncate: bool,
    ) -> Result<Self> {
        let bits = encode(width, value.into().literal(), truncate)?;
        Ok(Self { width, bits })
    }

    pub fn zero(width: WidthInt) -> Result<Self> {
        Ok(Self::wrapped(width_descriptor(width)?, 0))
    }

    pub fn ones(width: WidthInt) -> Result<Self> {
        Ok(Self::wrapped(width_descriptor(width)?, Word::MAX))
    }

    #[inline]
    pub fn tru() -> Self {
        Self::from_bool(true)
    }

    pub fn fals() -> Self {
        Self::from_bool(false)
    }

    pub fn from_bool(value: bool) -> Self {
        Self {
            width: &BIT,
            bits: value as Word,
        }
    }

    /// Masks `value` to the width of `width`. This is the overflow path used by operators.
    #[inline]
    pub(crate) fn wrapped(width: &'static WidthDescriptor, value: Word) -> Self {
        Self {
            width,
            bits: value & width.mask(),
        }
    }

    /// Like [`BitVecValue::wrapped`] for an inferred result width which may be unsupported.
    #[inline]
    pub(crate) fn wrapped_to(width: WidthInt, value: Word) -> Result<Self> {
        Ok(Self::wrapped(width_descriptor(width)?, value))
    }

    pub fn width(&self) -> WidthInt {
        self.width.nbits()
    }

    pub fn descriptor(&self) -> &'static WidthDescriptor {
        self.width
    }

    /// Returns `true` iff both values share the same width descriptor.
    pub fn same_width(&self, other: &Self) -> bool {
        std::ptr::eq(self.width, other.width)
    }

    pub fn as_unsigned(&self) -> Word {
        self.bits
    }

    /// Interprets the bits as a two's complement integer.
    pub fn as_signed(&self) -> SignedWord {
        arithmetic::to_signed(self.bits, self.width())
    }

    /// Number of bits needed to write the unsigned value in plain binary.
    pub fn minimum_bits_needed(&self) -> WidthInt {
        Literal::from(self.bits).bit_length()
    }

    /// Returns the value as a 64-bit unsigned integer if it can be represented.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.bits).ok()
    }

    /// Returns the signed value as a 64-bit integer if it can be represented.
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.as_signed()).ok()
    }

    /// Truthiness: any bit set.
    pub fn is_nonzero(&self) -> bool {
        self.bits != 0
    }

    pub fn is_zero(&self) -> bool {
        self.bits == 0
    }

    pub fn is_negative(&self) -> bool {
        arithmetic::is_neg(self.bits, self.width())
    }

    /// Returns `false` for positions outside the value.
    pub fn is_bit_set(&self, pos: WidthInt) -> bool {
        arithmetic::is_bit_set(self.bits, pos)
    }

    /// Reads a single bit as a 1-bit value.
    pub fn get_bit<'a>(&self, index: impl Into<Operand<'a>>) -> Result<Self> {
        let pos = self.bit_index(index.into().literal())?;
        Ok(Self::from_bool(self.is_bit_set(pos)))
    }

    /// Assigns `0` or `1` to a single bit.
    pub fn set_bit<'a, 'b>(
        &mut self,
        index: impl Into<Operand<'a>>,
        value: impl Into<Operand<'b>>,
    ) -> Result<()> {
        let pos = self.bit_index(index.into().literal())?;
        let value = value.into().literal();
        self.bits = match value.to_u128() {
            Some(0) => arithmetic::clear_bit(self.bits, pos),
            Some(1) => arithmetic::set_bit(self.bits, pos),
            _ => return Err(Error::ValueOutOfRange(value)),
        };
        Ok(())
    }

    fn bit_index(&self, index: Literal) -> Result<WidthInt> {
        match index.to_u128() {
            Some(pos) if pos < self.width() as Word => Ok(pos as WidthInt),
            _ => Err(Error::IndexOutOfRange {
                index,
                width: self.width(),
            }),
        }
    }

    /// Reads the half-open bit range `[start, stop)`. A missing `start` means `0`, a missing
    /// `stop` means the full width. Without any bounds a copy is returned.
    ///
    /// Bounds may be plain integers or other bit-vector values, e.g.
    /// `value.get_slice(Some((&index).into()), None)`.
    pub fn get_slice<'a>(
        &self,
        start: Option<Operand<'a>>,
        stop: Option<Operand<'a>>,
    ) -> Result<Self> {
        if start.is_none() && stop.is_none() {
            return Ok(*self);
        }
        let (start, stop) = self.slice_bounds(start, stop)?;
        Self::wrapped_to(stop - start, arithmetic::slice(self.bits, start, stop))
    }

    /// Writes the half-open bit range `[start, stop)`, leaving all other bits untouched.
    ///
    /// Without any bounds the whole value is replaced, using the same range check as
    /// [`BitVecValue::new`]. Otherwise the value must fit into `stop - start` bits.
    pub fn set_slice<'a, 'b>(
        &mut self,
        start: Option<Operand<'a>>,
        stop: Option<Operand<'a>>,
        value: impl Into<Operand<'b>>,
    ) -> Result<()> {
        let value = value.into().literal();
        if start.is_none() && stop.is_none() {
            self.bits = encode(self.width, value, false)?;
            return Ok(());
        }
        let (start, stop) = self.slice_bounds(start, stop)?;
        let needed = value.bits_needed();
        if needed > stop - start {
            return Err(Error::ValueTooWideForSlice {
                start,
                stop,
                value,
                needed,
            });
        }
        self.bits = arithmetic::assign_slice(self.bits, start, stop, value.to_word_wrapping());
        Ok(())
    }

    /// [`BitVecValue::get_slice`] for a range, e.g. `value.slice(2..4)`.
    pub fn slice(&self, range: impl RangeBounds<WidthInt>) -> Result<Self> {
        let (start, stop) = range_to_bounds(range);
        self.get_slice(start.map(Operand::from), stop.map(Operand::from))
    }

    /// [`BitVecValue::set_slice`] for a range, e.g. `value.assign_slice(.., 5)`.
    pub fn assign_slice<'a>(
        &mut self,
        range: impl RangeBounds<WidthInt>,
        value: impl Into<Operand<'a>>,
    ) -> Result<()> {
        let (start, stop) = range_to_bounds(range);
        self.set_slice(start.map(Operand::from), stop.map(Operand::from), value)
    }

    fn slice_bounds(
        &self,
        start: Option<Operand>,
        stop: Option<Operand>,
    ) -> Result<(WidthInt, WidthInt)> {
        let width = self.width();
        let start = start.map_or(Literal::ZERO, |s| s.literal());
        let stop = stop.map_or(Literal::from(width), |s| s.literal());
        match (start.to_u128(), stop.to_u128()) {
            (Some(lo), Some(hi)) if lo < hi && hi <= width as Word => {
                Ok((lo as WidthInt, hi as WidthInt))
            }
            _ => Err(Error::InvalidSlice { start, stop, width }),
        }
    }
}

/// Range check (unless truncating) and two's complement encoding of a literal.
fn encode(width: &WidthDescriptor, value: Literal, truncate: bool) -> Result<Word> {
    if !truncate {
        let fits = if value.is_negative() {
            value.magnitude() <= width.signed_min().unsigned_abs()
        } else {
            value.magnitude() <= width.signed_max()
        };
        if !fits {
            return Err(Error::OutOfRange {
                width: width.nbits(),
                value,
                needed: value.bits_needed(),
            });
        }
    }
    Ok(value.to_word_wrapping() & width.mask())
}

/// Converts a range into optional `[start, stop)` bounds.
fn range_to_bounds(range: impl RangeBounds<WidthInt>) -> (Option<WidthInt>, Option<WidthInt>) {
    let start = match range.start_bound() {
        Bound::Included(&s) => Some(s),
        Bound::Excluded(&s) => Some(s.saturating_add(1)),
        Bound::Unbounded => None,
    };
    let stop = match range.end_bound() {
        Bound::Included(&e) => Some(e.saturating_add(1)),
        Bound::Excluded(&e) => Some(e),
        Bound::Unbounded => None,
    };
    (start, stop)
}

impl PartialEq for BitVecValue {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for BitVecValue {}

impl Hash for BitVecValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl PartialOrd for BitVecValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitVecValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bits.cmp(&other.bits)
    }
}

macro_rules! impl_eq_unsigned {
    ($($ty:ty),*) => {
        $(impl PartialEq<$ty> for BitVecValue {
            fn eq(&self, other: &$ty) -> bool {
                self.bits == *other as Word
            }
        })*
    };
}

// A negative integer is never equal to the unsigned value.
macro_rules! impl_eq_signed {
    ($($ty:ty),*) => {
        $(impl PartialEq<$ty> for BitVecValue {
            fn eq(&self, other: &$ty) -> bool {
                Word::try_from(*other).is_ok_and(|other| self.bits == other)
            }
        })*
    };
}

impl_eq_unsigned!(u8, u16, u32, u64, u128, usize);
impl_eq_signed!(i8, i16, i32, i64, i128, isize);

impl From<bool> for BitVecValue {
    fn from(value: bool) -> Self {
        BitVecValue::from_bool(value)
    }
}

impl From<&BitVecValue> for Word {
    fn from(value: &BitVecValue) -> Self {
        value.as_unsigned()
    }
}
