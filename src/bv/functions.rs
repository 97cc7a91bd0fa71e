// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Free functions built on top of the public bit-vector interface.

use crate::{BitVecValue, Error, Literal, Result, WidthInt};

/// Number of bits needed to store `value`, including a sign bit for values `<= 0`.
pub fn bits_needed(value: impl Into<Literal>) -> WidthInt {
    value.into().bits_needed()
}

/// Number of bits needed to index into a collection of `count` elements, i.e.
/// `ceil(log2(count))`.
pub fn index_width(count: impl Into<Literal>) -> Result<WidthInt> {
    let count = count.into();
    match count.to_u128() {
        Some(c) if c > 0 => Ok(Literal::from(c - 1).bit_length()),
        _ => Err(Error::InvalidArgument(count)),
    }
}

pub fn width_of(value: &BitVecValue) -> WidthInt {
    value.width()
}

/// Concatenates all values. The first value ends up in the most significant bits.
pub fn concat(values: &[BitVecValue]) -> Result<BitVecValue> {
    let width = values
        .iter()
        .try_fold(0 as WidthInt, |sum, v| sum.checked_add(v.width()))
        .ok_or(Error::InvalidWidth(WidthInt::MAX))?;
    let mut out = BitVecValue::zero(width)?;
    let mut lsb = 0;
    for value in values.iter().rev() {
        out.assign_slice(lsb..lsb + value.width(), value)?;
        lsb += value.width();
    }
    Ok(out)
}

/// Reinterprets the unsigned value at a width that is at least as wide.
pub fn zero_extend(value: &BitVecValue, width: WidthInt) -> Result<BitVecValue> {
    if width < value.width() {
        return Err(Error::NarrowingExtension {
            from: value.width(),
            to: width,
        });
    }
    BitVecValue::new(width, value.as_unsigned())
}

/// Reinterprets the signed value at `width`.
pub fn sign_extend(value: &BitVecValue, width: WidthInt) -> Result<BitVecValue> {
    BitVecValue::new(width, value.as_signed())
}

fn bits_lsb_first(value: &BitVecValue) -> impl DoubleEndedIterator<Item = bool> + '_ {
    (0..value.width()).map(|ii| value.is_bit_set(ii))
}

/// AND of all bits.
pub fn reduce_and(value: &BitVecValue) -> BitVecValue {
    BitVecValue::from_bool(bits_lsb_first(value).fold(true, |acc, b| acc & b))
}

/// OR of all bits.
pub fn reduce_or(value: &BitVecValue) -> BitVecValue {
    BitVecValue::from_bool(bits_lsb_first(value).fold(false, |acc, b| acc | b))
}

/// XOR of all bits, msb first like Verilog.
pub fn reduce_xor(value: &BitVecValue) -> BitVecValue {
    BitVecValue::from_bool(bits_lsb_first(value).rev().fold(false, |acc, b| acc ^ b))
}

impl BitVecValue {
    /// `{self, rhs}`: self ends up in the most significant bits.
    pub fn concat(&self, rhs: &BitVecValue) -> Result<BitVecValue> {
        concat(&[*self, *rhs])
    }

    pub fn zero_extend(&self, width: WidthInt) -> Result<BitVecValue> {
        zero_extend(self, width)
    }

    pub fn sign_extend(&self, width: WidthInt) -> Result<BitVecValue> {
        sign_extend(self, width)
    }
}
