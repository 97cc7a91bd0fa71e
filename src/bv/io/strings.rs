// Copyright 2023-2024 The Regents of the University of California
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@berkeley.edu>
//
// Fixed width textual rendering. All digits are zero padded to a width that only depends on
// the bit-width of the value.

use crate::{BitVecValue, Word};
use std::fmt::{self, Formatter, Write};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Radix {
    Bin,
    Oct,
    Hex,
}

impl Radix {
    fn prefix(self) -> &'static str {
        match self {
            Radix::Bin => "0b",
            Radix::Oct => "0o",
            Radix::Hex => "0x",
        }
    }

    /// Number of digits a value is padded to.
    fn digits(self, value: &BitVecValue) -> usize {
        match self {
            Radix::Bin => value.width() as usize,
            Radix::Oct => value.descriptor().oct_chars(),
            Radix::Hex => value.descriptor().hex_chars(),
        }
    }
}

fn write_digits(
    out: &mut impl Write,
    value: &BitVecValue,
    radix: Radix,
    upper: bool,
) -> fmt::Result {
    let bits: Word = value.as_unsigned();
    let width = radix.digits(value);
    match (radix, upper) {
        (Radix::Bin, _) => write!(out, "{bits:0width$b}"),
        (Radix::Oct, _) => write!(out, "{bits:0width$o}"),
        (Radix::Hex, false) => write!(out, "{bits:0width$x}"),
        (Radix::Hex, true) => write!(out, "{bits:0width$X}"),
    }
}

fn to_prefixed_str(value: &BitVecValue, radix: Radix) -> String {
    let mut out = String::with_capacity(radix.digits(value) + 2);
    out.push_str(radix.prefix());
    // writing into a string cannot fail
    let _ = write_digits(&mut out, value, radix, false);
    out
}

impl BitVecValue {
    /// `0b` followed by exactly `width` binary digits.
    pub fn to_bin_str(&self) -> String {
        to_prefixed_str(self, Radix::Bin)
    }

    /// `0o` followed by octal digits, zero padded to `(width - 1) / 2 + 1` digits.
    pub fn to_oct_str(&self) -> String {
        to_prefixed_str(self, Radix::Oct)
    }

    /// `0x` followed by hex digits, zero padded to `(width - 1) / 4 + 1` digits.
    pub fn to_hex_str(&self) -> String {
        to_prefixed_str(self, Radix::Hex)
    }
}

/// Zero padded hex digits without a prefix.
impl fmt::Display for BitVecValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_digits(f, self, Radix::Hex, false)
    }
}

impl fmt::Debug for BitVecValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitVecValue({}, {})", self.width(), self.to_hex_str())
    }
}

macro_rules! impl_radix_fmt {
    ($trait:ident, $radix:expr, $upper:expr) => {
        impl fmt::$trait for BitVecValue {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    f.write_str($radix.prefix())?;
                }
                write_digits(f, self, $radix, $upper)
            }
        }
    };
}

impl_radix_fmt!(Binary, Radix::Bin, false);
impl_radix_fmt!(Octal, Radix::Oct, false);
impl_radix_fmt!(LowerHex, Radix::Hex, false);
impl_radix_fmt!(UpperHex, Radix::Hex, true);
