// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Fixed-width bit-vector values with Verilog-style width inference.

mod bv;
mod error;

/// This type restricts the maximum width that a bit-vector type is allowed to have.
pub type WidthInt = u32;

/// Storage for the canonical unsigned encoding of a value.
pub type Word = u128;

/// Signed counterpart of [`Word`], used for two's complement readout.
pub type SignedWord = i128;

/// Widest bit-vector that can be represented.
pub const MAX_WIDTH: WidthInt = Word::BITS;

const _: () = assert!(Word::BITS == SignedWord::BITS);

pub use bv::*;
pub use error::{Error, Result};
