// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::{BinOp, Literal, WidthInt, MAX_WIDTH};
use thiserror::Error;

/// Every way in which an operation on a bit-vector value can fail.
///
/// Errors are reported at the call that violates a contract. A failed operation never
/// leaves a partially modified value behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A width outside of `1..=MAX_WIDTH` was requested, either directly or as the
    /// inferred result width of an operator.
    #[error("bit-width {0} is not supported, widths must be in 1..={max}", max = MAX_WIDTH)]
    InvalidWidth(WidthInt),

    /// The value does not fit the declared width and truncation was not requested.
    #[error("value {value} is too big to be represented with {width} bits ({needed} bits are needed in two's complement)")]
    OutOfRange {
        width: WidthInt,
        value: Literal,
        needed: WidthInt,
    },

    #[error("bit index {index} out of range [0 - {width})")]
    IndexOutOfRange { index: Literal, width: WidthInt },

    /// Slice bounds violate `start < stop <= width`.
    #[error("slice indices [{start}:{stop}] out of range [0 - {width}]")]
    InvalidSlice {
        start: Literal,
        stop: Literal,
        width: WidthInt,
    },

    #[error("value {value} is too big to fit in slice [{start}:{stop}] ({needed} bits are needed in two's complement)")]
    ValueTooWideForSlice {
        start: WidthInt,
        stop: WidthInt,
        value: Literal,
        needed: WidthInt,
    },

    /// A single bit can only be assigned `0` or `1`.
    #[error("value {0} does not fit in a single bit")]
    ValueOutOfRange(Literal),

    #[error("negative operand {0} is not allowed")]
    NegativeOperandNotAllowed(Literal),

    #[error("unsupported operation `{op}`")]
    UnsupportedOperation { op: BinOp },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid argument {0}")]
    InvalidArgument(Literal),

    /// Zero extension to a width that is smaller than the original.
    #[error("cannot extend a {from}-bit value to {to} bits")]
    NarrowingExtension { from: WidthInt, to: WidthInt },
}

pub type Result<T> = std::result::Result<T, Error>;
