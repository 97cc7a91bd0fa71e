// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

mod arithmetic;
mod functions;
mod io;
mod literal;
mod ops;
mod owned;
mod width;

pub use arithmetic::mask;
pub use functions::*;
pub use literal::Literal;
pub use ops::{BinOp, Operand};
pub use owned::BitVecValue;
pub use width::{width_descriptor, WidthDescriptor};
