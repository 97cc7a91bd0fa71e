// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Process-wide registry of canonical width descriptors.

use crate::bv::arithmetic::mask;
use crate::{Error, Result, SignedWord, WidthInt, Word, MAX_WIDTH};
use dashmap::DashMap;
use std::sync::OnceLock;

/// Constants derived from a bit-width.
///
/// There is exactly one descriptor per width. Descriptors are obtained through
/// [`width_descriptor`] and live for the rest of the program, which makes two values of the
/// same width share the very same descriptor.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct WidthDescriptor {
    nbits: WidthInt,
    mask: Word,
    signed_min: SignedWord,
    signed_max: Word,
    hex_chars: usize,
    oct_chars: usize,
}

impl WidthDescriptor {
    const fn new(nbits: WidthInt) -> Self {
        debug_assert!(nbits > 0 && nbits <= MAX_WIDTH);
        let signed_min = if nbits > 1 {
            // arithmetic shift yields -2^(nbits - 1)
            SignedWord::MIN >> (SignedWord::BITS - nbits)
        } else {
            0
        };
        Self {
            nbits,
            mask: mask(nbits),
            signed_min,
            signed_max: mask(nbits),
            hex_chars: ((nbits - 1) / 4 + 1) as usize,
            // note: this is wider than the number of octal digits strictly needed
            oct_chars: ((nbits - 1) / 2 + 1) as usize,
        }
    }

    pub fn nbits(&self) -> WidthInt {
        self.nbits
    }

    pub fn mask(&self) -> Word {
        self.mask
    }

    /// Smallest value accepted by a range checked constructor.
    pub fn signed_min(&self) -> SignedWord {
        self.signed_min
    }

    /// Largest value accepted by a range checked constructor. This is the unsigned maximum,
    /// so both signed and unsigned literals are accepted.
    pub fn signed_max(&self) -> Word {
        self.signed_max
    }

    pub fn hex_chars(&self) -> usize {
        self.hex_chars
    }

    pub fn oct_chars(&self) -> usize {
        self.oct_chars
    }
}

/// The 1-bit descriptor is needed by every comparison, so it is statically allocated.
pub(crate) static BIT: WidthDescriptor = WidthDescriptor::new(1);

type Registry = DashMap<WidthInt, &'static WidthDescriptor>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let registry = Registry::new();
        registry.insert(1, &BIT);
        registry
    })
}

/// Returns the canonical descriptor for `nbits`, creating it on first use.
/// Descriptors are never evicted.
pub fn width_descriptor(nbits: WidthInt) -> Result<&'static WidthDescriptor> {
    if nbits == 0 || nbits > MAX_WIDTH {
        return Err(Error::InvalidWidth(nbits));
    }
    if let Some(descriptor) = registry().get(&nbits) {
        return Ok(*descriptor);
    }
    // the entry holds the shard lock, so concurrent misses create a single descriptor
    let descriptor: &'static WidthDescriptor = *registry().entry(nbits).or_insert_with(|| {
        log::trace!("creating width descriptor for {nbits} bits");
        Box::leak(Box::new(WidthDescriptor::new(nbits)))
    });
    Ok(descriptor)
}
