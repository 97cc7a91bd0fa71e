// Copyright 2024 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Interop with num-bigint.

use crate::{BitVecValue, Literal};
use num_bigint::{BigInt, BigUint, Sign};

impl BitVecValue {
    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from(self.as_unsigned())
    }

    /// Two's complement interpretation.
    pub fn to_big_int(&self) -> BigInt {
        BigInt::from(self.as_signed())
    }
}

impl TryFrom<&BigInt> for Literal {
    type Error = ();

    /// Fails if the magnitude needs more than 128 bits.
    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let magnitude = u128::try_from(value.magnitude()).map_err(|_| ())?;
        let negative = value.sign() == Sign::Minus;
        Ok(Literal::from_sign_magnitude(negative, magnitude))
    }
}

impl TryFrom<&BigUint> for Literal {
    type Error = ();

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        u128::try_from(value).map(Literal::from).map_err(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_big_int() {
        let x = BitVecValue::new(4, -3).unwrap();
        assert_eq!(x.to_big_int(), BigInt::from(-3));
        assert_eq!(x.to_big_uint(), BigUint::from(13u32));
    }

    #[test]
    fn test_literal_from_big_int() {
        let min = -(1i128 << 100);
        let lit = Literal::try_from(&BigInt::from(min)).unwrap();
        assert_eq!(BitVecValue::new(101, lit).unwrap().as_signed(), min);
        let lit = Literal::try_from(&-BigInt::from(u128::MAX)).unwrap();
        assert_eq!(lit.bits_needed(), 129);
        assert_eq!(BitVecValue::truncated(8, lit).unwrap(), 1);
        let too_wide = BigInt::from(1) << 130;
        assert!(Literal::try_from(&too_wide).is_err());
    }
}
