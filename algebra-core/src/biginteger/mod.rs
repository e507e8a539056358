//! Helpers for the arbitrary-precision integers backing every field element.
use crate::{AlgebraError, Result};
use num_bigint::BigUint;
use num_traits::Num;

/// Parses a decimal literal, or a hexadecimal one when prefixed with `0x`.
pub fn parse_biguint(literal: &str) -> Result<BigUint> {
    let literal = literal.trim();
    let parsed = match literal.strip_prefix("0x") {
        Some(hex) => BigUint::from_str_radix(hex, 16),
        None => BigUint::from_str_radix(literal, 10),
    };
    parsed.map_err(|_| AlgebraError::MalformedLiteral)
}

/// Parses a literal from a fixed parameter table.
///
/// # Panics
///
/// Panics if `literal` is malformed. Parameter tables are compiled in, so a
/// malformed entry is a configuration bug that must stop the process.
pub fn biguint_const(literal: &str) -> BigUint {
    match parse_biguint(literal) {
        Ok(value) => value,
        Err(_) => panic!("malformed literal in parameter table: {}", literal),
    }
}

/// Iterates over the bits of `n` from the most significant set bit down to
/// bit zero.
pub fn bits_msb_first(n: &BigUint) -> impl Iterator<Item = bool> + '_ {
    (0..n.bits()).rev().map(move |i| n.bit(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_radixes() {
        assert_eq!(parse_biguint("255").unwrap(), BigUint::from(255u32));
        assert_eq!(parse_biguint("0xff").unwrap(), BigUint::from(255u32));
        assert_eq!(parse_biguint("0xzz"), Err(AlgebraError::MalformedLiteral));
        assert_eq!(parse_biguint("-1"), Err(AlgebraError::MalformedLiteral));
    }

    #[test]
    fn msb_first_bits() {
        let bits: Vec<bool> = bits_msb_first(&BigUint::from(0b1011u32)).collect();
        assert_eq!(bits, vec![true, false, true, true]);
        assert_eq!(bits_msb_first(&BigUint::from(0u32)).count(), 0);
    }
}
