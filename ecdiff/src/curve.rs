//! Registry of named curves addressable by their TLS group identifier.

/// A named curve known to the harness.
///
/// `bit_len` is the bit length of the curve's base field, which fixes
/// the width of canonically encoded coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveSpec {
    /// TLS named-group identifier (IANA "TLS Supported Groups").
    pub tls_id: u16,

    /// Bit length of the base field.
    pub bit_len: usize,
}

/// The closed set of curves the harness knows how to describe.
///
/// A backend is free to support any subset of these; an identifier
/// missing from this table is skipped before any backend runs.
/// Extending coverage means adding a row, not new logic.
pub const CURVES: &[CurveSpec] = &[
    CurveSpec { tls_id: 18, bit_len: 192 }, // secp192k1
    CurveSpec { tls_id: 19, bit_len: 192 }, // secp192r1
    CurveSpec { tls_id: 20, bit_len: 224 }, // secp224k1
    CurveSpec { tls_id: 21, bit_len: 224 }, // secp224r1
    CurveSpec { tls_id: 22, bit_len: 256 }, // secp256k1
    CurveSpec { tls_id: 23, bit_len: 256 }, // secp256r1
    CurveSpec { tls_id: 24, bit_len: 384 }, // secp384r1
    CurveSpec { tls_id: 25, bit_len: 521 }, // secp521r1
    CurveSpec { tls_id: 26, bit_len: 256 }, // brainpoolP256r1
    CurveSpec { tls_id: 27, bit_len: 384 }, // brainpoolP384r1
    CurveSpec { tls_id: 28, bit_len: 512 }, // brainpoolP512r1
];

/// Looks up the base field bit length for a TLS group identifier.
///
/// Returns `None` for identifiers outside [`CURVES`].
pub fn bit_len_from_tls_id(tls_id: u16) -> Option<usize> {
    CURVES
        .iter()
        .find(|spec| spec.tls_id == tls_id)
        .map(|spec| spec.bit_len)
}

/// Minimum number of bytes needed to hold a `bits`-bit unsigned value.
pub const fn byte_ceil(bits: usize) -> usize {
    (bits + 7) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(bit_len_from_tls_id(23), Some(256));
        assert_eq!(bit_len_from_tls_id(25), Some(521));
        assert_eq!(bit_len_from_tls_id(28), Some(512));
    }

    #[test]
    fn unknown_ids_do_not_resolve() {
        assert_eq!(bit_len_from_tls_id(0), None);
        assert_eq!(bit_len_from_tls_id(17), None);
        assert_eq!(bit_len_from_tls_id(29), None);
        assert_eq!(bit_len_from_tls_id(u16::MAX), None);
    }

    #[test]
    fn byte_ceil_rounds_up() {
        assert_eq!(byte_ceil(192), 24);
        assert_eq!(byte_ceil(521), 66);
        assert_eq!(byte_ceil(1), 1);
        assert_eq!(byte_ceil(8), 1);
        assert_eq!(byte_ceil(9), 2);
    }
}
