//! Decoding of raw fuzz input into a structured test vector.

use crate::curve::{bit_len_from_tls_id, byte_ceil};

/// One decoded fuzz input, borrowed read-only from the raw buffer.
///
/// The layout of the raw buffer is: two big-endian bytes of TLS group
/// identifier, then two concatenated variable-length big-endian
/// integers. The combined integer length is capped at twice the
/// curve's coordinate width, so adapter work stays bounded no matter
/// how large the fuzzing engine's buffer grows.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TestVector<'a> {
    /// TLS named-group identifier of the curve under test.
    pub tls_id: u16,

    /// Bit length of the curve's base field, resolved from the registry.
    pub group_bit_len: usize,

    /// First operand: the multiplying scalar, as a raw big-endian
    /// integer (possibly empty, meaning zero).
    pub num_a: &'a [u8],

    /// Second operand: selects the input point as the multiple
    /// `[num_b]G` of the curve's standard generator (possibly empty,
    /// meaning zero and therefore the point at infinity).
    pub num_b: &'a [u8],
}

impl<'a> TestVector<'a> {
    /// Decodes a raw fuzz buffer.
    ///
    /// Returns `None` when the input should be skipped: shorter than
    /// the minimum shape (two identifier bytes plus one byte for each
    /// integer), or naming a curve outside the registry. A skip is a
    /// routine non-finding, never an error.
    ///
    /// Excess bytes beyond `2 * byte_ceil(bits)` are discarded
    /// silently. The remainder splits at its midpoint, with the odd
    /// byte (if any) going to `num_b`. Empty operands are preserved
    /// as-is; classifying them is the backends' business.
    pub fn decode(data: &'a [u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        let tls_id = u16::from_be_bytes([data[0], data[1]]);
        let group_bit_len = bit_len_from_tls_id(tls_id)?;

        let mut remaining = &data[2..];
        let cap = 2 * byte_ceil(group_bit_len);
        if remaining.len() > cap {
            remaining = &remaining[..cap];
        }

        let (num_a, num_b) = remaining.split_at(remaining.len() / 2);

        Some(Self {
            tls_id,
            group_bit_len,
            num_a,
            num_b,
        })
    }

    /// Canonical coordinate width for this curve, in bytes.
    pub fn field_len(&self) -> usize {
        byte_ceil(self.group_bit_len)
    }
}
