//! Canonical point encoding shared by every backend.
//!
//! Byte-equality of two results is only meaningful because every
//! backend emits the same fixed-width form:
//!
//! - point at infinity: exactly one `0x00` byte;
//! - finite point: `0x04`, then the x and y coordinates, each
//!   left-padded with zero bytes to exactly the curve's coordinate
//!   width.
//!
//! This matches the SEC1 uncompressed form the RustCrypto stack emits
//! (`elliptic_curve::sec1::EncodedPoint`, identity included), but the
//! constructors here are the contract itself: backends whose native
//! serialization drops leading zero bytes must come through
//! [`CanonicalPoint::from_affine_coordinates`], which restores them.

use core::fmt;

/// Marker byte of the uncompressed finite-point form.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// A point in the canonical cross-backend wire form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanonicalPoint(Vec<u8>);

/// A backend handed the encoding layer bytes that violate the
/// canonical contract. This is an adapter bug, not a backend bug.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ContractViolation;

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("point bytes violate the canonical encoding contract")
    }
}

impl std::error::Error for ContractViolation {}

impl CanonicalPoint {
    /// The point at infinity: a single zero byte, for every curve.
    pub fn infinity() -> Self {
        Self(vec![0x00])
    }

    /// Builds the canonical form from big-endian affine coordinates.
    ///
    /// `x` and `y` may be minimal-width serializations (leading zero
    /// bytes dropped); they are right-aligned into `field_len`-byte
    /// fields and zero-filled on the left. A coordinate wider than the
    /// field is a contract violation.
    pub fn from_affine_coordinates(
        x: &[u8],
        y: &[u8],
        field_len: usize,
    ) -> Result<Self, ContractViolation> {
        if x.len() > field_len || y.len() > field_len {
            return Err(ContractViolation);
        }

        let mut bytes = vec![0u8; 1 + 2 * field_len];
        bytes[0] = UNCOMPRESSED_TAG;
        bytes[1 + field_len - x.len()..1 + field_len].copy_from_slice(x);
        bytes[1 + 2 * field_len - y.len()..].copy_from_slice(y);
        Ok(Self(bytes))
    }

    /// Validates an already-encoded SEC1 byte string against the
    /// contract for a curve of the given coordinate width.
    ///
    /// Accepts exactly the two canonical shapes: the 1-byte infinity
    /// form, or the tagged uncompressed form of exactly
    /// `1 + 2 * field_len` bytes.
    pub fn from_sec1(bytes: &[u8], field_len: usize) -> Result<Self, ContractViolation> {
        match bytes {
            [0x00] => Ok(Self::infinity()),
            [UNCOMPRESSED_TAG, rest @ ..] if rest.len() == 2 * field_len => {
                Ok(Self(bytes.to_vec()))
            }
            _ => Err(ContractViolation),
        }
    }

    /// Raw canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True iff this is the 1-byte infinity form.
    pub fn is_infinity(&self) -> bool {
        self.0 == [0x00]
    }
}

impl fmt::LowerHex for CanonicalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
