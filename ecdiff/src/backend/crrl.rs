//! Adapter over the crrl curve implementations.
//!
//! crrl implements each curve as a standalone module with its own
//! `Point` type and no shared trait surface, so the per-curve glue is
//! stamped out by a macro. Coordinates come back as little-endian
//! field elements; they are byte-swapped and funneled through
//! [`CanonicalPoint::from_affine_coordinates`], which owns the
//! fixed-width zero-padding rules.

use crate::backend::{Backend, BackendError, BackendResult};
use crate::encoding::CanonicalPoint;
use crate::vector::TestVector;

/// The crrl backend family (secp256k1, p256) behind one adapter.
#[derive(Copy, Clone, Debug, Default)]
pub struct CrrlBackend;

fn swap32(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes.reverse();
    bytes
}

macro_rules! crrl_curve {
    ($name:ident, $($seg:ident)::+) => {
        mod $name {
            use super::*;
            use ::$($seg)::+ as curve;

            /// Multiplies `base` by the big-endian bit string `exp`,
            /// MSB first. An empty `exp` yields the neutral.
            fn mul_bits(base: &curve::Point, exp: &[u8]) -> curve::Point {
                let mut acc = curve::Point::NEUTRAL;
                for byte in exp {
                    for shift in (0..8).rev() {
                        acc = acc.double();
                        if (byte >> shift) & 1 != 0 {
                            acc += base;
                        }
                    }
                }
                acc
            }

            fn encode(point: curve::Point, field_len: usize) -> BackendResult {
                if point.isneutral() != 0 {
                    return BackendResult::Point(CanonicalPoint::infinity());
                }
                let (x, y, ok) = point.to_affine();
                if ok == 0 {
                    return BackendResult::Error(BackendError::new(
                        "no affine coordinates for a finite point",
                    ));
                }
                let x = swap32(x.encode());
                let y = swap32(y.encode());
                match CanonicalPoint::from_affine_coordinates(&x, &y, field_len) {
                    Ok(canonical) => BackendResult::Point(canonical),
                    Err(_) => BackendResult::Error(BackendError::new(
                        "coordinate wider than the canonical field",
                    )),
                }
            }

            pub(super) fn process(vector: &TestVector<'_>) -> BackendResult {
                let base = mul_bits(&curve::Point::BASE, vector.num_b);
                let point = mul_bits(&base, vector.num_a);
                encode(point, vector.field_len())
            }

            pub(super) fn add_points(vector: &TestVector<'_>) -> BackendResult {
                let sum = mul_bits(&curve::Point::BASE, vector.num_a)
                    + mul_bits(&curve::Point::BASE, vector.num_b);
                encode(sum, vector.field_len())
            }
        }
    };
}

crrl_curve!(secp256k1, crrl::secp256k1);
crrl_curve!(nistp256, crrl::p256);

impl Backend for CrrlBackend {
    fn name(&self) -> &'static str {
        "crrl"
    }

    fn process(&self, vector: &TestVector<'_>) -> BackendResult {
        match vector.tls_id {
            22 => secp256k1::process(vector),
            23 => nistp256::process(vector),
            _ => BackendResult::Unsupported,
        }
    }

    fn add_points(&self, vector: &TestVector<'_>) -> BackendResult {
        match vector.tls_id {
            22 => secp256k1::add_points(vector),
            23 => nistp256::add_points(vector),
            _ => BackendResult::Unsupported,
        }
    }
}
