//! Adapter over the RustCrypto curve crates.
//!
//! Every curve in this family exposes the same `elliptic-curve` trait
//! surface, so one generic routine covers all of them: group
//! arithmetic through `group::Group`, affine conversion through the
//! `CurveArithmetic` bounds, and SEC1 serialization through
//! `sec1::ToEncodedPoint` (which already emits the fixed-width,
//! zero-padded form the contract requires, including the single-byte
//! identity encoding).

use elliptic_curve::group::Group;
use elliptic_curve::sec1::{ModulusSize, ToEncodedPoint};
use elliptic_curve::{CurveArithmetic, FieldBytesSize};

use crate::backend::{Backend, BackendError, BackendResult};
use crate::encoding::CanonicalPoint;
use crate::vector::TestVector;

/// The RustCrypto backend family (p192, p224, secp256k1, p256, p384,
/// p521) behind one adapter.
#[derive(Copy, Clone, Debug, Default)]
pub struct RustCryptoBackend;

/// Multiplies `base` by the big-endian bit string `exp`, MSB first.
///
/// An empty `exp` is zero and yields the identity.
fn mul_bits<G: Group>(base: &G, exp: &[u8]) -> G {
    let mut acc = G::identity();
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

/// Encodes a group element in the canonical form.
fn encode<C>(point: C::ProjectivePoint, field_len: usize) -> BackendResult
where
    C: CurveArithmetic,
    C::AffinePoint: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    if bool::from(point.is_identity()) {
        return BackendResult::Point(CanonicalPoint::infinity());
    }
    let affine: C::AffinePoint = point.into();
    let encoded = affine.to_encoded_point(false);
    match CanonicalPoint::from_sec1(encoded.as_bytes(), field_len) {
        Ok(canonical) => BackendResult::Point(canonical),
        Err(_) => BackendResult::Error(BackendError::new(
            "sec1 serialization does not match the canonical width",
        )),
    }
}

fn process_curve<C>(vector: &TestVector<'_>) -> BackendResult
where
    C: CurveArithmetic,
    C::AffinePoint: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let base = mul_bits(&C::ProjectivePoint::generator(), vector.num_b);
    let point = mul_bits(&base, vector.num_a);
    encode::<C>(point, vector.field_len())
}

fn add_curve<C>(vector: &TestVector<'_>) -> BackendResult
where
    C: CurveArithmetic,
    C::AffinePoint: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let generator = C::ProjectivePoint::generator();
    let sum = mul_bits(&generator, vector.num_a) + mul_bits(&generator, vector.num_b);
    encode::<C>(sum, vector.field_len())
}

impl Backend for RustCryptoBackend {
    fn name(&self) -> &'static str {
        "rustcrypto"
    }

    fn process(&self, vector: &TestVector<'_>) -> BackendResult {
        match vector.tls_id {
            19 => process_curve::<p192::NistP192>(vector),
            21 => process_curve::<p224::NistP224>(vector),
            22 => process_curve::<k256::Secp256k1>(vector),
            23 => process_curve::<p256::NistP256>(vector),
            24 => process_curve::<p384::NistP384>(vector),
            25 => process_curve::<p521::NistP521>(vector),
            _ => BackendResult::Unsupported,
        }
    }

    fn add_points(&self, vector: &TestVector<'_>) -> BackendResult {
        match vector.tls_id {
            19 => add_curve::<p192::NistP192>(vector),
            21 => add_curve::<p224::NistP224>(vector),
            22 => add_curve::<k256::Secp256k1>(vector),
            23 => add_curve::<p256::NistP256>(vector),
            24 => add_curve::<p384::NistP384>(vector),
            25 => add_curve::<p521::NistP521>(vector),
            _ => BackendResult::Unsupported,
        }
    }
}
