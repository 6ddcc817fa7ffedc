//! The capability contract every backend adapter implements, and the
//! fixed registry of shipped adapters.
//!
//! A backend is an opaque elliptic curve implementation wrapped behind
//! [`Backend::process`]. All backends given the same [`TestVector`]
//! must compute the same nominal operation, so the operand mapping is
//! fixed here once and for all:
//!
//! - `num_b` selects the input point `P = [be(num_b)]G`, where `G` is
//!   the curve's standard generator;
//! - `num_a` is the multiplying scalar, and the result is
//!   `[be(num_a)]P`.
//!
//! Both scalars are raw big-endian bit strings, processed MSB-first
//! with the backend's own group doubling and addition. No modular
//! reduction convention is involved, so two correct implementations of
//! the same group cannot disagree. An empty operand is the integer
//! zero and yields the point at infinity.

use core::fmt;

use crate::encoding::CanonicalPoint;
use crate::vector::TestVector;

pub mod crrl;
pub mod rustcrypto;

/// An internal backend fault: allocation failure, serialization
/// failure, or an arithmetic domain error the backend could not
/// express as a point. Distinct from "unsupported", and always fatal
/// to the run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BackendError {
    reason: &'static str,
}

impl BackendError {
    /// Creates an error with a static description of the fault.
    pub fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason)
    }
}

impl std::error::Error for BackendError {}

/// Outcome of one backend invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendResult {
    /// The backend computed the operation; the canonical encoding of
    /// the resulting point.
    Point(CanonicalPoint),

    /// The backend does not implement the requested curve. Routine;
    /// excluded from comparison and never escalated.
    Unsupported,

    /// The backend faulted on a vector it did not reject as
    /// unsupported. Always a finding.
    Error(BackendError),
}

/// One pluggable backend adapter.
pub trait Backend: Sync {
    /// Stable identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Runs the nominal scalar multiplication (see module docs for the
    /// operand mapping) and returns the canonically encoded result.
    fn process(&self, vector: &TestVector<'_>) -> BackendResult;

    /// Optional capability: adds the two points `[be(num_a)]G` and
    /// `[be(num_b)]G`. Not exercised by the comparison loop; adapters
    /// exposing it must apply the same classification and encoding
    /// rules as [`Backend::process`].
    fn add_points(&self, vector: &TestVector<'_>) -> BackendResult {
        let _ = vector;
        BackendResult::Unsupported
    }
}

/// The fixed, ordered adapter registry.
///
/// Built statically before any input is processed and never mutated.
/// Order only affects which adapter a diagnostic names first.
pub fn all() -> &'static [&'static dyn Backend] {
    static BACKENDS: [&dyn Backend; 2] =
        [&rustcrypto::RustCryptoBackend, &crrl::CrrlBackend];
    &BACKENDS
}
