//! Dispatcher and differential comparator.
//!
//! One call per fuzz input: decode the buffer, fan the vector out to
//! every registered backend in order, then reconcile the results.
//! Backends that error on a vector they did not reject as unsupported
//! are findings in their own right; so is any byte-level disagreement
//! between two backends that both succeeded. Everything else is a
//! neutral outcome.
//!
//! The verdict is a pure function of the input bytes and the registry
//! order: no randomness, no I/O.

use core::fmt;

use crate::backend::{Backend, BackendError, BackendResult};
use crate::encoding::CanonicalPoint;
use crate::vector::TestVector;

/// Neutral outcome of one run. None of these are findings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The input was too short or named a curve outside the registry;
    /// no backend was invoked.
    Skipped,

    /// Fewer than two backends support the curve, so there was nothing
    /// to cross-check. Expected and frequent.
    NoComparison {
        /// Number of backends that produced a point.
        supported: usize,
    },

    /// Two or more backends produced byte-identical points.
    Agreement {
        /// Number of backends whose results were compared.
        compared: usize,
    },
}

/// A positive finding: a correctness bug in at least one backend under
/// test. The fuzz entry point turns this into abnormal termination so
/// the driving engine retains the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Finding {
    /// A backend reported an internal error instead of a point or
    /// `Unsupported`.
    BackendFailure {
        /// Name of the failing backend.
        backend: &'static str,
        /// The normalized fault.
        error: BackendError,
    },

    /// Two succeeding backends produced encodings of different length.
    LengthMismatch {
        /// Backend whose result is the comparison reference.
        reference: &'static str,
        /// Backend that disagreed.
        other: &'static str,
        /// Index of the operation whose results diverged.
        index: usize,
        /// Encoded length from the reference backend.
        reference_len: usize,
        /// Encoded length from the disagreeing backend.
        other_len: usize,
    },

    /// Two succeeding backends produced same-length encodings that
    /// differ in content.
    PointMismatch {
        /// Backend whose result is the comparison reference.
        reference: &'static str,
        /// Backend that disagreed.
        other: &'static str,
        /// Index of the operation whose results diverged.
        index: usize,
        /// Point bytes from the reference backend.
        reference_point: CanonicalPoint,
        /// Point bytes from the disagreeing backend.
        other_point: CanonicalPoint,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendFailure { backend, error } => {
                write!(f, "backend {} failed: {}", backend, error)
            }
            Self::LengthMismatch {
                reference,
                other,
                index,
                reference_len,
                other_len,
            } => write!(
                f,
                "backends {} and {} returned different lengths for point {}: {} vs {}",
                reference, other, index, reference_len, other_len
            ),
            Self::PointMismatch {
                reference,
                other,
                index,
                reference_point,
                other_point,
            } => write!(
                f,
                "backends {} and {} returned different points for point {}: {:x} vs {:x}",
                reference, other, index, reference_point, other_point
            ),
        }
    }
}

impl std::error::Error for Finding {}

/// Index of the scalar multiplication result within a backend run.
/// There is a single compared operation today; the index survives in
/// diagnostics so reports stay stable if more operations are compared
/// later.
const SCALAR_MUL_INDEX: usize = 0;

/// Runs one decoded-or-raw input against an explicit backend list.
///
/// Classification follows a strict order: any backend `Error` is fatal
/// immediately, in registry order, regardless of what other backends
/// returned; then the succeeding results are cross-checked against the
/// first of them.
pub fn run_with(
    backends: &[&dyn Backend],
    data: &[u8],
) -> Result<Verdict, Finding> {
    let vector = match TestVector::decode(data) {
        Some(vector) => vector,
        None => return Ok(Verdict::Skipped),
    };

    let mut results: Vec<(&'static str, CanonicalPoint)> = Vec::with_capacity(backends.len());
    for backend in backends {
        match backend.process(&vector) {
            BackendResult::Point(point) => results.push((backend.name(), point)),
            BackendResult::Unsupported => {}
            BackendResult::Error(error) => {
                return Err(Finding::BackendFailure {
                    backend: backend.name(),
                    error,
                });
            }
        }
    }

    if results.len() < 2 {
        return Ok(Verdict::NoComparison {
            supported: results.len(),
        });
    }
    let (reference_name, reference) = (results[0].0, &results[0].1);

    for &(name, ref point) in &results[1..] {
        if point.len() != reference.len() {
            return Err(Finding::LengthMismatch {
                reference: reference_name,
                other: name,
                index: SCALAR_MUL_INDEX,
                reference_len: reference.len(),
                other_len: point.len(),
            });
        }
        if point != reference {
            return Err(Finding::PointMismatch {
                reference: reference_name,
                other: name,
                index: SCALAR_MUL_INDEX,
                reference_point: reference.clone(),
                other_point: point.clone(),
            });
        }
    }

    Ok(Verdict::Agreement {
        compared: results.len(),
    })
}

/// Runs one raw fuzz input against the default backend registry.
pub fn run_input(data: &[u8]) -> Result<Verdict, Finding> {
    run_with(crate::backend::all(), data)
}

/// Entry point for the external fuzzing engine.
///
/// Returns silently on every neutral outcome and panics with the
/// finding's description otherwise; the panic is the deliberate signal
/// that makes the engine classify the input as crash-triggering and
/// keep it.
pub fn fuzz_entry(data: &[u8]) {
    if let Err(finding) = run_input(data) {
        panic!("{}", finding);
    }
}
