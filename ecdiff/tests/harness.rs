//! Comparator semantics over scripted backends.

use ecdiff::{
    run_with, Backend, BackendError, BackendResult, CanonicalPoint, Finding, TestVector, Verdict,
};

/// Raw input whose vector every scripted backend receives: curve 23
/// with operands [0x01] and [0x02, 0x03].
const INPUT: &[u8] = &[0x00, 0x17, 0x01, 0x02, 0x03];

struct Scripted {
    name: &'static str,
    result: BackendResult,
}

impl Scripted {
    fn point(name: &'static str, sec1: &[u8]) -> Self {
        let field_len = (sec1.len() - 1) / 2;
        Self {
            name,
            result: BackendResult::Point(
                CanonicalPoint::from_sec1(sec1, field_len).unwrap(),
            ),
        }
    }

    fn unsupported(name: &'static str) -> Self {
        Self {
            name,
            result: BackendResult::Unsupported,
        }
    }

    fn error(name: &'static str, reason: &'static str) -> Self {
        Self {
            name,
            result: BackendResult::Error(BackendError::new(reason)),
        }
    }
}

impl Backend for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, _vector: &TestVector<'_>) -> BackendResult {
        self.result.clone()
    }
}

/// A backend that must never be reached.
struct Untouchable;

impl Backend for Untouchable {
    fn name(&self) -> &'static str {
        "untouchable"
    }

    fn process(&self, _vector: &TestVector<'_>) -> BackendResult {
        panic!("backend invoked for an input that should have been skipped");
    }
}

#[test]
fn skipped_inputs_never_reach_a_backend() {
    // Too short, and unknown curve id.
    assert_eq!(run_with(&[&Untouchable], &[0x00]), Ok(Verdict::Skipped));
    assert_eq!(
        run_with(&[&Untouchable], &[0x00, 0x11, 0x01, 0x02]),
        Ok(Verdict::Skipped)
    );
}

#[test]
fn lone_supporter_is_neutral() {
    let a = Scripted::point("a", &[0x04, 1, 2, 3, 4]);
    let b = Scripted::unsupported("b");
    let c = Scripted::unsupported("c");
    assert_eq!(
        run_with(&[&a, &b, &c], INPUT),
        Ok(Verdict::NoComparison { supported: 1 })
    );
}

#[test]
fn no_supporters_is_neutral() {
    let a = Scripted::unsupported("a");
    let b = Scripted::unsupported("b");
    assert_eq!(
        run_with(&[&a, &b], INPUT),
        Ok(Verdict::NoComparison { supported: 0 })
    );
}

#[test]
fn identical_points_agree() {
    let a = Scripted::point("a", &[0x04, 1, 2, 3, 4]);
    let b = Scripted::point("b", &[0x04, 1, 2, 3, 4]);
    let c = Scripted::unsupported("c");
    let d = Scripted::point("d", &[0x04, 1, 2, 3, 4]);
    assert_eq!(
        run_with(&[&a, &b, &c, &d], INPUT),
        Ok(Verdict::Agreement { compared: 3 })
    );
}

#[test]
fn single_flipped_byte_is_a_mismatch_naming_both_backends() {
    let a = Scripted::point("a", &[0x04, 1, 2, 3, 4]);
    let b = Scripted::point("b", &[0x04, 1, 2, 3, 5]);
    let finding = run_with(&[&a, &b], INPUT).unwrap_err();
    match &finding {
        Finding::PointMismatch {
            reference, other, ..
        } => {
            assert_eq!(*reference, "a");
            assert_eq!(*other, "b");
        }
        other => panic!("expected a point mismatch, got {:?}", other),
    }
    let report = finding.to_string();
    assert!(report.contains('a') && report.contains('b'));
    assert!(report.contains("0401020304"));
    assert!(report.contains("0401020305"));
}

#[test]
fn length_divergence_is_reported_as_a_length_mismatch() {
    // One backend claims the point at infinity, the other a finite
    // point: lengths 1 vs 5.
    let a = Scripted::point("a", &[0x00]);
    let b = Scripted::point("b", &[0x04, 1, 2, 3, 4]);
    assert_eq!(
        run_with(&[&a, &b], INPUT),
        Err(Finding::LengthMismatch {
            reference: "a",
            other: "b",
            index: 0,
            reference_len: 1,
            other_len: 5,
        })
    );
}

#[test]
fn backend_error_is_fatal_regardless_of_other_results() {
    let ok1 = Scripted::point("ok1", &[0x04, 1, 2, 3, 4]);
    let ok2 = Scripted::point("ok2", &[0x04, 1, 2, 3, 4]);
    let bad = Scripted::error("bad", "mpi parse failure");

    let finding = run_with(&[&ok1, &bad, &ok2], INPUT).unwrap_err();
    match finding {
        Finding::BackendFailure { backend, .. } => assert_eq!(backend, "bad"),
        other => panic!("expected a backend failure, got {:?}", other),
    }

    // Also fatal when every other backend would have agreed or
    // declined.
    let unsup = Scripted::unsupported("unsup");
    assert!(matches!(
        run_with(&[&unsup, &bad], INPUT),
        Err(Finding::BackendFailure { backend: "bad", .. })
    ));
}

#[test]
fn first_erroring_backend_in_registry_order_is_reported() {
    let bad1 = Scripted::error("bad1", "fault one");
    let bad2 = Scripted::error("bad2", "fault two");
    assert!(matches!(
        run_with(&[&bad1, &bad2], INPUT),
        Err(Finding::BackendFailure {
            backend: "bad1",
            ..
        })
    ));
}

#[test]
fn add_points_defaults_to_unsupported() {
    let a = Scripted::point("a", &[0x04, 1, 2, 3, 4]);
    let vector = TestVector::decode(INPUT).unwrap();
    assert_eq!(a.add_points(&vector), BackendResult::Unsupported);
}
