#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]

mod curve;
mod encoding;
mod harness;
mod vector;

pub mod backend;

pub use curve::{bit_len_from_tls_id, byte_ceil, CurveSpec, CURVES};
pub use encoding::{CanonicalPoint, ContractViolation, UNCOMPRESSED_TAG};
pub use harness::{fuzz_entry, run_input, run_with, Finding, Verdict};
pub use vector::TestVector;

pub use backend::{Backend, BackendError, BackendResult};
