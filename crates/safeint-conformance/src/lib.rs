//! Conformance fixtures and verification tooling for the safeint library.
//!
//! This crate provides:
//! - Fixture model: JSON-encoded input values and expected outputs, including
//!   the categories JSON cannot express directly (NaN, infinities,
//!   `undefined`, callables)
//! - Runner: execute fixture cases against the library and compare canonical
//!   renderings
//! - Reports: human-readable summary plus machine-readable JSONL results
//!
//! The `conformance` binary drives fixture verification from the command
//! line; the shipped `fixtures/*.json` files are the reference vectors.

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod report;
pub mod runner;

pub use fixtures::{EncodedValue, FixtureCase, FixtureSet, Operation, ValueOfSpec};
pub use report::{Outcome, ResultLine, SuiteReport};
pub use runner::{CaseError, TestRunner, VerificationResult, execute_case};
