//! Fixture execution engine.

use safeint::{
    SafeInteger, as_safe_integer, is_safe_integer, parse_safe_integer, to_safe_integer,
};
use serde::Serialize;
use thiserror::Error;

use crate::fixtures::{EncodedValue, FixtureCase, FixtureSet, Operation};

/// A fixture case that cannot be executed as written.
#[derive(Debug, Error)]
pub enum CaseError {
    /// `parse_safe_integer` takes a string; any other input category is a
    /// fixture authoring mistake, reported as a failing result.
    #[error("parse_safe_integer input must be a string, got {category}")]
    NonStringParseInput { category: &'static str },
}

/// Result of verifying one fixture case.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// Case identifier.
    pub case_name: String,
    /// Operation that was executed.
    pub operation: String,
    /// Whether actual matched expected.
    pub passed: bool,
    /// Expected canonical rendering.
    pub expected: String,
    /// Actual canonical rendering.
    pub actual: String,
}

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the verification campaign.
    pub campaign: String,
    /// Optional substring filter on case names.
    pub filter: Option<String>,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            filter: None,
        }
    }

    /// Restrict the run to cases whose name contains `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .filter(|case| self.matches(&case.name))
            .map(|case| {
                let actual =
                    execute_case(case).unwrap_or_else(|err| format!("unsupported: {err}"));
                VerificationResult {
                    case_name: case.name.clone(),
                    operation: case.operation.name().to_string(),
                    passed: actual == case.expect,
                    expected: case.expect.clone(),
                    actual,
                }
            })
            .collect()
    }

    fn matches(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|filter| name.contains(filter))
    }
}

/// Executes one case and renders its outcome canonically.
pub fn execute_case(case: &FixtureCase) -> Result<String, CaseError> {
    match case.operation {
        Operation::IsSafeInteger => {
            let value = case.input.decode();
            Ok(is_safe_integer(&value).to_string())
        }
        Operation::AsSafeInteger => {
            let value = case.input.decode();
            Ok(render_result(as_safe_integer(&value)))
        }
        Operation::ParseSafeInteger => {
            let EncodedValue::String { value: text } = &case.input else {
                return Err(CaseError::NonStringParseInput {
                    category: case.input.category(),
                });
            };
            Ok(render_result(parse_safe_integer(text, case.radix)))
        }
        Operation::ToSafeInteger => {
            let value = case.input.decode();
            Ok(render_result(to_safe_integer(&value)))
        }
    }
}

/// Canonical rendering of an optional safe integer: decimal digits, or
/// `null` for the absent result.
fn render_result(result: Option<SafeInteger>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => String::from("null"),
    }
}
