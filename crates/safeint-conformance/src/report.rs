//! Result aggregation and report rendering.
//!
//! Two output shapes, mirroring how the runner's results get consumed:
//! a human-readable text summary with per-failure expected/actual lines,
//! and machine-readable JSONL with one record per case plus a closing
//! campaign summary record.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::runner::VerificationResult;

/// Verification outcome for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical JSONL record for one verified case.
///
/// `expected`/`actual` are carried only on failure so passing runs stay
/// one short line per case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultLine {
    pub event: String,
    pub campaign: String,
    pub case: String,
    pub operation: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl ResultLine {
    #[must_use]
    pub fn from_result(campaign: &str, result: &VerificationResult) -> Self {
        let failing = !result.passed;
        Self {
            event: String::from("case_verified"),
            campaign: campaign.to_string(),
            case: result.case_name.clone(),
            operation: result.operation.clone(),
            outcome: if result.passed {
                Outcome::Pass
            } else {
                Outcome::Fail
            },
            expected: failing.then(|| result.expected.clone()),
            actual: failing.then(|| result.actual.clone()),
        }
    }
}

/// Aggregated outcome of a verification campaign.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Campaign name.
    pub campaign: String,
    /// Total cases executed.
    pub total: usize,
    /// Cases where actual matched expected.
    pub passed: usize,
    /// Cases where it did not.
    pub failed: usize,
    /// Per-case results.
    pub results: Vec<VerificationResult>,
}

impl SuiteReport {
    /// Aggregate raw runner results into a report.
    #[must_use]
    pub fn from_results(campaign: impl Into<String>, results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|result| result.passed).count();
        Self {
            campaign: campaign.into(),
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Human-readable summary, one block per failing case.
    #[must_use]
    pub fn to_text(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "campaign {}: {} total, {} passed, {} failed",
            self.campaign, self.total, self.passed, self.failed
        );
        for result in self.results.iter().filter(|result| !result.passed) {
            let _ = writeln!(out, "FAIL {} ({})", result.case_name, result.operation);
            let _ = writeln!(out, "  expected: {}", result.expected);
            let _ = writeln!(out, "  actual:   {}", result.actual);
        }
        out
    }

    /// Write one JSONL record per case, then a campaign summary record.
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for result in &self.results {
            let line = serde_json::to_string(&ResultLine::from_result(&self.campaign, result))
                .map_err(std::io::Error::other)?;
            writeln!(writer, "{line}")?;
        }
        let summary = serde_json::json!({
            "event": "campaign_complete",
            "campaign": self.campaign,
            "total": self.total,
            "passed": self.passed,
            "failed": self.failed,
        });
        writeln!(writer, "{summary}")
    }
}
