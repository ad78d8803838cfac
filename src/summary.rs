//! Roll-up of one [`AnalysisResult`] for reports and batch output.

use crate::core::{AnalysisResult, ErrorType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Points deducted per diagnostic finding.
const PENALTY_PER_FINDING: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub has_errors: bool,
    pub error_types: Vec<ErrorType>,
    /// `100 - 10 × findings`, floored at zero. The fallback does not count.
    pub score: u32,
}

impl AnalysisSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let diagnostic: Vec<_> = result
            .findings()
            .filter(|finding| !finding.is_fallback())
            .collect();
        let error_types: BTreeSet<_> = diagnostic.iter().map(|finding| finding.error_type).collect();
        let penalty = u32::try_from(diagnostic.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(PENALTY_PER_FINDING);

        Self {
            has_errors: !result.is_fallback(),
            error_types: error_types.into_iter().collect(),
            score: 100u32.saturating_sub(penalty),
        }
    }
}
