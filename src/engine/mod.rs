//! The rule engine: evaluates one request against a shared, immutable
//! [`RuleTable`] and assembles a ranked, deduplicated [`AnalysisResult`].
//!
//! Pipeline per request:
//! `received → constraintsParsed → rulesEvaluated → deduplicated → ranked →
//! severityAssigned → complexityAttached → returned`.
//!
//! The engine holds no per-request state. A single [`RuleEngine`] can be
//! cloned cheaply and shared across threads; [`RuleEngine::analyze_batch`]
//! does exactly that with rayon.

pub mod ranking;

use crate::complexity::markers::CodeMarkers;
use crate::complexity::space::space_from_markers;
use crate::complexity::time::time_from_markers;
use crate::constraints::parse_constraints;
use crate::core::{AnalysisRequest, AnalysisResult, Result};
use crate::rules::predicate::RuleContext;
use crate::rules::{CompiledRule, RuleTable};
use ranking::{fallback_finding, partition, rank, to_finding, Candidate};
use rayon::prelude::*;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Once};
use tracing::{debug, debug_span, trace, warn};

pub use ranking::MAX_SECONDARY_FINDINGS;

#[derive(Debug, Clone)]
pub struct RuleEngine {
    table: Arc<RuleTable>,
}

impl RuleEngine {
    pub fn new(table: RuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Engine over the standard catalog.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(RuleTable::standard()?))
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Analyze one request.
    ///
    /// Requests are expected to be validated by the caller (see
    /// [`AnalysisRequest::validate`]); the engine itself never fails and
    /// always returns at least one finding.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let span = debug_span!(
            "analyze",
            error_type = %request.error_type,
            language = %request.language
        );
        let _guard = span.enter();
        trace!(bytes = request.code.len(), "received");

        let constraints = parse_constraints(request.constraints_text());
        trace!(size = %constraints.size, "constraintsParsed");

        let ctx = RuleContext::new(request, &constraints);
        let mut faulted_rules = Vec::new();
        let candidates: Vec<Candidate<'_>> = self
            .table
            .for_error_type(request.error_type)
            .filter_map(|rule| match evaluate_isolated(rule, &ctx) {
                Ok(Some(priority)) => {
                    debug!(rule = %rule.id, priority, "rule matched");
                    Some(Candidate { rule, priority })
                }
                Ok(None) => None,
                Err(()) => {
                    faulted_rules.push(rule.id.clone());
                    None
                }
            })
            .collect();
        trace!(matched = candidates.len(), "rulesEvaluated");

        let ranked = rank(candidates);
        trace!(unique = ranked.len(), "deduplicated");

        let markers = CodeMarkers::scan(&request.code);
        let time_complexity = time_from_markers(&markers);
        let space_complexity = space_from_markers(&markers);

        let (primary_finding, secondary_findings) = match partition(&ranked) {
            Some((primary, secondary)) => {
                trace!(primary = %primary.rule.id, secondary = secondary.len(), "ranked");
                let primary = to_finding(&primary, request.error_type);
                let secondary = secondary
                    .iter()
                    .map(|candidate| to_finding(candidate, request.error_type))
                    .collect();
                (primary, secondary)
            }
            None => {
                trace!("no rule matched");
                (fallback_finding(request.error_type, time_complexity), Vec::new())
            }
        };
        trace!(severity = %primary_finding.severity, "severityAssigned");
        trace!(time = %time_complexity, space = %space_complexity, "complexityAttached");

        let result = AnalysisResult {
            primary_finding,
            secondary_findings,
            time_complexity,
            space_complexity,
            error_type: request.error_type,
            faulted_rules,
        };
        trace!(primary = %result.primary_finding.id, "returned");
        result
    }

    /// Analyze many requests in parallel. Output order equals input order.
    pub fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<AnalysisResult> {
        requests
            .par_iter()
            .map(|request| self.analyze(request))
            .collect()
    }
}

thread_local! {
    static EVALUATING_RULE: Cell<bool> = const { Cell::new(false) };
}

static QUIET_RULE_PANICS: Once = Once::new();

/// Wrap the process panic hook once so panics raised inside a rule predicate
/// are reported through `warn!` only. Panics anywhere else, on any thread,
/// still reach the previous hook unchanged.
fn install_quiet_rule_panic_hook() {
    QUIET_RULE_PANICS.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !EVALUATING_RULE.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Evaluate one rule, turning a panicking predicate into `Err(())` so the
/// rest of the table still runs.
fn evaluate_isolated(rule: &CompiledRule, ctx: &RuleContext<'_>) -> std::result::Result<Option<u8>, ()> {
    install_quiet_rule_panic_hook();
    EVALUATING_RULE.with(|flag| flag.set(true));
    let outcome = catch_unwind(AssertUnwindSafe(|| rule.evaluate(ctx)));
    EVALUATING_RULE.with(|flag| flag.set(false));

    outcome.map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        warn!(rule = %rule.id, %message, "rule predicate panicked; skipping rule");
    })
}
