//! Candidate ordering, deduplication and primary/secondary partitioning.

use crate::complexity::TimeComplexity;
use crate::core::{Confidence, ErrorType, Finding, NO_RULE_MATCHED};
use crate::rules::CompiledRule;
use std::collections::HashSet;

/// Cap on secondary findings returned alongside the primary one.
pub const MAX_SECONDARY_FINDINGS: usize = 3;

/// A rule that matched, with the priority of its best matching clause.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'t> {
    pub rule: &'t CompiledRule,
    pub priority: u8,
}

/// Sort by priority (descending, stable on table order), then keep the
/// first candidate of each id. The retained instance of an id is therefore
/// always its highest-priority one.
pub fn rank(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    let mut seen = HashSet::new();
    candidates.retain(|candidate| seen.insert(candidate.rule.id.as_str()));
    candidates
}

/// Split ranked candidates into the primary finding and at most
/// [`MAX_SECONDARY_FINDINGS`] secondary ones; the rest are dropped.
pub fn partition<'a, 't>(
    ranked: &'a [Candidate<'t>],
) -> Option<(Candidate<'t>, &'a [Candidate<'t>])> {
    let (primary, rest) = ranked.split_first()?;
    let take = rest.len().min(MAX_SECONDARY_FINDINGS);
    Some((*primary, &rest[..take]))
}

pub fn to_finding(candidate: &Candidate<'_>, error_type: ErrorType) -> Finding {
    let payload = &candidate.rule.payload;
    Finding {
        id: candidate.rule.id.clone(),
        topic: candidate.rule.topic.name().to_string(),
        confidence: payload.confidence,
        reason: payload.reason.clone(),
        fix: payload.fix.clone(),
        suggested_topics: payload.suggested_topics.clone(),
        similar_problems: payload.similar_problems.clone(),
        current_complexity: payload.current_complexity.clone(),
        expected_complexity: payload.expected_complexity.clone(),
        priority: candidate.priority,
        error_type,
        severity: error_type.severity(),
    }
}

/// The finding returned when nothing matched.
pub fn fallback_finding(error_type: ErrorType, time: TimeComplexity) -> Finding {
    Finding {
        id: NO_RULE_MATCHED.to_string(),
        topic: "general".to_string(),
        confidence: Confidence::Low,
        reason: "No known failure pattern matched. The issue may involve logic, constraints, or edge cases."
            .to_string(),
        fix: "Re-evaluate constraints and optimize time or space complexity.".to_string(),
        suggested_topics: vec!["Optimization".to_string(), "Edge Cases".to_string()],
        similar_problems: Vec::new(),
        current_complexity: Some(time.to_string()),
        expected_complexity: Some("Constraint dependent".to_string()),
        priority: 0,
        error_type,
        severity: error_type.severity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::predicate::matches;
    use crate::rules::{DefectKind, Rule, RuleTable, Topic};

    fn table(ids: &[&str]) -> RuleTable {
        RuleTable::builder()
            .with_rules(ids.iter().map(|id| {
                Rule::new(*id, Topic::Custom, DefectKind::Custom)
                    .when(80, ErrorType::WrongAnswer, matches("x"))
                    .explain(Confidence::Medium, "r", "f")
            }))
            .build()
            .unwrap()
    }

    fn candidate(rule: &CompiledRule, priority: u8) -> Candidate<'_> {
        Candidate { rule, priority }
    }

    #[test]
    fn test_rank_orders_by_priority_and_keeps_table_order_on_ties() {
        let table = table(&["A", "B", "C"]);
        let rules = table.rules();
        let ranked = rank(vec![
            candidate(&rules[0], 80),
            candidate(&rules[1], 100),
            candidate(&rules[2], 80),
        ]);
        let ids: Vec<_> = ranked.iter().map(|c| c.rule.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_dedup_retains_highest_priority_instance() {
        let table = table(&["DUP", "OTHER", "DUP"]);
        let rules = table.rules();
        let ranked = rank(vec![
            candidate(&rules[0], 75),
            candidate(&rules[1], 90),
            candidate(&rules[2], 95),
        ]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rule.id, "DUP");
        assert_eq!(ranked[0].priority, 95);
        assert!(std::ptr::eq(ranked[0].rule, &rules[2]));
    }

    #[test]
    fn test_partition_caps_secondary() {
        let table = table(&["A", "B", "C", "D", "E", "F"]);
        let candidates: Vec<_> = table
            .rules()
            .iter()
            .map(|rule| candidate(rule, 80))
            .collect();
        let (primary, secondary) = partition(&candidates).unwrap();
        assert_eq!(primary.rule.id, "A");
        assert_eq!(secondary.len(), MAX_SECONDARY_FINDINGS);
        assert!(partition(&[]).is_none());
    }

    #[test]
    fn test_fallback_carries_time_estimate() {
        let finding = fallback_finding(ErrorType::Overflow, TimeComplexity::Linear);
        assert_eq!(finding.id, NO_RULE_MATCHED);
        assert_eq!(finding.confidence, Confidence::Low);
        assert_eq!(finding.current_complexity.as_deref(), Some("O(n)"));
        assert_eq!(finding.severity, crate::core::Severity::Low);
    }
}
