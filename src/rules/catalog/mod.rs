//! The standard rule catalog.
//!
//! One file per topic. Ids that used to be authored in several tables live
//! in exactly one place here, with one clause per distinct trigger.

mod array;
mod correctness;
mod dp;
mod graph;
mod greedy;
mod hash;
mod heap;
mod language;
mod performance;
mod queue;
mod resources;
mod runtime;
mod stack;
mod strings;
mod tree;

use super::Rule;
use crate::core::ErrorType;

pub(crate) const TLE: ErrorType = ErrorType::TimeLimitExceeded;
pub(crate) const WA: ErrorType = ErrorType::WrongAnswer;
pub(crate) const RE: ErrorType = ErrorType::RuntimeError;
pub(crate) const OVERFLOW: ErrorType = ErrorType::Overflow;
pub(crate) const MLE: ErrorType = ErrorType::MemoryLimitExceeded;

/// `while (t--)`: the multiple-test-case driver loop.
pub(crate) const MULTI_TEST: &str = r"while\s*\(t--\)";

/// Any spelling of an explicit null-root guard.
pub(crate) const NULL_ROOT_GUARD: &str =
    r"if\s*\(\s*root\s*==\s*(?:null|NULL|nullptr)\s*\)|if\s*\(\s*!\s*root\s*\)|\broot\s+is\s+None\b|\bif\s+not\s+root\b";

/// Every rule of the standard catalog, in table order.
pub fn standard_rules() -> Vec<Rule> {
    [
        performance::rules(),
        correctness::rules(),
        runtime::rules(),
        resources::rules(),
        language::rules(),
        array::rules(),
        strings::rules(),
        dp::rules(),
        greedy::rules(),
        graph::rules(),
        tree::rules(),
        stack::rules(),
        queue::rules(),
        heap::rules(),
        hash::rules(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
