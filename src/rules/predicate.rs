//! Tagged predicate language for rule clauses.
//!
//! Rules are authored as [`Predicate`] trees and compiled once, when the
//! [`RuleTable`](super::RuleTable) is built, into [`CompiledPredicate`]s whose
//! patterns are ready-to-run regexes. Evaluation reads a [`RuleContext`] and
//! never mutates anything but the context's own probe cache.

use crate::constraints::{ParsedConstraints, SizeBucket};
use crate::core::{AnalysisRequest, Error, Language, Result};
use crate::patterns::signals;
use once_cell::unsync::OnceCell;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Structural probes a predicate can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    NestedLoop,
    Recursion,
    ArrayAccess,
    UnsafeIndexing,
    IntForLargeNumbers,
}

impl Signal {
    const COUNT: usize = 5;

    fn slot(self) -> usize {
        match self {
            Signal::NestedLoop => 0,
            Signal::Recursion => 1,
            Signal::ArrayAccess => 2,
            Signal::UnsafeIndexing => 3,
            Signal::IntForLargeNumbers => 4,
        }
    }

    fn probe(self, code: &str) -> bool {
        match self {
            Signal::NestedLoop => signals::has_nested_loop(code),
            Signal::Recursion => signals::uses_recursion(code),
            Signal::ArrayAccess => signals::has_array_access(code),
            Signal::UnsafeIndexing => signals::has_unsafe_indexing(code),
            Signal::IntForLargeNumbers => signals::uses_int_for_large_numbers(code),
        }
    }
}

/// Escape hatch for predicates that are not expressible as data.
pub type CustomCheck = Arc<dyn Fn(&RuleContext<'_>) -> bool + Send + Sync>;

/// Authoring form of a clause condition.
#[derive(Clone)]
pub enum Predicate {
    /// Regex that must match somewhere in the raw code.
    Pattern(String),
    Signal(Signal),
    Language(Language),
    /// Parsed constraint size at or above the bucket.
    SizeAtLeast(SizeBucket),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
    Custom { name: String, check: CustomCheck },
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Predicate::Signal(s) => f.debug_tuple("Signal").field(s).finish(),
            Predicate::Language(l) => f.debug_tuple("Language").field(l).finish(),
            Predicate::SizeAtLeast(b) => f.debug_tuple("SizeAtLeast").field(b).finish(),
            Predicate::All(ps) => f.debug_tuple("All").field(ps).finish(),
            Predicate::Any(ps) => f.debug_tuple("Any").field(ps).finish(),
            Predicate::Not(p) => f.debug_tuple("Not").field(p).finish(),
            Predicate::Custom { name, .. } => f.debug_tuple("Custom").field(name).finish(),
        }
    }
}

impl Predicate {
    pub fn custom(
        name: impl Into<String>,
        check: impl Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Predicate::Custom {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Compile patterns; `rule` names the owning rule in errors.
    pub fn compile(&self, rule: &str) -> Result<CompiledPredicate> {
        Ok(match self {
            Predicate::Pattern(pattern) => {
                let regex = Regex::new(pattern).map_err(|source| Error::RulePattern {
                    rule: rule.to_string(),
                    pattern: pattern.clone(),
                    source,
                })?;
                CompiledPredicate::Pattern(regex)
            }
            Predicate::Signal(signal) => CompiledPredicate::Signal(*signal),
            Predicate::Language(language) => CompiledPredicate::Language(*language),
            Predicate::SizeAtLeast(bucket) => CompiledPredicate::SizeAtLeast(*bucket),
            Predicate::All(parts) => CompiledPredicate::All(compile_all(parts, rule)?),
            Predicate::Any(parts) => CompiledPredicate::Any(compile_all(parts, rule)?),
            Predicate::Not(inner) => CompiledPredicate::Not(Box::new(inner.compile(rule)?)),
            Predicate::Custom { check, .. } => CompiledPredicate::Custom(Arc::clone(check)),
        })
    }
}

fn compile_all(parts: &[Predicate], rule: &str) -> Result<Vec<CompiledPredicate>> {
    parts.iter().map(|part| part.compile(rule)).collect()
}

// Authoring shorthands used throughout the catalog.

pub fn matches(pattern: &str) -> Predicate {
    Predicate::Pattern(pattern.to_string())
}

pub fn absent(pattern: &str) -> Predicate {
    Predicate::Not(Box::new(matches(pattern)))
}

pub fn signal(signal: Signal) -> Predicate {
    Predicate::Signal(signal)
}

pub fn not(predicate: Predicate) -> Predicate {
    Predicate::Not(Box::new(predicate))
}

pub fn language(language: Language) -> Predicate {
    Predicate::Language(language)
}

pub fn large_input() -> Predicate {
    Predicate::SizeAtLeast(SizeBucket::Large)
}

pub fn all(parts: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::All(parts.into_iter().collect())
}

pub fn any(parts: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::Any(parts.into_iter().collect())
}

/// Executable form of a [`Predicate`].
#[derive(Clone)]
pub enum CompiledPredicate {
    Pattern(Regex),
    Signal(Signal),
    Language(Language),
    SizeAtLeast(SizeBucket),
    All(Vec<CompiledPredicate>),
    Any(Vec<CompiledPredicate>),
    Not(Box<CompiledPredicate>),
    Custom(CustomCheck),
}

impl fmt::Debug for CompiledPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledPredicate::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            CompiledPredicate::Signal(s) => f.debug_tuple("Signal").field(s).finish(),
            CompiledPredicate::Language(l) => f.debug_tuple("Language").field(l).finish(),
            CompiledPredicate::SizeAtLeast(b) => f.debug_tuple("SizeAtLeast").field(b).finish(),
            CompiledPredicate::All(ps) => f.debug_tuple("All").field(ps).finish(),
            CompiledPredicate::Any(ps) => f.debug_tuple("Any").field(ps).finish(),
            CompiledPredicate::Not(p) => f.debug_tuple("Not").field(p).finish(),
            CompiledPredicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl CompiledPredicate {
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            CompiledPredicate::Pattern(regex) => regex.is_match(ctx.code()),
            CompiledPredicate::Signal(signal) => ctx.signal(*signal),
            CompiledPredicate::Language(language) => ctx.request.language == *language,
            CompiledPredicate::SizeAtLeast(bucket) => ctx.constraints.size >= *bucket,
            CompiledPredicate::All(parts) => parts.iter().all(|part| part.evaluate(ctx)),
            CompiledPredicate::Any(parts) => parts.iter().any(|part| part.evaluate(ctx)),
            CompiledPredicate::Not(inner) => !inner.evaluate(ctx),
            CompiledPredicate::Custom(check) => check(ctx),
        }
    }
}

/// Everything a predicate may read for one request.
///
/// Signal probes are computed on first use and cached for the lifetime of
/// the context, so a probe shared by many rules runs once per request.
pub struct RuleContext<'a> {
    pub request: &'a AnalysisRequest,
    pub constraints: &'a ParsedConstraints,
    signals: [OnceCell<bool>; Signal::COUNT],
}

impl<'a> RuleContext<'a> {
    pub fn new(request: &'a AnalysisRequest, constraints: &'a ParsedConstraints) -> Self {
        Self {
            request,
            constraints,
            signals: Default::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.request.code
    }

    pub fn signal(&self, signal: Signal) -> bool {
        *self.signals[signal.slot()].get_or_init(|| signal.probe(&self.request.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::parse_constraints;
    use crate::core::ErrorType;

    fn request(code: &str) -> AnalysisRequest {
        AnalysisRequest::new(code, Language::Cpp, ErrorType::RuntimeError).unwrap()
    }

    #[test]
    fn test_composed_predicate() {
        let req = request("stack<int> s; s.pop();");
        let constraints = ParsedConstraints::default();
        let ctx = RuleContext::new(&req, &constraints);
        let predicate = all([matches("stack"), matches(r"pop\(\)|top\(\)"), absent(r"empty\(\)")])
            .compile("TEST")
            .unwrap();
        assert!(predicate.evaluate(&ctx));

        let guarded = request("stack<int> s; if (!s.empty()) s.pop();");
        let ctx = RuleContext::new(&guarded, &constraints);
        assert!(!predicate.evaluate(&ctx));
    }

    #[test]
    fn test_invalid_pattern_names_rule() {
        let err = matches("(unclosed").compile("BROKEN_RULE").unwrap_err();
        match err {
            Error::RulePattern { rule, pattern, .. } => {
                assert_eq!(rule, "BROKEN_RULE");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_size_and_language_predicates() {
        let req = request("int main() {}");
        let constraints = parse_constraints("n <= 2e5");
        let ctx = RuleContext::new(&req, &constraints);
        assert!(large_input().compile("T").unwrap().evaluate(&ctx));
        assert!(language(Language::Cpp).compile("T").unwrap().evaluate(&ctx));
        assert!(!language(Language::Java).compile("T").unwrap().evaluate(&ctx));
        assert!(!any(Vec::new()).compile("T").unwrap().evaluate(&ctx));
        assert!(all(Vec::new()).compile("T").unwrap().evaluate(&ctx));
    }

    #[test]
    fn test_signals_are_memoized_per_context() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let predicate = Predicate::custom("counting", move |ctx| {
            counter.fetch_add(1, Ordering::SeqCst);
            ctx.signal(Signal::NestedLoop)
        })
        .compile("T")
        .unwrap();

        let req = request("for (;;) { for (;;) {} }");
        let constraints = ParsedConstraints::default();
        let ctx = RuleContext::new(&req, &constraints);
        assert!(predicate.evaluate(&ctx));
        assert!(predicate.evaluate(&ctx));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(ctx.signals[Signal::NestedLoop.slot()].get().is_some());
        assert!(ctx.signals[Signal::Recursion.slot()].get().is_none());
    }
}
