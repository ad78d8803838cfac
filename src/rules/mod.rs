//! Rule model and the immutable rule table.
//!
//! A [`Rule`] is one diagnostic id with a payload and one or more
//! [`Clause`]s. Each clause is an independent trigger: a verdict, a
//! priority, and a [`Predicate`]. When several clauses of a rule match, the
//! rule is reported once, at the highest matching priority.
//!
//! The table is built once (catalog, minus disabled ids, plus custom rules),
//! compiled, and then shared read-only between any number of concurrent
//! analyses.

pub mod catalog;
pub mod predicate;

pub use predicate::{CompiledPredicate, Predicate, RuleContext, Signal};

use crate::core::{Confidence, Error, ErrorType, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Problem area a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Array,
    String,
    Dp,
    Greedy,
    Graph,
    Tree,
    Stack,
    Queue,
    Heap,
    Hash,
    Runtime,
    Performance,
    Correctness,
    Resources,
    Language,
    Custom,
}

impl Topic {
    pub const ALL: [Topic; 16] = [
        Topic::Array,
        Topic::String,
        Topic::Dp,
        Topic::Greedy,
        Topic::Graph,
        Topic::Tree,
        Topic::Stack,
        Topic::Queue,
        Topic::Heap,
        Topic::Hash,
        Topic::Runtime,
        Topic::Performance,
        Topic::Correctness,
        Topic::Resources,
        Topic::Language,
        Topic::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Array => "array",
            Topic::String => "string",
            Topic::Dp => "dp",
            Topic::Greedy => "greedy",
            Topic::Graph => "graph",
            Topic::Tree => "tree",
            Topic::Stack => "stack",
            Topic::Queue => "queue",
            Topic::Heap => "heap",
            Topic::Hash => "hash",
            Topic::Runtime => "runtime",
            Topic::Performance => "performance",
            Topic::Correctness => "correctness",
            Topic::Resources => "resources",
            Topic::Language => "language",
            Topic::Custom => "custom",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.name() == needle)
            .ok_or_else(|| Error::Validation(format!("unknown topic '{}'", s.trim())))
    }
}

/// What kind of mistake a rule diagnoses, independent of topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    EmptyAccess,
    IndexBounds,
    OffByOne,
    MissingBaseCase,
    MissingEdgeCase,
    WrongInitialization,
    NotReset,
    WrongTransition,
    WrongApproach,
    WrongComparator,
    MissingVisited,
    WrongTraversal,
    SlowIo,
    RedundantWork,
    UnboundedRecursion,
    Overflow,
    MemoryOveruse,
    DivisionByZero,
    NullPointer,
    InfiniteLoop,
    Precision,
    ControlFlow,
    WrongKey,
    Custom,
}

/// Diagnostic text attached to every finding of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub confidence: Confidence,
    pub reason: String,
    pub fix: String,
    pub suggested_topics: Vec<String>,
    pub similar_problems: Vec<String>,
    pub current_complexity: Option<String>,
    pub expected_complexity: Option<String>,
}

impl Default for Payload {
    fn default() -> Self {
        Self {
            confidence: Confidence::Low,
            reason: String::new(),
            fix: String::new(),
            suggested_topics: Vec::new(),
            similar_problems: Vec::new(),
            current_complexity: None,
            expected_complexity: None,
        }
    }
}

/// One trigger of a rule.
#[derive(Debug, Clone)]
pub struct Clause {
    pub priority: u8,
    pub error_type: ErrorType,
    pub when: Predicate,
}

/// Authoring form of a rule, assembled with the builder methods below.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub topic: Topic,
    pub kind: DefectKind,
    pub clauses: Vec<Clause>,
    pub payload: Payload,
}

impl Rule {
    pub fn new(id: impl Into<String>, topic: Topic, kind: DefectKind) -> Self {
        Self {
            id: id.into(),
            topic,
            kind,
            clauses: Vec::new(),
            payload: Payload::default(),
        }
    }

    /// Add a trigger: `when` matching a submission judged `error_type`.
    pub fn when(mut self, priority: u8, error_type: ErrorType, when: Predicate) -> Self {
        self.clauses.push(Clause {
            priority,
            error_type,
            when,
        });
        self
    }

    pub fn explain(
        mut self,
        confidence: Confidence,
        reason: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        self.payload.confidence = confidence;
        self.payload.reason = reason.into();
        self.payload.fix = fix.into();
        self
    }

    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payload.suggested_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn problems<I, S>(mut self, problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payload.similar_problems = problems.into_iter().map(Into::into).collect();
        self
    }

    pub fn complexity(mut self, current: impl Into<String>, expected: impl Into<String>) -> Self {
        self.payload.current_complexity = Some(current.into());
        self.payload.expected_complexity = Some(expected.into());
        self
    }

    fn compile(self) -> Result<CompiledRule> {
        if self.id.trim().is_empty() {
            return Err(Error::RuleTable("rule id cannot be empty".to_string()));
        }
        if self.clauses.is_empty() {
            return Err(Error::RuleTable(format!("rule {} has no clauses", self.id)));
        }

        let clauses = self
            .clauses
            .iter()
            .map(|clause| {
                Ok(CompiledClause {
                    priority: clause.priority,
                    error_type: clause.error_type,
                    when: clause.when.compile(&self.id)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledRule {
            id: self.id,
            topic: self.topic,
            kind: self.kind,
            clauses,
            payload: self.payload,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledClause {
    pub priority: u8,
    pub error_type: ErrorType,
    pub when: CompiledPredicate,
}

/// A rule ready for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub id: String,
    pub topic: Topic,
    pub kind: DefectKind,
    pub clauses: Vec<CompiledClause>,
    pub payload: Payload,
}

impl CompiledRule {
    /// Highest priority among clauses that match, `None` if none do.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<u8> {
        self.clauses
            .iter()
            .filter(|clause| clause.error_type == ctx.request.error_type)
            .filter(|clause| clause.when.evaluate(ctx))
            .map(|clause| clause.priority)
            .max()
    }

    pub fn applies_to(&self, error_type: ErrorType) -> bool {
        self.clauses.iter().any(|clause| clause.error_type == error_type)
    }

    pub fn error_types(&self) -> BTreeSet<ErrorType> {
        self.clauses.iter().map(|clause| clause.error_type).collect()
    }

    pub fn max_priority(&self) -> u8 {
        self.clauses.iter().map(|clause| clause.priority).max().unwrap_or(0)
    }
}

/// Immutable, compiled, ordered rule collection.
///
/// Table order is the tie-break for equal priorities. Ids need not be
/// unique: a custom rule may reuse a standard id to add a trigger, and the
/// engine keeps the highest-priority instance.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// The standard catalog with nothing disabled.
    pub fn standard() -> Result<Self> {
        Self::builder().with_rules(catalog::standard_rules()).build()
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Rules with at least one clause for `error_type`, in table order.
    pub fn for_error_type(&self, error_type: ErrorType) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter().filter(move |rule| rule.applies_to(error_type))
    }
}

#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    rules: Vec<Rule>,
    disabled: BTreeSet<String>,
}

impl RuleTableBuilder {
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Drop every rule carrying one of these ids.
    pub fn disable<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<RuleTable> {
        let Self { rules, disabled } = self;
        for id in &disabled {
            if !rules.iter().any(|rule| &rule.id == id) {
                log::warn!("Disabled rule id {} does not exist in the table", id);
            }
        }

        let rules = rules
            .into_iter()
            .filter(|rule| !disabled.contains(&rule.id))
            .map(Rule::compile)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Built rule table with {} rules", rules.len());
        Ok(RuleTable { rules })
    }
}
