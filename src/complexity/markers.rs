use crate::patterns::signals::{count_loops, self_call_count};
use crate::patterns::source::mask_comments_and_literals;
use once_cell::sync::Lazy;
use regex::Regex;

static MEMOIZATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dp|memo|cache|unordered_map|map").unwrap());

static BACKTRACKING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)take|skip|choose|exclude|include|pick|backtrack").unwrap());

static BACKTRACKING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)backtrack|choose|include|exclude|pick").unwrap());

/// `dp` followed by a chain of subscripts; group 1 is the whole chain.
static DP_SUBSCRIPTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bdp\s*((?:\[[^\]\n]+\]\s*)+)").unwrap());

static SUBSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]\n]*\]").unwrap());

static TRAVERSAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)dfs|bfs").unwrap());

static ADJACENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"adj|graph|edges").unwrap());

static SORTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"sort\(|sorted\(|Arrays\.sort|Collections\.sort|priority_queue").unwrap()
});

static HALVING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\w+)\s*=\s*(\w+)\s*[*/]\s*2\b|\w\s*[*/]=\s*2\b|>>=\s*1\b|\blow\s*<=\s*high\b|\bmid\s*=",
    )
    .unwrap()
});

static EXTRA_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)vector|array|map|unordered_map|set|dp\[|heap|queue|stack|\bdeque\b|\blist\s*\(|\bdict\s*\(")
        .unwrap()
});

/// Fixed or runtime-sized array declarations (`int a[n]`, `new int[n]`, `[0] * n`).
static ARRAY_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:int|long|short|char|bool|double|float|string|auto)\s+\w+\s*\[|\bnew\s+\w+\s*\[|\[\s*\w*\s*\]\s*\*\s*\w+",
    )
    .unwrap()
});

static HEAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"priority_queue|heap").unwrap());

static HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"map|unordered_map|hash").unwrap());

static ARRAY_USE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\s*\w+\s*\]").unwrap());

/// Structural facts both estimators consult, extracted in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMarkers {
    pub self_calls: usize,
    pub memoized: bool,
    pub backtracking_words: bool,
    pub backtracking_space_words: bool,
    /// Longest subscript chain on a `dp` table, 0 if none.
    pub dp_dimensions: usize,
    pub graph_traversal: bool,
    pub sorting: bool,
    pub halving: bool,
    pub loops: usize,
    pub extra_space: bool,
    pub heap: bool,
    pub hash: bool,
    pub array: bool,
}

impl CodeMarkers {
    pub fn scan(code: &str) -> Self {
        let text = strip_directives(&mask_comments_and_literals(code));
        let dp_dimensions = DP_SUBSCRIPTS
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .map(|chain| SUBSCRIPT.find_iter(chain.as_str()).count())
            .max()
            .unwrap_or(0);

        Self {
            self_calls: self_call_count(code),
            memoized: MEMOIZATION.is_match(&text),
            backtracking_words: BACKTRACKING.is_match(&text),
            backtracking_space_words: BACKTRACKING_SPACE.is_match(&text),
            dp_dimensions,
            graph_traversal: TRAVERSAL.is_match(&text) && ADJACENCY.is_match(&text),
            sorting: SORTING.is_match(&text),
            halving: has_halving(&text),
            loops: count_loops(code),
            extra_space: EXTRA_SPACE.is_match(&text) || ARRAY_DECLARATION.is_match(&text),
            heap: HEAP.is_match(&text),
            hash: HASH.is_match(&text),
            array: ARRAY_USE.is_match(&text),
        }
    }

    pub fn recursive(&self) -> bool {
        self.self_calls > 0
    }

    /// Two or more self-calls with no memo structure in sight.
    pub fn branching_recursion(&self) -> bool {
        self.self_calls >= 2 && !self.memoized
    }

    pub fn backtracking(&self) -> bool {
        self.recursive() && self.backtracking_words
    }

    pub fn dp_table(&self) -> bool {
        self.dp_dimensions > 0
    }
}

// `i = i * 2` only counts when the same variable appears on both sides.
fn has_halving(text: &str) -> bool {
    HALVING.captures_iter(text).any(|caps| match (caps.get(1), caps.get(2)) {
        (Some(lhs), Some(rhs)) => lhs.as_str() == rhs.as_str(),
        _ => true,
    })
}

/// Drop `#include`, `import` and `using` lines so header names
/// (`<queue>`, `java.util.*`) do not read as data structure use.
fn strip_directives(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let line = line.trim_start();
            !(line.starts_with('#')
                || line.starts_with("import ")
                || line.starts_with("from ")
                || line.starts_with("using ")
                || line.starts_with("package "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
