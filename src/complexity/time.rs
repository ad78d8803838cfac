use super::markers::CodeMarkers;
use super::TimeComplexity;

/// Estimate the asymptotic running time of a submission.
///
/// The first matching rung of the cascade wins:
/// exponential recursion or backtracking, memoized recursion, DP table
/// dimensions, graph traversal, sorting, halving loops, loop count, plain
/// recursion. Anything else is `Unknown`.
pub fn estimate_time_complexity(code: &str) -> TimeComplexity {
    time_from_markers(&CodeMarkers::scan(code))
}

pub fn time_from_markers(markers: &CodeMarkers) -> TimeComplexity {
    let recursive = markers.recursive();

    if markers.branching_recursion() || markers.backtracking() {
        return TimeComplexity::Exponential;
    }
    if recursive && markers.memoized {
        return TimeComplexity::Linear;
    }
    if markers.dp_table() {
        return TimeComplexity::from_degree(markers.dp_dimensions);
    }
    if markers.graph_traversal {
        return TimeComplexity::Graph;
    }
    if markers.sorting {
        return TimeComplexity::Linearithmic;
    }
    if markers.halving {
        return TimeComplexity::Logarithmic;
    }

    match markers.loops {
        0 if !recursive => TimeComplexity::Constant,
        0 => TimeComplexity::Linear,
        loops => TimeComplexity::from_degree(loops),
    }
}
