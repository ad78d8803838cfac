use super::markers::CodeMarkers;
use super::SpaceComplexity;

/// Estimate the auxiliary memory of a submission.
///
/// Cascade order: no containers and no recursion, recursion without a DP
/// table, DP table dimensions, graph traversal, heap or hash containers,
/// arrays, backtracking. Anything else is `Unknown`.
pub fn estimate_space_complexity(code: &str) -> SpaceComplexity {
    space_from_markers(&CodeMarkers::scan(code))
}

pub fn space_from_markers(markers: &CodeMarkers) -> SpaceComplexity {
    let recursive = markers.recursive();

    if !markers.extra_space && !recursive {
        return SpaceComplexity::Constant;
    }
    if recursive && !markers.dp_table() {
        return SpaceComplexity::RecursionStack;
    }
    if markers.dp_table() {
        return SpaceComplexity::from_degree(markers.dp_dimensions);
    }
    if markers.graph_traversal {
        return SpaceComplexity::Vertices;
    }
    if markers.heap || markers.hash || markers.array {
        return SpaceComplexity::Linear;
    }
    if markers.backtracking_space_words {
        return SpaceComplexity::CallStack;
    }
    SpaceComplexity::Unknown
}
