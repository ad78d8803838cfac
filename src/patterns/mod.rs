//! Surface-level code pattern detection.
//!
//! This module answers questions about the textual shape of a submission,
//! such as whether it nests loops or recurses, without parsing it into an
//! AST. Probes are pure functions and safe to call from any thread.

pub mod signals;
pub mod source;

pub use signals::{
    count_loops, first_function, has_array_access, has_nested_loop, has_unsafe_indexing,
    self_call_count, uses_int_for_large_numbers, uses_recursion, FunctionRegion,
};
pub use source::{collapse_whitespace, mask_comments_and_literals};
