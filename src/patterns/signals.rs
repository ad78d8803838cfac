//! Pattern signal extractor.
//!
//! Stateless probes answering yes/no questions about the surface shape of a
//! submission. Every probe is total: any text, including the empty string,
//! yields an answer and never panics.

use super::source::{
    indent_width, mask_comments_and_literals, matching_close, skip_whitespace, word_at,
};
use once_cell::sync::Lazy;
use regex::Regex;

static ARRAY_ACCESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w\s*\[[^\]\n]*\]").unwrap());

static UNSAFE_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*[A-Za-z_]\w*\s*[+\-]\s*\w+\s*\]").unwrap());

static NARROW_INT_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:int|int32_t|short)\s+[A-Za-z_]").unwrap());

static ACCUMULATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+=|\*=|\w\s*\*\s*\w").unwrap());

static WIDE_INT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\blong\b|\b(?:u?int64_t|int64|BigInteger|BigInt|i64|u64|i128)\b|__int128")
        .unwrap()
});

static BRACE_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Za-z_]\w*)\s*\(([^()]|\([^()]*\))*\)\s*(?:const\s*)?(?:throws\s+[\w.,\s]+?)?\{")
        .unwrap()
});

static PYTHON_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)def\s+([A-Za-z_]\w*)\s*\(").unwrap());

static BRACE_LOOP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:for|while)\s*\(").unwrap());

/// Names that look like `name(...) {` but are control flow, not functions.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "sizeof", "do", "else", "synchronized",
    "foreach", "with", "elif", "until",
];

/// True if one loop construct opens inside the body of another.
///
/// Sequential loops are never reported. Brace languages are scanned with
/// brace/paren depth tracking; indentation-structured text (Python) uses
/// an indentation stack.
pub fn has_nested_loop(code: &str) -> bool {
    if code.trim().is_empty() {
        return false;
    }
    let masked = mask_comments_and_literals(code);
    if is_indentation_structured(&masked) {
        nested_loop_by_indent(&masked)
    } else {
        nested_loop_by_braces(&masked)
    }
}

/// Heuristic recursion check: the first declared function calls itself.
///
/// Only the first function is considered, and a call is any `name(`
/// occurrence inside its body. This is not call-graph analysis: mutual
/// recursion is missed, and a helper declared before the recursive
/// function hides it.
pub fn uses_recursion(code: &str) -> bool {
    self_call_count(code) > 0
}

/// Number of self-references inside the first declared function's body.
pub fn self_call_count(code: &str) -> usize {
    if code.trim().is_empty() {
        return 0;
    }
    let masked = mask_comments_and_literals(code);
    first_function(&masked)
        .map(|function| {
            let region = &masked.as_bytes()[function.region.clone()];
            count_calls(region, &function.name).saturating_sub(1)
        })
        .unwrap_or(0)
}

/// Any subscript expression such as `arr[i]`.
pub fn has_array_access(code: &str) -> bool {
    ARRAY_ACCESS.is_match(code)
}

/// Subscripts offset by a variable plus or minus another term (`a[i+1]`,
/// `dp[j - k]`), the usual shape of off-by-one and boundary slips.
pub fn has_unsafe_indexing(code: &str) -> bool {
    UNSAFE_INDEX.is_match(code)
}

/// Narrow integer declarations feeding accumulation or multiplication with
/// no wide integer type anywhere in the submission.
pub fn uses_int_for_large_numbers(code: &str) -> bool {
    NARROW_INT_DECL.is_match(code) && ACCUMULATION.is_match(code) && !WIDE_INT.is_match(code)
}

/// Number of loop constructs in the code (headers, not nesting depth).
pub fn count_loops(code: &str) -> usize {
    if code.trim().is_empty() {
        return 0;
    }
    let masked = mask_comments_and_literals(code);
    if is_indentation_structured(&masked) {
        masked
            .lines()
            .map(str::trim)
            .filter(|line| is_indented_loop_header(line))
            .count()
    } else {
        BRACE_LOOP_HEADER.find_iter(&masked).count()
    }
}

/// Name and byte range (header through body) of a declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRegion {
    pub name: String,
    pub region: std::ops::Range<usize>,
}

/// Locate the first declared function in already-masked text.
pub fn first_function(masked: &str) -> Option<FunctionRegion> {
    let brace = first_brace_function(masked);
    let python = first_python_function(masked);
    match (brace, python) {
        (Some(b), Some(p)) => Some(if p.region.start < b.region.start { p } else { b }),
        (b, p) => b.or(p),
    }
}

fn first_brace_function(masked: &str) -> Option<FunctionRegion> {
    let bytes = masked.as_bytes();
    BRACE_FUNCTION
        .captures_iter(masked)
        .filter_map(|caps| {
            let name = caps.get(1)?;
            if CONTROL_KEYWORDS.contains(&name.as_str()) {
                return None;
            }
            let whole = caps.get(0)?;
            let open = whole.end() - 1;
            let close = matching_close(bytes, open).unwrap_or(bytes.len() - 1);
            Some(FunctionRegion {
                name: name.as_str().to_string(),
                region: name.start()..close + 1,
            })
        })
        .next()
}

fn first_python_function(masked: &str) -> Option<FunctionRegion> {
    let caps = PYTHON_FUNCTION.captures(masked)?;
    let def_indent = indent_width(caps.get(1)?.as_str());
    let name = caps.get(2)?;
    let header_start = name.start();

    let after_header = masked[header_start..]
        .find('\n')
        .map_or(masked.len(), |offset| header_start + offset + 1);

    let mut end = after_header;
    let mut cursor = after_header;
    for line in masked[after_header..].split_inclusive('\n') {
        let next = cursor + line.len();
        if !line.trim().is_empty() {
            if indent_width(line) <= def_indent {
                break;
            }
            end = next;
        }
        cursor = next;
    }

    Some(FunctionRegion {
        name: name.as_str().to_string(),
        region: header_start..end.max(after_header),
    })
}

fn count_calls(region: &[u8], name: &str) -> usize {
    let first = name.as_bytes()[0];
    (0..region.len())
        .filter(|&i| region[i] == first && word_at(region, i, name))
        .filter(|&i| region.get(skip_whitespace(region, i + name.len())) == Some(&b'('))
        .count()
}

#[derive(Debug, Clone, Copy)]
enum LoopScope {
    /// Loop body is a `{}` block opened at this brace depth.
    Block(usize),
    /// Loop body is a single statement starting at this brace depth.
    Statement(usize),
}

fn loop_keyword_len(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        b'f' if word_at(bytes, i, "for") => Some(3),
        b'w' if word_at(bytes, i, "while") => Some(5),
        _ => None,
    }
}

fn nested_loop_by_braces(masked: &str) -> bool {
    let bytes = masked.as_bytes();
    let mut scopes: Vec<LoopScope> = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                while let Some(&scope) = scopes.last() {
                    match scope {
                        LoopScope::Block(d) if d > depth => scopes.pop(),
                        LoopScope::Statement(d) if d >= depth => scopes.pop(),
                        _ => break,
                    };
                }
                i += 1;
            }
            b';' => {
                while matches!(scopes.last(), Some(LoopScope::Statement(d)) if *d == depth) {
                    scopes.pop();
                }
                i += 1;
            }
            b'd' if word_at(bytes, i, "do") => {
                let body = skip_whitespace(bytes, i + 2);
                if bytes.get(body) == Some(&b'{') {
                    if !scopes.is_empty() {
                        return true;
                    }
                    depth += 1;
                    scopes.push(LoopScope::Block(depth));
                    i = body + 1;
                } else {
                    i += 2;
                }
            }
            _ => {
                let Some(keyword_len) = loop_keyword_len(bytes, i) else {
                    i += 1;
                    continue;
                };
                let open = skip_whitespace(bytes, i + keyword_len);
                if bytes.get(open) != Some(&b'(') {
                    i += keyword_len;
                    continue;
                }
                if !scopes.is_empty() {
                    return true;
                }
                let Some(close) = matching_close(bytes, open) else {
                    return false;
                };
                let body = skip_whitespace(bytes, close + 1);
                match bytes.get(body) {
                    Some(b'{') => {
                        depth += 1;
                        scopes.push(LoopScope::Block(depth));
                        i = body + 1;
                    }
                    // Empty body, or the tail of a do-while.
                    Some(b';') => i = body + 1,
                    Some(_) => {
                        scopes.push(LoopScope::Statement(depth));
                        i = body;
                    }
                    None => return false,
                }
            }
        }
    }
    false
}

const BLOCK_OPENERS: &[&str] = &[
    "def ", "for ", "while ", "if ", "elif ", "else", "class ", "with ", "try", "except",
];

fn is_indentation_structured(masked: &str) -> bool {
    let (colon_blocks, brace_lines) = masked.lines().map(str::trim).fold(
        (0usize, 0usize),
        |(colon, brace), line| {
            if line.ends_with(':') && BLOCK_OPENERS.iter().any(|kw| line.starts_with(kw)) {
                (colon + 1, brace)
            } else if line.ends_with('{') || line.ends_with(';') || line.ends_with('}') {
                (colon, brace + 1)
            } else {
                (colon, brace)
            }
        },
    );
    colon_blocks > brace_lines
}

fn starts_with_loop_keyword(trimmed: &str) -> bool {
    let bytes = trimmed.as_bytes();
    !bytes.is_empty() && (word_at(bytes, 0, "for") || word_at(bytes, 0, "while"))
}

fn is_indented_loop_header(trimmed: &str) -> bool {
    starts_with_loop_keyword(trimmed) && trimmed.ends_with(':')
}

fn nested_loop_by_indent(masked: &str) -> bool {
    let mut open_loops: Vec<usize> = Vec::new();
    for line in masked.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indent = indent_width(line);
        while open_loops.last().is_some_and(|&d| d >= indent) {
            open_loops.pop();
        }
        let is_loop = starts_with_loop_keyword(trimmed) && trimmed.contains(':');
        if is_loop && !open_loops.is_empty() {
            return true;
        }
        if is_loop && trimmed.ends_with(':') {
            open_loops.push(indent);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_nested_loops_detected() {
        let code = indoc! {"
            for (int i = 0; i < n; i++) {
                for (int j = 0; j < n; j++) {
                    total += a[i] * a[j];
                }
            }
        "};
        assert!(has_nested_loop(code));
    }

    #[test]
    fn test_sequential_loops_are_not_nested() {
        let code = indoc! {"
            for (int i = 0; i < n; i++) {
                sum += a[i];
            }
            while (q--) {
                cin >> x;
            }
        "};
        assert!(!has_nested_loop(code));
    }

    #[test]
    fn test_single_statement_body_nesting() {
        assert!(has_nested_loop("for (i = 0; i < n; i++) for (j = 0; j < n; j++) c++;"));
        assert!(!has_nested_loop("for (i = 0; i < n; i++) c++; for (j = 0; j < n; j++) c++;"));
    }

    #[test]
    fn test_statement_body_with_inner_block_ends_at_block() {
        let code = "for (i = 0; i < n; i++) if (a[i]) { x++; y++; } while (k) { k--; }";
        assert!(!has_nested_loop(code));
    }

    #[test]
    fn test_do_while_inside_loop_is_nested() {
        let code = "for (;;) { do { x--; } while (x > 0); }";
        assert!(has_nested_loop(code));
        assert!(!has_nested_loop("do { x--; } while (x > 0); for (;;) { }"));
    }

    #[test]
    fn test_loop_keyword_in_string_ignored() {
        let code = "for (int i = 0; i < n; i++) { puts(\"for (x)\"); }";
        assert!(!has_nested_loop(code));
    }

    #[test]
    fn test_python_nesting_by_indentation() {
        let nested = indoc! {"
            def solve(a):
                for i in range(len(a)):
                    for j in range(i):
                        total += a[j]
                return total
        "};
        assert!(has_nested_loop(nested));

        let sequential = indoc! {"
            def solve(a):
                for i in range(len(a)):
                    total += a[i]
                while total > 10:
                    total -= 10
                return total
        "};
        assert!(!has_nested_loop(sequential));
    }

    #[test]
    fn test_recursion_detected_in_first_function() {
        let code = indoc! {"
            int fib(int n) {
                if (n < 2) return n;
                return fib(n - 1) + fib(n - 2);
            }
            int main() { cout << fib(10); }
        "};
        assert!(uses_recursion(code));
        assert_eq!(self_call_count(code), 2);
    }

    #[test]
    fn test_calls_outside_body_do_not_count() {
        let code = indoc! {"
            int square(int n) {
                return n * n;
            }
            int main() { return square(3) + square(4); }
        "};
        assert!(!uses_recursion(code));
    }

    #[test]
    fn test_python_recursion() {
        let code = indoc! {"
            def dfs(node):
                for nxt in adj[node]:
                    dfs(nxt)

            dfs(0)
        "};
        assert!(uses_recursion(code));
        assert_eq!(self_call_count(code), 1);
    }

    #[test]
    fn test_control_keywords_are_not_functions() {
        let code = "if (x) { y(); } void go(int k) { go(k - 1); }";
        let masked = mask_comments_and_literals(code);
        assert_eq!(first_function(&masked).unwrap().name, "go");
    }

    #[test]
    fn test_indexing_probes() {
        assert!(has_array_access("x = arr[i];"));
        assert!(!has_array_access("x = y;"));
        assert!(has_unsafe_indexing("if (a[i+1] > a[i]) {}"));
        assert!(has_unsafe_indexing("dp[j - coin]"));
        assert!(!has_unsafe_indexing("a[i] = b[0];"));
    }

    #[test]
    fn test_int_overflow_signal() {
        assert!(uses_int_for_large_numbers("int sum = 0; for (...) sum += a[i];"));
        assert!(uses_int_for_large_numbers("int p = a * b;"));
        assert!(!uses_int_for_large_numbers("long long sum = 0; int i; sum += i;"));
        assert!(!uses_int_for_large_numbers("int x = 5;"));
    }

    #[test]
    fn test_loop_count() {
        let code = "for (;;) {} while (x) {} do { } while (y);";
        assert_eq!(count_loops(code), 3);
        assert_eq!(count_loops("for i in range(n):\n    pass\n"), 1);
        assert_eq!(count_loops(""), 0);
    }

    #[test]
    fn test_probes_are_total_on_empty_input() {
        assert!(!has_nested_loop(""));
        assert!(!uses_recursion(""));
        assert!(!has_array_access(""));
        assert!(!has_unsafe_indexing(""));
        assert!(!uses_int_for_large_numbers(""));
    }
}
