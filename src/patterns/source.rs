//! Text normalization shared by the structural probes.
//!
//! Structural probes (loop nesting, recursion) must not be fooled by
//! `for (` inside a string or a comment, so they run over a *masked* copy
//! of the code: comment bodies and literal contents are replaced by spaces.
//! Masking preserves byte offsets and newlines, so indentation and
//! positions stay meaningful.

/// Replace comment bodies and string/char literal contents with spaces.
///
/// Handles `//` line comments, `/* */` block comments, `"..."`, `'...'`
/// and `` `...` `` literals with backslash escapes. A `'` directly after an
/// alphanumeric character is a C++14 digit separator (`1'000'000`) or a
/// suffix, not a literal opener.
pub fn mask_comments_and_literals(code: &str) -> String {
    let bytes = code.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    out.push(b' ');
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                out.extend_from_slice(b"  ");
                i += 2;
                while i < bytes.len() {
                    if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                        out.extend_from_slice(b"  ");
                        i += 2;
                        break;
                    }
                    out.push(blank(bytes[i]));
                    i += 1;
                }
            }
            b'"' | b'`' => {
                i = mask_literal(bytes, i, b, &mut out);
            }
            b'\'' if !preceded_by_alnum(bytes, i) => {
                i = mask_literal(bytes, i, b, &mut out);
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }

    // Only ASCII bytes were substituted, and multi-byte sequences are either
    // copied intact or fully blanked, so the buffer stays valid UTF-8.
    String::from_utf8(out).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn mask_literal(bytes: &[u8], start: usize, quote: u8, out: &mut Vec<u8>) -> usize {
    out.push(quote);
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                out.push(b' ');
                if let Some(&next) = bytes.get(i + 1) {
                    out.push(blank(next));
                }
                i += 2;
            }
            b if b == quote => {
                out.push(quote);
                return i + 1;
            }
            // Unterminated single-line literal: stop at end of line.
            b'\n' if quote != b'`' => {
                out.push(b'\n');
                return i + 1;
            }
            b => {
                out.push(blank(b));
                i += 1;
            }
        }
    }
    i.min(bytes.len())
}

// Every byte of a multi-byte char becomes a space, so the output stays UTF-8.
fn blank(b: u8) -> u8 {
    if b == b'\n' {
        b'\n'
    } else {
        b' '
    }
}

fn preceded_by_alnum(bytes: &[u8], i: usize) -> bool {
    i > 0 && (bytes[i - 1].is_ascii_alphanumeric() || bytes[i - 1] == b'_')
}

/// Collapse every whitespace run into a single space.
pub fn collapse_whitespace(code: &str) -> String {
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Index of the bracket closing the one at `open`, honoring nesting.
///
/// `open` must point at `(`, `[` or `{`. Returns `None` for unbalanced text.
pub fn matching_close(bytes: &[u8], open: usize) -> Option<usize> {
    let (open_b, close_b) = match bytes.get(open)? {
        b'(' => (b'(', b')'),
        b'[' => (b'[', b']'),
        b'{' => (b'{', b'}'),
        _ => return None,
    };

    let mut depth = 0usize;
    for (offset, &b) in bytes[open..].iter().enumerate() {
        if b == open_b {
            depth += 1;
        } else if b == close_b {
            depth -= 1;
            if depth == 0 {
                return Some(open + offset);
            }
        }
    }
    None
}

pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// True if `word` occurs at `at` as a whole identifier.
pub fn word_at(bytes: &[u8], at: usize, word: &str) -> bool {
    let w = word.as_bytes();
    if at + w.len() > bytes.len() || &bytes[at..at + w.len()] != w {
        return false;
    }
    let before_ok = at == 0 || !is_ident_byte(bytes[at - 1]);
    let after_ok = bytes.get(at + w.len()).map_or(true, |&b| !is_ident_byte(b));
    before_ok && after_ok
}

/// First index at or after `from` that is not ASCII whitespace.
pub fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Leading whitespace width of a line, tabs counting as four columns.
pub fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}
