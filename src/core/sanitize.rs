// src/core/sanitize.rs
//
// Text cleanup for scraped cells. Pure functions, no error cases: input that
// can't be improved comes back as-is (modulo trimming).

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical form of a scraped name/type/navy field.
///
/// NFD-decomposes, drops combining marks (diacritics), turns non-breaking
/// spaces into plain ones, drops control characters, collapses whitespace.
pub fn normalize(s: &str) -> String {
    let stripped: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == '\u{a0}' || c == '\u{202f}' { ' ' } else { c })
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    normalize_ws(&stripped)
}

/// "Iowa (BB-61) = Montana" → "Iowa"
pub fn strip_subclass_suffix(s: &str) -> String {
    let cut = s.find(['(', '=']).unwrap_or(s.len());
    s[..cut].trim_end().to_string()
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove any `[ ... ]` segments (footnote markers like `[1]`, `[note 2]`).
/// Greedy within each bracket pair, no nesting.
pub fn strip_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
