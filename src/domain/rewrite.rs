//! Line-prefix rewriting of `key = value` property templates.
//!
//! This is plain text substitution, not a properties parser. A line is
//! rewritten only when it starts with exactly `<key> =`; keys absent from
//! the template are never added.

use std::borrow::Cow;

/// Assignment marker that follows a key at the start of a declaration line.
const ASSIGNMENT_MARKER: &str = " =";

/// A single `key -> value` override applied to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    key: String,
    value: String,
}

impl Replacement {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    /// Whether `line` declares this rule's key.
    pub fn matches(&self, line: &str) -> bool {
        line.strip_prefix(self.key.as_str())
            .is_some_and(|rest| rest.starts_with(ASSIGNMENT_MARKER))
    }

    fn render(&self) -> String {
        format!("{}{} {}\n", self.key, ASSIGNMENT_MARKER, self.value)
    }
}

/// Rewrite one line (including its terminator) against `rules`.
///
/// First matching rule wins; unmatched lines are returned untouched.
pub fn rewrite_line<'a>(line: &'a str, rules: &[Replacement]) -> Cow<'a, str> {
    match rules.iter().find(|rule| rule.matches(line)) {
        Some(rule) => Cow::Owned(rule.render()),
        None => Cow::Borrowed(line),
    }
}

/// Rewrite a whole template, preserving line count and order.
pub fn rewrite_text(input: &str, rules: &[Replacement]) -> String {
    let mut output = String::with_capacity(input.len());
    for line in input.split_inclusive('\n') {
        output.push_str(&rewrite_line(line, rules));
    }
    output
}
