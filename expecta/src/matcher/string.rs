use std::fmt::{Formatter, Result as FmtResult};

use super::Matcher;

/// Matches strings that start with `pattern`.
pub fn starts_with<P: Into<String>>(pattern: P) -> Text {
    Text::new(TextOp::StartsWith, pattern)
}

/// Matches strings that end with `pattern`.
pub fn ends_with<P: Into<String>>(pattern: P) -> Text {
    Text::new(TextOp::EndsWith, pattern)
}

/// Matches strings that contain `pattern`.
pub fn contains<P: Into<String>>(pattern: P) -> Text {
    Text::new(TextOp::Contains, pattern)
}

/// Matches strings equal to `pattern`, ignoring ASCII case.
pub fn eq_ignore_case<P: Into<String>>(pattern: P) -> Text {
    Text::new(TextOp::EqIgnoreCase, pattern)
}

/// Matches empty strings.
pub fn is_empty() -> Text {
    Text::new(TextOp::IsEmpty, String::new())
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum TextOp {
    StartsWith,
    EndsWith,
    Contains,
    EqIgnoreCase,
    IsEmpty,
}

/// Matcher for any argument that can be viewed as `str`, like `String`,
/// `&str` or `Box<str>`.
#[must_use]
#[derive(Debug, Clone)]
pub struct Text {
    op: TextOp,
    pattern: String,
}

impl Text {
    fn new<P: Into<String>>(op: TextOp, pattern: P) -> Self {
        Self {
            op,
            pattern: pattern.into(),
        }
    }
}

impl<X> Matcher<X> for Text
where
    X: AsRef<str>,
{
    fn matches(&self, value: &X) -> bool {
        let value = value.as_ref();
        let pattern = self.pattern.as_str();

        match self.op {
            TextOp::StartsWith => value.starts_with(pattern),
            TextOp::EndsWith => value.ends_with(pattern),
            TextOp::Contains => value.contains(pattern),
            TextOp::EqIgnoreCase => value.eq_ignore_ascii_case(pattern),
            TextOp::IsEmpty => value.is_empty(),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self.op {
            TextOp::StartsWith => "str_starts_with",
            TextOp::EndsWith => "str_ends_with",
            TextOp::Contains => "str_contains",
            TextOp::EqIgnoreCase => "str_eq_ignore_case",
            TextOp::IsEmpty => return f.write_str("is_empty()"),
        };

        write!(f, "{name}({:?})", self.pattern)
    }
}
