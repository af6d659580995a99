use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::Matcher;

/// Matches values equal to `value`. Works for any pair of types with a
/// [`PartialEq`] implementation, so `eq("text")` matches a `String`.
pub fn eq<T>(value: T) -> Equals<T> {
    Equals {
        value,
        negated: false,
    }
}

/// Matches values not equal to `value`.
pub fn ne<T>(value: T) -> Equals<T> {
    Equals {
        value,
        negated: true,
    }
}

/// Matches values less than `value`.
pub fn lt<T>(value: T) -> Compare<T> {
    Compare::new(value, Relation::Lt)
}

/// Matches values less than or equal to `value`.
pub fn le<T>(value: T) -> Compare<T> {
    Compare::new(value, Relation::Le)
}

/// Matches values greater than `value`.
pub fn gt<T>(value: T) -> Compare<T> {
    Compare::new(value, Relation::Gt)
}

/// Matches values greater than or equal to `value`.
pub fn ge<T>(value: T) -> Compare<T> {
    Compare::new(value, Relation::Ge)
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Equals<T> {
    value: T,
    negated: bool,
}

impl<T, X> Matcher<X> for Equals<T>
where
    T: PartialEq<X> + Debug,
{
    fn matches(&self, value: &X) -> bool {
        (self.value == *value) != self.negated
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = if self.negated { "ne" } else { "eq" };

        write!(f, "{name}({:?})", self.value)
    }
}

/// Ordering a [`Compare`] matcher checks for.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Relation {
    Lt,
    Le,
    Gt,
    Ge,
}

impl Relation {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Lt => ordering.is_lt(),
            Self::Le => ordering.is_le(),
            Self::Gt => ordering.is_gt(),
            Self::Ge => ordering.is_ge(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
        }
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Compare<T> {
    value: T,
    relation: Relation,
}

impl<T> Compare<T> {
    fn new(value: T, relation: Relation) -> Self {
        Self { value, relation }
    }
}

/// The argument is the left hand side: `lt(10)` matches `9`.
impl<T, X> Matcher<X> for Compare<T>
where
    X: PartialOrd<T>,
    T: Debug,
{
    fn matches(&self, value: &X) -> bool {
        value
            .partial_cmp(&self.value)
            .is_some_and(|ordering| self.relation.holds(ordering))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}({:?})", self.relation.name(), self.value)
    }
}
