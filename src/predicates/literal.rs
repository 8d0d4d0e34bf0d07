//! Fixed-sequence predicate.

use crate::core::{Match, Predicate, Verdict};

/// Accepts the input if it starts with a literal sequence, consuming the
/// whole literal.
///
/// An empty literal never matches: a predicate that fires without consuming
/// anything would let a cycle in the automaton spin in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralPredicate<T> {
    literal: Vec<T>,
}

impl<T> LiteralPredicate<T> {
    pub fn new(literal: impl IntoIterator<Item = T>) -> Self {
        Self {
            literal: literal.into_iter().collect(),
        }
    }

    pub fn literal(&self) -> &[T] {
        &self.literal
    }
}

impl LiteralPredicate<char> {
    /// Literal over the characters of `text`.
    pub fn from_chars(text: &str) -> Self {
        Self::new(text.chars())
    }
}

impl<T: PartialEq> Predicate<T> for LiteralPredicate<T> {
    type Label = Verdict;

    fn check(&self, input: &[T]) -> Match<Verdict> {
        if !self.literal.is_empty() && input.starts_with(&self.literal) {
            Match::accept(Verdict::Accept, self.literal.len())
        } else {
            Match::fail()
        }
    }
}
