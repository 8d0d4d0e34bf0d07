//! Single-element inclusive range predicate.

use crate::core::{Match, Predicate, Verdict};

/// Accepts exactly one element inside the inclusive range `[low, high]`.
///
/// The bounds are taken as given. A range with `low > high` contains
/// nothing, so it never matches (and its negation matches every element).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharacterRangePredicate<T> {
    low: T,
    high: T,
    negate: bool,
}

impl<T> CharacterRangePredicate<T> {
    /// Match one element in `[low, high]`.
    pub fn new(low: T, high: T) -> Self {
        Self::with_negate(low, high, false)
    }

    /// Match one element outside `[low, high]`.
    pub fn negated(low: T, high: T) -> Self {
        Self::with_negate(low, high, true)
    }

    pub fn with_negate(low: T, high: T, negate: bool) -> Self {
        Self { low, high, negate }
    }

    pub fn low(&self) -> &T {
        &self.low
    }

    pub fn high(&self) -> &T {
        &self.high
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

impl<T: PartialOrd> CharacterRangePredicate<T> {
    /// Check range membership, ignoring the negate flag.
    pub fn contains(&self, element: &T) -> bool {
        self.low <= *element && *element <= self.high
    }
}

impl<T: PartialOrd> Predicate<T> for CharacterRangePredicate<T> {
    type Label = Verdict;

    fn check(&self, input: &[T]) -> Match<Verdict> {
        match input.first() {
            Some(first) if self.contains(first) != self.negate => Match::accept(Verdict::Accept, 1),
            _ => Match::fail(),
        }
    }
}
