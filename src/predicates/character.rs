//! Single-element equality predicate.

use crate::core::{Match, Predicate, Verdict};

/// Accepts exactly one element equal to a target value.
///
/// When negated it accepts exactly one element that is *not* equal to the
/// target. Empty input fails either way.
///
/// # Example
///
/// ```rust
/// use polymatch::core::Predicate;
/// use polymatch::predicates::CharacterPredicate;
///
/// let not_x = CharacterPredicate::negated('x');
///
/// assert_eq!(not_x.check(&['y']).consumed, 1);
/// assert!(!not_x.check(&['x']).is_match());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharacterPredicate<T> {
    target: T,
    negate: bool,
}

impl<T> CharacterPredicate<T> {
    /// Match exactly `target`.
    pub fn new(target: T) -> Self {
        Self::with_negate(target, false)
    }

    /// Match any single element except `target`.
    pub fn negated(target: T) -> Self {
        Self::with_negate(target, true)
    }

    pub fn with_negate(target: T, negate: bool) -> Self {
        Self { target, negate }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

impl<T: PartialEq> Predicate<T> for CharacterPredicate<T> {
    type Label = Verdict;

    fn check(&self, input: &[T]) -> Match<Verdict> {
        match input.first() {
            Some(first) if (*first == self.target) != self.negate => {
                Match::accept(Verdict::Accept, 1)
            }
            _ => Match::fail(),
        }
    }
}
