//! The predicate abstraction that transitions delegate to.
//!
//! A predicate looks at the front of the remaining input and answers two
//! questions at once: does it accept what it sees, and how many elements
//! does that cost. Both answers travel in a [`Match`].

use super::label::Label;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of matching a prefix of the input.
///
/// A failed match always carries the fail sentinel and a zero consumed
/// count. Failure never reports partial consumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match<L> {
    /// The label of what was matched, or the fail sentinel
    pub label: L,
    /// Number of input elements consumed by the match
    pub consumed: usize,
}

impl<L: Label> Match<L> {
    /// The failed outcome: `(fail sentinel, 0)`.
    pub fn fail() -> Self {
        Self {
            label: L::fail(),
            consumed: 0,
        }
    }

    /// A successful outcome consuming `consumed` elements.
    pub fn accept(label: L, consumed: usize) -> Self {
        Self { label, consumed }
    }

    /// Check if this outcome is a success (label is not the fail sentinel).
    pub fn is_match(&self) -> bool {
        !self.label.is_fail()
    }

    /// Split into `(label, consumed)`.
    pub fn into_parts(self) -> (L, usize) {
        (self.label, self.consumed)
    }
}

impl<L> From<Match<L>> for (L, usize) {
    fn from(outcome: Match<L>) -> Self {
        (outcome.label, outcome.consumed)
    }
}

/// Binary label produced by the built-in predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Reject,
    Accept,
}

impl Label for Verdict {
    fn fail() -> Self {
        Self::Reject
    }
}

/// Pure test over a prefix of the input.
///
/// Implementations must be free of side effects: the same input always
/// yields the same outcome. Empty input has no element to inspect and
/// should fail. On success `consumed` may be any count up to `input.len()`,
/// so predicates can match single elements or whole sequences.
///
/// # Example
///
/// ```rust
/// use polymatch::core::{Match, Predicate, Verdict};
///
/// struct Digit;
///
/// impl Predicate<char> for Digit {
///     type Label = Verdict;
///
///     fn check(&self, input: &[char]) -> Match<Verdict> {
///         match input.first() {
///             Some(c) if c.is_ascii_digit() => Match::accept(Verdict::Accept, 1),
///             _ => Match::fail(),
///         }
///     }
/// }
///
/// assert!(Digit.check(&['7']).is_match());
/// assert_eq!(Digit.check(&[]), Match::fail());
/// ```
pub trait Predicate<T> {
    /// Label reported on success
    type Label: Label;

    /// Match against the front of `input`.
    fn check(&self, input: &[T]) -> Match<Self::Label>;
}

impl<T, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    type Label = P::Label;

    fn check(&self, input: &[T]) -> Match<Self::Label> {
        (**self).check(input)
    }
}

impl<T, P: Predicate<T> + ?Sized> Predicate<T> for Arc<P> {
    type Label = P::Label;

    fn check(&self, input: &[T]) -> Match<Self::Label> {
        (**self).check(input)
    }
}
