//! Type-erased predicate handles stored on transitions.
//!
//! Transitions only care whether a predicate fired and how much it consumed,
//! not which label it reported. A `Trigger` erases the predicate type down to
//! that answer so predicates with different label types can share one table.

use super::predicate::Predicate;
use std::fmt;
use std::sync::Arc;

type Probe<T> = Arc<dyn Fn(&[T]) -> Option<usize> + Send + Sync>;

/// Shared, immutable handle to a predicate.
///
/// Cloning a trigger shares the underlying predicate rather than copying it.
///
/// # Example
///
/// ```rust
/// use polymatch::core::Trigger;
/// use polymatch::predicates::CharacterPredicate;
///
/// let is_a = Trigger::new(CharacterPredicate::new('a'));
///
/// assert_eq!(is_a.fire(&['a', 'b']), Some(1));
/// assert_eq!(is_a.fire(&['b']), None);
/// ```
pub struct Trigger<T> {
    probe: Probe<T>,
}

impl<T: 'static> Trigger<T> {
    /// Create a trigger that owns `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + Send + Sync + 'static,
    {
        Self::shared(Arc::new(predicate))
    }

    /// Create a trigger from a predicate that is shared elsewhere.
    pub fn shared<P>(predicate: Arc<P>) -> Self
    where
        P: Predicate<T> + Send + Sync + ?Sized + 'static,
    {
        Trigger {
            probe: Arc::new(move |input: &[T]| {
                let outcome = predicate.check(input);
                if outcome.is_match() {
                    Some(outcome.consumed)
                } else {
                    None
                }
            }),
        }
    }

    /// Create a trigger from a closure returning the consumed count on success.
    ///
    /// The closure must be pure, as for any predicate.
    pub fn from_fn<F>(probe: F) -> Self
    where
        F: Fn(&[T]) -> Option<usize> + Send + Sync + 'static,
    {
        Trigger {
            probe: Arc::new(probe),
        }
    }
}

impl<T> Trigger<T> {
    /// Evaluate against the front of `input`, returning the consumed count
    /// if the predicate fired.
    pub fn fire(&self, input: &[T]) -> Option<usize> {
        (self.probe)(input)
    }
}

impl<T> Clone for Trigger<T> {
    fn clone(&self) -> Self {
        Self {
            probe: Arc::clone(&self.probe),
        }
    }
}

impl<T> fmt::Debug for Trigger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Match, Verdict};

    struct Pair;

    impl Predicate<u8> for Pair {
        type Label = Verdict;

        fn check(&self, input: &[u8]) -> Match<Verdict> {
            if input.len() >= 2 && input[0] == input[1] {
                Match::accept(Verdict::Accept, 2)
            } else {
                Match::fail()
            }
        }
    }

    #[test]
    fn trigger_reports_consumed_count() {
        let trigger = Trigger::new(Pair);

        assert_eq!(trigger.fire(b"aab"), Some(2));
        assert_eq!(trigger.fire(b"ab"), None);
        assert_eq!(trigger.fire(b""), None);
    }

    #[test]
    fn shared_trigger_uses_same_predicate() {
        let predicate = Arc::new(Pair);
        let first = Trigger::shared(Arc::clone(&predicate));
        let second = first.clone();

        assert_eq!(Arc::strong_count(&predicate), 2);
        assert_eq!(second.fire(b"zz"), Some(2));
    }

    #[test]
    fn closure_trigger() {
        let trigger = Trigger::from_fn(|input: &[u8]| {
            input.first().filter(|b| b.is_ascii_digit()).map(|_| 1)
        });

        assert_eq!(trigger.fire(b"7"), Some(1));
        assert_eq!(trigger.fire(b"x"), None);
    }

    #[test]
    fn trigger_is_deterministic() {
        let trigger = Trigger::new(Pair);

        assert_eq!(trigger.fire(b"cc"), trigger.fire(b"cc"));
    }
}
