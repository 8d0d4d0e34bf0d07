//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders, optional table validation, and a
//! macro for label enums. None of it is required: `Automaton::new` accepts
//! tables directly.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;
pub mod validate;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
pub use transition::TransitionBuilder;
pub use validate::{validate, TableViolation};

use crate::machine::Transition;
use crate::predicates::{CharacterPredicate, CharacterRangePredicate};

/// Create a transition on a single element equal to `element`.
///
/// # Example
///
/// ```
/// use polymatch::builder::char_transition;
///
/// let transition = char_transition('a', "next");
///
/// assert_eq!(transition.fire(&['a']), Some(1));
/// assert_eq!(transition.targets, vec!["next"]);
/// ```
pub fn char_transition<T, S>(element: T, to: S) -> Transition<T, S>
where
    T: PartialEq + Send + Sync + 'static,
{
    Transition::on(CharacterPredicate::new(element), vec![to])
}

/// Create a transition on a single element in `[low, high]`.
///
/// # Example
///
/// ```
/// use polymatch::builder::range_transition;
///
/// let transition = range_transition(b'0', b'9', 1);
///
/// assert_eq!(transition.fire(b"7"), Some(1));
/// assert_eq!(transition.fire(b"x"), None);
/// ```
pub fn range_transition<T, S>(low: T, high: T, to: S) -> Transition<T, S>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Transition::on(CharacterRangePredicate::new(low, high), vec![to])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Digit,
        Letter,
    }

    #[test]
    fn char_transition_builds() {
        let transition = char_transition('x', TestState::Letter);

        assert_eq!(transition.targets, vec![TestState::Letter]);
        assert_eq!(transition.fire(&['x']), Some(1));
        assert_eq!(transition.fire(&['y']), None);
    }

    #[test]
    fn range_transition_builds() {
        let transition = range_transition('0', '9', TestState::Digit);

        assert_eq!(transition.targets, vec![TestState::Digit]);
        assert_eq!(transition.fire(&['5']), Some(1));
        assert_eq!(transition.fire(&['a']), None);
    }
}
