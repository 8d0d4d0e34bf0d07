//! Optional table validation.
//!
//! `Automaton::new` accepts any table, and problems only show up later as
//! failed matches. `validate` inspects a table up front and reports every
//! problem at once, accumulating violations with Stillwater's `Validation`
//! instead of stopping at the first one.

use crate::core::Label;
use crate::machine::Automaton;
use std::fmt::Debug;
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A problem found in an automaton table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("Initial state '{state}' is in neither the state table nor the acceptance table")]
    UnknownInitialState { state: String },

    #[error("State '{from}' targets '{target}', which is in neither table")]
    UnknownTarget { from: String, target: String },

    #[error("Accept state '{state}' is labelled with the fail sentinel")]
    FailSentinelAccept { state: String },
}

/// Validate an automaton table, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the table is well formed.
///
/// # Example
///
/// ```rust
/// use polymatch::builder::{char_transition, validate, TableViolation};
/// use polymatch::machine::Automaton;
/// use stillwater::validation::Validation;
///
/// let automaton = Automaton::new(
///     "start",
///     [("start", vec![char_transition('a', "nowhere")])],
///     [("done", Some(1))],
/// );
///
/// match validate(&automaton) {
///     Validation::Failure(violations) => assert!(violations
///         .iter()
///         .any(|v| matches!(v, TableViolation::UnknownTarget { .. }))),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn validate<T, S, L>(automaton: &Automaton<T, S, L>) -> Validation<(), NonEmptyVec<TableViolation>>
where
    S: Eq + Hash + Debug,
    L: Label,
{
    let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

    let initial = automaton.initial_state();
    if !automaton.is_declared(initial) {
        checks.push(Validation::fail(TableViolation::UnknownInitialState {
            state: format!("{initial:?}"),
        }));
    }

    for state in automaton.states() {
        for transition in automaton.transitions(state) {
            for target in transition.targets.iter().filter(|t| !automaton.is_declared(t)) {
                checks.push(Validation::fail(TableViolation::UnknownTarget {
                    from: format!("{state:?}"),
                    target: format!("{target:?}"),
                }));
            }
        }

        if automaton.accept_label(state).is_some_and(Label::is_fail) {
            checks.push(Validation::fail(TableViolation::FailSentinelAccept {
                state: format!("{state:?}"),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
