//! Build errors for automaton and transition builders.

use super::validate::TableViolation;
use thiserror::Error;

/// Errors that can occur when building automatons and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition predicate not specified. Call .on(predicate) or .when(closure)")]
    MissingPredicate,

    #[error("Automaton table is invalid ({} violation(s))", .0.len())]
    InvalidTable(Vec<TableViolation>),
}
