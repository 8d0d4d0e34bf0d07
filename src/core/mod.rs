//! Core matching types.
//!
//! This module contains the pure vocabulary shared by predicates and the
//! automaton:
//! - Accept labels and the fail sentinel via the `Label` trait
//! - The `Predicate` trait and its `Match` outcome
//! - `Trigger`, the shared predicate handle stored on transitions
//!
//! Nothing in this module holds mutable state.

mod label;
mod predicate;
mod trigger;

pub use label::Label;
pub use predicate::{Match, Predicate, Verdict};
pub use trigger::Trigger;
