//! The automaton and its matching algorithm.
//!
//! # Key Concepts
//!
//! - **Transitions**: a trigger plus an ordered list of alternative targets
//! - **Automaton**: state table, acceptance table, and `matches`
//! - **Traversal**: first-success, priority-ordered backtracking on an
//!   explicit stack, so input length is not bounded by the call stack
//! - **Limits**: optional per-call work caps for callers needing bounded latency

mod automaton;
mod error;
mod limits;
mod transition;
mod traversal;

pub use automaton::Automaton;
pub use error::MatchError;
pub use limits::MatchLimits;
pub use transition::{State, Transition};
