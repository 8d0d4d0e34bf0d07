//! Polymatch: a backtracking NFA matching engine with labelled accept states.
//!
//! An automaton is a table of states, each with an ordered list of
//! transitions, plus a table of accept states. Unlike a plain regular
//! expression engine, every accept state carries its own label, so one
//! automaton can tell the caller *which* pattern matched and how many input
//! elements it consumed.
//!
//! # Core Concepts
//!
//! - **Labels**: caller-defined outcomes, with a type-level fail sentinel
//! - **Predicates**: pure tests over a prefix of the input
//! - **Automaton**: ordered, first-success backtracking over transitions
//!
//! # Example
//!
//! ```rust
//! use polymatch::builder::{char_transition, range_transition, AutomatonBuilder};
//! use polymatch::core::Match;
//! use polymatch::label_enum;
//!
//! label_enum! {
//!     enum Case {
//!         NoMatch,
//!         Lower,
//!         Upper,
//!     }
//!     fail: NoMatch
//! }
//!
//! let automaton = AutomatonBuilder::new()
//!     .initial("start")
//!     .add_transition("start", char_transition('a', "letter"))
//!     .add_transition("letter", range_transition('a', 'z', "lower"))
//!     .add_transition("letter", range_transition('A', 'Z', "upper"))
//!     .accept("lower", Case::Lower)
//!     .accept("upper", Case::Upper)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(automaton.matches(&['a', 'b']), Match::accept(Case::Lower, 2));
//! assert_eq!(automaton.matches(&['a', 'B']), Match::accept(Case::Upper, 2));
//! assert_eq!(automaton.matches(&['a', '1']), Match::fail());
//! assert_eq!(automaton.matches(&['a']), Match::fail());
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod predicates;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError, TransitionBuilder};
pub use crate::core::{Label, Match, Predicate, Trigger, Verdict};
pub use crate::machine::{Automaton, MatchError, MatchLimits, Transition};
pub use crate::predicates::{CharacterPredicate, CharacterRangePredicate, LiteralPredicate};
