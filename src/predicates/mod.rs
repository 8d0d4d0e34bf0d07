//! Built-in predicates.
//!
//! `CharacterPredicate` and `CharacterRangePredicate` inspect exactly one
//! element. `LiteralPredicate` consumes a whole sequence. All of them report
//! [`Verdict`](crate::core::Verdict) labels and carry only construction-time
//! fields, so they can be shared freely between transitions.

mod character;
mod literal;
mod range;

pub use character::CharacterPredicate;
pub use literal::LiteralPredicate;
pub use range::CharacterRangePredicate;
