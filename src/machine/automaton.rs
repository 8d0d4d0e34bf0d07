//! The automaton: state table, acceptance table, and matching.

use super::error::MatchError;
use super::limits::MatchLimits;
use super::transition::{State, Transition};
use super::traversal;
use crate::core::{Label, Match, Predicate};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Non-deterministic finite automaton with labelled accept states.
///
/// The state table and the acceptance table are independent: a state may
/// appear only in the acceptance table, in which case it has no outgoing
/// transitions. Construction performs no validation. A transition target
/// that is in neither table simply fails when the traversal reaches it; use
/// [`validate`](crate::builder::validate) or a strict builder to catch such
/// tables up front.
///
/// The automaton is immutable once built, so one instance can be matched
/// from many threads at once.
///
/// # Example
///
/// ```rust
/// use polymatch::core::Match;
/// use polymatch::machine::{Automaton, Transition};
/// use polymatch::predicates::{CharacterPredicate, CharacterRangePredicate};
///
/// let automaton = Automaton::new(
///     0,
///     [
///         (0, vec![Transition::on(CharacterPredicate::new('a'), vec![1])]),
///         (
///             1,
///             vec![
///                 Transition::on(CharacterRangePredicate::new('a', 'z'), vec![2]),
///                 Transition::on(CharacterRangePredicate::new('A', 'Z'), vec![3]),
///             ],
///         ),
///     ],
///     [(2, Some("lower")), (3, Some("upper"))],
/// );
///
/// assert_eq!(automaton.matches(&['a', 'b']), Match::accept(Some("lower"), 2));
/// assert_eq!(automaton.matches(&['a', 'B']), Match::accept(Some("upper"), 2));
/// assert_eq!(automaton.matches(&['a', '1']), Match::fail());
/// ```
pub struct Automaton<T, S, L> {
    initial: S,
    states: HashMap<S, State<T, S>>,
    accepting: HashMap<S, L>,
}

impl<T, S, L> Automaton<T, S, L>
where
    S: Eq + Hash,
    L: Label,
{
    /// Create an automaton from its initial state and its two tables.
    pub fn new(
        initial: S,
        states: impl IntoIterator<Item = (S, State<T, S>)>,
        accepting: impl IntoIterator<Item = (S, L)>,
    ) -> Self {
        Self {
            initial,
            states: states.into_iter().collect(),
            accepting: accepting.into_iter().collect(),
        }
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Transitions out of `state`, in priority order.
    ///
    /// Empty for states absent from the state table.
    pub fn transitions(&self, state: &S) -> &[Transition<T, S>] {
        self.states.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn accept_label(&self, state: &S) -> Option<&L> {
        self.accepting.get(state)
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains_key(state)
    }

    /// Check if `state` is a key of either table.
    pub fn is_declared(&self, state: &S) -> bool {
        self.states.contains_key(state) || self.accepting.contains_key(state)
    }

    /// Every declared state: the keys of the state table and of the
    /// acceptance table, each once.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys().chain(
            self.accepting
                .keys()
                .filter(move |state| !self.states.contains_key(*state)),
        )
    }

    /// Match `input` from the initial state.
    ///
    /// Returns the label of the first accepting path found in priority order
    /// together with the number of elements it consumed, or `Match::fail()`.
    /// Elements after the accepting point are left unconsumed.
    pub fn matches(&self, input: &[T]) -> Match<L> {
        traversal::run(self, input, &MatchLimits::default()).unwrap_or_else(|_| Match::fail())
    }

    /// Match `input` under work limits.
    ///
    /// Gives the same result as [`matches`](Self::matches) whenever the
    /// limits are not hit.
    pub fn matches_within(&self, input: &[T], limits: &MatchLimits) -> Result<Match<L>, MatchError> {
        traversal::run(self, input, limits)
    }
}

/// An automaton is itself a variable-length predicate, so it can be nested
/// inside another automaton's transitions.
impl<T, S, L> Predicate<T> for Automaton<T, S, L>
where
    S: Eq + Hash,
    L: Label,
{
    type Label = L;

    fn check(&self, input: &[T]) -> Match<L> {
        self.matches(input)
    }
}

impl<T, S: Clone, L: Clone> Clone for Automaton<T, S, L> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            states: self.states.clone(),
            accepting: self.accepting.clone(),
        }
    }
}

impl<T, S: fmt::Debug, L: fmt::Debug> fmt::Debug for Automaton<T, S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("initial", &self.initial)
            .field(
                "states",
                &self
                    .states
                    .iter()
                    .map(|(state, transitions)| {
                        let targets: Vec<&Vec<S>> = transitions.iter().map(|t| &t.targets).collect();
                        (state, targets)
                    })
                    .collect::<Vec<_>>(),
            )
            .field("accepting", &self.accepting)
            .finish()
    }
}
