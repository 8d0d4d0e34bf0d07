//! Builder for constructing automatons.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::builder::validate::validate;
use crate::core::Label;
use crate::machine::{Automaton, State, Transition};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use stillwater::validation::Validation;

/// Builder for constructing automatons with a fluent API.
///
/// Transitions added for the same source state keep their insertion order,
/// which is their priority during matching.
pub struct AutomatonBuilder<T, S, L> {
    initial: Option<S>,
    states: HashMap<S, State<T, S>>,
    accepting: HashMap<S, L>,
    strict: bool,
}

impl<T, S, L> AutomatonBuilder<T, S, L>
where
    S: Eq + Hash + Debug,
    L: Label,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: HashMap::new(),
            accepting: HashMap::new(),
            strict: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(self, from: S, builder: TransitionBuilder<T, S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        Ok(self.add_transition(from, transition))
    }

    /// Add a pre-built transition after any existing ones for `from`.
    pub fn add_transition(mut self, from: S, transition: Transition<T, S>) -> Self {
        self.states.entry(from).or_default().push(transition);
        self
    }

    /// Add multiple transitions for one state at once.
    pub fn transitions(mut self, from: S, transitions: Vec<Transition<T, S>>) -> Self {
        self.states.entry(from).or_default().extend(transitions);
        self
    }

    /// Declare a state in the state table, with no transitions yet.
    pub fn state(mut self, state: S) -> Self {
        self.states.entry(state).or_default();
        self
    }

    /// Mark a state as accepting with `label`.
    pub fn accept(mut self, state: S, label: L) -> Self {
        self.accepting.insert(state, label);
        self
    }

    /// Reject tables with unknown states or sentinel-labelled accept states
    /// at build time instead of letting them fail during matching.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing, or, when strict,
    /// if the table has any violations.
    pub fn build(self) -> Result<Automaton<T, S, L>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let automaton = Automaton::new(initial, self.states, self.accepting);

        if self.strict {
            if let Validation::Failure(violations) = validate(&automaton) {
                return Err(BuildError::InvalidTable(violations.iter().cloned().collect()));
            }
        }

        Ok(automaton)
    }
}

impl<T, S, L> Default for AutomatonBuilder<T, S, L>
where
    S: Eq + Hash + Debug,
    L: Label,
{
    fn default() -> Self {
        Self::new()
    }
}
