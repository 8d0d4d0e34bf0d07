//! Ordered backtracking traversal.
//!
//! The search is depth-first and priority-ordered: transitions are tried in
//! declared order, and for each transition that fires its targets are tried
//! in declared order. The first path that ends in an accepting terminal state
//! wins. Each frame on the explicit stack remembers how far through its
//! transitions and targets it has got, so popping a frame is exactly the
//! return of a failed recursive call.

use super::automaton::Automaton;
use super::error::MatchError;
use super::limits::MatchLimits;
use super::transition::Transition;
use crate::core::{Label, Match};
use std::hash::Hash;

/// Targets of a transition that fired, still waiting to be tried.
struct Alternatives<'a, S> {
    targets: &'a [S],
    next_target: usize,
    position: usize,
}

/// A state being expanded: it has transitions and input remains.
struct Frame<'a, T, S> {
    transitions: &'a [Transition<T, S>],
    position: usize,
    next_transition: usize,
    pending: Option<Alternatives<'a, S>>,
}

impl<'a, T, S> Frame<'a, T, S> {
    fn new(transitions: &'a [Transition<T, S>], position: usize) -> Self {
        Self {
            transitions,
            position,
            next_transition: 0,
            pending: None,
        }
    }

    /// Next `(target, position)` to try from this state, in priority order.
    fn next_candidate(&mut self, input: &[T]) -> Option<(&'a S, usize)> {
        loop {
            if let Some(alternatives) = self.pending.as_mut() {
                let targets = alternatives.targets;
                if let Some(target) = targets.get(alternatives.next_target) {
                    alternatives.next_target += 1;
                    return Some((target, alternatives.position));
                }
            }
            self.pending = None;

            let transitions = self.transitions;
            let transition = transitions.get(self.next_transition)?;
            self.next_transition += 1;

            // A predicate claiming more than what remains is treated as not firing
            let advanced = transition
                .fire(&input[self.position..])
                .and_then(|consumed| self.position.checked_add(consumed))
                .filter(|position| *position <= input.len());

            if let Some(position) = advanced {
                self.pending = Some(Alternatives {
                    targets: &transition.targets,
                    next_target: 0,
                    position,
                });
            }
        }
    }
}

enum Entry<'a, T, S, L> {
    /// The terminal check triggered
    Resolved(Match<L>),
    /// The state must be searched
    Expand(Frame<'a, T, S>),
}

fn enter<'a, T, S, L>(
    automaton: &'a Automaton<T, S, L>,
    state: &S,
    input: &[T],
    position: usize,
) -> Entry<'a, T, S, L>
where
    S: Eq + Hash,
    L: Label,
{
    let transitions = automaton.transitions(state);

    if position == input.len() || transitions.is_empty() {
        let outcome = match automaton.accept_label(state) {
            Some(label) => Match::accept(label.clone(), position),
            None => Match::fail(),
        };
        return Entry::Resolved(outcome);
    }

    Entry::Expand(Frame::new(transitions, position))
}

fn charge(steps: &mut usize, limits: &MatchLimits) -> Result<(), MatchError> {
    if let Some(max) = limits.max_steps {
        if *steps >= max {
            return Err(MatchError::StepBudgetExhausted { max });
        }
    }
    *steps += 1;
    Ok(())
}

/// Run the traversal from the initial state.
///
/// With unlimited `limits` this never returns an error.
pub(crate) fn run<T, S, L>(
    automaton: &Automaton<T, S, L>,
    input: &[T],
    limits: &MatchLimits,
) -> Result<Match<L>, MatchError>
where
    S: Eq + Hash,
    L: Label,
{
    let mut steps = 0;
    let mut stack: Vec<Frame<'_, T, S>> = Vec::new();
    let mut next = Some((automaton.initial_state(), 0));

    loop {
        if let Some((state, position)) = next.take() {
            charge(&mut steps, limits)?;

            match enter(automaton, state, input, position) {
                Entry::Resolved(outcome) => {
                    if outcome.is_match() {
                        return Ok(outcome);
                    }
                }
                Entry::Expand(frame) => {
                    if let Some(max) = limits.max_depth {
                        if stack.len() >= max {
                            return Err(MatchError::DepthLimitExceeded { max });
                        }
                    }
                    stack.push(frame);
                }
            }
        }

        let Some(frame) = stack.last_mut() else {
            return Ok(Match::fail());
        };

        match frame.next_candidate(input) {
            Some(candidate) => next = Some(candidate),
            None => {
                stack.pop();
            }
        }
    }
}
