//! Transitions: a predicate plus ordered alternative targets.

use crate::core::{Predicate, Trigger};
use std::sync::Arc;

/// A transition out of a state.
///
/// If the trigger fires, every target is an alternative continuation and
/// they are tried in list order. An empty target list is legal; such a
/// transition can fire but never leads anywhere.
#[derive(Debug)]
pub struct Transition<T, S> {
    pub trigger: Trigger<T>,
    pub targets: Vec<S>,
}

/// A state is defined by its transitions, in priority order.
pub type State<T, S> = Vec<Transition<T, S>>;

impl<T, S> Transition<T, S> {
    pub fn new(trigger: Trigger<T>, targets: Vec<S>) -> Self {
        Self { trigger, targets }
    }

    /// Transition owning its predicate.
    pub fn on<P>(predicate: P, targets: Vec<S>) -> Self
    where
        T: 'static,
        P: Predicate<T> + Send + Sync + 'static,
    {
        Self::new(Trigger::new(predicate), targets)
    }

    /// Transition sharing a predicate with other transitions.
    pub fn shared<P>(predicate: Arc<P>, targets: Vec<S>) -> Self
    where
        T: 'static,
        P: Predicate<T> + Send + Sync + ?Sized + 'static,
    {
        Self::new(Trigger::shared(predicate), targets)
    }

    /// Evaluate the trigger (pure)
    pub fn fire(&self, input: &[T]) -> Option<usize> {
        self.trigger.fire(input)
    }
}

impl<T, S: Clone> Clone for Transition<T, S> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.clone(),
            targets: self.targets.clone(),
        }
    }
}
