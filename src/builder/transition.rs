//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Predicate, Trigger};
use crate::machine::Transition;
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<T, S> {
    trigger: Option<Trigger<T>>,
    targets: Vec<S>,
}

impl<T, S> TransitionBuilder<T, S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            trigger: None,
            targets: Vec::new(),
        }
    }

    /// Set the predicate (required).
    pub fn on<P>(mut self, predicate: P) -> Self
    where
        T: 'static,
        P: Predicate<T> + Send + Sync + 'static,
    {
        self.trigger = Some(Trigger::new(predicate));
        self
    }

    /// Set a predicate shared with other transitions.
    pub fn shared<P>(mut self, predicate: Arc<P>) -> Self
    where
        T: 'static,
        P: Predicate<T> + Send + Sync + ?Sized + 'static,
    {
        self.trigger = Some(Trigger::shared(predicate));
        self
    }

    /// Set the predicate from a closure returning the consumed count.
    pub fn when<F>(mut self, probe: F) -> Self
    where
        T: 'static,
        F: Fn(&[T]) -> Option<usize> + Send + Sync + 'static,
    {
        self.trigger = Some(Trigger::from_fn(probe));
        self
    }

    /// Set a pre-built trigger.
    pub fn trigger(mut self, trigger: Trigger<T>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Append a target. Targets are tried in the order they are added.
    pub fn to(mut self, target: S) -> Self {
        self.targets.push(target);
        self
    }

    /// Append several targets.
    pub fn targets(mut self, targets: impl IntoIterator<Item = S>) -> Self {
        self.targets.extend(targets);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<T, S>, BuildError> {
        let trigger = self.trigger.ok_or(BuildError::MissingPredicate)?;

        Ok(Transition::new(trigger, self.targets))
    }
}

impl<T, S> Default for TransitionBuilder<T, S> {
    fn default() -> Self {
        Self::new()
    }
}
