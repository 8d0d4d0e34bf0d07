//! Optional bounds on a single match.
//!
//! Matching is exponential in the worst case and has no built-in timeout.
//! Callers that need bounded latency can cap the work of one call with
//! `MatchLimits`. The default is unlimited.

use serde::{Deserialize, Serialize};

/// Work limits applied by `Automaton::matches_within`.
///
/// # Example
///
/// ```rust
/// use polymatch::machine::MatchLimits;
///
/// let limits = MatchLimits::new().max_steps(10_000).max_depth(512);
///
/// assert_eq!(limits.step_limit(), Some(10_000));
/// assert_eq!(limits.depth_limit(), Some(512));
/// assert!(MatchLimits::default().is_unlimited());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchLimits {
    pub(crate) max_steps: Option<usize>,
    pub(crate) max_depth: Option<usize>,
}

impl MatchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of states entered (the initial state counts as one)
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Cap the depth of the backtracking stack
    pub fn max_depth(mut self, n: usize) -> Self {
        self.max_depth = Some(n);
        self
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.max_steps
    }

    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_steps.is_none() && self.max_depth.is_none()
    }
}
