//! Errors for bounded matching.

use thiserror::Error;

/// Errors that can occur when a match runs under `MatchLimits`.
///
/// An ordinary non-match is not an error; it is `Match::fail()`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Step budget ({max}) exhausted before the match resolved")]
    StepBudgetExhausted { max: usize },

    #[error("Backtracking depth limit ({max}) exceeded")]
    DepthLimitExceeded { max: usize },
}
