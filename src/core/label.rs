//! Accept labels and the fail sentinel.
//!
//! A label is whatever the caller wants back from a successful match. Every
//! label type reserves one value, the fail sentinel, to mean "no match".

use std::fmt::Debug;

/// Trait for values returned by a match.
///
/// The fail sentinel is fixed at the type level by [`Label::fail`]. Callers
/// must never attach the sentinel to an accept state: a match that reaches
/// such a state is indistinguishable from a failure.
///
/// # Required Traits
///
/// - `Clone`: labels are copied out of the acceptance table on success
/// - `PartialEq`: success is decided by comparing against the sentinel
/// - `Debug`: labels appear in diagnostics
///
/// # Example
///
/// ```rust
/// use polymatch::core::Label;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Token {
///     NoMatch,
///     Number,
///     Identifier,
/// }
///
/// impl Label for Token {
///     fn fail() -> Self {
///         Self::NoMatch
///     }
/// }
///
/// assert!(Token::NoMatch.is_fail());
/// assert!(!Token::Number.is_fail());
/// ```
pub trait Label: Clone + PartialEq + Debug {
    /// The sentinel value meaning "matching failed".
    fn fail() -> Self;

    /// Check if this value is the fail sentinel.
    fn is_fail(&self) -> bool {
        *self == Self::fail()
    }
}

/// `None` is the sentinel, so any `Some` value is a legitimate label.
impl<T: Clone + PartialEq + Debug> Label for Option<T> {
    fn fail() -> Self {
        None
    }

    fn is_fail(&self) -> bool {
        self.is_none()
    }
}
