//! Error type for the optional options check.

use thiserror::Error;

/// Returned by [`WrapOptions::validate`](crate::WrapOptions::validate) for
/// configurations the wrapping rules handle only degenerately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A zero limit breaks on nearly every character.
    #[error("wrap limit must be positive")]
    ZeroLimit,
    /// A prefix that fills (or overfills) the limit leaves no budget for
    /// content on continuation lines.
    #[error("wrap limit {limit} leaves no room for the {prefix_runes}-character prefix")]
    PrefixExceedsLimit { limit: usize, prefix_runes: usize },
}
