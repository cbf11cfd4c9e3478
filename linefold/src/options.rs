//! Wrapping configuration.

use crate::error::OptionsError;

/// Line-feed break sequence, the default when none is set.
pub const LF: &str = "\n";

/// Carriage-return + line-feed break sequence, for protocols that fold
/// header lines with CRLF (e.g. email headers).
pub const CRLF: &str = "\r\n";

/// Configuration for a single [`wrap`](crate::wrap) call.
///
/// Built with chained setters:
///
/// ```
/// use linefold::{WrapOptions, CRLF};
///
/// let opts = WrapOptions::new(76).prefix("\t").linebreak(CRLF);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WrapOptions {
    /// Maximum line length in characters, not bytes. A line exceeds this
    /// only when a single word is longer than the limit and `break_words`
    /// is off; such a word passes through whole, never truncated.
    pub limit: usize,
    /// Prepended to every line after the first and after every inserted
    /// break. Its character length counts toward the line budget.
    pub prefix: String,
    /// Sequence emitted on an inserted break. `None` means [`LF`]. Hard
    /// breaks already present in the input are always emitted as a single
    /// line feed regardless of this setting.
    pub linebreak: Option<String>,
    /// Split a word at the overflow boundary when it cannot fit on a line
    /// by itself. Off by default: overlong words overrun the limit instead.
    pub break_words: bool,
}

impl WrapOptions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn linebreak(mut self, linebreak: impl Into<String>) -> Self {
        self.linebreak = Some(linebreak.into());
        self
    }

    pub fn break_words(mut self, break_words: bool) -> Self {
        self.break_words = break_words;
        self
    }

    /// Check for degenerate configurations.
    ///
    /// [`wrap`](crate::wrap) never calls this: it is total over any
    /// options, and a zero limit or a prefix longer than the limit simply
    /// produces very frequent breaking. Callers that want to reject such
    /// configurations up front can opt in here.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.limit == 0 {
            return Err(OptionsError::ZeroLimit);
        }
        let prefix_runes = self.prefix.chars().count();
        if prefix_runes >= self.limit {
            return Err(OptionsError::PrefixExceedsLimit {
                limit: self.limit,
                prefix_runes,
            });
        }
        Ok(())
    }

    pub(crate) fn linebreak_str(&self) -> &str {
        self.linebreak.as_deref().unwrap_or(LF)
    }
}
