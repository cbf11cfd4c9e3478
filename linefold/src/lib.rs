//! Single-pass text reflow for fixed-width contexts.
//!
//! Rewraps free text so that no line exceeds a limit measured in
//! characters, breaking only at whitespace. Intended for terminal output
//! and for folding long protocol header lines (CRLF continuation with a
//! per-line prefix, as in email headers).
//!
//! ```
//! use linefold::{wrap, WrapOptions, CRLF};
//!
//! assert_eq!(wrap("foo bar baz", &WrapOptions::new(4)), "foo\nbar\nbaz");
//!
//! let folded = wrap(
//!     "X-Header: some very long value",
//!     &WrapOptions::new(16).prefix("\t").linebreak(CRLF),
//! );
//! assert_eq!(folded, "X-Header: some\r\n\tvery long value");
//! ```

pub mod error;
pub mod options;
pub mod wrap;

pub use error::OptionsError;
pub use options::{WrapOptions, CRLF, LF};
pub use wrap::{wrap, wrap_str};
