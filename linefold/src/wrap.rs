//! Single-pass word wrapping.
//!
//! One forward scan over the input characters, tracking a pending word run
//! and a pending space run. Breaks are only inserted at whitespace unless
//! [`WrapOptions::break_words`] is set; hard breaks already in the input
//! are passed through untouched.

use log::{debug, trace};

use crate::options::WrapOptions;

/// Non-breaking space. Classified as an ordinary character, never as a
/// break opportunity.
const NBSP: char = '\u{a0}';

/// A pending run of characters, with its length tracked in characters
/// rather than bytes.
#[derive(Debug, Default)]
struct RuneBuf {
    text: String,
    runes: usize,
}

impl RuneBuf {
    fn push(&mut self, ch: char) {
        self.text.push(ch);
        self.runes += 1;
    }

    fn runes(&self) -> usize {
        self.runes
    }

    fn is_empty(&self) -> bool {
        self.runes == 0
    }

    fn clear(&mut self) {
        self.text.clear();
        self.runes = 0;
    }

    /// Append the buffered run to `out` and reset.
    fn flush_into(&mut self, out: &mut String) {
        out.push_str(&self.text);
        self.clear();
    }
}

/// Rewrap `input` so that no line exceeds `opts.limit` characters, breaking
/// at whitespace.
///
/// Hard breaks (`\n`) in the input are always preserved. Whitespace runs on
/// which a line is broken are dropped, as is whitespace that would lead a
/// new line. A word longer than the remaining budget on an empty line
/// overruns the limit unless `break_words` is set, in which case it is
/// split at the overflow boundary. A non-breaking space (U+00A0) counts as
/// part of the word around it and is never a break point.
///
/// The function is total: every input and every configuration produce an
/// output, and no characters are ever dropped apart from the trimmed
/// whitespace described above. Degenerate limits (zero, or smaller than
/// the prefix) are not rejected here; see
/// [`WrapOptions::validate`](crate::WrapOptions::validate).
///
/// ```
/// use linefold::{wrap, WrapOptions};
///
/// assert_eq!(wrap("foo bar baz", &WrapOptions::new(4)), "foo\nbar\nbaz");
/// ```
pub fn wrap(input: &str, opts: &WrapOptions) -> String {
    let prefix_runes = opts.prefix.chars().count();
    if opts.limit == 0 || prefix_runes >= opts.limit {
        debug!(
            "degenerate wrap options: limit {} with {}-character prefix",
            opts.limit, prefix_runes
        );
    }

    let mut out = String::with_capacity(input.len() + input.len() / 8);
    // Characters already committed to the current output line, prefix
    // included.
    let mut current = 0usize;
    let mut word = RuneBuf::default();
    let mut space = RuneBuf::default();

    for ch in input.chars() {
        if ch == '\n' {
            // Hard break: flush what is pending, drop the space run, and
            // emit the newline itself so explicit breaks survive verbatim.
            if !word.is_empty() {
                space.flush_into(&mut out);
                word.flush_into(&mut out);
            }
            space.clear();
            out.push(ch);
            current = 0;
            continue;
        }

        if ch.is_whitespace() && ch != NBSP {
            if !word.is_empty() {
                current += space.runes() + word.runes();
                space.flush_into(&mut out);
                word.flush_into(&mut out);
                if current >= opts.limit {
                    current = break_line(&mut out, opts, prefix_runes);
                }
            }
            // At a line start the run would become leading whitespace;
            // drop it.
            if current > 0 {
                space.push(ch);
            }
            continue;
        }

        word.push(ch);

        if current + word.runes() + space.runes() > opts.limit {
            if current > prefix_runes {
                // The line already holds content beyond the prefix; break
                // here and carry the unfinished word onto the next line.
                // The pending space run is superseded by the break.
                current = break_line(&mut out, opts, prefix_runes);
                space.clear();
            } else if opts.break_words {
                trace!("splitting word at limit {}", opts.limit);
                word.flush_into(&mut out);
                space.clear();
                current = break_line(&mut out, opts, prefix_runes);
            }
            // Otherwise the word sits alone on its line and is longer
            // than the budget; it is allowed to overrun.
        }
    }

    if !word.is_empty() {
        space.flush_into(&mut out);
        word.flush_into(&mut out);
    }

    out
}

/// Positional convenience form of [`wrap`], with word breaking off.
pub fn wrap_str(input: &str, prefix: &str, limit: usize, linebreak: &str) -> String {
    wrap(
        input,
        &WrapOptions::new(limit).prefix(prefix).linebreak(linebreak),
    )
}

/// Emit the configured break sequence plus the per-line prefix, returning
/// the character count the new line starts with.
fn break_line(out: &mut String, opts: &WrapOptions, prefix_runes: usize) -> usize {
    out.push_str(opts.linebreak_str());
    if opts.prefix.is_empty() {
        return 0;
    }
    out.push_str(&opts.prefix);
    prefix_runes
}
