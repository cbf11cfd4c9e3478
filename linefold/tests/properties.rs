//! Property-based tests for the wrapping invariants.

use linefold::{wrap, WrapOptions, CRLF};
use proptest::prelude::*;

/// Strip every whitespace character, leaving only word content.
fn word_content(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn no_silent_truncation(
        input in "[a-zA-Z0-9 \t\n]{0,200}",
        limit in 0usize..40,
        break_words in any::<bool>(),
    ) {
        let opts = WrapOptions::new(limit).break_words(break_words);
        let output = wrap(&input, &opts);
        // Word characters survive wrapping exactly, in order.
        prop_assert_eq!(word_content(&output), word_content(&input));
    }

    #[test]
    fn hard_breaks_preserved(
        input in "[a-z \n]{0,200}",
        limit in 1usize..40,
    ) {
        // With a CRLF soft break, a bare \n in the output can only come
        // from a hard break in the input.
        let opts = WrapOptions::new(limit).linebreak(CRLF);
        let output = wrap(&input, &opts);
        let hard_in = input.matches('\n').count();
        let hard_out = output.replace("\r\n", "").matches('\n').count();
        prop_assert_eq!(hard_out, hard_in);
    }

    #[test]
    fn width_bound_without_long_words(
        words in prop::collection::vec("[a-z]{1,5}", 0..40),
        limit in 5usize..40,
    ) {
        // No word exceeds the limit, so no line may either.
        let input = words.join(" ");
        let output = wrap(&input, &WrapOptions::new(limit));
        for line in output.split('\n') {
            prop_assert!(line.chars().count() <= limit);
        }
    }

    #[test]
    fn width_bound_with_break_words(
        input in "[a-zA-Z0-9 \n]{0,300}",
        limit in 1usize..30,
    ) {
        // A split happens once the overflowing character is already
        // buffered, so the mechanical bound is limit + 1.
        let opts = WrapOptions::new(limit).break_words(true);
        let output = wrap(&input, &opts);
        for line in output.split('\n') {
            prop_assert!(line.chars().count() <= limit + 1);
        }
    }

    #[test]
    fn soft_broken_lines_start_with_prefix(
        input in "[a-z ]{0,200}",
        limit in 4usize..40,
    ) {
        let opts = WrapOptions::new(limit).prefix("\t").linebreak(CRLF);
        let output = wrap(&input, &opts);
        for continuation in output.split("\r\n").skip(1) {
            prop_assert!(continuation.starts_with('\t'));
        }
    }

    #[test]
    fn non_breaking_space_runs_never_split(
        parts in prop::collection::vec("[a-z]{1,4}", 1..6),
        limit in 1usize..10,
    ) {
        // A run joined only by U+00A0 is one word; it passes through
        // whole no matter how small the limit.
        let input = parts.join("\u{a0}");
        let output = wrap(&input, &WrapOptions::new(limit));
        prop_assert_eq!(output, input);
    }

    #[test]
    fn wrapping_is_deterministic(
        input in "[a-z \n]{0,100}",
        limit in 1usize..20,
    ) {
        let opts = WrapOptions::new(limit);
        prop_assert_eq!(wrap(&input, &opts), wrap(&input, &opts));
    }
}
