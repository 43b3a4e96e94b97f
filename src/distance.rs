//! Case-insensitive edit distance used for fuzzy keyword routing.
//!
//! The engine scores every outgoing keyword of the current conversation
//! state against the incoming user text with [`levenshtein`] and follows
//! the best-scoring transition. The metric is the classic
//! insert/delete/substitute edit distance, computed over Unicode scalar
//! values after uppercasing both inputs.
//!
//! The implementation keeps a single rolling cost row over the shorter
//! input, so it runs in O(m·n) time and O(min(m,n)) extra space.
//!
//! # Examples
//!
//! ```rust
//! use dialograph::distance::levenshtein;
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(levenshtein("Hi", "hi"), 0);
//! assert_eq!(levenshtein("", "abcd"), 4);
//! ```

/// Computes the edit distance between two case-folded strings.
///
/// Both inputs are uppercased before comparison; the fold is part of the
/// metric, not an option. The function is total: any pair of strings has
/// a well-defined, non-negative distance, and equal inputs (up to case)
/// score zero.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().flat_map(char::to_uppercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_uppercase).collect();

    // Roll the cost row over the shorter string. The metric is symmetric,
    // so swapping operands does not change the result.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut costs: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        // `corner` holds the cost diagonal to the cell being written.
        let mut corner = costs[0];
        costs[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let upper = costs[j + 1];
            costs[j + 1] = if lc == sc {
                corner
            } else {
                1 + corner.min(upper).min(costs[j])
            };
            corner = upper;
        }
    }

    costs[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_zero() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn case_folding_is_mandatory() {
        assert_eq!(levenshtein("Hi", "hi"), 0);
        assert_eq!(levenshtein("HELLO", "hello"), 0);
        assert_eq!(levenshtein("GoOdByE", "goodbye"), 0);
    }

    #[test]
    fn empty_operand_costs_full_length() {
        assert_eq!(levenshtein("", "abcd"), 4);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn canonical_reference_value() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn single_edit_variants() {
        assert_eq!(levenshtein("hello", "helo"), 1); // deletion
        assert_eq!(levenshtein("hello", "hellos"), 1); // insertion
        assert_eq!(levenshtein("hello", "jello"), 1); // substitution
    }

    #[test]
    fn symmetric_on_mixed_lengths() {
        assert_eq!(levenshtein("flaw", "lawn"), levenshtein("lawn", "flaw"));
        assert_eq!(levenshtein("ab", "abcdef"), levenshtein("abcdef", "ab"));
    }

    #[test]
    fn counts_scalar_values_not_bytes() {
        // One scalar value apart, even though the byte representations differ more.
        assert_eq!(levenshtein("über", "uber"), 1);
        assert_eq!(levenshtein("é", ""), 1);
    }

    #[test]
    fn uppercasing_follows_unicode_expansion() {
        // 'ß' uppercases to "SS", so these fold to GRÖSSE vs GROSSE.
        assert_eq!(levenshtein("größe", "grosse"), 1);
    }

    #[test]
    fn pure_function_is_idempotent() {
        let first = levenshtein("repeatable", "repeat");
        let second = levenshtein("repeatable", "repeat");
        assert_eq!(first, second);
    }
}
