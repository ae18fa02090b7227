//! Longest frequent substring search.
//!
//! A character is *frequent* when it occurs at least `k` times in the whole
//! text. A substring is frequent when every character in it is frequent;
//! the count is global, never local to the substring. Since frequency is a
//! property of each character alone, the frequent substrings are exactly
//! the pieces of the maximal stretches of frequent characters, and the
//! longest one is found in a single pass.

use std::collections::HashMap;

use tracing::trace;

/// Occurrence count of every character in a text.
///
/// Built once per search and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    counts: HashMap<char, usize>,
}

impl FrequencyMap {
    pub fn from_text(text: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `ch`, zero when it never appears.
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    pub fn is_frequent(&self, ch: char, k: usize) -> bool {
        self.count(ch) >= k
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Return the longest substring of `text` whose characters each occur at
/// least `k` times in `text`.
///
/// Lengths and `k` count characters. Ties go to the leftmost candidate.
///
/// - Empty text, or `k <= 1`: the text itself.
/// - `k` larger than the text: the empty string.
/// - No frequent character at all: the empty string.
///
/// # Example
/// ```
/// use textbench_core::lfs::longest_frequent_substring;
///
/// assert_eq!(longest_frequent_substring("aaabbccc", 3), "aaa");
/// assert_eq!(longest_frequent_substring("aabbcc", 4), "");
/// ```
pub fn longest_frequent_substring(text: &str, k: usize) -> &str {
    if text.is_empty() || k <= 1 {
        return text;
    }
    if k > text.chars().count() {
        return "";
    }

    let frequencies = FrequencyMap::from_text(text);

    let mut best = 0..0;
    let mut best_chars = 0;
    let mut start = 0;
    let mut stretch_chars = 0;
    for (idx, ch) in text.char_indices() {
        if !frequencies.is_frequent(ch, k) {
            stretch_chars = 0;
            continue;
        }
        if stretch_chars == 0 {
            start = idx;
        }
        stretch_chars += 1;
        // Strictly longer only, so the first stretch of a given length wins.
        if stretch_chars > best_chars {
            best_chars = stretch_chars;
            best = start..idx + ch.len_utf8();
        }
    }

    trace!(
        text_len = text.len(),
        k,
        distinct = frequencies.len(),
        result_len = best_chars,
        "longest frequent substring"
    );
    &text[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_map_counts_every_character() {
        let map = FrequencyMap::from_text("aaabbccc");
        assert_eq!(map.count('a'), 3);
        assert_eq!(map.count('b'), 2);
        assert_eq!(map.count('c'), 3);
        assert_eq!(map.count('z'), 0);
        assert_eq!(map.len(), 3);
        assert!(FrequencyMap::from_text("").is_empty());
    }

    #[test]
    fn empty_text_is_returned_for_any_k() {
        assert_eq!(longest_frequent_substring("", 0), "");
        assert_eq!(longest_frequent_substring("", 1), "");
        assert_eq!(longest_frequent_substring("", 20), "");
    }

    #[test]
    fn threshold_of_one_or_less_returns_whole_text() {
        assert_eq!(longest_frequent_substring("abc", 1), "abc");
        assert_eq!(longest_frequent_substring("abc", 0), "abc");
    }

    #[test]
    fn threshold_above_length_returns_empty() {
        assert_eq!(longest_frequent_substring("aaa", 4), "");
    }

    #[test]
    fn no_character_reaches_threshold() {
        assert_eq!(longest_frequent_substring("aabbcc", 4), "");
        assert_eq!(longest_frequent_substring("abcdef", 2), "");
    }

    #[test]
    fn leftmost_longest_wins_ties() {
        assert_eq!(longest_frequent_substring("aaabbccc", 3), "aaa");
        assert_eq!(longest_frequent_substring("abxab", 2), "ab");
    }

    #[test]
    fn frequency_is_global_not_local() {
        // 'a' and 'b' each occur twice overall, but never twice in the result.
        assert_eq!(longest_frequent_substring("abzab", 2), "ab");
        assert_eq!(longest_frequent_substring("xabcabcy", 2), "abcabc");
    }

    #[test]
    fn later_longer_stretch_replaces_earlier() {
        assert_eq!(longest_frequent_substring("aqbbbbaaz", 2), "bbbbaa");
        assert_eq!(longest_frequent_substring("ab_aab_ab", 3), "aab");
    }

    #[test]
    fn multibyte_characters_are_sliced_on_boundaries() {
        assert_eq!(longest_frequent_substring("éxéé", 3), "éé");
    }
}
