//! Run-length encoding.
//!
//! A run is a maximal stretch of one repeated character. It is written as
//! the decimal count followed by the character, with the count omitted when
//! the run has length one, so `"aaabbbcccc"` encodes to `"3a3b4c"` and
//! `"ab"` stays `"ab"`.

use tracing::trace;

use crate::error::{InvalidInput, Result};

/// A maximal repetition of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub character: char,
    /// Number of repetitions, always at least 1.
    pub count: usize,
}

impl Run {
    fn new(character: char) -> Self {
        Self {
            character,
            count: 1,
        }
    }

    /// Append the encoded form of this run to `out`.
    fn append_to(&self, out: &mut String) {
        if self.count > 1 {
            out.push_str(&self.count.to_string());
        }
        out.push(self.character);
    }
}

/// Encode `input` as a sequence of runs.
///
/// # Errors
///
/// Returns [`InvalidInput::TrailingSpaces`] when two whitespace characters
/// are adjacent anywhere in the input.
///
/// # Example
/// ```
/// use textbench_core::rle::encode;
///
/// assert_eq!(encode("aaabbbcccc").unwrap(), "3a3b4c");
/// assert_eq!(encode("ab").unwrap(), "ab");
/// ```
pub fn encode(input: &str) -> Result<String> {
    if has_adjacent_whitespace(input) {
        return Err(InvalidInput::TrailingSpaces);
    }

    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let mut encoded = String::with_capacity(input.len());
    let mut run = Run::new(first);
    for ch in chars {
        if ch == run.character {
            run.count += 1;
        } else {
            run.append_to(&mut encoded);
            run = Run::new(ch);
        }
    }
    run.append_to(&mut encoded);

    trace!(
        input_len = input.len(),
        encoded_len = encoded.len(),
        "run-length encoded"
    );
    Ok(encoded)
}

/// Expand an encoded string back into its runs.
///
/// A maximal sequence of ASCII digits is the count of the character that
/// follows it. Only inputs without ASCII digits survive an
/// `encode`/`decode` round trip unchanged.
///
/// # Errors
///
/// - [`InvalidInput::DanglingCount`] if the string ends with a count
/// - [`InvalidInput::ZeroRunLength`] for a count of zero
/// - [`InvalidInput::RunLengthOverflow`] if a count does not fit in `usize`
///   or its run cannot be allocated
pub fn decode(encoded: &str) -> Result<String> {
    let mut decoded = String::with_capacity(encoded.len());
    let mut count_start: Option<usize> = None;

    for (idx, ch) in encoded.char_indices() {
        if ch.is_ascii_digit() {
            count_start.get_or_insert(idx);
            continue;
        }
        let count = match count_start.take() {
            Some(start) => {
                let digits = &encoded[start..idx];
                let count = parse_count(digits)?;
                count
                    .checked_mul(ch.len_utf8())
                    .and_then(|bytes| decoded.try_reserve(bytes).ok())
                    .ok_or_else(|| InvalidInput::RunLengthOverflow(digits.to_string()))?;
                count
            }
            None => 1,
        };
        decoded.extend(std::iter::repeat_n(ch, count));
    }

    if let Some(start) = count_start {
        return Err(InvalidInput::DanglingCount(encoded[start..].to_string()));
    }
    Ok(decoded)
}

fn parse_count(digits: &str) -> Result<usize> {
    let count: usize = digits
        .parse()
        .map_err(|_| InvalidInput::RunLengthOverflow(digits.to_string()))?;
    if count == 0 {
        return Err(InvalidInput::ZeroRunLength);
    }
    Ok(count)
}

/// Each character is compared with its successor only, so the last
/// character is never checked against anything past the end.
fn has_adjacent_whitespace(input: &str) -> bool {
    input
        .chars()
        .zip(input.chars().skip(1))
        .any(|(current, next)| current.is_whitespace() && next.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty_is_empty() {
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn encode_single_character() {
        assert_eq!(encode("a").unwrap(), "a");
    }

    #[test]
    fn encode_runs_with_counts() {
        assert_eq!(encode("aaabbbcccc").unwrap(), "3a3b4c");
        assert_eq!(encode("ab").unwrap(), "ab");
        assert_eq!(encode("abbbbbbbbbbbbc").unwrap(), "a12bc");
    }

    #[test]
    fn encode_allows_single_spaces() {
        assert_eq!(encode("a b").unwrap(), "a b");
        assert_eq!(encode(" a").unwrap(), " a");
        // A lone space at the end has nothing after it to pair with.
        assert_eq!(encode("ab ").unwrap(), "ab ");
    }

    #[test]
    fn encode_rejects_adjacent_whitespace() {
        assert_eq!(encode("a  b"), Err(InvalidInput::TrailingSpaces));
        assert_eq!(encode("ab  "), Err(InvalidInput::TrailingSpaces));
        assert_eq!(encode("a\t\nb"), Err(InvalidInput::TrailingSpaces));
        assert_eq!(encode("a\u{a0}\u{a0}b"), Err(InvalidInput::TrailingSpaces));
        assert_eq!(encode("  "), Err(InvalidInput::TrailingSpaces));
    }

    #[test]
    fn encode_counts_characters_not_bytes() {
        assert_eq!(encode("ééé").unwrap(), "3é");
    }

    #[test]
    fn decode_expands_runs() {
        assert_eq!(decode("3a3b4c").unwrap(), "aaabbbcccc");
        assert_eq!(decode("a12bc").unwrap(), "abbbbbbbbbbbbc");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn decode_rejects_unallocatable_run() {
        assert_eq!(
            decode("9999999999999999999a"),
            Err(InvalidInput::RunLengthOverflow(
                "9999999999999999999".to_string()
            ))
        );
    }

    #[test]
    fn decode_rejects_malformed_counts() {
        assert_eq!(
            decode("3a12"),
            Err(InvalidInput::DanglingCount("12".to_string()))
        );
        assert_eq!(decode("0a"), Err(InvalidInput::ZeroRunLength));
        assert!(matches!(
            decode("99999999999999999999999a"),
            Err(InvalidInput::RunLengthOverflow(_))
        ));
    }

    #[test]
    fn error_message_is_user_facing() {
        let error = encode("a  b").unwrap_err();
        insta::assert_snapshot!(error, @"the input string contains trailing spaces");
    }
}
