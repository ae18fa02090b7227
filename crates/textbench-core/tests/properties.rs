//! Property tests for the text algorithms.

use proptest::prelude::*;

use textbench_core::{decode, encode, longest_frequent_substring, reformat_date};

/// Reference search: every substring in start-ascending, length-ascending
/// order, replaced only by a strictly longer candidate.
fn brute_force_lfs(text: &str, k: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    if n == 0 || k <= 1 {
        return text.to_string();
    }
    if k > n {
        return String::new();
    }
    let count = |c: char| chars.iter().filter(|&&other| other == c).count();
    let mut best: &[char] = &[];
    for start in 0..n {
        for end in start + 1..=n {
            let candidate = &chars[start..end];
            if candidate.iter().all(|&c| count(c) >= k) && candidate.len() > best.len() {
                best = candidate;
            }
        }
    }
    best.iter().collect()
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit())
}

proptest! {
    #[test]
    fn rle_round_trips_letters_and_single_spaces(input in "[a-c]{0,3}( [a-c]{1,4}){0,5}") {
        let encoded = encode(&input).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn rle_never_grows_letter_only_input(input in "[a-z]{0,64}") {
        let encoded = encode(&input).unwrap();
        prop_assert!(encoded.len() <= input.len());
    }

    #[test]
    fn lfs_matches_brute_force(text in "[a-e]{0,24}", k in 0usize..8) {
        prop_assert_eq!(longest_frequent_substring(&text, k), brute_force_lfs(&text, k));
    }

    #[test]
    fn lfs_result_is_a_substring(text in "[a-z]{0,64}", k in 0usize..6) {
        let result = longest_frequent_substring(&text, k);
        prop_assert!(text.contains(result));
    }

    #[test]
    fn generated_dates_reformat_to_fixed_width(
        year in 1900u16..=2099,
        month in 1u8..=12,
        day in 1u8..=31,
        padding in 0usize..16,
        delimiter in prop::sample::select(vec!['-', '/', ' ']),
    ) {
        let input = format!("{}{year}{delimiter}{month}{delimiter}{day}", " ".repeat(padding));
        let output = reformat_date(&input).unwrap();
        prop_assert!(is_iso_date(&output), "not YYYY-MM-DD: {output}");
        prop_assert_eq!(output, format!("{year}-{month:02}-{day:02}"));
    }

    #[test]
    fn reformat_never_panics(input in "\\PC{0,24}") {
        if let Ok(output) = reformat_date(&input) {
            prop_assert!(is_iso_date(&output), "not YYYY-MM-DD: {output}");
        }
    }
}
