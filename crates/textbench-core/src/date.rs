//! Free-form date reformatting.
//!
//! Accepts dates such as `"March 23, 2001"`, `"23/3/2001"` or `"2024-5-3"`
//! and rewrites them as `YYYY-MM-DD`.
//!
//! # Token classification
//!
//! The trimmed input is split on the first delimiter present, tried in the
//! order `-`, `/`, space, and must yield exactly three tokens. Each token
//! fills one slot:
//!
//! - Alphabetic tokens are month names or 3-letter abbreviations, matched
//!   case-insensitively.
//! - 4-digit tokens are the year (1900-2099).
//! - 1-2 digit tokens are the month while no month has been seen (1-12),
//!   and the day afterwards (1-31). The rule is positional, so `"5 3 2024"`
//!   is May 3rd.
//! - A 1-2 digit token that comes before both month and year and cannot be
//!   a month (13-31) is the day, so `"23-3-2001"` is March 23rd. Inputs the
//!   positional rule accepts are never reinterpreted by this.
//!
//! The day is checked against 1-31 only; `"1900-02-31"` is accepted.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::error::{InvalidInput, Result};

/// Delimiters in priority order.
const DELIMITERS: [char; 3] = ['-', '/', ' '];

const MIN_YEAR: u16 = 1900;
const MAX_YEAR: u16 = 2099;

/// Lowercase English month names and abbreviations to their two-digit number.
static MONTHS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("jan", "01");
    map.insert("january", "01");
    map.insert("feb", "02");
    map.insert("february", "02");
    map.insert("mar", "03");
    map.insert("march", "03");
    map.insert("apr", "04");
    map.insert("april", "04");
    // Full name and abbreviation coincide
    map.insert("may", "05");
    map.insert("jun", "06");
    map.insert("june", "06");
    map.insert("jul", "07");
    map.insert("july", "07");
    map.insert("aug", "08");
    map.insert("august", "08");
    map.insert("sep", "09");
    map.insert("september", "09");
    map.insert("oct", "10");
    map.insert("october", "10");
    map.insert("nov", "11");
    map.insert("november", "11");
    map.insert("dec", "12");
    map.insert("december", "12");

    map
});

/// Look up a lowercase month name or abbreviation.
///
/// Returns the zero-padded month number, e.g. `"03"` for `"mar"`.
pub fn lookup_month(name: &str) -> Option<&'static str> {
    MONTHS.get(name).copied()
}

/// One slot of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateComponent {
    Year,
    Month,
    Day,
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
        }
    }
}

/// Reformat a loosely formatted date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`InvalidInput`] when the input is empty or blank, has no
/// delimiter, does not split into three tokens, names an unknown month,
/// has a year/month/day out of range, contains a malformed token, or
/// fills the same slot twice.
///
/// # Example
/// ```
/// use textbench_core::date::reformat_date;
///
/// assert_eq!(reformat_date("March 23, 2001").unwrap(), "2001-03-23");
/// assert_eq!(reformat_date("  5 3 2024").unwrap(), "2024-05-03");
/// assert!(reformat_date("2024-13-01").is_err());
/// ```
pub fn reformat_date(input: &str) -> Result<String> {
    match parse_date(input) {
        Ok(date) => {
            trace!(input_len = input.len(), %date, "date reformatted");
            Ok(date)
        }
        Err(error) => {
            debug!(input_len = input.len(), %error, "date rejected");
            Err(error)
        }
    }
}

fn parse_date(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(InvalidInput::Empty);
    }
    let trimmed = input.trim_matches(' ');
    if trimmed.is_empty() {
        return Err(InvalidInput::OnlySpaces);
    }

    let cleaned = remove_first_comma(trimmed);
    let delimiter = DELIMITERS
        .into_iter()
        .find(|delimiter| cleaned.contains(*delimiter))
        .ok_or(InvalidInput::NoDelimiter)?;

    // A trailing delimiter does not start a new token.
    let tokens: Vec<&str> = cleaned.split_terminator(delimiter).collect();
    if tokens.len() != 3 {
        return Err(InvalidInput::TokenCount(tokens.len()));
    }

    let mut parts = DateParts::default();
    for token in tokens {
        parts.classify(token)?;
    }
    parts.finish()
}

/// Drop the first comma so `"March 23, 2001"` splits cleanly on spaces.
fn remove_first_comma(text: &str) -> Cow<'_, str> {
    match text.find(',') {
        Some(idx) => Cow::Owned(format!("{}{}", &text[..idx], &text[idx + 1..])),
        None => Cow::Borrowed(text),
    }
}

/// Slots filled while walking the tokens left to right.
#[derive(Debug, Default)]
struct DateParts {
    year: Option<String>,
    month: Option<String>,
    day: Option<String>,
}

impl DateParts {
    fn classify(&mut self, token: &str) -> Result<()> {
        let Some(first) = token.chars().next() else {
            return Err(InvalidInput::InvalidToken(String::new()));
        };

        if first.is_alphabetic() {
            let month = lookup_month(&token.to_lowercase())
                .ok_or_else(|| InvalidInput::UnknownMonth(token.to_string()))?;
            return self.fill(DateComponent::Month, month.to_string());
        }

        if !token.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(InvalidInput::InvalidToken(token.to_string()));
        }

        match token.len() {
            4 => {
                let year: u16 = parse_digits(token)?;
                if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                    return Err(InvalidInput::YearOutOfRange(token.to_string()));
                }
                self.fill(DateComponent::Year, token.to_string())
            }
            1 | 2 => {
                let value: u8 = parse_digits(token)?;
                self.classify_short(token, value)
            }
            _ => Err(InvalidInput::InvalidToken(token.to_string())),
        }
    }

    /// Month until one has been seen, day afterwards.
    fn classify_short(&mut self, token: &str, value: u8) -> Result<()> {
        if self.month.is_none() {
            if (1..=12).contains(&value) {
                return self.fill(DateComponent::Month, format!("{value:02}"));
            }
            if self.year.is_none() && self.day.is_none() && (13..=31).contains(&value) {
                return self.fill(DateComponent::Day, format!("{value:02}"));
            }
            return Err(InvalidInput::MonthOutOfRange(token.to_string()));
        }

        if (1..=31).contains(&value) {
            self.fill(DateComponent::Day, format!("{value:02}"))
        } else {
            Err(InvalidInput::DayOutOfRange(token.to_string()))
        }
    }

    fn fill(&mut self, component: DateComponent, value: String) -> Result<()> {
        let slot = match component {
            DateComponent::Year => &mut self.year,
            DateComponent::Month => &mut self.month,
            DateComponent::Day => &mut self.day,
        };
        if slot.is_some() {
            return Err(InvalidInput::DuplicateComponent(component));
        }
        *slot = Some(value);
        Ok(())
    }

    fn finish(self) -> Result<String> {
        let year = self
            .year
            .ok_or(InvalidInput::MissingComponent(DateComponent::Year))?;
        let month = self
            .month
            .ok_or(InvalidInput::MissingComponent(DateComponent::Month))?;
        let day = self
            .day
            .ok_or(InvalidInput::MissingComponent(DateComponent::Day))?;
        Ok(format!("{year}-{month}-{day}"))
    }
}

fn parse_digits<T: std::str::FromStr>(token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| InvalidInput::InvalidToken(token.to_string()))
}
