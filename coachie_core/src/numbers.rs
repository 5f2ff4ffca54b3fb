//! Transcript normalization and numeric extraction.
//!
//! Speech-to-text output is noisy: mixed case, stray punctuation, and numbers
//! that arrive either as digits ("2") or words ("two", "half a"). Everything
//! downstream matches against the canonical form produced by [`normalize`],
//! in which every recognised quantity is written with digits.

use crate::vocabulary::{number_word_value, COUNTABLE_UNITS};
use once_cell::sync::Lazy;
use regex::Regex;

/// A decimal number in canonical text
pub const NUMBER: &str = r"(\d+(?:\.\d+)?)";

static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b{}\b", NUMBER)).expect("valid number regex"));

/// Canonicalize a raw transcript
///
/// Lowercases, drops apostrophes, turns punctuation into spaces (keeping
/// decimal points between digits), collapses whitespace and rewrites spelled
/// numbers as digits.
pub fn normalize(transcript: &str) -> String {
    let cleaned = clean_punctuation(&transcript.to_lowercase());
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    rewrite_number_words(&tokens).join(" ")
}

fn clean_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\'' | '\u{2019}' => {}
            '.' => {
                let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
                let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                if prev_digit && next_digit {
                    out.push('.');
                } else {
                    out.push(' ');
                }
            }
            c if c.is_alphanumeric() || c.is_whitespace() => out.push(c),
            _ => out.push(' '),
        }
    }

    out
}

/// Replace spelled-out quantities with digits
fn rewrite_number_words(tokens: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        let next = tokens.get(i + 1).copied();

        // "half a liter", "half an hour"
        if token == "half" && matches!(next, Some("a") | Some("an")) {
            out.push("0.5".into());
            i += 2;
            continue;
        }

        // "a couple of glasses"
        if token == "a" && next == Some("couple") {
            out.push("2".into());
            i += if tokens.get(i + 2) == Some(&"of") { 3 } else { 2 };
            continue;
        }

        // "a glass", "an hour"
        if matches!(token, "a" | "an") && next.is_some_and(|n| COUNTABLE_UNITS.contains(&n)) {
            out.push("1".into());
            i += 1;
            continue;
        }

        // Digits pass through as spoken unless a half follows
        if let Some(value) = parse_number(token) {
            i += 1;
            if followed_by_half(tokens, i) {
                out.push(format_number(value + 0.5));
                i += 3;
            } else {
                out.push(token.to_string());
            }
            continue;
        }

        if let Some(mut value) = spelled_value(tokens, &mut i) {
            // "two and a half"
            if followed_by_half(tokens, i) {
                value += 0.5;
                i += 3;
            }
            out.push(format_number(value));
            continue;
        }

        out.push(token.to_string());
        i += 1;
    }

    out
}

fn followed_by_half(tokens: &[&str], i: usize) -> bool {
    tokens.get(i..i + 3) == Some(&["and", "a", "half"][..])
}

/// Read a spelled number starting at `tokens[*i]`, advancing past it
///
/// Handles single number words and compounds like "twenty five".
fn spelled_value(tokens: &[&str], i: &mut usize) -> Option<f64> {
    let token = tokens[*i];
    let value = number_word_value(token)?;
    *i += 1;

    if value >= 20.0 && value % 10.0 == 0.0 {
        if let Some(unit) = tokens.get(*i).and_then(|t| number_word_value(t)) {
            if unit > 0.0 && unit < 10.0 {
                *i += 1;
                return Some(value + unit);
            }
        }
    }

    Some(value)
}

fn format_number(value: f64) -> String {
    value.to_string()
}

/// Parse a captured number, rejecting anything non-finite
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// First standalone number in canonical text
pub fn first_number(text: &str) -> Option<f64> {
    FIRST_NUMBER
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_number(m.as_str()))
}

/// Round to the given number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("I Slept 7.5 hours."), "i slept 7.5 hours");
        assert_eq!(normalize("  I'm   feeling GREAT!!  "), "im feeling great");
        assert_eq!(normalize("eggs, toast; coffee"), "eggs toast coffee");
    }

    #[test]
    fn test_spelled_numbers() {
        assert_eq!(normalize("two glasses of water"), "2 glasses of water");
        assert_eq!(normalize("ran three miles"), "ran 3 miles");
        assert_eq!(normalize("twenty five minutes"), "25 minutes");
        assert_eq!(normalize("ten thousand steps"), "10 thousand steps");
    }

    #[test]
    fn test_fractional_phrasing() {
        assert_eq!(normalize("half a liter of water"), "0.5 liter of water");
        assert_eq!(normalize("one and a half hours"), "1.5 hours");
        assert_eq!(normalize("7 and a half hours"), "7.5 hours");
    }

    #[test]
    fn test_articles_before_units() {
        assert_eq!(normalize("a glass of water"), "1 glass of water");
        assert_eq!(normalize("an hour of yoga"), "1 hour of yoga");
        // "a" before a non-unit is left alone
        assert_eq!(normalize("a banana"), "a banana");
        assert_eq!(normalize("a couple of glasses"), "2 glasses");
    }

    #[test]
    fn test_first_number() {
        assert_eq!(first_number("i weigh 180 lbs"), Some(180.0));
        assert_eq!(first_number("about 2.25 liters"), Some(2.25));
        assert_eq!(first_number("vitamin b12"), None);
        assert_eq!(first_number("no numbers here"), None);
    }

    #[test]
    fn test_normalize_handles_odd_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("..."), "");
        assert_eq!(normalize("café ☕ 2"), "café 2");
        let long = "water ".repeat(10_000);
        assert_eq!(normalize(&long).split(' ').count(), 10_000);
    }

    #[test]
    fn test_large_numbers_kept_verbatim() {
        let huge = "99999999999999999999999";
        assert_eq!(
            normalize(&format!("I drank {} ml of water", huge)),
            format!("i drank {} ml of water", huge)
        );
        assert_eq!(first_number(huge), Some(99999999999999999999999.0));
        assert_eq!(normalize("007 and a half"), "7.5");
        assert_eq!(normalize("1.50 liters"), "1.50 liters");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(29.5735, 1), 29.6);
        assert_eq!(round_to(7.0, 2), 7.0);
    }
}
