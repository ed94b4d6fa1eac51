//! Amount parsing and display helpers.
//!
//! Parsing is a heuristic tuned for Indonesian-style grouped integers
//! (`"Rp 10.000.000"`) with occasional comma cents (`"10.000,50"`). It is not
//! locale-aware: a lone dot group such as `"10.50"` reads as `1050`.

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

const CURRENCY_MARKER: &[u8] = b"rp";

/// Display preferences for rendering amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub precision: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".into(),
            grouping_separator: ',',
            decimal_separator: '.',
            precision: 2,
        }
    }
}

impl CurrencyFormat {
    /// Renders `value` as `"<symbol> <grouped number>"`, e.g. `Rp 10,000.00`.
    pub fn format_amount(&self, value: f64) -> String {
        format!("{} {}", self.symbol, self.format_number(value))
    }

    pub fn format_number(&self, value: f64) -> String {
        let mut body = format!("{:.*}", self.precision as usize, value);
        if self.decimal_separator != '.' {
            if let Some(pos) = body.find('.') {
                body.replace_range(pos..=pos, &self.decimal_separator.to_string());
            }
        }
        if let Some(pos) = body.find(self.decimal_separator) {
            let int_part = insert_grouping(&body[..pos], self.grouping_separator);
            format!("{}{}", int_part, &body[pos..])
        } else {
            insert_grouping(&body, self.grouping_separator)
        }
    }
}

/// Formats an amount with the default `Rp` display settings.
pub fn format_amount(value: f64) -> String {
    CurrencyFormat::default().format_amount(value)
}

/// Converts free-form user text into a decimal amount.
///
/// The result is not checked for sign; see [`validate_positive`].
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Parse("input is empty".into()));
    }

    let unmarked = strip_currency_marker(trimmed);
    let cleaned: String = unmarked
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(LedgerError::Parse(format!("no digits found in `{trimmed}`")));
    }

    let normalized = normalize_separators(&cleaned);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::Parse(format!(
            "`{trimmed}` is not a recognizable number"
        ))),
    }
}

/// Rejects zero, negative and NaN amounts.
pub fn validate_positive(amount: f64) -> Result<f64> {
    if amount > 0.0 {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

/// Parses and validates in one step, the way every amount prompt does.
pub fn parse_positive_amount(raw: &str) -> Result<f64> {
    parse_amount(raw).and_then(validate_positive)
}

fn strip_currency_marker(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest
        .as_bytes()
        .windows(CURRENCY_MARKER.len())
        .position(|window| window.eq_ignore_ascii_case(CURRENCY_MARKER))
    {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + CURRENCY_MARKER.len()..];
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Decides which of `.` and `,` is the decimal separator.
///
/// With both present the rightmost one is the decimal point. A lone comma
/// followed by at most two digits is a decimal point; any other comma or dot
/// is a thousands separator.
fn normalize_separators(cleaned: &str) -> String {
    match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => cleaned.replace(',', ""),
        (Some(_), Some(_)) => cleaned.replace('.', "").replace(',', "."),
        (None, Some(_)) => {
            let mut parts = cleaned.split(',');
            let _integer = parts.next();
            match (parts.next(), parts.next()) {
                (Some(fraction), None) if fraction.len() <= 2 => cleaned.replace(',', "."),
                _ => cleaned.replace(',', ""),
            }
        }
        _ => cleaned.replace('.', ""),
    }
}

fn insert_grouping(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn parses_indonesian_grouping_with_prefix() {
        assert_close(parse_amount("Rp 10.000.000").unwrap(), 10_000_000.0);
        assert_close(parse_amount("rp10.000").unwrap(), 10_000.0);
        assert_close(parse_amount("RP 2.500").unwrap(), 2_500.0);
    }

    #[test]
    fn rightmost_separator_is_decimal_when_both_present() {
        assert_close(parse_amount("10,000,000.50").unwrap(), 10_000_000.50);
        assert_close(parse_amount("10.000.000,50").unwrap(), 10_000_000.50);
    }

    #[test]
    fn single_comma_with_short_tail_is_decimal() {
        assert_close(parse_amount("12,5").unwrap(), 12.5);
        assert_close(parse_amount("12,50").unwrap(), 12.5);
        assert_close(parse_amount("12,500").unwrap(), 12_500.0);
        assert_close(parse_amount("1,000,000").unwrap(), 1_000_000.0);
    }

    #[test]
    fn lone_dot_group_is_read_as_thousands() {
        assert_close(parse_amount("10.50").unwrap(), 1050.0);
    }

    #[test]
    fn rejects_empty_and_digitless_input() {
        assert!(matches!(parse_amount(""), Err(LedgerError::Parse(_))));
        assert!(matches!(parse_amount("   "), Err(LedgerError::Parse(_))));
        assert!(matches!(parse_amount("abc"), Err(LedgerError::Parse(_))));
        assert!(matches!(parse_amount("Rp"), Err(LedgerError::Parse(_))));
        assert!(matches!(parse_amount("1,2,3.4.5"), Err(LedgerError::Parse(_))));
    }

    #[test]
    fn zero_parses_but_fails_validation() {
        let value = parse_amount("0").unwrap();
        assert!(matches!(
            validate_positive(value),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_positive_amount("Rp 0"),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn formats_with_grouping_and_precision() {
        assert_eq!(format_amount(10_000_000.5), "Rp 10,000,000.50");
        assert_eq!(format_amount(-1234.0), "Rp -1,234.00");
        assert_eq!(format_amount(0.0), "Rp 0.00");

        let dotted = CurrencyFormat {
            symbol: "IDR".into(),
            grouping_separator: '.',
            decimal_separator: ',',
            precision: 0,
        };
        assert_eq!(dotted.format_amount(2_500_000.0), "IDR 2.500.000");
    }
}
