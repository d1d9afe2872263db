//! Locale-independent number formatting for breakdown figures.
//!
//! Figures are rendered with two fixed decimal places and comma-separated
//! groups of three digits, e.g. `1,234,567.89`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value with two decimal places and thousands separators.
///
/// Rounds half away from zero. A value that rounds to zero never carries a sign.
///
/// # Examples
///
/// ```
/// use salary_breakdown::calculation::format_number;
/// use rust_decimal::Decimal;
///
/// let weekly = Decimal::new(120_000, 0) / Decimal::new(52, 0);
/// assert_eq!(format_number(weekly), "2,307.69");
/// assert_eq!(format_number(Decimal::new(-12345, 1)), "-1,234.50");
/// ```
pub fn format_number(value: Decimal) -> String {
    let (negative, whole, fraction) = split_rounded(value);

    let mut formatted = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(&whole));
    formatted.push('.');
    formatted.push_str(&fraction);
    formatted
}

/// Formats a value as US dollars, e.g. `$1,234.50` or `-$5.00`.
///
/// # Examples
///
/// ```
/// use salary_breakdown::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123450, 2)), "$1,234.50");
/// assert_eq!(format_currency(Decimal::new(-5, 0)), "-$5.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let (negative, whole, fraction) = split_rounded(value);
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(&whole), fraction)
}

/// Rounds to two places and splits into sign, integer digits and fraction digits.
fn split_rounded(value: Decimal) -> (bool, String, String) {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    match digits.split_once('.') {
        Some((whole, fraction)) => (negative, whole.to_string(), fraction.to_string()),
        None => (negative, digits, "00".to_string()),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
