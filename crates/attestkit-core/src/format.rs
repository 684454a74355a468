//! Value formatting helpers
//!
//! Every helper is total: malformed input degrades to a bracketed placeholder
//! (for display) or to zero (for arithmetic), never to an error.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder rendered for a missing or malformed date
pub const DATE_PLACEHOLDER: &str = "[Date]";

/// Placeholder rendered for a missing or malformed amount
pub const AMOUNT_PLACEHOLDER: &str = "[Montant]";

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format an ISO date as `DD/MM/YYYY`
///
/// Empty or malformed input yields [`DATE_PLACEHOLDER`].
///
/// ```
/// use attestkit_core::format::format_date;
///
/// assert_eq!(format_date("2024-03-05"), "05/03/2024");
/// assert_eq!(format_date(""), "[Date]");
/// ```
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format_naive_date(date),
        None => {
            if !value.trim().is_empty() {
                log::debug!("malformed date {:?} rendered as placeholder", value);
            }
            DATE_PLACEHOLDER.to_string()
        }
    }
}

/// Format a date as `DD/MM/YYYY`
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse an amount, accepting a French decimal comma and spaces
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .trim()
        .trim_end_matches('€')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Amount for arithmetic: unparsable or missing input counts as zero
pub fn amount_or_zero(value: Option<&str>) -> Decimal {
    match value {
        Some(v) => parse_amount(v).unwrap_or_else(|| {
            log::debug!("unparsable amount {:?} counted as zero", v);
            Decimal::ZERO
        }),
        None => Decimal::ZERO,
    }
}

/// Two-decimal fixed-point rendering (`550.00`)
pub fn format_decimal(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Currency rendering (`550.00 €`)
pub fn format_currency(amount: Decimal) -> String {
    format!("{} €", format_decimal(amount))
}

/// Currency rendering of a raw value, or [`AMOUNT_PLACEHOLDER`]
pub fn format_amount(value: Option<&str>) -> String {
    match value.and_then(parse_amount) {
        Some(amount) => format_currency(amount),
        None => AMOUNT_PLACEHOLDER.to_string(),
    }
}

/// Sum of several raw amounts, each unparsable term counting as zero
///
/// `None` when the total does not fit in a `Decimal`.
pub fn sum_amounts<'a, I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .map(amount_or_zero)
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .or_else(|| {
            log::debug!("amount total overflowed");
            None
        })
}

/// Currency rendering of a computed total, or [`AMOUNT_PLACEHOLDER`]
pub fn format_total(total: Option<Decimal>) -> String {
    match total {
        Some(amount) => format_currency(amount),
        None => AMOUNT_PLACEHOLDER.to_string(),
    }
}

/// Format a signature timestamp as `DD/MM/YYYY à HH:MM`
///
/// Accepts RFC 3339 and naive ISO date-times; anything else is returned
/// trimmed, as written by the signing collaborator.
pub fn format_timestamp(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d/%m/%Y à %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return dt.format("%d/%m/%Y à %H:%M").to_string();
        }
    }
    if let Some(date) = parse_date(value) {
        return format_naive_date(date);
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05"), "05/03/2024");
        assert_eq!(format_date(" 2022-01-10 "), "10/01/2022");
    }

    #[test]
    fn test_format_date_placeholder() {
        assert_eq!(format_date(""), "[Date]");
        assert_eq!(format_date("2024-13-45"), "[Date]");
        assert_eq!(format_date("05/03/2024"), "[Date]");
        assert_ne!(format_date(""), "//");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("500"), Some(Decimal::from(500)));
        assert_eq!(parse_amount("1 250,50"), Some(Decimal::new(125050, 2)));
        assert_eq!(parse_amount("80 €"), Some(Decimal::from(80)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_sum_is_numeric() {
        let total = sum_amounts([Some("500"), Some("50")]);
        assert_eq!(total.map(format_decimal).as_deref(), Some("550.00"));
    }

    #[test]
    fn test_sum_treats_garbage_as_zero() {
        let total = sum_amounts([Some("500"), Some("n/a"), None]);
        assert_eq!(total.map(format_decimal).as_deref(), Some("500.00"));
    }

    #[test]
    fn test_sum_overflow_is_placeholder() {
        let max = Decimal::MAX.to_string();
        let total = sum_amounts([Some(max.as_str()), Some("1")]);
        assert_eq!(total, None);
        assert_eq!(format_total(total), "[Montant]");
        assert_eq!(sum_amounts([Some(max.as_str())]), Some(Decimal::MAX));
    }

    #[test]
    fn test_format_decimal_rounding() {
        assert_eq!(format_decimal(Decimal::new(12345, 3)), "12.35");
        assert_eq!(format_decimal(Decimal::from(7)), "7.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some("1200")), "1200.00 €");
        assert_eq!(format_amount(None), "[Montant]");
        assert_eq!(format_amount(Some("beaucoup")), "[Montant]");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-05T14:30:00"), "05/03/2024 à 14:30");
        assert_eq!(
            format_timestamp("2024-03-05T14:30:00+01:00"),
            "05/03/2024 à 14:30"
        );
        assert_eq!(format_timestamp("hier"), "hier");
    }
}
