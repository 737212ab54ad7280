//! Permissive numeric parsing for text typed or scraped from the storefront.
//!
//! Neither function can fail: anything that does not look like a number
//! becomes 0, so callers never carry a missing or invalid numeric state.

/// Parses an integer from text by discarding every non-digit character.
///
/// Empty input or input without digits yields 0. Values beyond `u32::MAX`
/// saturate.
///
/// # Examples
///
/// ```
/// use vitrine::domain::parse::parse_digits;
///
/// assert_eq!(parse_digits("1 299 ₽"), 1299);
/// assert_eq!(parse_digits("abc"), 0);
/// assert_eq!(parse_digits(""), 0);
/// ```
#[must_use]
pub fn parse_digits(raw: &str) -> u32 {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit))
}

/// Parses a decimal from text by keeping only digits and dots.
///
/// The longest leading prefix of the filtered text that forms a valid
/// decimal is used, so `"4.5.1"` reads as `4.5`. Unparseable input yields 0.
///
/// # Examples
///
/// ```
/// use vitrine::domain::parse::parse_decimal;
///
/// assert_eq!(parse_decimal("Rating: 4.7"), 4.7);
/// assert_eq!(parse_decimal("4.5.1"), 4.5);
/// assert_eq!(parse_decimal("n/a"), 0.0);
/// ```
#[must_use]
pub fn parse_decimal(raw: &str) -> f64 {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let prefix_len = filtered
        .char_indices()
        .take_while(|(_, c)| {
            if *c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            true
        })
        .count();

    filtered[..prefix_len]
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(0.0)
}
