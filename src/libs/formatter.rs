//! Money formatting for user-facing output.
//!
//! Salaries are always shown with a currency prefix, comma thousands
//! separators and exactly two decimal places, e.g. `$1,234,567.89`.

/// Formats an amount as `<symbol><thousands-separated>.<cents>`.
///
/// Rounding to cents happens before grouping, so `999.999` becomes
/// `$1,000.00`. Negative amounts put the sign before the symbol.
///
/// ```rust
/// use emsys::libs::formatter::format_currency;
///
/// assert_eq!(format_currency(90000.0, "$"), "$90,000.00");
/// assert_eq!(format_currency(-12.5, "$"), "-$12.50");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" would be misleading after rounding
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(999.0, "$"), "$999.00");
        assert_eq!(format_currency(1000.0, "$"), "$1,000.00");
        assert_eq!(format_currency(60000.0, "$"), "$60,000.00");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_rounding() {
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
        assert_eq!(format_currency(0.004, "$"), "$0.00");
    }

    #[test]
    fn test_format_currency_negative_and_symbol() {
        assert_eq!(format_currency(-1500.0, "$"), "-$1,500.00");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(2500.0, "€"), "€2,500.00");
    }
}
