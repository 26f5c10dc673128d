//! Display formatting for result fields. Formatting never derives new figures.

/// Format a money amount with a currency symbol, thousands separators and two
/// decimals, e.g. `$5,553.35` or `-$12.00`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (digits, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let rounds_to_zero = rendered.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5553.35, "$"), "$5,553.35");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(1_428.571_428, "$"), "$1,428.57");
        assert_eq!(format_currency(1_234_567.0, "$"), "$1,234,567.00");
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
    }

    #[test]
    fn test_format_currency_negative_and_symbol() {
        assert_eq!(format_currency(-12.0, "$"), "-$12.00");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(50.5, "€"), "€50.50");
    }

    #[test]
    fn test_format_currency_beyond_u64() {
        assert_eq!(
            format_currency(1e20, "$"),
            "$100,000,000,000,000,000,000.00"
        );
        assert_eq!(format_currency(-2.5e18, "$"), "-$2,500,000,000,000,000,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(16.666_666, 1), "16.7%");
        assert_eq!(format_percent(9.090_909, 2), "9.09%");
    }
}
