//! Number formatting for customer tables

/// Formats a number with comma thousand separators and two decimals
///
/// # Examples
///
/// ```
/// use customer_admin::shared::number_format::format_number;
/// assert_eq!(format_number(1234.567), "1,234.57");
/// ```
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let integer: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, integer, decimal_part)
}

/// Formats an amount as US dollars
///
/// ```
/// use customer_admin::shared::number_format::format_currency;
/// assert_eq!(format_currency(4500.0), "$4,500.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let number = format_number(amount);
    match number.strip_prefix('-') {
        Some(positive) => format!("-${}", positive),
        None => format!("${}", number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-20.0), "-$20.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }
}
