//! Number formatting for terminal output
//!
//! Amounts stay `f64` everywhere else; rounding happens only here.

/// Format an amount as currency with thousands separators and two decimals,
/// e.g. `$1,234.50` or `-$250.00`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}-", symbol);
    }

    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to 0.00 and should not print a sign
    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, cents)
}

/// Percentage to one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Signed amount, `+` for over and `-` for under
pub fn format_signed_currency(amount: f64, symbol: &str) -> String {
    let formatted = format_currency(amount, symbol);
    if amount > 0.0 && formatted != format_currency(0.0, symbol) {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Signed percentage points
pub fn format_signed_percentage(pct: f64) -> String {
    let rounded = format!("{:.1}", pct.abs());
    if rounded == "0.0" {
        "0.0%".to_string()
    } else if pct > 0.0 {
        format!("+{}%", rounded)
    } else {
        format!("-{}%", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(750.0, "$"), "$750.00");
        assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(-250.0, "$"), "-$250.00");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(433.3333333, "€"), "€433.33");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(15.0), "15.0%");
        assert_eq!(format_percentage(60.04), "60.0%");
    }

    #[test]
    fn test_signed() {
        assert_eq!(format_signed_currency(250.0, "$"), "+$250.00");
        assert_eq!(format_signed_currency(-250.0, "$"), "-$250.00");
        assert_eq!(format_signed_currency(0.0, "$"), "$0.00");
        assert_eq!(format_signed_percentage(-5.0), "-5.0%");
        assert_eq!(format_signed_percentage(0.01), "0.0%");
    }
}
