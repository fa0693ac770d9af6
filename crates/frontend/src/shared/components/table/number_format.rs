//! Number formatting for tables and money fields (es-CO convention:
//! thousands separated by '.', decimals by ',').

/// Formats with a thousands separator and the given number of decimals.
///
/// ```text
/// format_number_with_decimals(1234567.89, 2) == "1.234.567,89"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money display: pesos have no cents in practice.
///
/// ```text
/// format_money(50000.0) == "50.000"
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Machine-plain amount for numeric form fields ("50000", "50000.50").
pub fn plain_amount(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50_000.0), "50.000");
        assert_eq!(format_money(1_234_567.0), "1.234.567");
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(-1_234.0), "-1.234");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234567.89, 2), "1.234.567,89");
    }

    #[test]
    fn test_plain_amount() {
        assert_eq!(plain_amount(50_000.0), "50000");
        assert_eq!(plain_amount(50_000.5), "50000.50");
        assert_eq!(plain_amount(0.0), "0");
    }
}
