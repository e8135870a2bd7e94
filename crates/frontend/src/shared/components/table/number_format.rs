//! Number formatting helpers for table cells (pt-BR conventions)

/// Formats a number with a thousands separator and a fixed number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, '.', ','), "1.234,57");
/// ```
pub fn format_number_with_decimals(
    value: f64,
    decimals: usize,
    thousands_sep: char,
    decimal_sep: char,
) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Insert a separator every 3 digits counting from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(thousands_sep);
        }
        grouped.push(c);
    }

    // "-0,00" reads oddly in a price column
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{sign}{grouped}{decimal_sep}{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a value as Brazilian reais
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_brl;
/// assert_eq!(format_brl(2.5), "R$ 2,50");
/// assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
/// ```
pub fn format_brl(value: f64) -> String {
    let amount = format_number_with_decimals(value.abs(), 2, '.', ',');
    if value < 0.0 && amount != "0,00" {
        format!("-R$ {}", amount)
    } else {
        format!("R$ {}", amount)
    }
}

/// Formats a quantity: whole numbers without decimals, fractions with up to 3
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0, '.', ',')
    } else {
        let formatted = format_number_with_decimals(value, 3, '.', ',');
        formatted
            .trim_end_matches('0')
            .trim_end_matches(',')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(2.5), "R$ 2,50");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(-12.3), "-R$ 12,30");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, '.', ','), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1, '.', ','), "1.234,6");
        assert_eq!(format_number_with_decimals(123.0, 2, '.', ','), "123,00");
        assert_eq!(format_number_with_decimals(-1234.0, 0, ' ', '.'), "-1 234");
        assert_eq!(format_number_with_decimals(-0.001, 2, '.', ','), "0,00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(15.0), "15");
        assert_eq!(format_quantity(1500.0), "1.500");
        assert_eq!(format_quantity(2.25), "2,25");
        assert_eq!(format_quantity(0.5), "0,5");
        assert_eq!(format_quantity(2.0001), "2");
    }
}
