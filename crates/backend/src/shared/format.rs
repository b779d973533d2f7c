/// Число с разделителем триад: `format_thousands(1234567, '.')` → `1.234.567`
pub fn format_thousands(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

/// Сумма в рублях для выгрузок: два знака, запятая как разделитель дробной части
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0, '.'), "0");
        assert_eq!(format_thousands(999, '.'), "999");
        assert_eq!(format_thousands(1000, '.'), "1.000");
        assert_eq!(format_thousands(1234567, ' '), "1 234 567");
        assert_eq!(format_thousands(1234567890, '.'), "1.234.567.890");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150000.0), "150000,00");
        assert_eq!(format_amount(120.5), "120,50");
    }
}
