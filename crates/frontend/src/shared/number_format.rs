//! Утилиты форматирования чисел для таблиц и карточек

use contracts::shared::indicators::ValueFormat;

/// Форматирует число с разделителем тысяч (пробел) и запятой перед дробной частью
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежное значение: 2 знака после запятой и разделитель тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

/// Значение KPI по его формату. Большие суммы сокращаются до миллионов.
pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } if value.abs() >= 1_000_000.0 => {
            format!("{} млн {}", format_number_with_decimals(value / 1_000_000.0, 1), currency)
        }
        ValueFormat::Money { currency } => format!("{} {}", format_money(value), currency),
        ValueFormat::Number { decimals } => format_number_with_decimals(value, *decimals),
        ValueFormat::Percent { decimals } => format_percent(value, *decimals),
        ValueFormat::Integer => format_number_int(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234,56");
        assert_eq!(format_money(1234567.89), "1 234 567,89");
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(-1234.56), "-1 234,56");
        assert_eq!(format_money(-123.0), "-123,00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234,57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234,567");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2_500_000.0, &ValueFormat::rub()), "2,5 млн ₽");
        assert_eq!(format_value(950.0, &ValueFormat::rub()), "950,00 ₽");
        assert_eq!(format_value(1.256, &ValueFormat::Percent { decimals: 2 }), "1,26%");
        assert_eq!(format_value(15320.0, &ValueFormat::Integer), "15 320");
    }
}
