//! Форматирование дат для таблиц

use chrono::{DateTime, NaiveDate, Utc};

/// ISO-дата (`2024-03-15` или `2024-03-15T14:02:26Z`) в `15.03.2024`.
/// Нераспознанная строка возвращается как есть.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Период действия: `01.03.2025 - 31.03.2025`
pub fn format_period(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Время среза метрик (UTC)
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2025-03-01", "2025-03-31"), "01.03.2025 - 31.03.2025");
    }

    #[test]
    fn test_format_time() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(format_time(&ts), "09:05:07");
    }
}
