//! Валидация форм сущностей.
//!
//! Каждая форма (рекламодатель, кампания, группа объявлений, креатив)
//! реализует [`FormValidator`] и возвращает карту `поле -> сообщение`.
//! Пустая карта означает, что форму можно отправлять.
//!
//! Порядок проверок для одного поля:
//! 1. обязательность (при пустом значении дальнейшие проверки не выполняются);
//! 2. длина / шаблон / диапазон в порядке объявления, первое нарушение
//!    определяет сообщение поля.
//!
//! Межполевые правила (диапазон дат) проверяются после полевых и только
//! когда оба поля заполнены и корректно разобраны.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MSG_REQUIRED: &str = "Это поле обязательно для заполнения";
pub const MSG_POSITIVE_NUMBER: &str = "Значение должно быть положительным числом";
pub const MSG_POSITIVE_INTEGER: &str = "Укажите целое положительное число";
pub const MSG_URL: &str = "Введите корректный URL (http:// или https://)";
pub const MSG_DATE: &str = "Некорректная дата";
pub const MSG_DATE_RANGE: &str = "Дата окончания должна быть позже даты начала";

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9\-._~%]+(\.[A-Za-z0-9\-]+)+(:\d{1,5})?([/?#][^\s]*)?$")
        .expect("valid URL regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()\-]+$").expect("valid phone regex"));

/// Ошибки формы: имя поля -> сообщение.
///
/// На каждое поле хранится не более одного сообщения.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Установить сообщение для поля (перезаписывает предыдущее)
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    /// Убрать ошибку одного поля (вызывается при изменении значения)
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Перенести ошибки из другой карты (например, ответ сервера 422)
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

/// Форма, умеющая проверить себя целиком.
///
/// Проверка синхронная и без побочных эффектов: повторный вызов на той же
/// записи возвращает ту же карту ошибок.
pub trait FormValidator {
    fn validate(&self) -> FieldErrors;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Цепочка проверок одного поля.
///
/// После первой неудачной проверки остальные пропускаются.
pub struct FieldCheck<'a> {
    errors: &'a mut FieldErrors,
    field: &'static str,
    value: &'a str,
    done: bool,
}

impl<'a> FieldCheck<'a> {
    pub fn new(errors: &'a mut FieldErrors, field: &'static str, value: &'a str) -> Self {
        Self {
            errors,
            field,
            value,
            done: false,
        }
    }

    fn fail(mut self, message: &str) -> Self {
        self.errors.set(self.field, message);
        self.done = true;
        self
    }

    /// Обязательное поле со стандартным сообщением
    pub fn required(self) -> Self {
        self.required_with(MSG_REQUIRED)
    }

    pub fn required_with(self, message: &str) -> Self {
        if self.done {
            return self;
        }
        if is_blank(self.value) {
            return self.fail(message);
        }
        self
    }

    /// Необязательное поле: пустое значение всегда корректно
    pub fn optional(mut self) -> Self {
        if is_blank(self.value) {
            self.done = true;
        }
        self
    }

    pub fn max_len(self, max: usize) -> Self {
        if self.done || self.value.trim().chars().count() <= max {
            return self;
        }
        let message = format!("Не более {} символов", max);
        self.fail(&message)
    }

    /// Строка только из цифр одной из допустимых длин
    pub fn digits(self, lengths: &[usize], message: &str) -> Self {
        if self.done || is_digits_of_len(self.value.trim(), lengths) {
            return self;
        }
        self.fail(message)
    }

    pub fn url(self) -> Self {
        if self.done || is_url(self.value) {
            return self;
        }
        self.fail(MSG_URL)
    }

    pub fn email(self, message: &str) -> Self {
        if self.done || EMAIL_RE.is_match(self.value.trim()) {
            return self;
        }
        self.fail(message)
    }

    pub fn phone(self, message: &str) -> Self {
        if self.done || is_phone(self.value) {
            return self;
        }
        self.fail(message)
    }

    pub fn positive_number(self) -> Self {
        if self.done || parse_positive_number(self.value).is_some() {
            return self;
        }
        self.fail(MSG_POSITIVE_NUMBER)
    }

    pub fn positive_integer(self) -> Self {
        if self.done || parse_positive_integer(self.value).is_some() {
            return self;
        }
        self.fail(MSG_POSITIVE_INTEGER)
    }

    pub fn date(self) -> Self {
        if self.done || parse_date(self.value).is_some() {
            return self;
        }
        self.fail(MSG_DATE)
    }

    /// Произвольное правило
    pub fn rule(self, ok: impl FnOnce(&str) -> bool, message: &str) -> Self {
        if self.done || ok(self.value) {
            return self;
        }
        self.fail(message)
    }
}

/// Проверка диапазона дат: ошибка вешается на поле окончания.
///
/// Выполняется только когда обе даты заполнены и разобраны.
pub fn check_date_range(
    errors: &mut FieldErrors,
    start: &str,
    end_field: &'static str,
    end: &str,
) {
    if is_blank(start) || is_blank(end) {
        return;
    }
    if let (Some(s), Some(e)) = (parse_date(start), parse_date(end)) {
        if e <= s {
            errors.set(end_field, MSG_DATE_RANGE);
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_digits_of_len(value: &str, lengths: &[usize]) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && lengths.contains(&value.len())
}

pub fn is_url(value: &str) -> bool {
    URL_RE.is_match(value.trim())
}

pub fn is_phone(value: &str) -> bool {
    let value = value.trim();
    if !PHONE_RE.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=15).contains(&digits)
}

/// Разобрать денежное/числовое значение (`1500`, `1500.50`, `1500,50`).
pub fn parse_number(value: &str) -> Option<f64> {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_positive_number(value: &str) -> Option<f64> {
    parse_number(value).filter(|v| *v > 0.0)
}

pub fn parse_positive_integer(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok().filter(|v| *v > 0)
}

/// Дата из поля `<input type="date">` (формат `YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_short_circuits() {
        let mut errors = FieldErrors::new();
        FieldCheck::new(&mut errors, "inn", "   ")
            .required()
            .digits(&[10, 12], "bad inn");
        assert_eq!(errors.get("inn"), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_first_failing_check_wins() {
        let mut errors = FieldErrors::new();
        FieldCheck::new(&mut errors, "title", "abcdefghijk")
            .required()
            .max_len(5)
            .digits(&[3], "digits");
        assert_eq!(errors.get("title"), Some("Не более 5 символов"));
    }

    #[test]
    fn test_optional_skips_empty() {
        let mut errors = FieldErrors::new();
        FieldCheck::new(&mut errors, "click_limit", "")
            .optional()
            .positive_integer();
        assert!(errors.is_empty());

        FieldCheck::new(&mut errors, "click_limit", "12a")
            .optional()
            .positive_integer();
        assert_eq!(errors.get("click_limit"), Some(MSG_POSITIVE_INTEGER));
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = FieldErrors::new();
        errors.set("name", MSG_REQUIRED);
        errors.set("budget", MSG_POSITIVE_NUMBER);
        errors.clear("name");
        assert!(!errors.contains("name"));
        assert!(errors.contains("budget"));
    }

    #[test]
    fn test_date_range_attaches_to_end_field() {
        let mut errors = FieldErrors::new();
        check_date_range(&mut errors, "2025-03-10", "end_date", "2025-03-10");
        assert_eq!(errors.get("end_date"), Some(MSG_DATE_RANGE));
        assert!(!errors.contains("start_date"));

        let mut errors = FieldErrors::new();
        check_date_range(&mut errors, "2025-03-10", "end_date", "2025-03-11");
        assert!(errors.is_empty());

        let mut errors = FieldErrors::new();
        check_date_range(&mut errors, "", "end_date", "2020-01-01");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number("1 500,50"), Some(1500.5));
        assert_eq!(parse_positive_number("0"), None);
        assert_eq!(parse_positive_number("-3"), None);
        assert_eq!(parse_positive_number("abc"), None);
        assert_eq!(parse_positive_integer("10"), Some(10));
        assert_eq!(parse_positive_integer("1.5"), None);
    }

    #[test]
    fn test_url_shapes() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://shop.example.ru/path?utm=1"));
        assert!(!is_url("not-a-url"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("https://localhost"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_phone("+7 (495) 123-45-67"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("+7 495 abc"));
    }

    #[test]
    fn test_field_errors_serialize_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.set("inn", "bad");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"inn":"bad"}"#);
    }
}
