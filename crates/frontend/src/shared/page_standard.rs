//! Категории страниц консоли.
//!
//! Каждая страница объявляет:
//!   - HTML `id` в формате `{entity}--{category}` (например `"campaigns--list"`)
//!   - `data-page-category` с одной из констант ниже

/// Таблица записей с поиском и страницами
pub const PAGE_CAT_LIST: &str = "list";

/// Форма создания или редактирования одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Аналитическая панель
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// Проверка формата `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("campaigns--list"));
        assert!(is_valid_page_id("d400_rtb_metrics--dashboard"));
        assert!(!is_valid_page_id("campaigns"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("campaigns--legacy"));
    }
}
