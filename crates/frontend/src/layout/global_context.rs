//! Глобальный контекст приложения: язык интерфейса, текущий пользователь,
//! видимость боковой панели. Передаётся через `provide_context`,
//! изменяется только методами контекста.

use leptos::prelude::*;
use web_sys::window;

const LANGUAGE_STORAGE_KEY: &str = "dsp_console_language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Ru => Language::En,
            Language::En => Language::Ru,
        }
    }
}

/// Пользователь консоли
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    /// Инициалы для аватара: первые буквы двух первых слов имени
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            name: "Менеджер кампаний".to_string(),
            email: "manager@dsp.local".to_string(),
            role: "manager".to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub language: RwSignal<Language>,
    pub current_user: RwSignal<Option<CurrentUser>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(load_language().unwrap_or_default()),
            current_user: RwSignal::new(Some(CurrentUser::default())),
            left_open: RwSignal::new(true),
        }
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        save_language(language);
    }

    pub fn set_current_user(&self, user: Option<CurrentUser>) {
        self.current_user.set(user);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

fn load_language() -> Option<Language> {
    let storage = window()?.local_storage().ok()??;
    let code = storage.get_item(LANGUAGE_STORAGE_KEY).ok()??;
    Language::from_code(&code)
}

fn save_language(language: Language) {
    let storage = window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        if let Err(e) = storage.set_item(LANGUAGE_STORAGE_KEY, language.code()) {
            log::warn!("Failed to save language: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("RU"), Some(Language::Ru));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::Ru.toggled().code(), "en");
    }

    #[test]
    fn test_user_initials() {
        let user = CurrentUser {
            name: "анна петрова иванова".to_string(),
            ..Default::default()
        };
        assert_eq!(user.initials(), "АП");
        assert_eq!(CurrentUser::default().initials(), "МК");
    }
}
