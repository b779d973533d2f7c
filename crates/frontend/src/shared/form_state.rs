//! Состояние формы: черновик записи и карта ошибок.
//!
//! Ошибка поля убирается при его изменении, а вся форма проверяется
//! заново только при попытке сохранить.

use crate::shared::api_utils::SaveError;
use crate::shared::toast::ToastService;
use contracts::shared::validation::{FieldErrors, FormValidator};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Черновик формы без реактивности
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft<T> {
    pub value: T,
    pub errors: FieldErrors,
}

impl<T: FormValidator> FormDraft<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            errors: FieldErrors::new(),
        }
    }

    /// Применить правку поля и убрать его ошибку. Остальные ошибки не трогаются.
    pub fn update_field(&mut self, field: &str, apply: impl FnOnce(&mut T)) {
        apply(&mut self.value);
        self.errors.clear(field);
    }

    /// Полная проверка. `true`, если форму можно отправлять.
    pub fn validate_all(&mut self) -> bool {
        self.errors = self.value.validate();
        self.errors.is_empty()
    }

    /// Добавить ошибки, пришедшие с сервера
    pub fn apply_server_errors(&mut self, errors: FieldErrors) {
        self.errors.merge(errors);
    }
}

/// Реактивная обёртка над [`FormDraft`] для view model
pub struct FormState<T: Send + Sync + 'static> {
    draft: RwSignal<FormDraft<T>>,
}

impl<T: Send + Sync + 'static> Clone for FormState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FormState<T> {}

impl<T> FormState<T>
where
    T: FormValidator + Clone + Send + Sync + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            draft: RwSignal::new(FormDraft::new(value)),
        }
    }

    /// Заменить запись целиком (после загрузки с сервера), ошибки сбрасываются
    pub fn reset(&self, value: T) {
        self.draft.set(FormDraft::new(value));
    }

    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.draft.with(|d| f(&d.value))
    }

    pub fn value_untracked(&self) -> T {
        self.draft.with_untracked(|d| d.value.clone())
    }

    pub fn update_field(&self, field: &str, apply: impl FnOnce(&mut T)) {
        self.draft.update(|d| d.update_field(field, apply));
    }

    pub fn validate_all(&self) -> bool {
        self.draft
            .try_update(|d| d.validate_all())
            .unwrap_or(false)
    }

    pub fn apply_server_errors(&self, errors: FieldErrors) {
        self.draft.update(|d| d.apply_server_errors(errors));
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.draft.with(|d| d.errors.get(field).map(str::to_string))
    }

    /// Сигнал ошибки одного поля для разметки
    pub fn error_signal(&self, field: &'static str) -> Signal<Option<String>> {
        let this = *self;
        Signal::derive(move || this.error(field))
    }

    pub fn has_errors(&self) -> bool {
        self.draft.with(|d| !d.errors.is_empty())
    }

    /// Значение текстового поля для `value=`
    pub fn text(&self, get: fn(&T) -> &str) -> Signal<String> {
        let this = *self;
        Signal::derive(move || this.with_value(|v| get(v).to_string()))
    }

    /// Обработчик ввода для `on_input=`: правка поля и сброс его ошибки
    pub fn setter(&self, field: &'static str, set: fn(&mut T, String)) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| this.update_field(field, |v| set(v, value)))
    }

    /// Проверить и отправить форму.
    ///
    /// Ошибки полей (свои и ответ 422) остаются в форме, прочие сбои
    /// показываются уведомлением. Черновик при ошибке не сбрасывается.
    pub fn submit<Fut>(
        &self,
        saving: RwSignal<bool>,
        toast: ToastService,
        success_message: String,
        save: impl FnOnce(T) -> Fut + 'static,
        on_saved: Callback<()>,
    ) where
        Fut: Future<Output = Result<String, SaveError>> + 'static,
    {
        if !self.validate_all() {
            toast.error("Проверьте правильность заполнения формы");
            return;
        }

        let this = *self;
        let dto = self.value_untracked();
        saving.set(true);
        spawn_local(async move {
            let result = save(dto).await;
            saving.set(false);
            match result {
                Ok(id) => {
                    log::debug!("Saved record {}", id);
                    toast.success(success_message);
                    on_saved.run(());
                }
                Err(SaveError::Validation(errors)) => {
                    let message = SaveError::Validation(errors.clone()).to_string();
                    this.apply_server_errors(errors);
                    toast.error(message);
                }
                Err(SaveError::Http(msg)) => toast.error(format!("Ошибка сохранения: {}", msg)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_campaign::CampaignDto;
    use contracts::shared::validation::{MSG_DATE_RANGE, MSG_REQUIRED};

    fn draft() -> FormDraft<CampaignDto> {
        FormDraft::new(CampaignDto::for_advertiser(Some(
            "6f2c1a8e-4b0d-4c8e-9f6a-1d2e3f4a5b6c".into(),
        )))
    }

    #[test]
    fn test_errors_appear_only_on_validate_all() {
        let mut form = draft();
        form.update_field("name", |f| f.name = String::new());
        assert!(form.errors.is_empty());

        assert!(!form.validate_all());
        assert_eq!(form.errors.get("name"), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_update_clears_only_that_field() {
        let mut form = draft();
        form.validate_all();
        assert!(form.errors.contains("name"));
        assert!(form.errors.contains("budget"));

        form.update_field("name", |f| f.name = "Весна".into());
        assert!(!form.errors.contains("name"));
        assert!(form.errors.contains("budget"));
    }

    #[test]
    fn test_clearing_does_not_revalidate() {
        let mut form = draft();
        form.update_field("start_date", |f| f.start_date = "2025-05-10".into());
        form.update_field("end_date", |f| f.end_date = "2025-05-01".into());
        assert!(!form.errors.contains("end_date"));

        form.validate_all();
        assert_eq!(form.errors.get("end_date"), Some(MSG_DATE_RANGE));

        // Правка начала не снимает ошибку конца: она пересчитается при сохранении
        form.update_field("start_date", |f| f.start_date = "2025-04-01".into());
        assert_eq!(form.errors.get("end_date"), Some(MSG_DATE_RANGE));
    }

    #[test]
    fn test_server_errors_are_merged() {
        let mut form = draft();
        let mut server = FieldErrors::new();
        server.set("advertiser_id", "Рекламодатель не найден");
        form.apply_server_errors(server);
        assert_eq!(form.errors.get("advertiser_id"), Some("Рекламодатель не найден"));
    }

    #[test]
    fn test_saved_callback_crosses_send_children() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        Owner::new().with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let on_saved = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

            // Колбэк сохранения живёт внутри `children` страницы, а они `Send`
            let children: Box<dyn FnOnce() + Send> = Box::new(move || on_saved.run(()));
            children();
            on_saved.run(());

            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }
}
