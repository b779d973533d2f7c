use crate::domain::a001_advertiser::api;
use crate::shared::form_state::FormState;
use crate::shared::toast::ToastService;
use contracts::domain::a001_advertiser::AdvertiserDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы рекламодателя
#[derive(Clone, Copy)]
pub struct AdvertiserDetailsViewModel {
    pub form: FormState<AdvertiserDto>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toast: ToastService,
}

impl AdvertiserDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: FormState::new(AdvertiserDto::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            toast,
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with_value(|f| f.id.is_some()))
    }

    /// Загрузить запись для редактирования. Без id форма остаётся пустой.
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            self.form.reset(AdvertiserDto::default());
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(dto) => {
                    this.form.reset(dto);
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
            this.loading.set(false);
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let name = self.form.with_value(|f| f.name.trim().to_string());
        self.form.submit(
            self.saving,
            self.toast,
            format!("Рекламодатель \"{}\" сохранён", name),
            |dto| async move { api::save(&dto).await },
            on_saved,
        );
    }
}
