use crate::domain::{a003_ad_group, a004_creative::api};
use crate::shared::form_state::FormState;
use crate::shared::toast::ToastService;
use contracts::domain::a004_creative::{CreativeDto, CreativeFormat, CreativeImage};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы креатива
#[derive(Clone, Copy)]
pub struct CreativeDetailsViewModel {
    pub form: FormState<CreativeDto>,
    /// Группы объявлений кампании: (id, название)
    pub ad_groups: RwSignal<Vec<(String, String)>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toast: ToastService,
}

impl CreativeDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: FormState::new(CreativeDto::for_ad_group(None)),
            ad_groups: RwSignal::new(Vec::new()),
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

    /// Малый формат: название, заголовок и текст обязательны
    pub fn is_small_format(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with_value(|f| f.format() == CreativeFormat::Small))
    }

    pub fn load_ad_groups(&self, campaign_id: Option<String>) {
        let ad_groups = self.ad_groups;
        spawn_local(async move {
            match a003_ad_group::api::fetch_list(campaign_id.as_deref()).await {
                Ok(list) => ad_groups.set(
                    list.into_iter()
                        .map(|g| (g.base.id.as_string(), g.base.description))
                        .collect(),
                ),
                Err(e) => log::warn!("Failed to load ad groups: {}", e),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<String>, ad_group_id: Option<String>) {
        let Some(existing_id) = id else {
            self.form.reset(CreativeDto::for_ad_group(ad_group_id));
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

    /// Выбранный файл. Тип и размер проверяются валидатором формы.
    pub fn set_image(&self, image: Option<CreativeImage>) {
        self.form.update_field("image", |f| f.image = image);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let name = self.form.with_value(|f| {
            if f.name.trim().is_empty() {
                f.url.trim().to_string()
            } else {
                f.name.trim().to_string()
            }
        });
        self.form.submit(
            self.saving,
            self.toast,
            format!("Креатив \"{}\" сохранён", name),
            |dto| async move { api::save(&dto).await },
            on_saved,
        );
    }
}
