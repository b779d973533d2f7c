use crate::domain::{a001_advertiser, a002_campaign::api};
use crate::shared::form_state::FormState;
use crate::shared::toast::ToastService;
use contracts::domain::a002_campaign::CampaignDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы кампании
#[derive(Clone, Copy)]
pub struct CampaignDetailsViewModel {
    pub form: FormState<CampaignDto>,
    /// Варианты для выбора рекламодателя: (id, наименование)
    pub advertisers: RwSignal<Vec<(String, String)>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toast: ToastService,
}

impl CampaignDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: FormState::new(CampaignDto::for_advertiser(None)),
            advertisers: RwSignal::new(Vec::new()),
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

    pub fn load_advertisers(&self) {
        let advertisers = self.advertisers;
        spawn_local(async move {
            match a001_advertiser::api::fetch_list().await {
                Ok(list) => advertisers.set(
                    list.into_iter()
                        .map(|a| (a.base.id.as_string(), a.base.description))
                        .collect(),
                ),
                Err(e) => log::warn!("Failed to load advertisers: {}", e),
            }
        });
    }

    /// Новая кампания получает рекламодателя из адреса, существующая загружается
    pub fn load_if_needed(&self, id: Option<String>, advertiser_id: Option<String>) {
        let Some(existing_id) = id else {
            self.form.reset(CampaignDto::for_advertiser(advertiser_id));
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
            format!("Кампания \"{}\" сохранена", name),
            |dto| async move { api::save(&dto).await },
            on_saved,
        );
    }
}
