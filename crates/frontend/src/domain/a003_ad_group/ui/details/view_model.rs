use crate::domain::{a002_campaign, a003_ad_group::api};
use crate::shared::form_state::FormState;
use crate::shared::toast::ToastService;
use contracts::domain::a003_ad_group::{AdGroupDto, DeviceType};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы группы объявлений
#[derive(Clone, Copy)]
pub struct AdGroupDetailsViewModel {
    pub form: FormState<AdGroupDto>,
    /// Кампании рекламодателя: (id, название)
    pub campaigns: RwSignal<Vec<(String, String)>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toast: ToastService,
}

impl AdGroupDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            form: FormState::new(AdGroupDto::for_campaign(None)),
            campaigns: RwSignal::new(Vec::new()),
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

    /// Кампании для выбора: только рекламодателя из адреса, если он известен
    pub fn load_campaigns(&self, advertiser_id: Option<String>) {
        let campaigns = self.campaigns;
        spawn_local(async move {
            match a002_campaign::api::fetch_list(advertiser_id.as_deref()).await {
                Ok(list) => campaigns.set(
                    list.into_iter()
                        .map(|c| (c.base.id.as_string(), c.base.description))
                        .collect(),
                ),
                Err(e) => log::warn!("Failed to load campaigns: {}", e),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<String>, campaign_id: Option<String>) {
        let Some(existing_id) = id else {
            self.form.reset(AdGroupDto::for_campaign(campaign_id));
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

    pub fn toggle_geo(&self, code: &'static str) {
        self.form.update_field("geo", |f| f.toggle_geo(code));
    }

    pub fn toggle_device(&self, device: DeviceType) {
        self.form.update_field("devices", |f| f.toggle_device(device));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let name = self.form.with_value(|f| f.name.trim().to_string());
        self.form.submit(
            self.saving,
            self.toast,
            format!("Группа объявлений \"{}\" сохранена", name),
            |dto| async move { api::save(&dto).await },
            on_saved,
        );
    }
}
