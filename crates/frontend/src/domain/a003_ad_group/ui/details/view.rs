use super::view_model::AdGroupDetailsViewModel;
use crate::shared::components::form_field::{status_options, FormField, SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a003_ad_group::{DeviceType, GEO_REGIONS};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

#[component]
pub fn AdGroupDetails(
    #[prop(into)] id: Signal<Option<String>>,
    #[prop(into)] advertiser_id: Signal<Option<String>>,
    #[prop(into)] campaign_id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AdGroupDetailsViewModel::new(use_toast());
    let form = vm.form;

    Effect::new(move |_| vm.load_campaigns(advertiser_id.get()));
    Effect::new(move |_| vm.load_if_needed(id.get(), campaign_id.get()));

    let is_edit = vm.is_edit_mode();

    view! {
        <PageFrame page_id="a003_ad_group--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layers")}
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Редактирование группы объявлений" } else { "Новая группа объявлений" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.loading.get().then(|| view! { <div class="page__loading">"Загрузка..."</div> })}

                <div class="form">
                    <div class="form__grid">
                        {move || {
                            let options = vm.campaigns.get();
                            view! {
                                <SelectField
                                    label="Кампания"
                                    required=true
                                    options=options
                                    empty_label="Выберите кампанию"
                                    value=form.text(|f| f.campaign_id.as_str())
                                    on_change=form.setter("campaign_id", |f, v| f.campaign_id = v)
                                    error=form.error_signal("campaign_id")
                                />
                            }
                        }}
                        <TextField
                            label="Название"
                            required=true
                            maxlength=255
                            value=form.text(|f| f.name.as_str())
                            on_input=form.setter("name", |f, v| f.name = v)
                            error=form.error_signal("name")
                        />
                        <TextField
                            label="Дата начала"
                            required=true
                            input_type="date"
                            value=form.text(|f| f.start_date.as_str())
                            on_input=form.setter("start_date", |f, v| f.start_date = v)
                            error=form.error_signal("start_date")
                        />
                        <TextField
                            label="Дата окончания"
                            required=true
                            input_type="date"
                            value=form.text(|f| f.end_date.as_str())
                            on_input=form.setter("end_date", |f, v| f.end_date = v)
                            error=form.error_signal("end_date")
                        />
                        <SelectField
                            label="Статус"
                            options=status_options()
                            value=form.text(|f| f.status.as_str())
                            on_change=Callback::new(move |v: String| {
                                if let Ok(status) = v.parse::<EntityStatus>() {
                                    form.update_field("status", |f| f.status = status);
                                }
                            })
                            error=form.error_signal("status")
                        />
                    </div>

                    <h3 class="form__section-title">"Бюджет и ставки"</h3>
                    <div class="form__grid">
                        <TextField
                            label="Бюджет, ₽"
                            required=true
                            value=form.text(|f| f.budget.as_str())
                            on_input=form.setter("budget", |f, v| f.budget = v)
                            error=form.error_signal("budget")
                        />
                        <TextField
                            label="CPM, ₽"
                            required=true
                            value=form.text(|f| f.cpm.as_str())
                            on_input=form.setter("cpm", |f, v| f.cpm = v)
                            error=form.error_signal("cpm")
                        />
                        <TextField
                            label="Частота показов на пользователя"
                            placeholder="Без ограничения"
                            value=form.text(|f| f.frequency_limit.as_str())
                            on_input=form.setter("frequency_limit", |f, v| f.frequency_limit = v)
                            error=form.error_signal("frequency_limit")
                        />
                        <TextField
                            label="Лимит кликов"
                            placeholder="Без ограничения"
                            value=form.text(|f| f.click_limit.as_str())
                            on_input=form.setter("click_limit", |f, v| f.click_limit = v)
                            error=form.error_signal("click_limit")
                        />
                    </div>

                    <h3 class="form__section-title">"Таргетинг"</h3>
                    <div class="form__grid">
                        <FormField label="Регионы" required=true wide=true error=form.error_signal("geo")>
                            <div class="form__checkbox-group">
                                {GEO_REGIONS.iter().map(|&(code, label)| view! {
                                    <label class="form__checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with_value(|f| f.geo.contains(code))
                                            on:change=move |_| vm.toggle_geo(code)
                                        />
                                        {format!(" {}", label)}
                                    </label>
                                }).collect_view()}
                            </div>
                        </FormField>
                        <FormField label="Устройства" required=true wide=true error=form.error_signal("devices")>
                            <div class="form__checkbox-group">
                                {DeviceType::ALL.into_iter().map(|device| view! {
                                    <label class="form__checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with_value(|f| f.devices.contains(&device))
                                            on:change=move |_| vm.toggle_device(device)
                                        />
                                        {format!(" {}", device.label())}
                                    </label>
                                }).collect_view()}
                            </div>
                        </FormField>
                    </div>
                </div>

                <div class="form__actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.saving.get() || vm.loading.get()
                        on:click=move |_| vm.save_command(on_saved)
                    >
                        {icon("save")}
                        {move || if is_edit.get() { " Сохранить" } else { " Создать" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Отмена"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
