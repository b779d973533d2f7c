use super::view_model::CampaignDetailsViewModel;
use crate::shared::components::form_field::{
    static_options, status_options, SelectField, TextField,
};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a002_campaign::CAMPAIGN_GOALS;
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

#[component]
pub fn CampaignDetails(
    #[prop(into)] id: Signal<Option<String>>,
    /// Рекламодатель из адреса страницы, подставляется в новую кампанию
    #[prop(into)]
    advertiser_id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CampaignDetailsViewModel::new(use_toast());
    let form = vm.form;

    vm.load_advertisers();
    Effect::new(move |_| vm.load_if_needed(id.get(), advertiser_id.get()));

    let is_edit = vm.is_edit_mode();

    view! {
        <PageFrame page_id="a002_campaign--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("megaphone")}
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Редактирование кампании" } else { "Новая кампания" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.loading.get().then(|| view! { <div class="page__loading">"Загрузка..."</div> })}

                <div class="form">
                    <div class="form__grid">
                        {move || {
                            let options = vm.advertisers.get();
                            view! {
                                <SelectField
                                    label="Рекламодатель"
                                    required=true
                                    options=options
                                    empty_label="Выберите рекламодателя"
                                    value=form.text(|f| f.advertiser_id.as_str())
                                    on_change=form.setter("advertiser_id", |f, v| f.advertiser_id = v)
                                    error=form.error_signal("advertiser_id")
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
                        <SelectField
                            label="Цель"
                            required=true
                            options=static_options(CAMPAIGN_GOALS)
                            empty_label="Выберите цель"
                            value=form.text(|f| f.goal.as_str())
                            on_change=form.setter("goal", |f, v| f.goal = v)
                            error=form.error_signal("goal")
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
                    </div>

                    <h3 class="form__section-title">"Бюджет и ограничения"</h3>
                    <div class="form__grid">
                        <TextField
                            label="Общий бюджет, ₽"
                            required=true
                            placeholder="100000"
                            value=form.text(|f| f.budget.as_str())
                            on_input=form.setter("budget", |f, v| f.budget = v)
                            error=form.error_signal("budget")
                        />
                        <TextField
                            label="Дневной бюджет, ₽"
                            value=form.text(|f| f.daily_budget.as_str())
                            on_input=form.setter("daily_budget", |f, v| f.daily_budget = v)
                            error=form.error_signal("daily_budget")
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
