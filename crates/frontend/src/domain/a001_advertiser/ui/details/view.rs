use super::view_model::AdvertiserDetailsViewModel;
use crate::shared::components::form_field::{status_options, SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

#[component]
pub fn AdvertiserDetails(
    #[prop(into)] id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AdvertiserDetailsViewModel::new(use_toast());
    let form = vm.form;

    Effect::new(move |_| vm.load_if_needed(id.get()));

    let is_edit = vm.is_edit_mode();

    view! {
        <PageFrame page_id="a001_advertiser--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Редактирование рекламодателя" } else { "Новый рекламодатель" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.loading.get().then(|| view! { <div class="page__loading">"Загрузка..."</div> })}

                <div class="form">
                    <h3 class="form__section-title">"Основное"</h3>
                    <div class="form__grid">
                        <TextField
                            label="Наименование"
                            required=true
                            maxlength=255
                            value=form.text(|f| f.name.as_str())
                            on_input=form.setter("name", |f, v| f.name = v)
                            error=form.error_signal("name")
                        />
                        <TextField
                            label="Юридическое наименование"
                            required=true
                            maxlength=255
                            placeholder="ООО «Ромашка»"
                            value=form.text(|f| f.legal_name.as_str())
                            on_input=form.setter("legal_name", |f, v| f.legal_name = v)
                            error=form.error_signal("legal_name")
                        />
                        <TextField
                            label="ИНН"
                            required=true
                            maxlength=12
                            placeholder="10 или 12 цифр"
                            value=form.text(|f| f.inn.as_str())
                            on_input=form.setter("inn", |f, v| f.inn = v)
                            error=form.error_signal("inn")
                        />
                        <TextField
                            label="КПП"
                            maxlength=9
                            placeholder="9 цифр, для юридических лиц"
                            value=form.text(|f| f.kpp.as_str())
                            on_input=form.setter("kpp", |f, v| f.kpp = v)
                            error=form.error_signal("kpp")
                        />
                        <TextField
                            label="ОГРН"
                            required=true
                            maxlength=15
                            placeholder="13 или 15 цифр"
                            value=form.text(|f| f.ogrn.as_str())
                            on_input=form.setter("ogrn", |f, v| f.ogrn = v)
                            error=form.error_signal("ogrn")
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
                            label="Юридический адрес"
                            required=true
                            wide=true
                            maxlength=500
                            value=form.text(|f| f.legal_address.as_str())
                            on_input=form.setter("legal_address", |f, v| f.legal_address = v)
                            error=form.error_signal("legal_address")
                        />
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with_value(|f| f.is_agency)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update_field("is_agency", |f| f.is_agency = checked);
                                }
                            />
                            " Рекламное агентство"
                        </label>
                    </div>

                    <h3 class="form__section-title">"Контакты"</h3>
                    <div class="form__grid">
                        <TextField
                            label="Email"
                            required=true
                            input_type="email"
                            value=form.text(|f| f.contact_email.as_str())
                            on_input=form.setter("contact_email", |f, v| f.contact_email = v)
                            error=form.error_signal("contact_email")
                        />
                        <TextField
                            label="Телефон"
                            input_type="tel"
                            placeholder="+7 (495) 123-45-67"
                            value=form.text(|f| f.contact_phone.as_str())
                            on_input=form.setter("contact_phone", |f, v| f.contact_phone = v)
                            error=form.error_signal("contact_phone")
                        />
                        <TextField
                            label="Сайт"
                            input_type="url"
                            placeholder="https://"
                            value=form.text(|f| f.website.as_str())
                            on_input=form.setter("website", |f, v| f.website = v)
                            error=form.error_signal("website")
                        />
                    </div>

                    <h3 class="form__section-title">"Банковские реквизиты"</h3>
                    <div class="form__grid">
                        <TextField
                            label="Банк"
                            required=true
                            value=form.text(|f| f.bank_name.as_str())
                            on_input=form.setter("bank_name", |f, v| f.bank_name = v)
                            error=form.error_signal("bank_name")
                        />
                        <TextField
                            label="БИК"
                            required=true
                            maxlength=9
                            value=form.text(|f| f.bik.as_str())
                            on_input=form.setter("bik", |f, v| f.bik = v)
                            error=form.error_signal("bik")
                        />
                        <TextField
                            label="Расчётный счёт"
                            required=true
                            maxlength=20
                            value=form.text(|f| f.account_number.as_str())
                            on_input=form.setter("account_number", |f, v| f.account_number = v)
                            error=form.error_signal("account_number")
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
