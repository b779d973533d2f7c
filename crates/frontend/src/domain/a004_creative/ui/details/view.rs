use super::view_model::CreativeDetailsViewModel;
use crate::shared::components::form_field::{
    static_options, status_options, FormField, SelectField, TextAreaField, TextField,
};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a004_creative::{CreativeImage, PLACEMENTS};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Описание файла из `<input type="file">`
fn selected_image(input: &HtmlInputElement) -> Option<CreativeImage> {
    let file = input.files()?.item(0)?;
    Some(CreativeImage {
        file_name: file.name(),
        mime_type: file.type_(),
        size_bytes: file.size() as u64,
    })
}

#[component]
pub fn CreativeDetails(
    #[prop(into)] id: Signal<Option<String>>,
    #[prop(into)] campaign_id: Signal<Option<String>>,
    #[prop(into)] ad_group_id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CreativeDetailsViewModel::new(use_toast());
    let form = vm.form;

    Effect::new(move |_| vm.load_ad_groups(campaign_id.get()));
    Effect::new(move |_| vm.load_if_needed(id.get(), ad_group_id.get()));

    let is_edit = vm.is_edit_mode();
    let is_small = vm.is_small_format();

    let image_info = move || {
        form.with_value(|f| {
            f.image.as_ref().map(|img| {
                format!("{} ({} КБ)", img.file_name, img.size_bytes.div_ceil(1024))
            })
        })
    };

    view! {
        <PageFrame page_id="a004_creative--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("image")}
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Редактирование креатива" } else { "Новый креатив" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.loading.get().then(|| view! { <div class="page__loading">"Загрузка..."</div> })}

                <div class="form">
                    <div class="form__grid">
                        {move || {
                            let options = vm.ad_groups.get();
                            view! {
                                <SelectField
                                    label="Группа объявлений"
                                    required=true
                                    options=options
                                    empty_label="Выберите группу"
                                    value=form.text(|f| f.ad_group_id.as_str())
                                    on_change=form.setter("ad_group_id", |f, v| f.ad_group_id = v)
                                    error=form.error_signal("ad_group_id")
                                />
                            }
                        }}
                        <SelectField
                            label="Площадка"
                            required=true
                            options=static_options(PLACEMENTS)
                            value=form.text(|f| f.placement.as_str())
                            on_change=form.setter("placement", |f, v| f.placement = v)
                            error=form.error_signal("placement")
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

                    {move || is_small.get().then(|| view! {
                        <h3 class="form__section-title">"Объявление"</h3>
                        <div class="form__grid">
                            <TextField
                                label="Название"
                                required=true
                                maxlength=255
                                value=form.text(|f| f.name.as_str())
                                on_input=form.setter("name", |f, v| f.name = v)
                                error=form.error_signal("name")
                            />
                            <TextField
                                label="Заголовок"
                                required=true
                                maxlength=25
                                value=form.text(|f| f.title.as_str())
                                on_input=form.setter("title", |f, v| f.title = v)
                                error=form.error_signal("title")
                            />
                            <TextAreaField
                                label="Текст"
                                required=true
                                maxlength=90
                                value=form.text(|f| f.text.as_str())
                                on_input=form.setter("text", |f, v| f.text = v)
                                error=form.error_signal("text")
                            />
                        </div>
                    })}

                    <h3 class="form__section-title">"Ссылка и изображение"</h3>
                    <div class="form__grid">
                        <TextField
                            label="Ссылка"
                            required=true
                            input_type="url"
                            placeholder="https://"
                            wide=true
                            value=form.text(|f| f.url.as_str())
                            on_input=form.setter("url", |f, v| f.url = v)
                            error=form.error_signal("url")
                        />
                        <FormField label="Изображение" wide=true error=form.error_signal("image")>
                            <input
                                class="form__input"
                                type="file"
                                accept="image/jpeg,image/png,image/gif"
                                on:change=move |ev| {
                                    let input = event_target::<HtmlInputElement>(&ev);
                                    vm.set_image(selected_image(&input));
                                }
                            />
                            {move || image_info().map(|info| view! {
                                <div class="form__hint">
                                    {info}
                                    <button
                                        class="button button--ghost"
                                        title="Убрать изображение"
                                        on:click=move |_| vm.set_image(None)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            })}
                        </FormField>
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
