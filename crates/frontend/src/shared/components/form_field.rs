//! Поля формы с сообщением об ошибке под вводом
//!
//! Значение и обработчик передаются снаружи, поле только рисует разметку:
//!
//! ```text
//! <TextField
//!     label="Наименование"
//!     required=true
//!     value=form.text(|f| f.name.as_str())
//!     on_input=form.setter("name", |f, v| f.name = v)
//!     error=form.error_signal("name")
//! />
//! ```

use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

/// Варианты статуса для выпадающего списка
pub fn status_options() -> Vec<(String, String)> {
    EntityStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

/// Варианты из справочника (код, подпись)
pub fn static_options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

/// Обёртка: подпись, произвольный ввод и ошибка
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="form__group"
            class:form__group--error=move || error.get().is_some()
            class:form__group--wide=wide
        >
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            {children()}
            {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
    /// Тип input: text, email, date, tel, url
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(optional)] wide: bool,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <FormField label=label required=required error=error wide=wide>
            <input
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                maxlength=maxlength.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FormField>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <FormField label=label required=required error=error wide=true>
            <textarea
                class="form__textarea"
                class:form__input--invalid=move || error.get().is_some()
                rows=3
                placeholder=placeholder
                maxlength=maxlength.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {maxlength.map(|max| view! {
                <div class="form__hint">{move || format!("{} / {}", value.get().chars().count(), max)}</div>
            })}
        </FormField>
    }
}

/// Выпадающий список из пар (код, подпись)
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(optional)] required: bool,
    options: Vec<(String, String)>,
    /// Подпись пустого варианта; без неё пустой вариант не выводится
    #[prop(optional)]
    empty_label: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <FormField label=label required=required error=error>
            <select
                class="form__select"
                class:form__input--invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {empty_label.map(|text| view! { <option value="">{text}</option> })}
                {options.into_iter().map(|(code, text)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </FormField>
    }
}
