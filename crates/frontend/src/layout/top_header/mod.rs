//! Верхняя панель: переключатель навигации, название, язык и пользователь

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    let is_sidebar_visible = move || ctx.left_open.get();

    let toggle_language = move |_| {
        let next = ctx.language.get_untracked().toggled();
        log::debug!("Language switched to {}", next.code());
        ctx.set_language(next);
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <a class="top-header__title" href="/">"DSP Console"</a>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=toggle_language title="Язык интерфейса">
                    {icon("globe")}
                    <span>{move || ctx.language.get().code().to_uppercase()}</span>
                </button>

                {move || match ctx.current_user.get() {
                    Some(user) => view! {
                        <div class="top-header__user" title=user.email.clone()>
                            <span class="top-header__avatar">{user.initials()}</span>
                            <span>{user.name}</span>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="top-header__user">
                            {icon("user")}
                            <span>"Гость"</span>
                        </div>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
