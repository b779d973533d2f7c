use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Левая зона: скрывается переключателем в верхней панели
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
