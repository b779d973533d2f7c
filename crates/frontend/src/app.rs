use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Язык, пользователь и боковая панель
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
