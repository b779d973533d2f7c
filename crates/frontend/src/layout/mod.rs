pub mod breadcrumbs;
pub mod global_context;
pub mod left;
pub mod top_header;

use crate::shared::toast::ToastHost;
use breadcrumbs::{Breadcrumbs, RestNameLookup};
use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |  Breadcrumbs                 |
/// |  (Left)   |  страница текущего маршрута  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <main class="app-main">
                    <Breadcrumbs lookup=RestNameLookup />
                    {children()}
                </main>
            </div>

            <ToastHost />
        </div>
    }
}
