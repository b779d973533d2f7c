use super::view::AdvertiserDetails;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

/// `/advertisers/create` и `/advertisers/:id/edit`
#[component]
pub fn AdvertiserDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let to_list = Callback::new(move |_: ()| navigate("/advertisers", Default::default()));

    view! {
        <AdvertiserDetails
            id=Signal::derive(move || params.with(|p| p.get("id")))
            on_saved=to_list
            on_cancel=to_list
        />
    }
}
