use super::view::CampaignDetails;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

/// `/advertisers/:advertiser_id/campaigns/create` и `.../campaigns/:id/edit`
#[component]
pub fn CampaignDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let advertiser_id = Signal::derive(move || params.with(|p| p.get("advertiser_id")));

    let to_list = Callback::new(move |_: ()| {
        let path = match advertiser_id.get_untracked() {
            Some(adv) => format!("/advertisers/{}/campaigns", adv),
            None => "/campaigns".to_string(),
        };
        navigate(&path, Default::default());
    });

    view! {
        <CampaignDetails
            id=Signal::derive(move || params.with(|p| p.get("id")))
            advertiser_id=advertiser_id
            on_saved=to_list
            on_cancel=to_list
        />
    }
}
