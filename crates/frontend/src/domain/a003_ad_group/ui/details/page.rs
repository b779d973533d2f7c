use super::view::AdGroupDetails;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

/// `.../campaigns/:campaign_id/adgroups/create` и `.../adgroups/:id/edit`
#[component]
pub fn AdGroupDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let advertiser_id = Signal::derive(move || params.with(|p| p.get("advertiser_id")));
    let campaign_id = Signal::derive(move || params.with(|p| p.get("campaign_id")));

    let to_list = Callback::new(move |_: ()| {
        let path = match (advertiser_id.get_untracked(), campaign_id.get_untracked()) {
            (Some(adv), Some(camp)) => {
                format!("/advertisers/{}/campaigns/{}/adgroups", adv, camp)
            }
            _ => "/adgroups".to_string(),
        };
        navigate(&path, Default::default());
    });

    view! {
        <AdGroupDetails
            id=Signal::derive(move || params.with(|p| p.get("id")))
            advertiser_id=advertiser_id
            campaign_id=campaign_id
            on_saved=to_list
            on_cancel=to_list
        />
    }
}
