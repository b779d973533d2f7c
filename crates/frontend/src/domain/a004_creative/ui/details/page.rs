use super::view::CreativeDetails;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

/// `.../adgroups/:ad_group_id/creatives/create` и `.../creatives/:id/edit`
#[component]
pub fn CreativeDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let advertiser_id = Signal::derive(move || params.with(|p| p.get("advertiser_id")));
    let campaign_id = Signal::derive(move || params.with(|p| p.get("campaign_id")));
    let ad_group_id = Signal::derive(move || params.with(|p| p.get("ad_group_id")));

    let to_list = Callback::new(move |_: ()| {
        let path = match (
            advertiser_id.get_untracked(),
            campaign_id.get_untracked(),
            ad_group_id.get_untracked(),
        ) {
            (Some(adv), Some(camp), Some(group)) => format!(
                "/advertisers/{}/campaigns/{}/adgroups/{}/creatives",
                adv, camp, group
            ),
            _ => "/creatives".to_string(),
        };
        navigate(&path, Default::default());
    });

    view! {
        <CreativeDetails
            id=Signal::derive(move || params.with(|p| p.get("id")))
            campaign_id=campaign_id
            ad_group_id=ad_group_id
            on_saved=to_list
            on_cancel=to_list
        />
    }
}
