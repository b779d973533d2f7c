//! Таблица маршрутов консоли.
//!
//! Вложенные адреса повторяют `layout::breadcrumbs::resolver::ROUTE_PATTERNS`,
//! имена параметров совпадают с теми, что читают страницы.

use crate::dashboards::{
    AnalyticsOverview, AudienceInsightsDashboard, CreativePerformanceDashboard,
    FraudDetectionDashboard, SegmentsList,
};
use crate::domain::a001_advertiser::ui::details::AdvertiserDetailsPage;
use crate::domain::a001_advertiser::ui::list::AdvertiserList;
use crate::domain::a002_campaign::ui::details::CampaignDetailsPage;
use crate::domain::a002_campaign::ui::list::CampaignList;
use crate::domain::a003_ad_group::ui::details::AdGroupDetailsPage;
use crate::domain::a003_ad_group::ui::list::AdGroupList;
use crate::domain::a004_creative::ui::details::CreativeDetailsPage;
use crate::domain::a004_creative::ui::list::CreativeList;
use crate::layout::Shell;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content page__content--center">
                {icon("x")}
                <h1 class="page__title">"Страница не найдена"</h1>
                <a class="button button--primary" href="/advertisers">"К рекламодателям"</a>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=|| view! { <Redirect path="/advertisers"/> }/>

                    <Route path=path!("/advertisers") view=AdvertiserList/>
                    <Route path=path!("/advertisers/create") view=AdvertiserDetailsPage/>
                    <Route path=path!("/advertisers/:id/edit") view=AdvertiserDetailsPage/>

                    <Route path=path!("/advertisers/:advertiser_id/campaigns") view=CampaignList/>
                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/create")
                        view=CampaignDetailsPage
                    />
                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:id/edit")
                        view=CampaignDetailsPage
                    />

                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:campaign_id/adgroups")
                        view=AdGroupList
                    />
                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/create")
                        view=AdGroupDetailsPage
                    />
                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:id/edit")
                        view=AdGroupDetailsPage
                    />

                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:ad_group_id/creatives")
                        view=CreativeList
                    />
                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:ad_group_id/creatives/create")
                        view=CreativeDetailsPage
                    />
                    <Route
                        path=path!("/advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:ad_group_id/creatives/:id/edit")
                        view=CreativeDetailsPage
                    />

                    <Route path=path!("/campaigns") view=CampaignList/>
                    <Route path=path!("/adgroups") view=AdGroupList/>
                    <Route path=path!("/creatives") view=CreativeList/>

                    <Route path=path!("/analytics") view=AnalyticsOverview/>
                    <Route path=path!("/fraud-detection") view=FraudDetectionDashboard/>
                    <Route path=path!("/audience-insights") view=AudienceInsightsDashboard/>
                    <Route path=path!("/segments") view=SegmentsList/>
                    <Route path=path!("/creative-performance") view=CreativePerformanceDashboard/>
                </Routes>
            </Shell>
        </Router>
    }
}
