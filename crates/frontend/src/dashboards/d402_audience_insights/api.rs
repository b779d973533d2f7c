use crate::shared::api_utils::{api_url, get_json};
use contracts::dashboards::d402_audience_insights::AudienceInsightsResponse;

pub async fn get_audience_insights() -> Result<AudienceInsightsResponse, String> {
    get_json(&api_url("/api/d402/audience-insights")).await
}
