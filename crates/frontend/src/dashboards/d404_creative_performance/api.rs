use crate::shared::api_utils::{api_url, get_json};
use contracts::dashboards::d404_creative_performance::CreativePerformanceResponse;

pub async fn get_creative_performance() -> Result<CreativePerformanceResponse, String> {
    get_json(&api_url("/api/d404/creative-performance")).await
}
