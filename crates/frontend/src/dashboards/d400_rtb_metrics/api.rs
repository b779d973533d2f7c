use crate::shared::api_utils::{api_url, get_json};
use contracts::dashboards::d400_rtb_metrics::RtbSnapshot;

const API_BASE: &str = "/api/d400";

/// Текущий срез RTB-метрик
pub async fn get_live_snapshot() -> Result<RtbSnapshot, String> {
    get_json(&api_url(&format!("{}/rtb-metrics/live", API_BASE))).await
}
