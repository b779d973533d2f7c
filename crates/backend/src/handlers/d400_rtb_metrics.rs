use axum::Json;
use contracts::dashboards::d400_rtb_metrics::RtbSnapshot;

use crate::dashboards::d400_rtb_metrics::service;
use crate::shared::error::ServiceError;

/// GET /api/d400/rtb-metrics/live
pub async fn get_live() -> Result<Json<RtbSnapshot>, ServiceError> {
    let snapshot = service::live_snapshot()?;
    tracing::debug!(
        "D400 RTB: qps={} win_rate={:.2}%",
        snapshot.qps,
        snapshot.win_rate()
    );
    Ok(Json(snapshot))
}
