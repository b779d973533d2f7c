use axum::Json;
use contracts::dashboards::d404_creative_performance::CreativePerformanceResponse;

use crate::dashboards::d404_creative_performance::service;
use crate::shared::error::ServiceError;

/// GET /api/d404/creative-performance
pub async fn get_creative_performance() -> Result<Json<CreativePerformanceResponse>, ServiceError> {
    let response = service::get_creative_performance().await?;
    tracing::info!("D404 Creatives: returning {} rows", response.rows.len());
    Ok(Json(response))
}
