use axum::Json;
use contracts::dashboards::d402_audience_insights::AudienceInsightsResponse;

use crate::dashboards::d402_audience_insights::service;
use crate::shared::error::ServiceError;

/// GET /api/d402/audience-insights
pub async fn get_audience_insights() -> Result<Json<AudienceInsightsResponse>, ServiceError> {
    Ok(Json(service::get_audience_insights()?))
}
