use axum::Json;
use contracts::dashboards::d403_device_breakdown::DeviceBreakdownResponse;

use crate::dashboards::d403_device_breakdown::service;
use crate::shared::error::ServiceError;

/// GET /api/d403/device-breakdown
pub async fn get_device_breakdown() -> Result<Json<DeviceBreakdownResponse>, ServiceError> {
    Ok(Json(service::get_device_breakdown()?))
}
