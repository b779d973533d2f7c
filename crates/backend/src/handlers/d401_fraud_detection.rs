use axum::Json;
use contracts::dashboards::d401_fraud_detection::FraudDetectionResponse;

use crate::dashboards::d401_fraud_detection::service;
use crate::shared::error::ServiceError;

/// GET /api/d401/fraud-detection
pub async fn get_fraud_detection() -> Result<Json<FraudDetectionResponse>, ServiceError> {
    let response = service::get_fraud_detection()?;
    tracing::info!(
        "D401 Fraud: returning {} suspicious sources",
        response.suspicious_sources.len()
    );
    Ok(Json(response))
}
