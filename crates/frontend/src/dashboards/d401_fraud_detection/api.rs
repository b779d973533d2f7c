use crate::shared::api_utils::{api_url, get_json};
use contracts::dashboards::d401_fraud_detection::FraudDetectionResponse;

pub async fn get_fraud_detection() -> Result<FraudDetectionResponse, String> {
    get_json(&api_url("/api/d401/fraud-detection")).await
}
