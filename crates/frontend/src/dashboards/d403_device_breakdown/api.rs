use crate::shared::api_utils::{api_url, get_json};
use contracts::dashboards::d403_device_breakdown::DeviceBreakdownResponse;

pub async fn get_device_breakdown() -> Result<DeviceBreakdownResponse, String> {
    get_json(&api_url("/api/d403/device-breakdown")).await
}
