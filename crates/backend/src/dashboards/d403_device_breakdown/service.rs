use contracts::dashboards::d403_device_breakdown::{DeviceBreakdownResponse, DeviceMetrics};
use contracts::domain::a003_ad_group::DeviceType;
use rand::Rng;

use crate::dashboards::daily_rng;

/// Типичные ОС для каждого типа устройств
fn operating_systems(device: DeviceType) -> &'static [&'static str] {
    match device {
        DeviceType::Desktop => &["Windows", "macOS", "Linux"],
        DeviceType::Mobile => &["Android", "iOS"],
        DeviceType::Tablet => &["iPadOS", "Android"],
        DeviceType::SmartTv => &["Tizen", "webOS", "Android TV"],
    }
}

/// Базовый объём показов устройства (мобильных больше всего)
fn base_impressions(device: DeviceType) -> u64 {
    match device {
        DeviceType::Desktop => 900_000,
        DeviceType::Mobile => 2_400_000,
        DeviceType::Tablet => 300_000,
        DeviceType::SmartTv => 120_000,
    }
}

pub fn get_device_breakdown() -> anyhow::Result<DeviceBreakdownResponse> {
    let mut rng = daily_rng(403);
    let mut rows = Vec::new();

    for device in DeviceType::ALL {
        for os in operating_systems(device) {
            let impressions =
                (base_impressions(device) as f64 * rng.gen_range(0.2..0.8_f64)).round() as u64;
            let clicks = (impressions as f64 * rng.gen_range(0.004..0.02_f64)).round() as u64;
            let conversions = (clicks as f64 * rng.gen_range(0.01..0.08_f64)).round() as u64;
            let spend = impressions as f64 * rng.gen_range(80.0..220.0_f64) / 1000.0;
            rows.push(DeviceMetrics {
                device,
                os: os.to_string(),
                impressions,
                clicks,
                conversions,
                spend: (spend * 100.0).round() / 100.0,
            });
        }
    }

    Ok(DeviceBreakdownResponse { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_device_present() {
        let response = get_device_breakdown().unwrap();
        let totals = response.totals_by_device();
        assert_eq!(totals.len(), DeviceType::ALL.len());
        assert!(response.rows.iter().all(|r| r.clicks <= r.impressions));
    }
}
