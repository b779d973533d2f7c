use super::{cpm, ratio_percent};
use crate::domain::a003_ad_group::DeviceType;
use serde::{Deserialize, Serialize};

/// Метрики по паре устройство + ОС
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    pub device: DeviceType,
    pub os: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
}

impl DeviceMetrics {
    pub fn ctr(&self) -> f64 {
        ratio_percent(self.clicks as f64, self.impressions as f64)
    }

    pub fn cpm(&self) -> f64 {
        cpm(self.spend, self.impressions)
    }

    /// Стоимость конверсии
    pub fn cpa(&self) -> f64 {
        if self.conversions == 0 {
            0.0
        } else {
            self.spend / self.conversions as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceBreakdownResponse {
    pub rows: Vec<DeviceMetrics>,
}

impl DeviceBreakdownResponse {
    /// Свести строки по типу устройства (ОС схлопывается)
    pub fn totals_by_device(&self) -> Vec<DeviceMetrics> {
        DeviceType::ALL
            .into_iter()
            .filter_map(|device| {
                let rows: Vec<&DeviceMetrics> =
                    self.rows.iter().filter(|r| r.device == device).collect();
                if rows.is_empty() {
                    return None;
                }
                Some(DeviceMetrics {
                    device,
                    os: String::new(),
                    impressions: rows.iter().map(|r| r.impressions).sum(),
                    clicks: rows.iter().map(|r| r.clicks).sum(),
                    conversions: rows.iter().map(|r| r.conversions).sum(),
                    spend: rows.iter().map(|r| r.spend).sum(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(device: DeviceType, os: &str, impressions: u64, clicks: u64) -> DeviceMetrics {
        DeviceMetrics {
            device,
            os: os.to_string(),
            impressions,
            clicks,
            conversions: clicks / 10,
            spend: impressions as f64 / 10.0,
        }
    }

    #[test]
    fn test_totals_by_device() {
        let response = DeviceBreakdownResponse {
            rows: vec![
                row(DeviceType::Mobile, "Android", 1000, 20),
                row(DeviceType::Mobile, "iOS", 3000, 40),
                row(DeviceType::Desktop, "Windows", 500, 5),
            ],
        };
        let totals = response.totals_by_device();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].device, DeviceType::Desktop);
        let mobile = &totals[1];
        assert_eq!(mobile.impressions, 4000);
        assert_eq!(mobile.clicks, 60);
        assert_eq!(mobile.ctr(), 1.5);
    }

    #[test]
    fn test_cpa_without_conversions() {
        let r = row(DeviceType::Tablet, "iPadOS", 100, 5);
        assert_eq!(r.conversions, 0);
        assert_eq!(r.cpa(), 0.0);
    }
}
