use super::{cpm, ratio_percent, roas};
use serde::{Deserialize, Serialize};

/// Эффективность одного креатива за период
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativePerformanceRow {
    #[serde(rename = "creativeId")]
    pub creative_id: String,
    #[serde(rename = "creativeName")]
    pub creative_name: String,
    pub placement: String,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub revenue: f64,
}

impl CreativePerformanceRow {
    pub fn ctr(&self) -> f64 {
        ratio_percent(self.clicks as f64, self.impressions as f64)
    }

    pub fn cpm(&self) -> f64 {
        cpm(self.spend, self.impressions)
    }

    pub fn roas(&self) -> f64 {
        roas(self.revenue, self.spend)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativePerformanceResponse {
    pub rows: Vec<CreativePerformanceRow>,
}
