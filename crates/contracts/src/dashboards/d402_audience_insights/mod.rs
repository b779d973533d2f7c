use serde::{Deserialize, Serialize};

/// Аудиторный сегмент
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceSegment {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Размер сегмента, пользователей
    pub size: u64,
    #[serde(rename = "reachPercent")]
    pub reach_percent: f64,
    pub ctr: f64,
    /// Индекс соответствия (100 = средний пользователь)
    #[serde(rename = "affinityIndex")]
    pub affinity_index: u32,
}

/// Распределение по возрасту и полу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGenderShare {
    #[serde(rename = "ageRange")]
    pub age_range: String,
    #[serde(rename = "malePercent")]
    pub male_percent: f64,
    #[serde(rename = "femalePercent")]
    pub female_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestShare {
    pub name: String,
    #[serde(rename = "sharePercent")]
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceInsightsResponse {
    pub segments: Vec<AudienceSegment>,
    #[serde(rename = "ageGender")]
    pub age_gender: Vec<AgeGenderShare>,
    pub interests: Vec<InterestShare>,
}

impl AudienceInsightsResponse {
    /// Суммарный охват всех сегментов
    pub fn total_audience(&self) -> u64 {
        self.segments.iter().map(|s| s.size).sum()
    }
}
