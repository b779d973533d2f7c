use crate::shared::indicators::Kpi;
use serde::{Deserialize, Serialize};

/// Уровень риска источника трафика по доле фрода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Пороги: до 5% низкий, до 15% средний, выше высокий
    pub fn from_fraud_rate(rate_percent: f64) -> Self {
        if rate_percent < 5.0 {
            RiskLevel::Low
        } else if rate_percent < 15.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Низкий",
            RiskLevel::Medium => "Средний",
            RiskLevel::High => "Высокий",
        }
    }
}

/// Доля одного типа фрода
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudTypeShare {
    pub kind: String,
    pub label: String,
    #[serde(rename = "sharePercent")]
    pub share_percent: f64,
    #[serde(rename = "blockedImpressions")]
    pub blocked_impressions: u64,
}

/// Подозрительный источник трафика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousSource {
    pub source: String,
    pub impressions: u64,
    #[serde(rename = "fraudRate")]
    pub fraud_rate: f64,
    pub reason: String,
    pub blocked: bool,
}

impl SuspiciousSource {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_fraud_rate(self.fraud_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudDetectionResponse {
    pub kpis: Vec<Kpi>,
    #[serde(rename = "byType")]
    pub by_type: Vec<FraudTypeShare>,
    #[serde(rename = "suspiciousSources")]
    pub suspicious_sources: Vec<SuspiciousSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(RiskLevel::from_fraud_rate(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_fraud_rate(4.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_fraud_rate(5.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_fraud_rate(15.0), RiskLevel::High);
    }
}
