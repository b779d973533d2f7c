use contracts::dashboards::d401_fraud_detection::{
    FraudDetectionResponse, FraudTypeShare, SuspiciousSource,
};
use contracts::dashboards::ratio_percent;
use contracts::shared::indicators::{Kpi, ValueFormat};
use rand::Rng;

use crate::dashboards::daily_rng;

const FRAUD_TYPES: &[(&str, &str)] = &[
    ("bot_traffic", "Бот-трафик"),
    ("click_spam", "Клик-спам"),
    ("ad_stacking", "Наложение объявлений"),
    ("domain_spoofing", "Подмена домена"),
    ("click_injection", "Click injection"),
];

const SOURCES: &[(&str, &str)] = &[
    ("news-aggregator.example", "Аномальный CTR"),
    ("free-games.example", "Повторяющиеся IP"),
    ("video-hub.example", "Нет событий просмотра"),
    ("weather-now.example", "Подозрительный User-Agent"),
    ("coupons.example", "Клики без показов"),
    ("sports-live.example", "Дата-центровые IP"),
];

pub fn get_fraud_detection() -> anyhow::Result<FraudDetectionResponse> {
    let mut rng = daily_rng(401);

    let total_impressions: u64 = rng.gen_range(8_000_000..12_000_000);
    let fraud_rate: f64 = rng.gen_range(3.0..9.0_f64);
    let blocked = (total_impressions as f64 * fraud_rate / 100.0).round() as u64;
    let saved = blocked as f64 * rng.gen_range(90.0..160.0_f64) / 1000.0;

    // Доли типов фрода в сумме дают 100%
    let weights: Vec<f64> = FRAUD_TYPES.iter().map(|_| rng.gen_range(1.0..10.0_f64)).collect();
    let weight_sum: f64 = weights.iter().sum();
    let by_type = FRAUD_TYPES
        .iter()
        .zip(weights)
        .map(|((kind, label), weight)| {
            let share = weight / weight_sum;
            FraudTypeShare {
                kind: kind.to_string(),
                label: label.to_string(),
                share_percent: (share * 1000.0).round() / 10.0,
                blocked_impressions: (blocked as f64 * share).round() as u64,
            }
        })
        .collect();

    let mut suspicious_sources: Vec<SuspiciousSource> = SOURCES
        .iter()
        .map(|(source, reason)| {
            let impressions: u64 = rng.gen_range(50_000..900_000);
            let fraudulent = (impressions as f64 * rng.gen_range(0.01..0.35_f64)).round();
            let rate = ratio_percent(fraudulent, impressions as f64);
            SuspiciousSource {
                source: source.to_string(),
                impressions,
                fraud_rate: (rate * 10.0).round() / 10.0,
                reason: reason.to_string(),
                blocked: rate >= 15.0,
            }
        })
        .collect();
    suspicious_sources.sort_by(|a, b| b.fraud_rate.total_cmp(&a.fraud_rate));

    let kpis = vec![
        Kpi::new(
            "Проверено показов",
            "eye",
            total_impressions as f64,
            ValueFormat::Integer,
        ),
        Kpi::new(
            "Доля фрода",
            "shield-alert",
            (fraud_rate * 100.0).round() / 100.0,
            ValueFormat::Percent { decimals: 2 },
        )
        .with_change(rng.gen_range(-20.0..20.0_f64))
        .with_trend_status(false),
        Kpi::new(
            "Заблокировано показов",
            "shield",
            blocked as f64,
            ValueFormat::Integer,
        ),
        Kpi::new("Сэкономлено", "wallet", saved.round(), ValueFormat::rub()),
    ];

    Ok(FraudDetectionResponse {
        kpis,
        by_type,
        suspicious_sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let response = get_fraud_detection().unwrap();
        assert_eq!(response.kpis.len(), 4);
        assert_eq!(response.by_type.len(), FRAUD_TYPES.len());
        let total_share: f64 = response.by_type.iter().map(|t| t.share_percent).sum();
        assert!((total_share - 100.0).abs() < 1.0);
        let rates: Vec<f64> = response
            .suspicious_sources
            .iter()
            .map(|s| s.fraud_rate)
            .collect();
        assert!(rates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_stable_within_day() {
        assert_eq!(get_fraud_detection().unwrap(), get_fraud_detection().unwrap());
    }
}
