use contracts::dashboards::d402_audience_insights::{
    AgeGenderShare, AudienceInsightsResponse, AudienceSegment, InterestShare,
};
use rand::Rng;

use crate::dashboards::daily_rng;

/// Сегменты: (id, название, категория)
const SEGMENTS: &[(&str, &str, &str)] = &[
    ("seg-auto", "Автолюбители", "Интересы"),
    ("seg-travel", "Путешественники", "Интересы"),
    ("seg-parents", "Молодые родители", "Жизненная ситуация"),
    ("seg-fintech", "Пользователи финтеха", "Поведение"),
    ("seg-gamers", "Мобильные геймеры", "Поведение"),
    ("seg-retarget", "Посетители сайта (30 дней)", "Ретаргетинг"),
    ("seg-lookalike", "Похожие на покупателей", "Look-alike"),
];

const AGE_RANGES: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];

const INTERESTS: &[&str] = &[
    "Технологии",
    "Путешествия",
    "Финансы",
    "Спорт",
    "Кулинария",
    "Авто",
];

pub fn get_audience_insights() -> anyhow::Result<AudienceInsightsResponse> {
    let mut rng = daily_rng(402);

    let segments = SEGMENTS
        .iter()
        .map(|(id, name, category)| AudienceSegment {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            size: rng.gen_range(40_000..3_500_000),
            reach_percent: (rng.gen_range(5.0..65.0_f64) * 10.0).round() / 10.0,
            ctr: (rng.gen_range(0.3..2.5_f64) * 100.0).round() / 100.0,
            affinity_index: rng.gen_range(60..260),
        })
        .collect();

    // Доли по возрастам нормируются на 100%
    let raw: Vec<(f64, f64)> = AGE_RANGES
        .iter()
        .map(|_| (rng.gen_range(2.0..15.0_f64), rng.gen_range(2.0..15.0_f64)))
        .collect();
    let total: f64 = raw.iter().map(|(m, f)| m + f).sum();
    let age_gender = AGE_RANGES
        .iter()
        .zip(raw)
        .map(|(range, (male, female))| AgeGenderShare {
            age_range: range.to_string(),
            male_percent: (male / total * 1000.0).round() / 10.0,
            female_percent: (female / total * 1000.0).round() / 10.0,
        })
        .collect();

    let mut interests: Vec<InterestShare> = INTERESTS
        .iter()
        .map(|name| InterestShare {
            name: name.to_string(),
            share_percent: (rng.gen_range(5.0..45.0_f64) * 10.0).round() / 10.0,
        })
        .collect();
    interests.sort_by(|a, b| b.share_percent.total_cmp(&a.share_percent));

    Ok(AudienceInsightsResponse {
        segments,
        age_gender,
        interests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_gender_sums_to_hundred() {
        let response = get_audience_insights().unwrap();
        let total: f64 = response
            .age_gender
            .iter()
            .map(|r| r.male_percent + r.female_percent)
            .sum();
        assert!((total - 100.0).abs() < 1.0);
        assert_eq!(response.segments.len(), SEGMENTS.len());
        assert!(response.total_audience() > 0);
    }
}
