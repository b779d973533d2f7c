//! Mock-генераторы аналитики. Данные синтетические, но стабильные
//! между запросами там, где это важно для UI (кроме живых RTB-метрик).

pub mod d400_rtb_metrics;
pub mod d401_fraud_detection;
pub mod d402_audience_insights;
pub mod d403_device_breakdown;
pub mod d404_creative_performance;

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Детерминированный генератор для «отчётных» дашбордов
///
/// Сид меняется раз в сутки: в течение дня цифры не прыгают.
pub(crate) fn daily_rng(salt: u64) -> StdRng {
    let day = chrono::Utc::now().date_naive().num_days_from_ce() as u64;
    StdRng::seed_from_u64(day.wrapping_mul(31).wrapping_add(salt))
}
