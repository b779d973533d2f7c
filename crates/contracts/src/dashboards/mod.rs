pub mod d400_rtb_metrics;
pub mod d401_fraud_detection;
pub mod d402_audience_insights;
pub mod d403_device_breakdown;
pub mod d404_creative_performance;

/// Доля в процентах; при нулевом знаменателе 0
pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Стоимость тысячи показов
pub fn cpm(spend: f64, impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        spend / impressions as f64 * 1000.0
    }
}

/// Окупаемость рекламных расходов (доход / расход)
pub fn roas(revenue: f64, spend: f64) -> f64 {
    if spend <= 0.0 {
        0.0
    } else {
        revenue / spend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_helpers_handle_zero() {
        assert_eq!(ratio_percent(5.0, 0.0), 0.0);
        assert_eq!(ratio_percent(5.0, 200.0), 2.5);
        assert_eq!(cpm(100.0, 0), 0.0);
        assert_eq!(cpm(250.0, 2000), 125.0);
        assert_eq!(roas(300.0, 100.0), 3.0);
        assert_eq!(roas(300.0, 0.0), 0.0);
    }
}
