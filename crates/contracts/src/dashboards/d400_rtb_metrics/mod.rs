use super::{cpm, ratio_percent};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Сколько точек хранит виджет живых метрик
pub const RTB_HISTORY_CAPACITY: usize = 20;

/// Интервал опроса живых метрик, мс
pub const RTB_POLL_INTERVAL_MS: u32 = 5_000;

/// Срез RTB-метрик за последний интервал опроса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtbSnapshot {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "bidRequests")]
    pub bid_requests: u64,
    pub bids: u64,
    pub wins: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub timeouts: u64,
    pub spend: f64,
    pub qps: f64,
    #[serde(rename = "avgLatencyMs")]
    pub avg_latency_ms: f64,
}

impl RtbSnapshot {
    /// Доля запросов, на которые ответили ставкой
    pub fn bid_rate(&self) -> f64 {
        ratio_percent(self.bids as f64, self.bid_requests as f64)
    }

    /// Доля выигранных аукционов среди ставок
    pub fn win_rate(&self) -> f64 {
        ratio_percent(self.wins as f64, self.bids as f64)
    }

    pub fn ctr(&self) -> f64 {
        ratio_percent(self.clicks as f64, self.impressions as f64)
    }

    pub fn ecpm(&self) -> f64 {
        cpm(self.spend, self.impressions)
    }

    pub fn timeout_rate(&self) -> f64 {
        ratio_percent(self.timeouts as f64, self.bid_requests as f64)
    }
}

/// Ограниченная история срезов (самые старые вытесняются)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RtbHistory {
    points: VecDeque<RtbSnapshot>,
}

impl RtbHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: RtbSnapshot) {
        if self.points.len() == RTB_HISTORY_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(snapshot);
    }

    pub fn latest(&self) -> Option<&RtbSnapshot> {
        self.points.back()
    }

    pub fn previous(&self) -> Option<&RtbSnapshot> {
        self.points.iter().rev().nth(1)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// От старых срезов к новым; `.rev()` даёт последние первыми
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RtbSnapshot> {
        self.points.iter()
    }

    /// Изменение метрики между двумя последними срезами, в процентах
    pub fn change_percent(&self, metric: impl Fn(&RtbSnapshot) -> f64) -> Option<f64> {
        let latest = metric(self.latest()?);
        let previous = metric(self.previous()?);
        if previous == 0.0 {
            return None;
        }
        Some((latest - previous) / previous * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(bid_requests: u64, qps: f64) -> RtbSnapshot {
        RtbSnapshot {
            timestamp: chrono::Utc::now(),
            bid_requests,
            bids: bid_requests / 2,
            wins: bid_requests / 10,
            impressions: bid_requests / 10,
            clicks: bid_requests / 1000,
            timeouts: 0,
            spend: bid_requests as f64 / 100.0,
            qps,
            avg_latency_ms: 42.0,
        }
    }

    #[test]
    fn test_rates() {
        let s = snapshot(10_000, 2000.0);
        assert_eq!(s.bid_rate(), 50.0);
        assert_eq!(s.win_rate(), 20.0);
        assert_eq!(s.ctr(), 1.0);
        assert_eq!(s.ecpm(), 100.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = RtbHistory::new();
        for i in 0..(RTB_HISTORY_CAPACITY + 5) {
            history.push(snapshot(1000 + i as u64, i as f64));
        }
        assert_eq!(history.len(), RTB_HISTORY_CAPACITY);
        assert_eq!(history.iter().next().map(|s| s.qps), Some(5.0));
        assert_eq!(history.latest().map(|s| s.qps), Some((RTB_HISTORY_CAPACITY + 4) as f64));
    }

    #[test]
    fn test_iter_newest_first() {
        let mut history = RtbHistory::new();
        for qps in [10.0, 20.0, 30.0] {
            history.push(snapshot(1000, qps));
        }
        let recent: Vec<f64> = history.iter().rev().take(2).map(|s| s.qps).collect();
        assert_eq!(recent, vec![30.0, 20.0]);
    }

    #[test]
    fn test_change_percent() {
        let mut history = RtbHistory::new();
        history.push(snapshot(1000, 100.0));
        assert_eq!(history.change_percent(|s| s.qps), None);
        history.push(snapshot(1000, 110.0));
        let change = history.change_percent(|s| s.qps).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }
}
