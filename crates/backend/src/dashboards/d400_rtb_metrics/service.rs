use contracts::dashboards::d400_rtb_metrics::RtbSnapshot;
use once_cell::sync::Lazy;
use rand::Rng;
use std::sync::Mutex;

/// Состояние случайного блуждания между запросами
#[derive(Debug, Clone)]
struct WalkState {
    qps: f64,
    bid_rate: f64,
    win_rate: f64,
    ctr: f64,
    cpm: f64,
    latency_ms: f64,
}

impl Default for WalkState {
    fn default() -> Self {
        Self {
            qps: 12_000.0,
            bid_rate: 0.62,
            win_rate: 0.18,
            ctr: 0.011,
            cpm: 145.0,
            latency_ms: 38.0,
        }
    }
}

static STATE: Lazy<Mutex<WalkState>> = Lazy::new(|| Mutex::new(WalkState::default()));

/// Интервал, за который считается срез, секунд
const WINDOW_SECONDS: f64 = 5.0;

/// Шаг блуждания: значение сдвигается не более чем на `step` долей и
/// остаётся в границах
fn drift<R: Rng>(rng: &mut R, value: f64, step: f64, min: f64, max: f64) -> f64 {
    let factor = 1.0 + rng.gen_range(-step..=step);
    (value * factor).clamp(min, max)
}

fn next_state<R: Rng>(rng: &mut R, s: &WalkState) -> WalkState {
    WalkState {
        qps: drift(rng, s.qps, 0.08, 2_000.0, 40_000.0),
        bid_rate: drift(rng, s.bid_rate, 0.05, 0.3, 0.9),
        win_rate: drift(rng, s.win_rate, 0.06, 0.05, 0.4),
        ctr: drift(rng, s.ctr, 0.1, 0.002, 0.04),
        cpm: drift(rng, s.cpm, 0.04, 60.0, 400.0),
        latency_ms: drift(rng, s.latency_ms, 0.1, 10.0, 120.0),
    }
}

fn snapshot_from<R: Rng>(rng: &mut R, s: &WalkState) -> RtbSnapshot {
    let bid_requests = (s.qps * WINDOW_SECONDS).round() as u64;
    let bids = (bid_requests as f64 * s.bid_rate).round() as u64;
    let wins = (bids as f64 * s.win_rate).round() as u64;
    let impressions = wins;
    let clicks = (impressions as f64 * s.ctr).round() as u64;
    let spend = impressions as f64 * s.cpm / 1000.0;
    // Таймауты растут вместе с задержкой
    let timeout_share = (s.latency_ms / 2_000.0).min(0.1) * rng.gen_range(0.5..1.5_f64);
    let timeouts = (bid_requests as f64 * timeout_share).round() as u64;

    RtbSnapshot {
        timestamp: chrono::Utc::now(),
        bid_requests,
        bids,
        wins,
        impressions,
        clicks,
        timeouts,
        spend: (spend * 100.0).round() / 100.0,
        qps: s.qps.round(),
        avg_latency_ms: (s.latency_ms * 10.0).round() / 10.0,
    }
}

/// Следующий срез живых метрик
pub fn live_snapshot() -> anyhow::Result<RtbSnapshot> {
    let mut state = STATE
        .lock()
        .map_err(|_| anyhow::anyhow!("rtb state lock poisoned"))?;
    let mut rng = rand::thread_rng();
    *state = next_state(&mut rng, &state);
    Ok(snapshot_from(&mut rng, &state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_walk_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = WalkState::default();
        for _ in 0..1_000 {
            state = next_state(&mut rng, &state);
            assert!((2_000.0..=40_000.0).contains(&state.qps));
            assert!((0.3..=0.9).contains(&state.bid_rate));
            assert!((10.0..=120.0).contains(&state.latency_ms));
        }
    }

    #[test]
    fn test_snapshot_funnel_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(42);
        let snapshot = snapshot_from(&mut rng, &WalkState::default());
        assert!(snapshot.bid_requests >= snapshot.bids);
        assert!(snapshot.bids >= snapshot.wins);
        assert!(snapshot.impressions >= snapshot.clicks);
        assert_eq!(snapshot.bid_requests, 60_000);
    }

    #[test]
    fn test_live_snapshot() {
        let s = live_snapshot().unwrap();
        assert!(s.qps > 0.0);
        assert!(s.win_rate() <= 100.0);
    }
}
