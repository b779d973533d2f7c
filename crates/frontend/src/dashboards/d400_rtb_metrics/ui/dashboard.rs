use crate::dashboards::d400_rtb_metrics::api;
use crate::shared::components::stat_card::KpiCard;
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int, format_percent};
use contracts::dashboards::d400_rtb_metrics::{RtbHistory, RtbSnapshot, RTB_POLL_INTERVAL_MS};
use contracts::shared::indicators::{IndicatorStatus, Kpi, ValueFormat};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// KPI по последнему срезу с изменением к предыдущему
fn snapshot_kpi(
    history: &RtbHistory,
    label: &str,
    icon: &str,
    format: ValueFormat,
    metric: fn(&RtbSnapshot) -> f64,
    higher_is_better: bool,
) -> Kpi {
    let kpi = Kpi {
        label: label.to_string(),
        icon: icon.to_string(),
        value: history.latest().map(metric),
        format,
        status: IndicatorStatus::Neutral,
        change_percent: history.change_percent(metric),
    };
    kpi.with_trend_status(higher_is_better)
}

pub fn rtb_kpis(history: &RtbHistory) -> Vec<Kpi> {
    vec![
        snapshot_kpi(
            history,
            "Запросов в секунду",
            "zap",
            ValueFormat::Integer,
            |s| s.qps,
            true,
        ),
        snapshot_kpi(
            history,
            "Bid rate",
            "target",
            ValueFormat::Percent { decimals: 1 },
            |s| s.bid_rate(),
            true,
        ),
        snapshot_kpi(
            history,
            "Win rate",
            "activity",
            ValueFormat::Percent { decimals: 1 },
            |s| s.win_rate(),
            true,
        ),
        snapshot_kpi(
            history,
            "CTR",
            "mouse-pointer",
            ValueFormat::Percent { decimals: 2 },
            |s| s.ctr(),
            true,
        ),
        snapshot_kpi(history, "eCPM", "dollar-sign", ValueFormat::rub(), |s| s.ecpm(), false),
        snapshot_kpi(
            history,
            "Задержка ответа, мс",
            "clock",
            ValueFormat::Number { decimals: 1 },
            |s| s.avg_latency_ms,
            false,
        ),
    ]
}

/// Высота столбика QPS относительно максимума истории, %
pub fn bar_height(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Живые RTB-метрики: опрос сервера каждые 5 секунд, пока страница открыта
#[component]
pub fn RtbMetricsDashboard() -> impl IntoView {
    let history = RwSignal::new(RtbHistory::new());
    let error = RwSignal::new(None::<String>);
    let paused = RwSignal::new(false);

    let stopped = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let stopped = stopped.clone();
        move || stopped.store(true, Ordering::Relaxed)
    });

    spawn_local(async move {
        while !stopped.load(Ordering::Relaxed) {
            if !paused.get_untracked() {
                let result = api::get_live_snapshot().await;
                if stopped.load(Ordering::Relaxed) {
                    break;
                }
                match result {
                    Ok(snapshot) => {
                        history.update(|h| h.push(snapshot));
                        error.set(None);
                    }
                    Err(e) => {
                        log::warn!("D400 RTB poll failed: {}", e);
                        error.set(Some(e));
                    }
                }
            }
            TimeoutFuture::new(RTB_POLL_INTERVAL_MS).await;
        }
        log::debug!("D400 RTB polling stopped");
    });

    let qps_bars = move || {
        history.with(|h| {
            let max = h.iter().map(|s| s.qps).fold(0.0, f64::max);
            h.iter()
                .map(|s| {
                    let style = format!("height: {:.0}%", bar_height(s.qps, max));
                    let title = format!("{} · {} QPS", format_time(&s.timestamp), format_number_int(s.qps));
                    view! { <div class="rtb-chart__bar" style=style title=title></div> }
                })
                .collect_view()
        })
    };

    let recent_rows = move || {
        history.with(|h| {
            h.iter()
                .rev()
                .take(5)
                .map(|s| {
                    view! {
                        <tr class="table__row">
                            <td class="table__cell">{format_time(&s.timestamp)}</td>
                            <td class="table__cell table__cell--number">{format_number_int(s.bid_requests as f64)}</td>
                            <td class="table__cell table__cell--number">{format_number_int(s.wins as f64)}</td>
                            <td class="table__cell table__cell--number">{format_percent(s.win_rate(), 1)}</td>
                            <td class="table__cell table__cell--number">{format_percent(s.timeout_rate(), 2)}</td>
                            <td class="table__cell table__cell--number">{format!("{} ₽", format_money(s.spend))}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="dashboard-section">
            <div class="dashboard-section__header">
                <h2 class="dashboard-section__title">
                    {icon("activity")}
                    " RTB в реальном времени"
                </h2>
                <button
                    class="button button--secondary"
                    on:click=move |_| paused.update(|p| *p = !*p)
                >
                    {move || if paused.get() { icon("play") } else { icon("pause") }}
                    {move || if paused.get() { " Продолжить" } else { " Пауза" }}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-grid">
                {move || history.with(rtb_kpis).into_iter().map(|kpi| view! {
                    <KpiCard kpi=kpi/>
                }).collect_view()}
            </div>

            <div class="rtb-chart">{qps_bars}</div>

            <div class="table-wrapper">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Время"</th>
                            <th class="table__header-cell">"Запросы"</th>
                            <th class="table__header-cell">"Выигрыши"</th>
                            <th class="table__header-cell">"Win rate"</th>
                            <th class="table__header-cell">"Таймауты"</th>
                            <th class="table__header-cell">"Расход"</th>
                        </tr>
                    </thead>
                    <tbody>{recent_rows}</tbody>
                </table>
                {move || history.with(|h| h.is_empty()).then(|| view! {
                    <div class="table__empty">"Ожидание первых данных..."</div>
                })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(qps: f64, avg_latency_ms: f64) -> RtbSnapshot {
        RtbSnapshot {
            timestamp: chrono::Utc::now(),
            bid_requests: 10_000,
            bids: 6_000,
            wins: 1_200,
            impressions: 1_100,
            clicks: 22,
            timeouts: 50,
            spend: 132.0,
            qps,
            avg_latency_ms,
        }
    }

    #[test]
    fn test_kpis_without_data() {
        let kpis = rtb_kpis(&RtbHistory::new());
        assert_eq!(kpis.len(), 6);
        assert!(kpis.iter().all(|k| k.value.is_none() && k.change_percent.is_none()));
        assert!(kpis.iter().all(|k| k.status == IndicatorStatus::Neutral));
    }

    #[test]
    fn test_kpis_follow_trend() {
        let mut history = RtbHistory::new();
        history.push(snapshot(1000.0, 40.0));
        history.push(snapshot(1100.0, 50.0));
        let kpis = rtb_kpis(&history);

        let qps = &kpis[0];
        assert_eq!(qps.value, Some(1100.0));
        assert_eq!(qps.status, IndicatorStatus::Good);

        // Рост задержки плохо
        let latency = &kpis[5];
        assert_eq!(latency.status, IndicatorStatus::Bad);
    }

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(50.0, 200.0), 25.0);
        assert_eq!(bar_height(10.0, 0.0), 0.0);
        assert_eq!(bar_height(300.0, 200.0), 100.0);
    }
}
