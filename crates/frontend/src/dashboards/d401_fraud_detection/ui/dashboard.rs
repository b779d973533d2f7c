use crate::dashboards::d401_fraud_detection::api;
use crate::shared::components::stat_card::KpiCard;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_number_int, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_fraud_detection::{
    FraudDetectionResponse, RiskLevel, SuspiciousSource,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn risk_variant(risk: RiskLevel) -> BadgeVariant {
    match risk {
        RiskLevel::Low => BadgeVariant::Success,
        RiskLevel::Medium => BadgeVariant::Warning,
        RiskLevel::High => BadgeVariant::Error,
    }
}

/// Источники для таблицы: по убыванию доли фрода, заблокированные по желанию скрыты
pub fn visible_sources(sources: &[SuspiciousSource], hide_blocked: bool) -> Vec<SuspiciousSource> {
    let mut rows: Vec<SuspiciousSource> = sources
        .iter()
        .filter(|s| !(hide_blocked && s.blocked))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.fraud_rate.total_cmp(&a.fraud_rate));
    rows
}

#[component]
pub fn FraudDetectionDashboard() -> impl IntoView {
    let data = RwSignal::new(None::<FraudDetectionResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let hide_blocked = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::get_fraud_detection().await {
                Ok(response) => {
                    data.set(Some(response));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let kpi_cards = move || {
        data.with(|d| d.as_ref().map(|d| d.kpis.clone()).unwrap_or_default())
            .into_iter()
            .map(|kpi| view! { <KpiCard kpi=kpi/> })
            .collect_view()
    };

    let type_rows = move || {
        data.with(|d| d.as_ref().map(|d| d.by_type.clone()).unwrap_or_default())
            .into_iter()
            .map(|share| {
                let width = format!("width: {:.1}%", share.share_percent.clamp(0.0, 100.0));
                view! {
                    <div class="share-bar">
                        <div class="share-bar__label">
                            {share.label}
                            <span class="share-bar__value">{format_percent(share.share_percent, 1)}</span>
                        </div>
                        <div class="share-bar__track">
                            <div class="share-bar__fill" style=width></div>
                        </div>
                        <div class="share-bar__hint">
                            {format!("Заблокировано показов: {}", format_number_int(share.blocked_impressions as f64))}
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let source_rows = move || {
        let hide = hide_blocked.get();
        data.with(|d| {
            d.as_ref()
                .map(|d| visible_sources(&d.suspicious_sources, hide))
                .unwrap_or_default()
        })
        .into_iter()
        .map(|source| {
            let risk = source.risk();
            view! {
                <tr class="table__row">
                    <td class="table__cell">{source.source}</td>
                    <td class="table__cell table__cell--number">{format_number_int(source.impressions as f64)}</td>
                    <td class="table__cell table__cell--number">{format_percent(source.fraud_rate, 1)}</td>
                    <td class="table__cell">
                        <Badge variant=risk_variant(risk)>{risk.label()}</Badge>
                    </td>
                    <td class="table__cell table__cell--muted">{source.reason}</td>
                    <td class="table__cell">{if source.blocked { "Заблокирован" } else { "Активен" }}</td>
                </tr>
            }
        })
        .collect_view()
    };

    view! {
        <PageFrame page_id="d401_fraud_detection--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("shield")}
                    <h1 class="page__title">"Обнаружение фрода"</h1>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=move |_| load()
                    >
                        {icon("refresh")}
                        " Обновить"
                    </button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || (loading.get() && data.with(|d| d.is_none())).then(|| view! {
                    <div class="page__loading">"Загрузка..."</div>
                })}

                <div class="stat-grid">{kpi_cards}</div>

                <div class="dashboard-grid">
                    <section class="dashboard-section">
                        <h2 class="dashboard-section__title">"Типы фрода"</h2>
                        {type_rows}
                    </section>

                    <section class="dashboard-section dashboard-section--wide">
                        <div class="dashboard-section__header">
                            <h2 class="dashboard-section__title">"Подозрительные источники"</h2>
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || hide_blocked.get()
                                    on:change=move |ev| hide_blocked.set(event_target_checked(&ev))
                                />
                                " Скрыть заблокированные"
                            </label>
                        </div>
                        <div class="table-wrapper">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Источник"</th>
                                        <th class="table__header-cell">"Показы"</th>
                                        <th class="table__header-cell">"Доля фрода"</th>
                                        <th class="table__header-cell">"Риск"</th>
                                        <th class="table__header-cell">"Причина"</th>
                                        <th class="table__header-cell">"Состояние"</th>
                                    </tr>
                                </thead>
                                <tbody>{source_rows}</tbody>
                            </table>
                        </div>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, fraud_rate: f64, blocked: bool) -> SuspiciousSource {
        SuspiciousSource {
            source: name.to_string(),
            impressions: 1000,
            fraud_rate,
            reason: "Аномальный CTR".to_string(),
            blocked,
        }
    }

    #[test]
    fn test_visible_sources_sorted_by_rate() {
        let sources = vec![
            source("a.example", 3.0, false),
            source("b.example", 22.0, true),
            source("c.example", 9.5, false),
        ];
        let all = visible_sources(&sources, false);
        let names: Vec<_> = all.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(names, vec!["b.example", "c.example", "a.example"]);

        let active = visible_sources(&sources, true);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|s| !s.blocked));
    }

    #[test]
    fn test_risk_variant() {
        assert_eq!(risk_variant(RiskLevel::High), BadgeVariant::Error);
        assert_eq!(risk_variant(RiskLevel::Low), BadgeVariant::Success);
    }
}
