use crate::dashboards::d404_creative_performance::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::KpiCard;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_state, Column, ListState, SearchInput, Searchable, SortKey, SortableHeader,
};
use crate::shared::number_format::{format_money, format_number_int, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;
use contracts::dashboards::d404_creative_performance::CreativePerformanceRow;
use contracts::dashboards::{cpm, ratio_percent, roas};
use contracts::domain::a004_creative::placement_label;
use contracts::shared::indicators::{IndicatorStatus, Kpi, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceRow(pub CreativePerformanceRow);

impl Searchable for PerformanceRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.0.creative_name.to_lowercase().contains(filter)
            || placement_label(&self.0.placement).to_lowercase().contains(filter)
    }
}

impl CsvExportable for PerformanceRow {
    fn headers() -> Vec<&'static str> {
        vec!["Креатив", "Площадка", "Показы", "Клики", "CTR, %", "Расход", "CPM", "Доход", "ROAS"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let r = &self.0;
        let decimal = |v: f64| format!("{:.2}", v).replace('.', ",");
        vec![
            r.creative_name.clone(),
            placement_label(&r.placement).to_string(),
            r.impressions.to_string(),
            r.clicks.to_string(),
            decimal(r.ctr()),
            decimal(r.spend),
            decimal(r.cpm()),
            decimal(r.revenue),
            decimal(r.roas()),
        ]
    }
}

fn columns() -> Vec<Column<PerformanceRow>> {
    vec![
        Column {
            id: "name",
            label: "Креатив",
            value: |r| SortKey::text(&r.0.creative_name),
        },
        Column {
            id: "impressions",
            label: "Показы",
            value: |r| SortKey::Number(r.0.impressions as f64),
        },
        Column {
            id: "ctr",
            label: "CTR",
            value: |r| SortKey::Number(r.0.ctr()),
        },
        Column {
            id: "spend",
            label: "Расход",
            value: |r| SortKey::Number(r.0.spend),
        },
        Column {
            id: "cpm",
            label: "CPM",
            value: |r| SortKey::Number(r.0.cpm()),
        },
        Column {
            id: "roas",
            label: "ROAS",
            value: |r| SortKey::Number(r.0.roas()),
        },
    ]
}

/// Итоги по всем креативам
pub fn summary_kpis(rows: &[PerformanceRow]) -> Vec<Kpi> {
    let impressions: u64 = rows.iter().map(|r| r.0.impressions).sum();
    let clicks: u64 = rows.iter().map(|r| r.0.clicks).sum();
    let spend: f64 = rows.iter().map(|r| r.0.spend).sum();
    let revenue: f64 = rows.iter().map(|r| r.0.revenue).sum();

    let total_roas = roas(revenue, spend);
    let mut roas_kpi = Kpi::new("ROAS", "percent", total_roas, ValueFormat::Number { decimals: 2 });
    if spend > 0.0 {
        roas_kpi.status = if total_roas >= 1.0 {
            IndicatorStatus::Good
        } else {
            IndicatorStatus::Bad
        };
    }

    vec![
        Kpi::new("Показы", "eye", impressions as f64, ValueFormat::Integer),
        Kpi::new(
            "CTR",
            "mouse-pointer",
            ratio_percent(clicks as f64, impressions as f64),
            ValueFormat::Percent { decimals: 2 },
        ),
        Kpi::new("Расход", "dollar-sign", spend, ValueFormat::rub()),
        Kpi::new("CPM", "bar-chart", cpm(spend, impressions), ValueFormat::rub()),
        roas_kpi,
    ]
}

#[component]
pub fn CreativePerformanceDashboard() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<PerformanceRow>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let state = RwSignal::new(ListState {
        sort_column: Some("roas"),
        sort_ascending: false,
        ..Default::default()
    });

    let page = Memo::new(move |_| {
        items.with(|rows| state.with(|s| apply_list_state(rows, &columns(), s)))
    });

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::get_creative_performance().await {
                Ok(response) => {
                    items.set(response.rows.into_iter().map(PerformanceRow).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let export = move |_| {
        if let Err(e) = export_to_csv(&items.get_untracked(), "creative_performance.csv") {
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="d404_creative_performance--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bar-chart")}
                    <h1 class="page__title">"Эффективность креативов"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=export>
                        {icon("download")}
                        " Экспорт"
                    </button>
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

                <div class="stat-grid">
                    {move || items.with(|rows| summary_kpis(rows)).into_iter().map(|kpi| view! {
                        <KpiCard kpi=kpi/>
                    }).collect_view()}
                </div>

                <div class="filter-panel">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.set_search(v)))
                        placeholder="Креатив или площадка"
                    />
                </div>

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeader label="Креатив" column="name" state=state/>
                                <th class="table__header-cell">"Площадка"</th>
                                <SortableHeader label="Показы" column="impressions" state=state/>
                                <SortableHeader label="CTR" column="ctr" state=state/>
                                <SortableHeader label="Расход" column="spend" state=state/>
                                <SortableHeader label="CPM" column="cpm" state=state/>
                                <SortableHeader label="ROAS" column="roas" state=state/>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.with(|p| p.rows.clone()).into_iter().map(|PerformanceRow(r)| {
                                let placement = placement_label(&r.placement).to_string();
                                let roas_class = if r.roas() >= 1.0 {
                                    "table__cell table__cell--number table__cell--success"
                                } else {
                                    "table__cell table__cell--number table__cell--error"
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{r.creative_name.clone()}</td>
                                        <td class="table__cell table__cell--muted">{placement}</td>
                                        <td class="table__cell table__cell--number">{format_number_int(r.impressions as f64)}</td>
                                        <td class="table__cell table__cell--number">{format_percent(r.ctr(), 2)}</td>
                                        <td class="table__cell table__cell--number">{format!("{} ₽", format_money(r.spend))}</td>
                                        <td class="table__cell table__cell--number">{format!("{} ₽", format_money(r.cpm()))}</td>
                                        <td class=roas_class>{format!("{:.2}", r.roas())}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    {move || (!loading.get() && page.with(|p| p.total_count == 0)).then(|| view! {
                        <div class="table__empty">"Нет данных"</div>
                    })}
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(move |p: usize| state.update(|s| s.page = p))
                    on_page_size_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, impressions: u64, clicks: u64, spend: f64, revenue: f64) -> PerformanceRow {
        PerformanceRow(CreativePerformanceRow {
            creative_id: name.to_lowercase(),
            creative_name: name.to_string(),
            placement: "1_small".to_string(),
            impressions,
            clicks,
            spend,
            revenue,
        })
    }

    #[test]
    fn test_summary_kpis() {
        let rows = vec![row("А", 1000, 10, 100.0, 250.0), row("Б", 3000, 30, 300.0, 150.0)];
        let kpis = summary_kpis(&rows);
        assert_eq!(kpis[0].value, Some(4000.0));
        assert_eq!(kpis[1].value, Some(1.0));
        assert_eq!(kpis[2].value, Some(400.0));
        assert_eq!(kpis[3].value, Some(100.0));
        assert_eq!(kpis[4].value, Some(1.0));
        assert_eq!(kpis[4].status, IndicatorStatus::Good);
    }

    #[test]
    fn test_summary_without_rows() {
        let kpis = summary_kpis(&[]);
        assert_eq!(kpis[3].value, Some(0.0));
        assert_eq!(kpis[4].status, IndicatorStatus::Neutral);
    }

    #[test]
    fn test_search_by_placement_label() {
        let r = row("Весна", 10, 1, 1.0, 1.0);
        assert!(r.matches_filter("лента"));
    }
}
