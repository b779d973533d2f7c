//! Справочник аудиторных сегментов (`/segments`)

use crate::dashboards::d402_audience_insights::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_state, Column, ListState, SearchInput, Searchable, SortKey, SortableHeader,
};
use crate::shared::number_format::{format_number_int, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::dashboards::d402_audience_insights::AudienceSegment;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRow(pub AudienceSegment);

impl Searchable for SegmentRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.0.name.to_lowercase().contains(filter)
            || self.0.category.to_lowercase().contains(filter)
    }
}

impl CsvExportable for SegmentRow {
    fn headers() -> Vec<&'static str> {
        vec!["Сегмент", "Категория", "Размер", "Охват, %", "CTR, %", "Индекс"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let s = &self.0;
        vec![
            s.name.clone(),
            s.category.clone(),
            s.size.to_string(),
            format!("{:.2}", s.reach_percent).replace('.', ","),
            format!("{:.2}", s.ctr).replace('.', ","),
            s.affinity_index.to_string(),
        ]
    }
}

fn columns() -> Vec<Column<SegmentRow>> {
    vec![
        Column {
            id: "name",
            label: "Сегмент",
            value: |r| SortKey::text(&r.0.name),
        },
        Column {
            id: "category",
            label: "Категория",
            value: |r| SortKey::text(&r.0.category),
        },
        Column {
            id: "size",
            label: "Размер",
            value: |r| SortKey::Number(r.0.size as f64),
        },
        Column {
            id: "reach",
            label: "Охват",
            value: |r| SortKey::Number(r.0.reach_percent),
        },
        Column {
            id: "ctr",
            label: "CTR",
            value: |r| SortKey::Number(r.0.ctr),
        },
        Column {
            id: "affinity",
            label: "Индекс",
            value: |r| SortKey::Number(r.0.affinity_index as f64),
        },
    ]
}

#[component]
pub fn SegmentsList() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<SegmentRow>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let state = RwSignal::new(ListState::default());

    let page = Memo::new(move |_| {
        items.with(|rows| state.with(|s| apply_list_state(rows, &columns(), s)))
    });

    Effect::new(move |_| {
        loading.set(true);
        spawn_local(async move {
            match api::get_audience_insights().await {
                Ok(response) => {
                    items.set(response.segments.into_iter().map(SegmentRow).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let export = move |_| {
        let rows = items.get_untracked();
        if let Err(e) = export_to_csv(&rows, "segments.csv") {
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="d402_segment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("pie-chart")}
                    <h1 class="page__title">"Сегменты"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=export>
                        {icon("download")}
                        " Экспорт"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.set_search(v)))
                        placeholder="Сегмент или категория"
                    />
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeader label="Сегмент" column="name" state=state/>
                                <SortableHeader label="Категория" column="category" state=state/>
                                <SortableHeader label="Размер" column="size" state=state/>
                                <SortableHeader label="Охват" column="reach" state=state/>
                                <SortableHeader label="CTR" column="ctr" state=state/>
                                <SortableHeader label="Индекс" column="affinity" state=state/>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.with(|p| p.rows.clone()).into_iter().map(|SegmentRow(s)| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{s.name}</td>
                                    <td class="table__cell table__cell--muted">{s.category}</td>
                                    <td class="table__cell table__cell--number">{format_number_int(s.size as f64)}</td>
                                    <td class="table__cell table__cell--number">{format_percent(s.reach_percent, 1)}</td>
                                    <td class="table__cell table__cell--number">{format_percent(s.ctr, 2)}</td>
                                    <td class="table__cell table__cell--number">{s.affinity_index}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                    {move || (!loading.get() && page.with(|p| p.total_count == 0)).then(|| view! {
                        <div class="table__empty">"Нет сегментов"</div>
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
    use crate::shared::export::build_csv;

    fn row(name: &str, category: &str) -> SegmentRow {
        SegmentRow(AudienceSegment {
            id: "s1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            size: 250_000,
            reach_percent: 12.5,
            ctr: 0.85,
            affinity_index: 140,
        })
    }

    #[test]
    fn test_search_by_category() {
        let r = row("Автолюбители", "Интересы");
        assert!(r.matches_filter("интер"));
        assert!(r.matches_filter("авто"));
        assert!(!r.matches_filter("спорт"));
    }

    #[test]
    fn test_csv_uses_decimal_comma() {
        let csv = build_csv(&[row("Автолюбители", "Интересы")]);
        assert!(csv.contains("Автолюбители;Интересы;250000;12,50;0,85;140"));
    }
}
