//! Список кампаний: внутри рекламодателя (`/advertisers/:advertiser_id/campaigns`)
//! и общий (`/campaigns`).

use crate::domain::{a001_advertiser, a002_campaign::api};
use crate::shared::api_utils::SaveError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_period;
use crate::shared::export::download_from_url;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_state, confirm_delete, prompt_value, Column, ListState, SearchInput, Searchable,
    SortKey, SortableHeader,
};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a002_campaign::{campaign_goal_label, Campaign};
use contracts::domain::common::{AggregateId, EntityStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use std::collections::HashMap;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRow {
    pub id: String,
    pub advertiser_id: String,
    pub name: String,
    pub goal: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub daily_budget: Option<f64>,
    pub status: EntityStatus,
}

impl From<Campaign> for CampaignRow {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.base.id.as_string(),
            advertiser_id: c.advertiser_id.as_string(),
            name: c.base.description,
            goal: c.goal,
            start_date: c.start_date.format("%Y-%m-%d").to_string(),
            end_date: c.end_date.format("%Y-%m-%d").to_string(),
            budget: c.budget,
            daily_budget: c.daily_budget,
            status: c.status,
        }
    }
}

impl CampaignRow {
    /// `/advertisers/{a}/campaigns/{c}`
    pub fn base_path(&self) -> String {
        format!("/advertisers/{}/campaigns/{}", self.advertiser_id, self.id)
    }
}

impl Searchable for CampaignRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || campaign_goal_label(&self.goal).to_lowercase().contains(filter)
    }
}

fn columns() -> Vec<Column<CampaignRow>> {
    vec![
        Column {
            id: "name",
            label: "Название",
            value: |r| SortKey::text(&r.name),
        },
        Column {
            id: "goal",
            label: "Цель",
            value: |r| SortKey::text(campaign_goal_label(&r.goal)),
        },
        Column {
            id: "start_date",
            label: "Период",
            value: |r| SortKey::Text(r.start_date.clone()),
        },
        Column {
            id: "budget",
            label: "Бюджет",
            value: |r| SortKey::Number(r.budget),
        },
        Column {
            id: "status",
            label: "Статус",
            value: |r| SortKey::text(r.status.label()),
        },
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CampaignList() -> impl IntoView {
    let toast = use_toast();
    let params = use_params_map();
    let advertiser_id = Memo::new(move |_| params.with(|p| p.get("advertiser_id")));

    let items = RwSignal::new(Vec::<CampaignRow>::new());
    let advertiser_names = RwSignal::new(HashMap::<String, String>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let state = RwSignal::new(ListState::default());

    let page = Memo::new(move |_| {
        items.with(|rows| state.with(|s| apply_list_state(rows, &columns(), s)))
    });

    let fetch = move || {
        let parent = advertiser_id.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(parent.as_deref()).await {
                Ok(v) => {
                    items.set(v.into_iter().map(CampaignRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        advertiser_id.track();
        state.update(|s| s.page = 0);
        fetch();
    });

    // В общем списке показываем рекламодателя каждой строки
    Effect::new(move |_| {
        if advertiser_id.get().is_some() {
            return;
        }
        spawn_local(async move {
            match a001_advertiser::api::fetch_list().await {
                Ok(list) => advertiser_names.set(
                    list.into_iter()
                        .map(|a| (a.base.id.as_string(), a.base.description))
                        .collect(),
                ),
                Err(e) => log::warn!("Failed to load advertisers: {}", e),
            }
        });
    });

    let replace_row = move |updated: CampaignRow| {
        items.update(|rows| {
            if let Some(r) = rows.iter_mut().find(|r| r.id == updated.id) {
                *r = updated;
            }
        });
    };

    let toggle_status = move |row: CampaignRow| {
        spawn_local(async move {
            match api::set_status(&row.id, row.status.toggled()).await {
                Ok(updated) => {
                    let updated = CampaignRow::from(updated);
                    toast.success(format!("Кампания \"{}\": {}", updated.name, updated.status.label()));
                    replace_row(updated);
                }
                Err(e) => toast.error(format!("Не удалось изменить статус: {}", e)),
            }
        });
    };

    let change_budget = move |row: CampaignRow| {
        let Some(value) = prompt_value(
            &format!("Новый бюджет кампании \"{}\", ₽", row.name),
            &row.budget.to_string(),
        ) else {
            return;
        };
        spawn_local(async move {
            match api::set_budget(&row.id, value).await {
                Ok(updated) => {
                    toast.success(format!("Бюджет кампании \"{}\" обновлён", row.name));
                    replace_row(CampaignRow::from(updated));
                }
                Err(SaveError::Validation(errors)) => toast.error(
                    errors
                        .get("budget")
                        .unwrap_or("Некорректный бюджет")
                        .to_string(),
                ),
                Err(SaveError::Http(msg)) => toast.error(format!("Ошибка: {}", msg)),
            }
        });
    };

    let delete_row = move |row: CampaignRow| {
        if !confirm_delete(&row.name) {
            return;
        }
        spawn_local(async move {
            match api::delete_by_id(&row.id).await {
                Ok(()) => {
                    items.update(|rows| rows.retain(|r| r.id != row.id));
                    toast.success(format!("Кампания \"{}\" удалена", row.name));
                }
                Err(e) => toast.error(format!("Ошибка удаления: {}", e)),
            }
        });
    };

    let export = move || {
        let url = api::export_url(advertiser_id.get_untracked().as_deref());
        if let Err(e) = download_from_url(&url, "campaigns.csv") {
            toast.error(e);
        }
    };

    let is_nested = move || advertiser_id.with(|id| id.is_some());

    view! {
        <PageFrame page_id="a002_campaign--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("megaphone")}
                    <h1 class="page__title">
                        {move || if is_nested() { "Кампании" } else { "Все кампании" }}
                    </h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    {move || advertiser_id.get().map(|adv| view! {
                        <a class="button button--primary" href=format!("/advertisers/{}/campaigns/create", adv)>
                            {icon("plus")}
                            "Новая кампания"
                        </a>
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        " Экспорт"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.set_search(v)))
                        placeholder="Название или цель"
                    />
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeader label="Название" column="name" state=state/>
                                {move || (!is_nested()).then(|| view! {
                                    <th class="table__header-cell">"Рекламодатель"</th>
                                })}
                                <SortableHeader label="Цель" column="goal" state=state/>
                                <SortableHeader label="Период" column="start_date" state=state/>
                                <SortableHeader label="Бюджет" column="budget" state=state/>
                                <SortableHeader label="Статус" column="status" state=state/>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.with(|p| p.rows.clone()).into_iter().map(|row| {
                                let base = row.base_path();
                                let ad_groups_href = format!("{}/adgroups", base);
                                let edit_href = format!("{}/edit", base);
                                let advertiser_cell = (!is_nested()).then(|| {
                                    let name = advertiser_names.with(|names| {
                                        names.get(&row.advertiser_id).cloned().unwrap_or_default()
                                    });
                                    view! {
                                        <td class="table__cell">
                                            <a class="table__link" href=format!("/advertisers/{}/campaigns", row.advertiser_id)>
                                                {name}
                                            </a>
                                        </td>
                                    }
                                });
                                let period = format_period(&row.start_date, &row.end_date);
                                let daily = row
                                    .daily_budget
                                    .map(|d| format!("в день {} ₽", format_money(d)));
                                let is_active = row.status == EntityStatus::Active;
                                let row_for_status = row.clone();
                                let row_for_budget = row.clone();
                                let row_for_delete = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <a class="table__link" href=ad_groups_href>{row.name.clone()}</a>
                                        </td>
                                        {advertiser_cell}
                                        <td class="table__cell">{campaign_goal_label(&row.goal).to_string()}</td>
                                        <td class="table__cell">{period}</td>
                                        <td class="table__cell table__cell--number">
                                            {format!("{} ₽", format_money(row.budget))}
                                            {daily.map(|d| view! { <div class="table__cell-hint">{d}</div> })}
                                        </td>
                                        <td class="table__cell">
                                            <StatusBadge status=row.status/>
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                title=if is_active { "Приостановить" } else { "Запустить" }
                                                on:click=move |_| toggle_status(row_for_status.clone())
                                            >
                                                {icon(if is_active { "pause" } else { "play" })}
                                            </button>
                                            <button
                                                class="button button--ghost"
                                                title="Изменить бюджет"
                                                on:click=move |_| change_budget(row_for_budget.clone())
                                            >
                                                {icon("dollar-sign")}
                                            </button>
                                            <a class="button button--ghost" href=edit_href title="Редактировать">
                                                {icon("edit")}
                                            </a>
                                            <button
                                                class="button button--ghost"
                                                title="Удалить"
                                                on:click=move |_| delete_row(row_for_delete.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    {move || (!loading.get() && page.with(|p| p.total_count == 0)).then(|| view! {
                        <div class="table__empty">"Нет кампаний"</div>
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

    fn row(name: &str, goal: &str, budget: f64) -> CampaignRow {
        CampaignRow {
            id: "c1".into(),
            advertiser_id: "a1".into(),
            name: name.into(),
            goal: goal.into(),
            start_date: "2025-03-01".into(),
            end_date: "2025-03-31".into(),
            budget,
            daily_budget: None,
            status: EntityStatus::Draft,
        }
    }

    #[test]
    fn test_base_path() {
        assert_eq!(row("Весна", "traffic", 1.0).base_path(), "/advertisers/a1/campaigns/c1");
    }

    #[test]
    fn test_search_matches_goal_label() {
        let r = row("Весна", "traffic", 1.0);
        assert!(r.matches_filter("трафик"));
        assert!(r.matches_filter("вес"));
        assert!(!r.matches_filter("конверс"));
    }

    #[test]
    fn test_budget_column_is_numeric() {
        let mut rows = vec![
            row("А", "traffic", 900.0),
            row("Б", "traffic", 10000.0),
            row("В", "traffic", 50.0),
        ];
        let cols = columns();
        let budget = cols.iter().find(|c| c.id == "budget").unwrap();
        crate::shared::list_utils::sort_list(&mut rows, budget, false);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Б", "А", "В"]);
    }
}
