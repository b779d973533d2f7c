//! Список групп объявлений: внутри кампании и общий (`/adgroups`)

use crate::domain::a003_ad_group::api;
use crate::domain::hierarchy::{load_parent_paths, ParentPaths};
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
use contracts::domain::a003_ad_group::{AdGroup, DeviceType, GEO_REGIONS};
use contracts::domain::common::{AggregateId, EntityStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AdGroupRow {
    pub id: String,
    pub campaign_id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub cpm: f64,
    pub geo: Vec<String>,
    pub devices: Vec<DeviceType>,
    pub status: EntityStatus,
}

impl From<AdGroup> for AdGroupRow {
    fn from(g: AdGroup) -> Self {
        Self {
            id: g.base.id.as_string(),
            campaign_id: g.campaign_id.as_string(),
            name: g.base.description,
            start_date: g.start_date.format("%Y-%m-%d").to_string(),
            end_date: g.end_date.format("%Y-%m-%d").to_string(),
            budget: g.budget,
            cpm: g.cpm,
            geo: g.geo.into_iter().collect(),
            devices: g.devices.into_iter().collect(),
            status: g.status,
        }
    }
}

impl AdGroupRow {
    /// Названия регионов через запятую
    pub fn geo_labels(&self) -> String {
        self.geo
            .iter()
            .map(|code| {
                GEO_REGIONS
                    .iter()
                    .find(|(c, _)| *c == code.as_str())
                    .map(|(_, label)| *label)
                    .unwrap_or(code.as_str())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn device_labels(&self) -> String {
        self.devices
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Searchable for AdGroupRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.geo_labels().to_lowercase().contains(filter)
    }
}

fn columns() -> Vec<Column<AdGroupRow>> {
    vec![
        Column {
            id: "name",
            label: "Название",
            value: |r| SortKey::text(&r.name),
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
            id: "cpm",
            label: "CPM",
            value: |r| SortKey::Number(r.cpm),
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
pub fn AdGroupList() -> impl IntoView {
    let toast = use_toast();
    let params = use_params_map();
    let advertiser_id = Memo::new(move |_| params.with(|p| p.get("advertiser_id")));
    let campaign_id = Memo::new(move |_| params.with(|p| p.get("campaign_id")));

    let items = RwSignal::new(Vec::<AdGroupRow>::new());
    let parents = RwSignal::new(ParentPaths::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let state = RwSignal::new(ListState::default());

    let page = Memo::new(move |_| {
        items.with(|rows| state.with(|s| apply_list_state(rows, &columns(), s)))
    });

    let fetch = move || {
        let parent = campaign_id.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(parent.as_deref()).await {
                Ok(v) => {
                    items.set(v.into_iter().map(AdGroupRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        campaign_id.track();
        state.update(|s| s.page = 0);
        fetch();
    });

    Effect::new(move |_| {
        if campaign_id.get().is_some() {
            return;
        }
        spawn_local(async move {
            match load_parent_paths(false).await {
                Ok(paths) => parents.set(paths),
                Err(e) => log::warn!("Failed to load campaigns: {}", e),
            }
        });
    });

    let is_nested = move || campaign_id.with(|id| id.is_some());

    // Адрес строки: из параметров маршрута или через справочник кампаний
    let row_base = move |row: &AdGroupRow| -> Option<String> {
        match (advertiser_id.get(), campaign_id.get()) {
            (Some(adv), Some(camp)) => Some(format!(
                "/advertisers/{}/campaigns/{}/adgroups/{}",
                adv, camp, row.id
            )),
            _ => parents
                .with(|p| p.campaign_path(&row.campaign_id))
                .map(|base| format!("{}/adgroups/{}", base, row.id)),
        }
    };

    let replace_row = move |updated: AdGroupRow| {
        items.update(|rows| {
            if let Some(r) = rows.iter_mut().find(|r| r.id == updated.id) {
                *r = updated;
            }
        });
    };

    let toggle_status = move |row: AdGroupRow| {
        spawn_local(async move {
            match api::set_status(&row.id, row.status.toggled()).await {
                Ok(updated) => {
                    let updated = AdGroupRow::from(updated);
                    toast.success(format!("Группа \"{}\": {}", updated.name, updated.status.label()));
                    replace_row(updated);
                }
                Err(e) => toast.error(format!("Не удалось изменить статус: {}", e)),
            }
        });
    };

    let change_budget = move |row: AdGroupRow| {
        let Some(value) = prompt_value(
            &format!("Новый бюджет группы \"{}\", ₽", row.name),
            &row.budget.to_string(),
        ) else {
            return;
        };
        spawn_local(async move {
            match api::set_budget(&row.id, value).await {
                Ok(updated) => {
                    toast.success(format!("Бюджет группы \"{}\" обновлён", row.name));
                    replace_row(AdGroupRow::from(updated));
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

    let delete_row = move |row: AdGroupRow| {
        if !confirm_delete(&row.name) {
            return;
        }
        spawn_local(async move {
            match api::delete_by_id(&row.id).await {
                Ok(()) => {
                    items.update(|rows| rows.retain(|r| r.id != row.id));
                    toast.success(format!("Группа \"{}\" удалена", row.name));
                }
                Err(e) => toast.error(format!("Ошибка удаления: {}", e)),
            }
        });
    };

    let export = move || {
        let url = api::export_url(campaign_id.get_untracked().as_deref());
        if let Err(e) = download_from_url(&url, "ad_groups.csv") {
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="a003_ad_group--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layers")}
                    <h1 class="page__title">
                        {move || if is_nested() { "Группы объявлений" } else { "Все группы объявлений" }}
                    </h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    {move || match (advertiser_id.get(), campaign_id.get()) {
                        (Some(adv), Some(camp)) => Some(view! {
                            <a
                                class="button button--primary"
                                href=format!("/advertisers/{}/campaigns/{}/adgroups/create", adv, camp)
                            >
                                {icon("plus")}
                                "Новая группа"
                            </a>
                        }),
                        _ => None,
                    }}
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
                        placeholder="Название или регион"
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
                                    <th class="table__header-cell">"Кампания"</th>
                                })}
                                <SortableHeader label="Период" column="start_date" state=state/>
                                <SortableHeader label="Бюджет" column="budget" state=state/>
                                <SortableHeader label="CPM" column="cpm" state=state/>
                                <th class="table__header-cell">"Таргетинг"</th>
                                <SortableHeader label="Статус" column="status" state=state/>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.with(|p| p.rows.clone()).into_iter().map(|row| {
                                let base = row_base(&row);
                                let name_cell = match &base {
                                    Some(base) => view! {
                                        <a class="table__link" href=format!("{}/creatives", base)>{row.name.clone()}</a>
                                    }.into_any(),
                                    None => view! { <span>{row.name.clone()}</span> }.into_any(),
                                };
                                let campaign_cell = (!is_nested()).then(|| {
                                    let name = parents.with(|p| {
                                        p.campaign_name(&row.campaign_id).unwrap_or_default().to_string()
                                    });
                                    view! { <td class="table__cell">{name}</td> }
                                });
                                let period = format_period(&row.start_date, &row.end_date);
                                let targeting = format!("{}; {}", row.geo_labels(), row.device_labels());
                                let is_active = row.status == EntityStatus::Active;
                                let row_for_status = row.clone();
                                let row_for_budget = row.clone();
                                let row_for_delete = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{name_cell}</td>
                                        {campaign_cell}
                                        <td class="table__cell">{period}</td>
                                        <td class="table__cell table__cell--number">
                                            {format!("{} ₽", format_money(row.budget))}
                                        </td>
                                        <td class="table__cell table__cell--number">
                                            {format!("{} ₽", format_money(row.cpm))}
                                        </td>
                                        <td class="table__cell table__cell--muted">{targeting}</td>
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
                                            {base.map(|base| view! {
                                                <a class="button button--ghost" href=format!("{}/edit", base) title="Редактировать">
                                                    {icon("edit")}
                                                </a>
                                            })}
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
                        <div class="table__empty">"Нет групп объявлений"</div>
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

    fn row() -> AdGroupRow {
        AdGroupRow {
            id: "g1".into(),
            campaign_id: "c1".into(),
            name: "Мобильный охват".into(),
            start_date: "2025-04-01".into(),
            end_date: "2025-04-30".into(),
            budget: 50000.0,
            cpm: 120.0,
            geo: vec!["RU-MOW".into(), "RU-XXX".into()],
            devices: vec![DeviceType::Mobile, DeviceType::Tablet],
            status: EntityStatus::Active,
        }
    }

    #[test]
    fn test_geo_labels_fall_back_to_code() {
        assert_eq!(row().geo_labels(), "Москва, RU-XXX");
    }

    #[test]
    fn test_device_labels() {
        assert_eq!(row().device_labels(), "Смартфоны, Планшеты");
    }

    #[test]
    fn test_search_by_region_name() {
        assert!(row().matches_filter("моск"));
        assert!(row().matches_filter("охват"));
        assert!(!row().matches_filter("казань"));
    }
}
