//! Список креативов: внутри группы объявлений и общий (`/creatives`)

use crate::domain::a004_creative::api;
use crate::domain::hierarchy::{load_parent_paths, ParentPaths};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::export::download_from_url;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_state, confirm_delete, Column, ListState, SearchInput, Searchable, SortKey,
    SortableHeader,
};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a004_creative::{placement_label, Creative, CreativeFormat};
use contracts::domain::common::{AggregateId, EntityStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CreativeRow {
    pub id: String,
    pub ad_group_id: String,
    pub name: String,
    pub placement: String,
    pub title: String,
    pub url: String,
    pub budget: f64,
    pub cpm: f64,
    pub image: Option<String>,
    pub status: EntityStatus,
}

impl From<Creative> for CreativeRow {
    fn from(c: Creative) -> Self {
        Self {
            id: c.base.id.as_string(),
            ad_group_id: c.ad_group_id.as_string(),
            name: c.base.description,
            placement: c.placement,
            title: c.title,
            url: c.url,
            budget: c.budget,
            cpm: c.cpm,
            image: c.image.map(|i| i.file_name),
            status: c.status,
        }
    }
}

impl CreativeRow {
    pub fn format(&self) -> CreativeFormat {
        CreativeFormat::from_placement(&self.placement)
    }

    pub fn format_label(&self) -> &'static str {
        match self.format() {
            CreativeFormat::Small => "Малый",
            CreativeFormat::Big => "Большой",
        }
    }
}

impl Searchable for CreativeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.title.to_lowercase().contains(filter)
            || self.url.to_lowercase().contains(filter)
    }
}

fn columns() -> Vec<Column<CreativeRow>> {
    vec![
        Column {
            id: "name",
            label: "Название",
            value: |r| SortKey::text(&r.name),
        },
        Column {
            id: "placement",
            label: "Площадка",
            value: |r| SortKey::Text(r.placement.clone()),
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
pub fn CreativeList() -> impl IntoView {
    let toast = use_toast();
    let params = use_params_map();
    let advertiser_id = Memo::new(move |_| params.with(|p| p.get("advertiser_id")));
    let campaign_id = Memo::new(move |_| params.with(|p| p.get("campaign_id")));
    let ad_group_id = Memo::new(move |_| params.with(|p| p.get("ad_group_id")));

    let items = RwSignal::new(Vec::<CreativeRow>::new());
    let parents = RwSignal::new(ParentPaths::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let state = RwSignal::new(ListState::default());

    let page = Memo::new(move |_| {
        items.with(|rows| state.with(|s| apply_list_state(rows, &columns(), s)))
    });

    let fetch = move || {
        let parent = ad_group_id.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(parent.as_deref()).await {
                Ok(v) => {
                    items.set(v.into_iter().map(CreativeRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        ad_group_id.track();
        state.update(|s| s.page = 0);
        fetch();
    });

    Effect::new(move |_| {
        if ad_group_id.get().is_some() {
            return;
        }
        spawn_local(async move {
            match load_parent_paths(true).await {
                Ok(paths) => parents.set(paths),
                Err(e) => log::warn!("Failed to load ad groups: {}", e),
            }
        });
    });

    let is_nested = move || ad_group_id.with(|id| id.is_some());

    // Путь группы объявлений строки
    let group_path = move |row: &CreativeRow| -> Option<String> {
        match (advertiser_id.get(), campaign_id.get(), ad_group_id.get()) {
            (Some(adv), Some(camp), Some(group)) => Some(format!(
                "/advertisers/{}/campaigns/{}/adgroups/{}",
                adv, camp, group
            )),
            _ => parents.with(|p| p.ad_group_path(&row.ad_group_id)),
        }
    };

    let toggle_status = move |row: CreativeRow| {
        spawn_local(async move {
            match api::set_status(&row.id, row.status.toggled()).await {
                Ok(updated) => {
                    let updated = CreativeRow::from(updated);
                    toast.success(format!("Креатив \"{}\": {}", updated.name, updated.status.label()));
                    items.update(|rows| {
                        if let Some(r) = rows.iter_mut().find(|r| r.id == updated.id) {
                            *r = updated;
                        }
                    });
                }
                Err(e) => toast.error(format!("Не удалось изменить статус: {}", e)),
            }
        });
    };

    let delete_row = move |row: CreativeRow| {
        if !confirm_delete(&row.name) {
            return;
        }
        spawn_local(async move {
            match api::delete_by_id(&row.id).await {
                Ok(()) => {
                    items.update(|rows| rows.retain(|r| r.id != row.id));
                    toast.success(format!("Креатив \"{}\" удалён", row.name));
                }
                Err(e) => toast.error(format!("Ошибка удаления: {}", e)),
            }
        });
    };

    let export = move || {
        let url = api::export_url(ad_group_id.get_untracked().as_deref());
        if let Err(e) = download_from_url(&url, "creatives.csv") {
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="a004_creative--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("image")}
                    <h1 class="page__title">
                        {move || if is_nested() { "Креативы" } else { "Все креативы" }}
                    </h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    {move || match (advertiser_id.get(), campaign_id.get(), ad_group_id.get()) {
                        (Some(adv), Some(camp), Some(group)) => Some(view! {
                            <a
                                class="button button--primary"
                                href=format!(
                                    "/advertisers/{}/campaigns/{}/adgroups/{}/creatives/create",
                                    adv, camp, group
                                )
                            >
                                {icon("plus")}
                                "Новый креатив"
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
                        placeholder="Название, заголовок или ссылка"
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
                                    <th class="table__header-cell">"Группа объявлений"</th>
                                })}
                                <SortableHeader label="Площадка" column="placement" state=state/>
                                <th class="table__header-cell">"Формат"</th>
                                <SortableHeader label="Бюджет" column="budget" state=state/>
                                <SortableHeader label="CPM" column="cpm" state=state/>
                                <SortableHeader label="Статус" column="status" state=state/>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.with(|p| p.rows.clone()).into_iter().map(|row| {
                                let edit_href = group_path(&row)
                                    .map(|base| format!("{}/creatives/{}/edit", base, row.id));
                                let name_cell = match &edit_href {
                                    Some(href) => view! {
                                        <a class="table__link" href=href.clone()>{row.name.clone()}</a>
                                    }.into_any(),
                                    None => view! { <span>{row.name.clone()}</span> }.into_any(),
                                };
                                let group_cell = (!is_nested()).then(|| {
                                    let name = parents.with(|p| {
                                        p.ad_group_name(&row.ad_group_id).unwrap_or_default().to_string()
                                    });
                                    view! { <td class="table__cell">{name}</td> }
                                });
                                let image_hint = row.image.clone().map(|file| view! {
                                    <div class="table__cell-hint">{icon("image")}{format!(" {}", file)}</div>
                                });
                                let is_active = row.status == EntityStatus::Active;
                                let row_for_status = row.clone();
                                let row_for_delete = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            {name_cell}
                                            {image_hint}
                                        </td>
                                        {group_cell}
                                        <td class="table__cell">{placement_label(&row.placement).to_string()}</td>
                                        <td class="table__cell">{row.format_label()}</td>
                                        <td class="table__cell table__cell--number">
                                            {format!("{} ₽", format_money(row.budget))}
                                        </td>
                                        <td class="table__cell table__cell--number">
                                            {format!("{} ₽", format_money(row.cpm))}
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
                                            {edit_href.map(|href| view! {
                                                <a class="button button--ghost" href=href title="Редактировать">
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
                        <div class="table__empty">"Нет креативов"</div>
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

    fn row(placement: &str) -> CreativeRow {
        CreativeRow {
            id: "cr1".into(),
            ad_group_id: "g1".into(),
            name: "Весенние скидки".into(),
            placement: placement.into(),
            title: "Скидки до 50%".into(),
            url: "https://shop.example.ru/sale".into(),
            budget: 10000.0,
            cpm: 95.5,
            image: None,
            status: EntityStatus::Draft,
        }
    }

    #[test]
    fn test_format_follows_placement() {
        assert_eq!(row("1_small").format_label(), "Малый");
        assert_eq!(row("4_big").format_label(), "Большой");
    }

    #[test]
    fn test_search_by_url_and_title() {
        let r = row("1_small");
        assert!(r.matches_filter("shop.example"));
        assert!(r.matches_filter("скидки до"));
        assert!(!r.matches_filter("баннер"));
    }
}
