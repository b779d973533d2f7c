use crate::domain::a001_advertiser::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::export::download_from_url;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_state, confirm_delete, Column, ListState, SearchInput, Searchable, SortKey,
    SortableHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a001_advertiser::Advertiser;
use contracts::domain::common::{AggregateId, EntityStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AdvertiserRow {
    pub id: String,
    pub name: String,
    pub inn: String,
    pub contact_email: String,
    pub is_agency: bool,
    pub status: EntityStatus,
}

impl From<Advertiser> for AdvertiserRow {
    fn from(a: Advertiser) -> Self {
        Self {
            id: a.base.id.as_string(),
            name: a.base.description,
            inn: a.inn,
            contact_email: a.contact_email,
            is_agency: a.is_agency,
            status: a.status,
        }
    }
}

impl Searchable for AdvertiserRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.inn.contains(filter)
            || self.contact_email.to_lowercase().contains(filter)
    }
}

fn columns() -> Vec<Column<AdvertiserRow>> {
    vec![
        Column {
            id: "name",
            label: "Наименование",
            value: |r| SortKey::text(&r.name),
        },
        Column {
            id: "inn",
            label: "ИНН",
            value: |r| SortKey::text(&r.inn),
        },
        Column {
            id: "contact_email",
            label: "Email",
            value: |r| SortKey::text(&r.contact_email),
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
pub fn AdvertiserList() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<AdvertiserRow>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let state = RwSignal::new(ListState::default());

    let page = Memo::new(move |_| {
        items.with(|rows| state.with(|s| apply_list_state(rows, &columns(), s)))
    });

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list().await {
                Ok(v) => {
                    items.set(v.into_iter().map(AdvertiserRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    let toggle_status = move |row: AdvertiserRow| {
        spawn_local(async move {
            match api::set_status(&row.id, row.status.toggled()).await {
                Ok(updated) => {
                    let updated = AdvertiserRow::from(updated);
                    toast.success(format!(
                        "Статус \"{}\": {}",
                        updated.name,
                        updated.status.label()
                    ));
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

    let delete_row = move |row: AdvertiserRow| {
        if !confirm_delete(&row.name) {
            return;
        }
        spawn_local(async move {
            match api::delete_by_id(&row.id).await {
                Ok(()) => {
                    items.update(|rows| rows.retain(|r| r.id != row.id));
                    toast.success(format!("Рекламодатель \"{}\" удалён", row.name));
                }
                Err(e) => toast.error(format!("Ошибка удаления: {}", e)),
            }
        });
    };

    let export = move || {
        if let Err(e) = download_from_url(&api::export_url(), "advertisers.csv") {
            toast.error(e);
        }
    };

    fetch();

    view! {
        <PageFrame page_id="a001_advertiser--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Рекламодатели"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <a class="button button--primary" href="/advertisers/create">
                        {icon("plus")}
                        "Новый рекламодатель"
                    </a>
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
                        placeholder="Наименование, ИНН или email"
                    />
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table-wrapper">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeader label="Наименование" column="name" state=state/>
                                <SortableHeader label="ИНН" column="inn" state=state/>
                                <SortableHeader label="Email" column="contact_email" state=state/>
                                <th class="table__header-cell">"Тип"</th>
                                <SortableHeader label="Статус" column="status" state=state/>
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.with(|p| p.rows.clone()).into_iter().map(|row| {
                                let campaigns_href = format!("/advertisers/{}/campaigns", row.id);
                                let edit_href = format!("/advertisers/{}/edit", row.id);
                                let row_for_status = row.clone();
                                let row_for_delete = row.clone();
                                let is_active = row.status == EntityStatus::Active;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <a class="table__link" href=campaigns_href>{row.name.clone()}</a>
                                        </td>
                                        <td class="table__cell">{row.inn.clone()}</td>
                                        <td class="table__cell">{row.contact_email.clone()}</td>
                                        <td class="table__cell">
                                            {if row.is_agency { "Агентство" } else { "Прямой" }}
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
                        <div class="table__empty">"Нет записей"</div>
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

    fn row(name: &str, inn: &str) -> AdvertiserRow {
        AdvertiserRow {
            id: name.to_string(),
            name: name.to_string(),
            inn: inn.to_string(),
            contact_email: format!("{}@example.ru", inn),
            is_agency: false,
            status: EntityStatus::Active,
        }
    }

    #[test]
    fn test_search_by_inn_and_name() {
        let r = row("ООО Ромашка", "7701234567");
        assert!(r.matches_filter("ромаш"));
        assert!(r.matches_filter("770123"));
        assert!(!r.matches_filter("лютик"));
    }

    #[test]
    fn test_status_column_sorts_by_label() {
        let cols = columns();
        let status = cols.iter().find(|c| c.id == "status").unwrap();
        let mut paused = row("Б", "1");
        paused.status = EntityStatus::Paused;
        assert_eq!((status.value)(&paused), SortKey::text("Приостановлен"));
    }
}
