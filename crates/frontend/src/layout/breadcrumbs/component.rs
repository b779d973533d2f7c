use super::names::EntityNameCache;
use super::resolver::{
    back_path, entity_refs, resolve_breadcrumbs, split_path, EntityKind, RouteParams,
};
use crate::domain::{a001_advertiser, a002_campaign, a003_ad_group, a004_creative};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

/// Источник имён сущностей для крошек
#[allow(async_fn_in_trait)]
pub trait EntityNameLookup: Clone + 'static {
    /// `None`, если сущность не найдена или запрос не удался
    async fn lookup_name(&self, kind: EntityKind, id: &str) -> Option<String>;
}

/// Загрузка имён через REST API
#[derive(Clone, Copy, Default)]
pub struct RestNameLookup;

impl EntityNameLookup for RestNameLookup {
    async fn lookup_name(&self, kind: EntityKind, id: &str) -> Option<String> {
        let result = match kind {
            EntityKind::Advertiser => a001_advertiser::api::fetch_by_id(id).await.map(|d| d.name),
            EntityKind::Campaign => a002_campaign::api::fetch_by_id(id).await.map(|d| d.name),
            EntityKind::AdGroup => a003_ad_group::api::fetch_by_id(id).await.map(|d| d.name),
            EntityKind::Creative => a004_creative::api::fetch_by_id(id).await.map(|d| d.name),
        };
        match result {
            Ok(name) => Some(name),
            Err(e) => {
                log::debug!("Breadcrumb name lookup failed for {:?} {}: {}", kind, id, e);
                None
            }
        }
    }
}

/// Хлебные крошки текущего маршрута и кнопка "Назад".
///
/// При смене пути кэш имён синхронизируется, для каждого нового id
/// запускается загрузка. До ответа показывается подпись по умолчанию.
#[component]
pub fn Breadcrumbs<L>(lookup: L) -> impl IntoView
where
    L: EntityNameLookup,
{
    let location = use_location();
    let navigate = use_navigate();
    let names = RwSignal::new(EntityNameCache::default());
    let segments = Memo::new(move |_| split_path(&location.pathname.get()));

    Effect::new(move |_| {
        let segs = segments.get();
        let params = RouteParams::from_segments(&segs);
        let refs = entity_refs(&segs, &params);
        let tickets = names
            .try_update(|cache| cache.sync(&refs))
            .unwrap_or_default();

        for ticket in tickets {
            let lookup = lookup.clone();
            spawn_local(async move {
                let name = lookup.lookup_name(ticket.kind, &ticket.id).await;
                names.update(|cache| {
                    if !cache.apply(&ticket, name) {
                        log::debug!("Stale name lookup dropped: {:?} {}", ticket.kind, ticket.id);
                    }
                });
            });
        }
    });

    let trail = move || {
        let segs = segments.get();
        let params = RouteParams::from_segments(&segs);
        names.with(|cache| resolve_breadcrumbs(&segs, &params, cache))
    };
    let back = Memo::new(move |_| back_path(&segments.get()));

    view! {
        {move || {
            let entries = trail();
            if entries.is_empty() {
                return view! { <></> }.into_any();
            }

            let navigate = navigate.clone();
            view! {
                <nav class="breadcrumbs">
                    {back.get().map(|path| view! {
                        <button
                            class="breadcrumbs__back"
                            title="Назад"
                            on:click=move |_| navigate(&path, Default::default())
                        >
                            {icon("arrow-left")}
                            " Назад"
                        </button>
                    })}
                    <ol class="breadcrumbs__list">
                        {entries.into_iter().map(|entry| match entry.href {
                            Some(href) => view! {
                                <li class="breadcrumbs__item">
                                    <a class="breadcrumbs__link" href=href>{entry.label}</a>
                                </li>
                            }.into_any(),
                            None => view! {
                                <li class="breadcrumbs__item breadcrumbs__item--current">
                                    {entry.label}
                                </li>
                            }.into_any(),
                        }).collect_view()}
                    </ol>
                </nav>
            }
            .into_any()
        }}
    }
}
