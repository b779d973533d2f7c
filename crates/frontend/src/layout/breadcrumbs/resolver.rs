//! Построение хлебных крошек по пути URL.
//!
//! Вложенная иерархия живёт под корнем `advertisers`:
//!
//! ```text
//! advertisers[/create | /:id/edit]
//!   /:advertiser_id/campaigns[/create | /:id/edit]
//!     /:campaign_id/adgroups[/create | /:id/edit]
//!       /:ad_group_id/creatives[/create | /:id/edit]
//! ```
//!
//! Плоские разделы (`campaigns`, `analytics`, ...) дают одну статичную крошку.
//! Неизвестный путь даёт пустой список: компонент в этом случае ничего не рисует.

use super::names::EntityNameCache;

/// Вид сущности, чьё имя подставляется в крошку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Advertiser,
    Campaign,
    AdGroup,
    Creative,
}

impl EntityKind {
    /// Уровни вложенности сверху вниз
    pub const LEVELS: [EntityKind; 4] = [
        EntityKind::Advertiser,
        EntityKind::Campaign,
        EntityKind::AdGroup,
        EntityKind::Creative,
    ];

    /// Сегмент URL списка этого уровня
    pub fn list_segment(&self) -> &'static str {
        match self {
            EntityKind::Advertiser => "advertisers",
            EntityKind::Campaign => "campaigns",
            EntityKind::AdGroup => "adgroups",
            EntityKind::Creative => "creatives",
        }
    }

    pub fn list_label(&self) -> &'static str {
        match self {
            EntityKind::Advertiser => "Рекламодатели",
            EntityKind::Campaign => "Кампании",
            EntityKind::AdGroup => "Группы объявлений",
            EntityKind::Creative => "Креативы",
        }
    }

    pub fn create_label(&self) -> &'static str {
        match self {
            EntityKind::Advertiser => "Новый рекламодатель",
            EntityKind::Campaign => "Новая кампания",
            EntityKind::AdGroup => "Новая группа объявлений",
            EntityKind::Creative => "Новый креатив",
        }
    }

    /// Подпись, пока имя не загружено (или загрузка не удалась)
    pub fn fallback_label(&self) -> &'static str {
        match self {
            EntityKind::Advertiser => "Рекламодатель",
            EntityKind::Campaign => "Кампания",
            EntityKind::AdGroup => "Группа объявлений",
            EntityKind::Creative => "Креатив",
        }
    }

    fn level(&self) -> usize {
        match self {
            EntityKind::Advertiser => 0,
            EntityKind::Campaign => 1,
            EntityKind::AdGroup => 2,
            EntityKind::Creative => 3,
        }
    }
}

/// Плоские разделы: (первый сегмент, подпись)
pub const FLAT_SECTIONS: &[(&str, &str)] = &[
    ("campaigns", "Кампании"),
    ("adgroups", "Группы объявлений"),
    ("creatives", "Креативы"),
    ("segments", "Сегменты"),
    ("analytics", "Аналитика"),
    ("fraud-detection", "Обнаружение фрода"),
    ("audience-insights", "Аудитория"),
    ("creative-performance", "Эффективность креативов"),
];

/// Все вложенные шаблоны, которые регистрирует роутер (`routes::AppRoutes`).
/// Тест ниже проверяет, что каждый из них даёт непустой список крошек.
pub const ROUTE_PATTERNS: &[&str] = &[
    "advertisers",
    "advertisers/create",
    "advertisers/:id/edit",
    "advertisers/:advertiser_id/campaigns",
    "advertisers/:advertiser_id/campaigns/create",
    "advertisers/:advertiser_id/campaigns/:id/edit",
    "advertisers/:advertiser_id/campaigns/:campaign_id/adgroups",
    "advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/create",
    "advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:id/edit",
    "advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:ad_group_id/creatives",
    "advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:ad_group_id/creatives/create",
    "advertisers/:advertiser_id/campaigns/:campaign_id/adgroups/:ad_group_id/creatives/:id/edit",
];

/// Один элемент цепочки. У последнего элемента `href` всегда `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbEntry {
    fn link(label: impl Into<String>, href: String) -> Self {
        Self {
            label: label.into(),
            href: Some(href),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Параметры маршрута с теми же именами, что и в таблице роутера
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub advertiser_id: Option<String>,
    pub campaign_id: Option<String>,
    pub ad_group_id: Option<String>,
    pub id: Option<String>,
}

impl RouteParams {
    /// Извлечь параметры из сегментов пути. Для плоских и неизвестных путей все поля пустые.
    pub fn from_segments(segments: &[String]) -> Self {
        let mut params = RouteParams::default();
        let Some(route) = NestedRoute::parse(segments) else {
            return params;
        };

        let mut parents = route.parents.into_iter();
        params.advertiser_id = parents.next();
        params.campaign_id = parents.next();
        params.ad_group_id = parents.next();
        if let NestedTail::Edit(id) = route.tail {
            params.id = Some(id);
        }
        params
    }

    fn parent_id(&self, kind: EntityKind) -> Option<&str> {
        match kind {
            EntityKind::Advertiser => self.advertiser_id.as_deref(),
            EntityKind::Campaign => self.campaign_id.as_deref(),
            EntityKind::AdGroup => self.ad_group_id.as_deref(),
            EntityKind::Creative => None,
        }
    }
}

/// Разбить путь `location.pathname` на сегменты без пустых строк
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NestedTail {
    List,
    Create,
    Edit(String),
}

/// Разобранный вложенный путь: id родителей сверху вниз и хвост текущего уровня
#[derive(Debug, Clone, PartialEq, Eq)]
struct NestedRoute {
    parents: Vec<String>,
    tail: NestedTail,
}

impl NestedRoute {
    fn parse(segments: &[String]) -> Option<Self> {
        let mut parents = Vec::new();
        let mut rest = segments;

        for (level, kind) in EntityKind::LEVELS.iter().enumerate() {
            let (head, tail) = rest.split_first()?;
            if head != kind.list_segment() {
                return None;
            }

            match tail {
                [] => return Some(Self { parents, tail: NestedTail::List }),
                [action] if action == "create" => {
                    return Some(Self { parents, tail: NestedTail::Create })
                }
                [id, action] if action == "edit" => {
                    return Some(Self {
                        parents,
                        tail: NestedTail::Edit(id.clone()),
                    })
                }
                [id, next, ..] if level + 1 < EntityKind::LEVELS.len() => {
                    if next != EntityKind::LEVELS[level + 1].list_segment() {
                        return None;
                    }
                    parents.push(id.clone());
                    rest = &tail[1..];
                }
                _ => return None,
            }
        }

        None
    }

    fn kind(&self) -> EntityKind {
        EntityKind::LEVELS[self.parents.len()]
    }
}

/// Цепочка крошек для текущего пути.
///
/// Сегменты задают форму пути и ссылки, параметры дают id для имён.
/// Предок текущего уровня ссылается на свою форму редактирования.
pub fn resolve_breadcrumbs(
    segments: &[String],
    params: &RouteParams,
    names: &EntityNameCache,
) -> Vec<BreadcrumbEntry> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let Some(route) = NestedRoute::parse(segments) else {
        return FLAT_SECTIONS
            .iter()
            .find(|(segment, _)| segment == first)
            .map(|(_, label)| vec![BreadcrumbEntry::current(*label)])
            .unwrap_or_default();
    };

    let list_path = |kind: EntityKind| format!("/{}", segments[..=kind.level() * 2].join("/"));
    let name_of = |kind: EntityKind, id: Option<&str>| match id {
        Some(id) => names.name_or_fallback(kind, id),
        None => kind.fallback_label().to_string(),
    };

    let mut trail = Vec::new();
    for kind in &EntityKind::LEVELS[..route.parents.len()] {
        let id = params.parent_id(*kind);
        trail.push(BreadcrumbEntry::link(kind.list_label(), list_path(*kind)));
        trail.push(BreadcrumbEntry::link(
            name_of(*kind, id),
            format!("{}/{}/edit", list_path(*kind), id.unwrap_or_default()),
        ));
    }

    let kind = route.kind();
    match route.tail {
        NestedTail::List => trail.push(BreadcrumbEntry::current(kind.list_label())),
        NestedTail::Create => {
            trail.push(BreadcrumbEntry::link(kind.list_label(), list_path(kind)));
            trail.push(BreadcrumbEntry::current(kind.create_label()));
        }
        NestedTail::Edit(_) => {
            trail.push(BreadcrumbEntry::link(kind.list_label(), list_path(kind)));
            trail.push(BreadcrumbEntry::current(name_of(kind, params.id.as_deref())));
        }
    }
    trail
}

/// Путь кнопки "Назад".
///
/// Если последний сегмент `create` или `edit`, отбрасываются два сегмента, иначе один.
/// Сегмент перед действием не проверяется на то, что это id.
pub fn back_path(segments: &[String]) -> Option<String> {
    let drop = match segments.last().map(String::as_str) {
        Some("create") | Some("edit") => 2,
        _ => 1,
    };
    let keep = segments.len().saturating_sub(drop);
    if keep < 2 {
        return None;
    }
    Some(format!("/{}", segments[..keep].join("/")))
}

/// Сущности, чьи имена нужны для текущего пути, с их id
pub fn entity_refs(segments: &[String], params: &RouteParams) -> Vec<(EntityKind, String)> {
    let Some(route) = NestedRoute::parse(segments) else {
        return Vec::new();
    };

    let mut refs: Vec<(EntityKind, String)> = EntityKind::LEVELS[..route.parents.len()]
        .iter()
        .filter_map(|kind| params.parent_id(*kind).map(|id| (*kind, id.to_string())))
        .collect();

    if let (NestedTail::Edit(_), Some(id)) = (&route.tail, &params.id) {
        refs.push((route.kind(), id.clone()));
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> Vec<String> {
        split_path(path)
    }

    fn resolve(path: &str) -> Vec<BreadcrumbEntry> {
        let segments = segs(path);
        let params = RouteParams::from_segments(&segments);
        resolve_breadcrumbs(&segments, &params, &EntityNameCache::default())
    }

    /// Подставить в шаблон роутера конкретные значения параметров
    fn instantiate(pattern: &str) -> String {
        pattern
            .split('/')
            .map(|s| match s {
                ":advertiser_id" => "a1",
                ":campaign_id" => "c1",
                ":ad_group_id" => "g1",
                ":id" => "x1",
                other => other,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn test_back_path_examples() {
        assert_eq!(
            back_path(&segs("advertisers/123/campaigns/456/edit")),
            Some("/advertisers/123/campaigns".to_string())
        );
        assert_eq!(
            back_path(&segs("advertisers/123/campaigns/create")),
            Some("/advertisers/123".to_string())
        );
        assert_eq!(
            back_path(&segs("advertisers/123/campaigns")),
            Some("/advertisers/123".to_string())
        );
        assert_eq!(back_path(&segs("advertisers/create")), None);
        assert_eq!(back_path(&segs("advertisers/1/edit")), None);
        assert_eq!(back_path(&segs("advertisers")), None);
        assert_eq!(back_path(&[]), None);
    }

    #[test]
    fn test_back_path_is_segment_count_based() {
        // Предпоследний сегмент не проверяется
        assert_eq!(
            back_path(&segs("analytics/reports/daily/edit")),
            Some("/analytics/reports".to_string())
        );
        assert_eq!(back_path(&segs("a/b/c")), Some("/a/b".to_string()));
    }

    #[test]
    fn test_route_params_from_segments() {
        let params = RouteParams::from_segments(&segs(
            "advertisers/a1/campaigns/c1/adgroups/g1/creatives/x1/edit",
        ));
        assert_eq!(params.advertiser_id.as_deref(), Some("a1"));
        assert_eq!(params.campaign_id.as_deref(), Some("c1"));
        assert_eq!(params.ad_group_id.as_deref(), Some("g1"));
        assert_eq!(params.id.as_deref(), Some("x1"));

        let params = RouteParams::from_segments(&segs("advertisers/7/edit"));
        assert_eq!(params.advertiser_id, None);
        assert_eq!(params.id.as_deref(), Some("7"));

        assert_eq!(
            RouteParams::from_segments(&segs("campaigns")),
            RouteParams::default()
        );
    }

    #[test]
    fn test_advertiser_level_trails() {
        assert_eq!(resolve("advertisers"), vec![BreadcrumbEntry::current("Рекламодатели")]);
        assert_eq!(
            resolve("advertisers/create"),
            vec![
                BreadcrumbEntry::link("Рекламодатели", "/advertisers".into()),
                BreadcrumbEntry::current("Новый рекламодатель"),
            ]
        );
        assert_eq!(
            resolve("advertisers/a1/edit"),
            vec![
                BreadcrumbEntry::link("Рекламодатели", "/advertisers".into()),
                BreadcrumbEntry::current("Рекламодатель"),
            ]
        );
    }

    #[test]
    fn test_nested_list_links_parent_to_edit_form() {
        assert_eq!(
            resolve("advertisers/a1/campaigns/c1/adgroups"),
            vec![
                BreadcrumbEntry::link("Рекламодатели", "/advertisers".into()),
                BreadcrumbEntry::link("Рекламодатель", "/advertisers/a1/edit".into()),
                BreadcrumbEntry::link("Кампании", "/advertisers/a1/campaigns".into()),
                BreadcrumbEntry::link("Кампания", "/advertisers/a1/campaigns/c1/edit".into()),
                BreadcrumbEntry::current("Группы объявлений"),
            ]
        );
    }

    #[test]
    fn test_deepest_create_trail() {
        let trail = resolve("advertisers/a1/campaigns/c1/adgroups/g1/creatives/create");
        let labels: Vec<&str> = trail.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Рекламодатели",
                "Рекламодатель",
                "Кампании",
                "Кампания",
                "Группы объявлений",
                "Группа объявлений",
                "Креативы",
                "Новый креатив",
            ]
        );
        assert_eq!(
            trail[6].href.as_deref(),
            Some("/advertisers/a1/campaigns/c1/adgroups/g1/creatives")
        );
    }

    #[test]
    fn test_resolved_names_replace_fallbacks() {
        let segments = segs("advertisers/a1/campaigns/c1/edit");
        let params = RouteParams::from_segments(&segments);
        let mut names = EntityNameCache::default();
        for ticket in names.sync(&entity_refs(&segments, &params)) {
            let name = match ticket.kind {
                EntityKind::Advertiser => "Ромашка",
                _ => "Весна",
            };
            names.apply(&ticket, Some(name.to_string()));
        }

        let trail = resolve_breadcrumbs(&segments, &params, &names);
        assert_eq!(trail[1].label, "Ромашка");
        assert_eq!(trail.last().map(|e| e.label.as_str()), Some("Весна"));
    }

    #[test]
    fn test_flat_sections() {
        for (segment, label) in FLAT_SECTIONS {
            assert_eq!(resolve(segment), vec![BreadcrumbEntry::current(*label)]);
        }
        // Плоский раздел определяется по первому сегменту
        assert_eq!(resolve("campaigns/c1/edit"), vec![BreadcrumbEntry::current("Кампании")]);
    }

    #[test]
    fn test_unknown_paths_give_empty_trail() {
        assert!(resolve("").is_empty());
        assert!(resolve("settings").is_empty());
        assert!(resolve("advertisers/a1/adgroups").is_empty());
        assert!(resolve("advertisers/a1/campaigns/c1/edit/extra").is_empty());
    }

    #[test]
    fn test_every_registered_pattern_resolves_with_terminal_invariant() {
        for pattern in ROUTE_PATTERNS {
            let trail = resolve(&instantiate(pattern));
            assert!(!trail.is_empty(), "pattern {} resolved to nothing", pattern);

            let (last, rest) = trail.split_last().unwrap();
            assert!(last.href.is_none(), "pattern {}", pattern);
            assert!(rest.iter().all(|e| e.href.is_some()), "pattern {}", pattern);
        }
    }

    #[test]
    fn test_entity_refs() {
        let segments = segs("advertisers/a1/campaigns/c1/adgroups/g1/creatives/x1/edit");
        let params = RouteParams::from_segments(&segments);
        assert_eq!(
            entity_refs(&segments, &params),
            vec![
                (EntityKind::Advertiser, "a1".to_string()),
                (EntityKind::Campaign, "c1".to_string()),
                (EntityKind::AdGroup, "g1".to_string()),
                (EntityKind::Creative, "x1".to_string()),
            ]
        );

        let segments = segs("advertisers/create");
        assert!(entity_refs(&segments, &RouteParams::from_segments(&segments)).is_empty());
    }
}
