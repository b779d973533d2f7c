//! Боковое меню консоли со сворачиваемыми группами

use crate::layout::global_context::{use_global_context, Language};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label_ru: &'static str,
    label_en: &'static str,
    icon: &'static str,
}

impl MenuItem {
    fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Ru => self.label_ru,
            Language::En => self.label_en,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label_ru: &'static str,
    label_en: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

const fn item(
    href: &'static str,
    label_ru: &'static str,
    label_en: &'static str,
    icon: &'static str,
) -> MenuItem {
    MenuItem {
        href,
        label_ru,
        label_en,
        icon,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "advertising",
            label_ru: "Реклама",
            label_en: "Advertising",
            icon: "megaphone",
            items: vec![
                item("/advertisers", "Рекламодатели", "Advertisers", "users"),
                item("/campaigns", "Кампании", "Campaigns", "megaphone"),
                item("/adgroups", "Группы объявлений", "Ad groups", "layers"),
                item("/creatives", "Креативы", "Creatives", "image"),
            ],
        },
        MenuGroup {
            id: "analytics",
            label_ru: "Аналитика",
            label_en: "Analytics",
            icon: "bar-chart",
            items: vec![
                item("/analytics", "Обзор", "Overview", "activity"),
                item("/fraud-detection", "Обнаружение фрода", "Fraud detection", "shield"),
                item("/audience-insights", "Аудитория", "Audience insights", "users"),
                item("/segments", "Сегменты", "Segments", "pie-chart"),
                item(
                    "/creative-performance",
                    "Эффективность креативов",
                    "Creative performance",
                    "bar-chart",
                ),
            ],
        },
    ]
}

/// Пункт активен на своей странице и на вложенных в неё
pub fn is_active_path(current: &str, href: &str) -> bool {
    let current = current.trim_end_matches('/');
    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let pathname = location.pathname;

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_chevron = group_id.clone();
                let items = group.items.clone();

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>
                                    {move || match ctx.language.get() {
                                        Language::Ru => group.label_ru,
                                        Language::En => group.label_en,
                                    }}
                                </span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|ids| ids.contains(&group_id_for_chevron))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.iter().copied().map(|menu_item| view! {
                                    <a
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || {
                                            pathname.with(|p| is_active_path(p, menu_item.href))
                                        }
                                        href=menu_item.href
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(menu_item.icon)}
                                            <span>{move || menu_item.label(ctx.language.get())}</span>
                                        </div>
                                    </a>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_path() {
        assert!(is_active_path("/advertisers", "/advertisers"));
        assert!(is_active_path("/advertisers/", "/advertisers"));
        assert!(is_active_path("/advertisers/a1/campaigns", "/advertisers"));
        assert!(!is_active_path("/adgroups", "/ad"));
        assert!(!is_active_path("/campaigns", "/advertisers"));
    }

    #[test]
    fn test_menu_links_are_unique() {
        let hrefs: Vec<_> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|i| i.href))
            .collect();
        let mut unique = hrefs.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(hrefs.len(), unique.len());
    }
}
