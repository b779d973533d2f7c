//! Корневой `div` страницы: `id`, `data-page-category` и класс по категории

use super::page_standard::{is_valid_page_id, PAGE_CAT_DASHBOARD, PAGE_CAT_DETAIL};
use leptos::prelude::*;

/// `page`, `page page--detail` или `page page--dashboard`, плюс дополнительный класс
pub fn page_class(category: &str, extra: &str) -> String {
    let mut class = match category {
        PAGE_CAT_DETAIL => String::from("page page--detail"),
        PAGE_CAT_DASHBOARD => String::from("page page--dashboard"),
        _ => String::from("page"),
    };
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// ```text
/// <PageFrame page_id="a002_campaign--list" category=PAGE_CAT_LIST>
///     <div class="page__header">...</div>
/// </PageFrame>
/// ```
#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// PAGE_CAT_LIST, PAGE_CAT_DETAIL или PAGE_CAT_DASHBOARD
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("Page id '{}' does not follow {{entity}}--{{category}}", page_id);
    }

    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_standard::PAGE_CAT_LIST;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL, ""), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_DASHBOARD, "analytics"), "page page--dashboard analytics");
    }
}
