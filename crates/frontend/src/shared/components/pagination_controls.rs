//! Постраничная навигация списков: номера страниц, диапазон строк, размер страницы

use crate::shared::icons::icon;
use crate::shared::list_utils::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

/// Сколько номеров страниц показывать вокруг текущей
const PAGE_WINDOW: usize = 5;

/// Номера строк текущей страницы (с единицы, включительно). Пустой список даёт `(0, 0)`.
pub fn visible_range(page: usize, page_size: usize, total_count: usize) -> (usize, usize) {
    if total_count == 0 {
        return (0, 0);
    }
    let first = page * page_size + 1;
    let last = ((page + 1) * page_size).min(total_count);
    (first.min(total_count), last)
}

/// Окно номеров страниц (с нуля) шириной не больше `width`, текущая по центру
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total_pages);
    let start = current
        .saturating_sub(width / 2)
        .min(total_pages - width);
    (start..start + width).collect()
}

#[component]
pub fn PaginationControls(
    /// Текущая страница, с нуля
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Строк после фильтрации
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// По умолчанию `PAGE_SIZE_OPTIONS`
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let size_options = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    let go_to = move |page: usize| {
        let last = total_pages.get_untracked().saturating_sub(1);
        on_page_change.run(page.min(last));
    };

    let range_text = move || {
        let (first, last) = visible_range(current_page.get(), page_size.get(), total_count.get());
        format!("{}–{} из {}", first, last, total_count.get())
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{range_text}</span>

            <button class="pagination-btn" title="Первая страница" disabled=is_first on:click=move |_| go_to(0)>
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Предыдущая страница"
                disabled=is_first
                on:click=move |_| go_to(current_page.get_untracked().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get(), PAGE_WINDOW)
                    .into_iter()
                    .map(|page| view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=page == current
                            on:click=move |_| go_to(page)
                        >
                            {page + 1}
                        </button>
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                title="Следующая страница"
                disabled=is_last
                on:click=move |_| go_to(current_page.get_untracked() + 1)
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Последняя страница"
                disabled=is_last
                on:click=move |_| go_to(total_pages.get_untracked().saturating_sub(1))
            >
                {icon("chevrons-right")}
            </button>

            <select
                class="page-size-select"
                title="Строк на странице"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse()
                        .unwrap_or(PAGE_SIZE_OPTIONS[0]);
                    on_page_size_change.run(size);
                }
            >
                {size_options.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(0, 10, 0), (0, 0));
        assert_eq!(visible_range(0, 10, 7), (1, 7));
        assert_eq!(visible_range(1, 10, 25), (11, 20));
        assert_eq!(visible_range(2, 10, 25), (21, 25));
    }

    #[test]
    fn test_page_window() {
        assert!(page_window(0, 0, 5).is_empty());
        assert_eq!(page_window(0, 3, 5), vec![0, 1, 2]);
        assert_eq!(page_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10, 5), vec![5, 6, 7, 8, 9]);
    }
}
