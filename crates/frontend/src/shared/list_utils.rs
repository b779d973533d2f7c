/// Универсальные утилиты для работы со списками (поиск, сортировка, страницы, UI компоненты)
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Минимальная длина поискового запроса
pub const MIN_SEARCH_CHARS: usize = 3;

/// Размеры страницы в списках сущностей
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (уже в нижнем регистре)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Значение ячейки для сортировки
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Колонка таблицы: идентификатор, заголовок и функция доступа к значению строки
pub struct Column<T> {
    pub id: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> SortKey,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// Состояние списка: поиск, сортировка и страница
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub search: String,
    pub sort_column: Option<&'static str>,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_column: None,
            sort_ascending: true,
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl ListState {
    /// Повторный клик по той же колонке меняет направление
    pub fn toggle_sort(&mut self, column: &'static str) {
        if self.sort_column == Some(column) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = Some(column);
            self.sort_ascending = true;
        }
        self.page = 0;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }
}

/// Результат применения состояния к строкам
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.chars().count() < MIN_SEARCH_CHARS {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(&filter))
        .cloned()
        .collect()
}

/// Сортирует список по значению колонки (устойчиво)
pub fn sort_list<T>(items: &mut [T], column: &Column<T>, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = (column.value)(a).compare(&(column.value)(b));
        if ascending { cmp } else { cmp.reverse() }
    });
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// Поиск, сортировка и выбор страницы. Номер страницы ограничивается последней.
pub fn apply_list_state<T: Searchable + Clone>(
    items: &[T],
    columns: &[Column<T>],
    state: &ListState,
) -> ListPage<T> {
    let mut rows = filter_list(items, &state.search);

    if let Some(column) = state
        .sort_column
        .and_then(|id| columns.iter().find(|c| c.id == id))
    {
        sort_list(&mut rows, column, state.sort_ascending);
    }

    let total_count = rows.len();
    let pages = total_pages(total_count, state.page_size);
    let page = state.page.min(pages.saturating_sub(1));
    let rows = rows
        .into_iter()
        .skip(page * state.page_size)
        .take(state.page_size)
        .collect();

    ListPage {
        rows,
        total_count,
        total_pages: pages,
        page,
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск (мин. 3 символа)...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    // Каждый ввод получает номер, срабатывает только последний
    let input_seq = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let seq = input_seq.get_value() + 1;
        input_seq.set_value(seq);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if input_seq.get_value() == seq {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || value.get().trim().chars().count() >= MIN_SEARCH_CHARS;

    let clear_filter = move |_| {
        input_seq.update_value(|s| *s += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// Заголовок колонки с переключением сортировки
#[component]
pub fn SortableHeader(
    label: &'static str,
    column: &'static str,
    state: RwSignal<ListState>,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| state.update(|s| s.toggle_sort(column))
        >
            {label}
            <span class=move || state.with(|s| get_sort_class(s.sort_column, column))>
                {move || state.with(|s| get_sort_indicator(s.sort_column, column, s.sort_ascending))}
            </span>
        </th>
    }
}

/// Подтверждение удаления через диалог браузера
pub fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Удалить \"{}\"?", name))
                .ok()
        })
        .unwrap_or(false)
}

/// Запрос значения через диалог браузера. `None`, если пользователь отменил ввод.
pub fn prompt_value(message: &str, default: &str) -> Option<String> {
    web_sys::window()
        .and_then(|win| win.prompt_with_message_and_default(message, default).ok())
        .flatten()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current == Some(field) {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current: Option<&str>, field: &str) -> &'static str {
    if current == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        budget: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter)
        }
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column {
                id: "name",
                label: "Название",
                value: |r| SortKey::text(r.name),
            },
            Column {
                id: "budget",
                label: "Бюджет",
                value: |r| SortKey::Number(r.budget),
            },
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Весна", budget: 300.0 },
            Row { name: "азбука", budget: 50.0 },
            Row { name: "Весенний охват", budget: 1200.0 },
            Row { name: "Бренд", budget: 50.0 },
        ]
    }

    #[test]
    fn test_short_filter_is_ignored() {
        assert_eq!(filter_list(&rows(), "ве").len(), 4);
        let found = filter_list(&rows(), "  ВЕС ");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_sort_by_accessor() {
        let cols = columns();
        let mut items = rows();
        sort_list(&mut items, &cols[0], true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["азбука", "Бренд", "Весенний охват", "Весна"]);

        sort_list(&mut items, &cols[1], false);
        assert_eq!(items[0].name, "Весенний охват");
        // Устойчивая сортировка сохраняет порядок равных
        assert_eq!(items[2].name, "азбука");
        assert_eq!(items[3].name, "Бренд");
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ListState {
            page: 3,
            ..Default::default()
        };
        state.toggle_sort("name");
        assert_eq!(state.sort_column, Some("name"));
        assert!(state.sort_ascending);
        assert_eq!(state.page, 0);

        state.toggle_sort("name");
        assert!(!state.sort_ascending);

        state.toggle_sort("budget");
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let state = ListState {
            page: 5,
            page_size: 3,
            ..Default::default()
        };
        let page = apply_list_state(&rows(), &columns(), &state);
        assert_eq!(page.total_count, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let page = apply_list_state::<Row>(&[], &columns(), &ListState::default());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some("name"), "name", true), " ▲");
        assert_eq!(get_sort_indicator(Some("name"), "name", false), " ▼");
        assert_eq!(get_sort_indicator(None, "name", true), " ⇅");
    }
}
