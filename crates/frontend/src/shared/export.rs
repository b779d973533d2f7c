/// Выгрузка таблиц в CSV: локальная (из строк на странице) и серверная (по ссылке)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для строк, которые можно выгрузить в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения одной строки в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

const SEPARATOR: &str = ";";

/// Собирает CSV с BOM (для кириллицы в Excel) и разделителем `;`
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = vec![T::headers().join(SEPARATOR)];
    lines.extend(data.iter().map(|item| csv_line(&item.to_csv_row())));

    let mut csv = String::from('\u{FEFF}');
    for line in lines {
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn csv_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_cell(cell))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Выгружает строки в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let blob = csv_blob(&build_csv(data))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err("create object URL"))?;
    let result = click_download_link(&url, filename);
    Url::revoke_object_url(&url).map_err(js_err("revoke object URL"))?;
    result
}

/// Скачивание готового файла с сервера (экспорт списков сущностей)
pub fn download_from_url(url: &str, filename: &str) -> Result<(), String> {
    click_download_link(url, filename)
}

/// Ячейка с `;`, кавычками или переводом строки берётся в кавычки
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn js_err(action: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> String {
    move |e| format!("Failed to {}: {:?}", action, e)
}

fn csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err("create blob"))
}

/// Временная невидимая ссылка: добавить в body, кликнуть, убрать
fn click_download_link(href: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err("create anchor"))?
        .dyn_into()
        .map_err(|_| "Element is not an anchor".to_string())?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(js_err("hide anchor"))?;

    body.append_child(&anchor).map_err(js_err("append anchor"))?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err("remove anchor"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        clicks: u64,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Название", "Клики"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.clicks.to_string()]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_build_csv() {
        let rows = vec![
            Row { name: "Баннер", clicks: 12 },
            Row { name: "Лента; малый", clicks: 3 },
        ];
        let csv = build_csv(&rows);
        assert_eq!(
            csv,
            "\u{FEFF}Название;Клики\nБаннер;12\n\"Лента; малый\";3\n"
        );
    }
}
