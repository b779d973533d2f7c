use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Выгрузить строки в CSV для Excel: разделитель `;`, UTF-8 с BOM
pub fn to_csv<R: Serialize>(rows: &[R]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV flush failed: {}", e))?;
    let body = String::from_utf8(bytes)?;
    Ok(format!("\u{FEFF}{}", body))
}

/// HTTP-ответ со скачиванием файла
pub fn csv_response(file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}

/// Имя файла выгрузки с датой: `advertisers_2025-03-01.csv`
pub fn export_file_name(collection: &str) -> String {
    format!(
        "{}_{}.csv",
        collection,
        chrono::Utc::now().date_naive().format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Код")]
        code: &'static str,
        #[serde(rename = "Наименование")]
        name: &'static str,
        #[serde(rename = "Бюджет")]
        budget: String,
    }

    #[test]
    fn test_csv_has_bom_header_and_quoting() {
        let rows = vec![
            Row {
                code: "CMP-0001",
                name: "Весна; распродажа",
                budget: "150000,00".into(),
            },
            Row {
                code: "CMP-0002",
                name: "Лето",
                budget: "1,50".into(),
            },
        ];
        let csv = to_csv(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("\u{FEFF}Код;Наименование;Бюджет"));
        assert_eq!(lines.next(), Some("CMP-0001;\"Весна; распродажа\";150000,00"));
        assert_eq!(lines.next(), Some("CMP-0002;Лето;1,50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_export_is_bom_only() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(to_csv(&rows).unwrap(), "\u{FEFF}");
    }

    #[test]
    fn test_export_file_name() {
        let name = export_file_name("campaigns");
        assert!(name.starts_with("campaigns_"));
        assert!(name.ends_with(".csv"));
    }
}
