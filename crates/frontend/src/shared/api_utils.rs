//! API utilities for frontend-backend communication
//!
//! Базовый адрес API и общие запросы к сервису данных.

use contracts::shared::validation::FieldErrors;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/advertisers/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Ошибка сохранения формы
#[derive(Debug, Clone, PartialEq)]
pub enum SaveError {
    /// Сервер отклонил поля формы (HTTP 422)
    Validation(FieldErrors),
    /// Сеть, разбор ответа или другой код ответа
    Http(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Validation(errors) => {
                write!(f, "Проверьте поля формы ({})", errors.len())
            }
            SaveError::Http(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Deserialize)]
struct ValidationBody {
    errors: FieldErrors,
}

#[derive(Deserialize)]
struct SavedId {
    id: String,
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if text.trim().is_empty() {
        Err(format!("HTTP error: {}", status))
    } else {
        Err(format!("HTTP error: {} {}", status, text.trim()))
    }
}

/// GET с разбором JSON
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = ensure_ok(response).await?;
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST с JSON-телом и JSON-ответом
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = ensure_ok(response).await?;
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// POST, на который сервер может ответить 422 с картой ошибок полей
pub async fn post_validated<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, SaveError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| SaveError::Http(format!("Failed to serialize: {}", e)))?
        .send()
        .await
        .map_err(|e| SaveError::Http(format!("Request failed: {}", e)))?;

    if response.status() == 422 {
        let body: ValidationBody = response
            .json()
            .await
            .map_err(|e| SaveError::Http(format!("Failed to parse response: {}", e)))?;
        return Err(SaveError::Validation(body.errors));
    }

    let response = ensure_ok(response).await.map_err(SaveError::Http)?;
    response
        .json()
        .await
        .map_err(|e| SaveError::Http(format!("Failed to parse response: {}", e)))
}

/// Сохранить форму (создание или обновление). Возвращает id записи.
pub async fn save_form<B: Serialize>(url: &str, body: &B) -> Result<String, SaveError> {
    post_validated::<B, SavedId>(url, body)
        .await
        .map(|saved| saved.id)
}

/// Строка запроса для фильтров списка, `None`-поля опускаются
pub fn query_string<Q: Serialize>(query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("?{}", qs),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct ParentQuery {
        #[serde(skip_serializing_if = "Option::is_none")]
        advertiser_id: Option<String>,
    }

    #[test]
    fn test_query_string() {
        let with_parent = ParentQuery {
            advertiser_id: Some("a1".into()),
        };
        assert_eq!(query_string(&with_parent), "?advertiser_id=a1");
        assert_eq!(query_string(&ParentQuery { advertiser_id: None }), "");
    }

    #[test]
    fn test_validation_body_parses_field_map() {
        let body: ValidationBody =
            serde_json::from_str(r#"{"errors": {"inn": "ИНН должен содержать 10 или 12 цифр"}}"#)
                .unwrap();
        assert_eq!(body.errors.get("inn"), Some("ИНН должен содержать 10 или 12 цифр"));
        assert_eq!(
            SaveError::Validation(body.errors).to_string(),
            "Проверьте поля формы (1)"
        );
    }
}
