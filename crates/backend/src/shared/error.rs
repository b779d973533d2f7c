use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::AggregateId;
use contracts::shared::validation::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// Ошибка сервиса, видимая по HTTP
///
/// Сервисы возвращают `anyhow::Result`; типизированная ошибка
/// кладётся внутрь через `Err(ServiceError::...)?` и достаётся
/// обратно в обработчике через `From<anyhow::Error>`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl ServiceError {
    /// Ошибка валидации одного поля
    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.set(field, message);
        ServiceError::Validation(errors)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<ServiceError>() {
            Ok(service_error) => service_error,
            Err(other) => ServiceError::Internal(other),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ServiceError::Validation(errors) => {
                tracing::info!("Validation failed: {:?}", errors.fields().collect::<Vec<_>>());
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            ServiceError::NotFound(what) => (status, what).into_response(),
            ServiceError::BadRequest(msg) => (status, msg).into_response(),
            ServiceError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                status.into_response()
            }
        }
    }
}

/// Разобрать идентификатор из пути запроса
pub fn parse_id<Id: AggregateId>(raw: &str) -> Result<Id, ServiceError> {
    Id::from_string(raw).map_err(ServiceError::BadRequest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_advertiser::AdvertiserId;

    #[test]
    fn test_anyhow_round_trip_keeps_variant() {
        let err: anyhow::Error = ServiceError::field("budget", "Значение должно быть положительным числом").into();
        let back = ServiceError::from(err);
        assert_eq!(back.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        match back {
            ServiceError::Validation(errors) => assert!(errors.contains("budget")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_plain_anyhow_is_internal() {
        let back = ServiceError::from(anyhow::anyhow!("disk is on fire"));
        assert_eq!(back.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id::<AdvertiserId>("not-a-uuid").is_err());
        let id = AdvertiserId::new_v4();
        assert_eq!(parse_id::<AdvertiserId>(&id.to_string()).unwrap(), id);
    }
}
