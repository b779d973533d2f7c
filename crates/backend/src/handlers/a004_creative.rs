use axum::{
    extract::{Path, Query},
    response::Response,
    Json,
};
use contracts::domain::a003_ad_group::AdGroupId;
use contracts::domain::a004_creative::{Creative, CreativeDto, CreativeId};
use contracts::domain::common::StatusUpdateRequest;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::a004_creative;
use crate::shared::error::{parse_id, ServiceError};
use crate::shared::export::{csv_response, export_file_name};

#[derive(Debug, Deserialize)]
pub struct CreativeListQuery {
    pub ad_group_id: Option<String>,
}

impl CreativeListQuery {
    fn ad_group_id(&self) -> Result<Option<AdGroupId>, ServiceError> {
        match self.ad_group_id.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => parse_id(raw).map(Some),
            None => Ok(None),
        }
    }
}

/// GET /api/creatives?ad_group_id=...
pub async fn list(Query(query): Query<CreativeListQuery>) -> Result<Json<Vec<Creative>>, ServiceError> {
    Ok(Json(a004_creative::service::list(query.ad_group_id()?).await?))
}

/// GET /api/creatives/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Creative>, ServiceError> {
    let id: CreativeId = parse_id(&id)?;
    a004_creative::service::get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("creative {}", id)))
}

/// POST /api/creatives
pub async fn upsert(Json(dto): Json<CreativeDto>) -> Result<Json<Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a004_creative::service::update(dto).await?;
            id
        }
        None => a004_creative::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/creatives/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let id: CreativeId = parse_id(&id)?;
    if a004_creative::service::delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("creative {}", id)))
    }
}

/// POST /api/creatives/:id/status
pub async fn set_status(
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<Creative>, ServiceError> {
    let id: CreativeId = parse_id(&id)?;
    a004_creative::service::set_status(id, req.status)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("creative {}", id)))
}

/// GET /api/creatives/export?ad_group_id=...
pub async fn export(Query(query): Query<CreativeListQuery>) -> Result<Response, ServiceError> {
    let body = a004_creative::service::export_csv(query.ad_group_id()?).await?;
    Ok(csv_response(&export_file_name("creatives"), body))
}
