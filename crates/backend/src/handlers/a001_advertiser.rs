use axum::{extract::Path, response::Response, Json};
use contracts::domain::a001_advertiser::{Advertiser, AdvertiserDto, AdvertiserId};
use contracts::domain::common::StatusUpdateRequest;
use serde_json::{json, Value};

use crate::domain::a001_advertiser;
use crate::shared::error::{parse_id, ServiceError};
use crate::shared::export::{csv_response, export_file_name};

/// GET /api/advertisers
pub async fn list_all() -> Result<Json<Vec<Advertiser>>, ServiceError> {
    Ok(Json(a001_advertiser::service::list_all().await?))
}

/// GET /api/advertisers/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Advertiser>, ServiceError> {
    let id: AdvertiserId = parse_id(&id)?;
    a001_advertiser::service::get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("advertiser {}", id)))
}

/// POST /api/advertisers
pub async fn upsert(Json(dto): Json<AdvertiserDto>) -> Result<Json<Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a001_advertiser::service::update(dto).await?;
            id
        }
        None => a001_advertiser::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/advertisers/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let id: AdvertiserId = parse_id(&id)?;
    if a001_advertiser::service::delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("advertiser {}", id)))
    }
}

/// POST /api/advertisers/:id/status
pub async fn set_status(
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<Advertiser>, ServiceError> {
    let id: AdvertiserId = parse_id(&id)?;
    a001_advertiser::service::set_status(id, req.status)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("advertiser {}", id)))
}

/// GET /api/advertisers/export
pub async fn export() -> Result<Response, ServiceError> {
    let body = a001_advertiser::service::export_csv().await?;
    Ok(csv_response(&export_file_name("advertisers"), body))
}
