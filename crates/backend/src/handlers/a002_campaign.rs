use axum::{
    extract::{Path, Query},
    response::Response,
    Json,
};
use contracts::domain::a001_advertiser::AdvertiserId;
use contracts::domain::a002_campaign::{Campaign, CampaignDto, CampaignId};
use contracts::domain::common::{BudgetUpdateRequest, StatusUpdateRequest};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::a002_campaign;
use crate::shared::error::{parse_id, ServiceError};
use crate::shared::export::{csv_response, export_file_name};

#[derive(Debug, Deserialize)]
pub struct CampaignListQuery {
    pub advertiser_id: Option<String>,
}

impl CampaignListQuery {
    fn advertiser_id(&self) -> Result<Option<AdvertiserId>, ServiceError> {
        match self.advertiser_id.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => parse_id(raw).map(Some),
            None => Ok(None),
        }
    }
}

/// GET /api/campaigns?advertiser_id=...
pub async fn list(Query(query): Query<CampaignListQuery>) -> Result<Json<Vec<Campaign>>, ServiceError> {
    Ok(Json(a002_campaign::service::list(query.advertiser_id()?).await?))
}

/// GET /api/campaigns/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Campaign>, ServiceError> {
    let id: CampaignId = parse_id(&id)?;
    a002_campaign::service::get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("campaign {}", id)))
}

/// POST /api/campaigns
pub async fn upsert(Json(dto): Json<CampaignDto>) -> Result<Json<Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a002_campaign::service::update(dto).await?;
            id
        }
        None => a002_campaign::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/campaigns/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let id: CampaignId = parse_id(&id)?;
    if a002_campaign::service::delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("campaign {}", id)))
    }
}

/// POST /api/campaigns/:id/status
pub async fn set_status(
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<Campaign>, ServiceError> {
    let id: CampaignId = parse_id(&id)?;
    a002_campaign::service::set_status(id, req.status)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("campaign {}", id)))
}

/// POST /api/campaigns/:id/budget
pub async fn set_budget(
    Path(id): Path<String>,
    Json(req): Json<BudgetUpdateRequest>,
) -> Result<Json<Campaign>, ServiceError> {
    let id: CampaignId = parse_id(&id)?;
    a002_campaign::service::set_budget(id, &req.budget)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("campaign {}", id)))
}

/// GET /api/campaigns/export?advertiser_id=...
pub async fn export(Query(query): Query<CampaignListQuery>) -> Result<Response, ServiceError> {
    let body = a002_campaign::service::export_csv(query.advertiser_id()?).await?;
    Ok(csv_response(&export_file_name("campaigns"), body))
}
