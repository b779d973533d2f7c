use axum::{
    extract::{Path, Query},
    response::Response,
    Json,
};
use contracts::domain::a002_campaign::CampaignId;
use contracts::domain::a003_ad_group::{AdGroup, AdGroupDto, AdGroupId};
use contracts::domain::common::{BudgetUpdateRequest, StatusUpdateRequest};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::a003_ad_group;
use crate::shared::error::{parse_id, ServiceError};
use crate::shared::export::{csv_response, export_file_name};

#[derive(Debug, Deserialize)]
pub struct AdGroupListQuery {
    pub campaign_id: Option<String>,
}

impl AdGroupListQuery {
    fn campaign_id(&self) -> Result<Option<CampaignId>, ServiceError> {
        match self.campaign_id.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => parse_id(raw).map(Some),
            None => Ok(None),
        }
    }
}

/// GET /api/ad_groups?campaign_id=...
pub async fn list(Query(query): Query<AdGroupListQuery>) -> Result<Json<Vec<AdGroup>>, ServiceError> {
    Ok(Json(a003_ad_group::service::list(query.campaign_id()?).await?))
}

/// GET /api/ad_groups/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<AdGroup>, ServiceError> {
    let id: AdGroupId = parse_id(&id)?;
    a003_ad_group::service::get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("ad group {}", id)))
}

/// POST /api/ad_groups
pub async fn upsert(Json(dto): Json<AdGroupDto>) -> Result<Json<Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a003_ad_group::service::update(dto).await?;
            id
        }
        None => a003_ad_group::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/ad_groups/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let id: AdGroupId = parse_id(&id)?;
    if a003_ad_group::service::delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("ad group {}", id)))
    }
}

/// POST /api/ad_groups/:id/status
pub async fn set_status(
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<AdGroup>, ServiceError> {
    let id: AdGroupId = parse_id(&id)?;
    a003_ad_group::service::set_status(id, req.status)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("ad group {}", id)))
}

/// POST /api/ad_groups/:id/budget
pub async fn set_budget(
    Path(id): Path<String>,
    Json(req): Json<BudgetUpdateRequest>,
) -> Result<Json<AdGroup>, ServiceError> {
    let id: AdGroupId = parse_id(&id)?;
    a003_ad_group::service::set_budget(id, &req.budget)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("ad group {}", id)))
}

/// GET /api/ad_groups/export?campaign_id=...
pub async fn export(Query(query): Query<AdGroupListQuery>) -> Result<Response, ServiceError> {
    let body = a003_ad_group::service::export_csv(query.campaign_id()?).await?;
    Ok(csv_response(&export_file_name("ad_groups"), body))
}
