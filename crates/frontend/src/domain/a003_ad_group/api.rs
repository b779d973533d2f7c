//! REST-клиент групп объявлений

use crate::shared::api_utils::{
    api_url, delete, get_json, post_json, post_validated, query_string, save_form, SaveError,
};
use contracts::domain::a003_ad_group::{AdGroup, AdGroupDto};
use contracts::domain::common::{BudgetUpdateRequest, EntityStatus, StatusUpdateRequest};
use serde::Serialize;

const COLLECTION: &str = "/api/ad_groups";

#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    campaign_id: Option<&'a str>,
}

fn item_url(id: &str) -> String {
    api_url(&format!("{}/{}", COLLECTION, urlencoding::encode(id)))
}

pub async fn fetch_list(campaign_id: Option<&str>) -> Result<Vec<AdGroup>, String> {
    let query = query_string(&ListQuery { campaign_id });
    get_json(&api_url(&format!("{}{}", COLLECTION, query))).await
}

pub async fn fetch_by_id(id: &str) -> Result<AdGroupDto, String> {
    get_json::<AdGroup>(&item_url(id)).await.map(AdGroupDto::from)
}

pub async fn save(dto: &AdGroupDto) -> Result<String, SaveError> {
    save_form(&api_url(COLLECTION), dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&item_url(id)).await
}

pub async fn set_status(id: &str, status: EntityStatus) -> Result<AdGroup, String> {
    let url = format!("{}/status", item_url(id));
    post_json(&url, &StatusUpdateRequest { status }).await
}

pub async fn set_budget(id: &str, budget: String) -> Result<AdGroup, SaveError> {
    let url = format!("{}/budget", item_url(id));
    post_validated(&url, &BudgetUpdateRequest { budget }).await
}

pub fn export_url(campaign_id: Option<&str>) -> String {
    let query = query_string(&ListQuery { campaign_id });
    api_url(&format!("{}/export{}", COLLECTION, query))
}
