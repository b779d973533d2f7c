//! REST-клиент кампаний

use crate::shared::api_utils::{
    api_url, delete, get_json, post_json, post_validated, query_string, save_form, SaveError,
};
use contracts::domain::a002_campaign::{Campaign, CampaignDto};
use contracts::domain::common::{BudgetUpdateRequest, EntityStatus, StatusUpdateRequest};
use serde::Serialize;

const COLLECTION: &str = "/api/campaigns";

#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    advertiser_id: Option<&'a str>,
}

fn item_url(id: &str) -> String {
    api_url(&format!("{}/{}", COLLECTION, urlencoding::encode(id)))
}

/// Кампании рекламодателя или все кампании при `None`
pub async fn fetch_list(advertiser_id: Option<&str>) -> Result<Vec<Campaign>, String> {
    let query = query_string(&ListQuery { advertiser_id });
    get_json(&api_url(&format!("{}{}", COLLECTION, query))).await
}

pub async fn fetch_by_id(id: &str) -> Result<CampaignDto, String> {
    get_json::<Campaign>(&item_url(id)).await.map(CampaignDto::from)
}

pub async fn save(dto: &CampaignDto) -> Result<String, SaveError> {
    save_form(&api_url(COLLECTION), dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&item_url(id)).await
}

pub async fn set_status(id: &str, status: EntityStatus) -> Result<Campaign, String> {
    let url = format!("{}/status", item_url(id));
    post_json(&url, &StatusUpdateRequest { status }).await
}

/// Новый общий бюджет. Сервер проверяет значение и отвечает 422 при ошибке.
pub async fn set_budget(id: &str, budget: String) -> Result<Campaign, SaveError> {
    let url = format!("{}/budget", item_url(id));
    post_validated(&url, &BudgetUpdateRequest { budget }).await
}

pub fn export_url(advertiser_id: Option<&str>) -> String {
    let query = query_string(&ListQuery { advertiser_id });
    api_url(&format!("{}/export{}", COLLECTION, query))
}
