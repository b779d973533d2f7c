//! REST-клиент креативов

use crate::shared::api_utils::{
    api_url, delete, get_json, post_json, query_string, save_form, SaveError,
};
use contracts::domain::a004_creative::{Creative, CreativeDto};
use contracts::domain::common::{EntityStatus, StatusUpdateRequest};
use serde::Serialize;

const COLLECTION: &str = "/api/creatives";

#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_group_id: Option<&'a str>,
}

fn item_url(id: &str) -> String {
    api_url(&format!("{}/{}", COLLECTION, urlencoding::encode(id)))
}

pub async fn fetch_list(ad_group_id: Option<&str>) -> Result<Vec<Creative>, String> {
    let query = query_string(&ListQuery { ad_group_id });
    get_json(&api_url(&format!("{}{}", COLLECTION, query))).await
}

pub async fn fetch_by_id(id: &str) -> Result<CreativeDto, String> {
    get_json::<Creative>(&item_url(id)).await.map(CreativeDto::from)
}

pub async fn save(dto: &CreativeDto) -> Result<String, SaveError> {
    save_form(&api_url(COLLECTION), dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&item_url(id)).await
}

pub async fn set_status(id: &str, status: EntityStatus) -> Result<Creative, String> {
    let url = format!("{}/status", item_url(id));
    post_json(&url, &StatusUpdateRequest { status }).await
}

pub fn export_url(ad_group_id: Option<&str>) -> String {
    let query = query_string(&ListQuery { ad_group_id });
    api_url(&format!("{}/export{}", COLLECTION, query))
}
