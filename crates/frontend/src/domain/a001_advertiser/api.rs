//! REST-клиент рекламодателей

use crate::shared::api_utils::{
    api_url, delete, get_json, post_json, save_form, SaveError,
};
use contracts::domain::a001_advertiser::{Advertiser, AdvertiserDto};
use contracts::domain::common::{EntityStatus, StatusUpdateRequest};

const COLLECTION: &str = "/api/advertisers";

fn item_url(id: &str) -> String {
    api_url(&format!("{}/{}", COLLECTION, urlencoding::encode(id)))
}

pub async fn fetch_list() -> Result<Vec<Advertiser>, String> {
    get_json(&api_url(COLLECTION)).await
}

pub async fn fetch_by_id(id: &str) -> Result<AdvertiserDto, String> {
    get_json::<Advertiser>(&item_url(id))
        .await
        .map(AdvertiserDto::from)
}

pub async fn save(dto: &AdvertiserDto) -> Result<String, SaveError> {
    save_form(&api_url(COLLECTION), dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&item_url(id)).await
}

pub async fn set_status(id: &str, status: EntityStatus) -> Result<Advertiser, String> {
    let url = format!("{}/status", item_url(id));
    post_json(&url, &StatusUpdateRequest { status }).await
}

pub fn export_url() -> String {
    api_url(&format!("{}/export", COLLECTION))
}
