use contracts::domain::a001_advertiser::AdvertiserId;
use contracts::domain::a002_campaign::{Campaign, CampaignId};
use once_cell::sync::Lazy;

use crate::shared::data::Table;

static TABLE: Lazy<Table<Campaign>> = Lazy::new(Table::new);

/// Кампании рекламодателя или все, если рекламодатель не указан
pub fn list(advertiser_id: Option<AdvertiserId>) -> anyhow::Result<Vec<Campaign>> {
    TABLE.list(|c| advertiser_id.map_or(true, |id| c.advertiser_id == id))
}

pub fn get_by_id(id: CampaignId) -> anyhow::Result<Option<Campaign>> {
    TABLE.get(id)
}

pub fn insert(aggregate: &Campaign) -> anyhow::Result<CampaignId> {
    TABLE.insert(aggregate.clone())
}

pub fn update(aggregate: &Campaign) -> anyhow::Result<bool> {
    TABLE.replace(aggregate.clone())
}

pub fn modify<R>(id: CampaignId, f: impl FnOnce(&mut Campaign) -> R) -> anyhow::Result<Option<R>> {
    TABLE.modify(id, f)
}

pub fn soft_delete(id: CampaignId) -> anyhow::Result<bool> {
    TABLE.soft_delete(id)
}

pub fn next_code() -> anyhow::Result<String> {
    TABLE.next_code()
}
