use contracts::domain::a002_campaign::CampaignId;
use contracts::domain::a003_ad_group::{AdGroup, AdGroupId};
use once_cell::sync::Lazy;

use crate::shared::data::Table;

static TABLE: Lazy<Table<AdGroup>> = Lazy::new(Table::new);

/// Группы кампании или все группы
pub fn list(campaign_id: Option<CampaignId>) -> anyhow::Result<Vec<AdGroup>> {
    TABLE.list(|g| campaign_id.map_or(true, |id| g.campaign_id == id))
}

pub fn get_by_id(id: AdGroupId) -> anyhow::Result<Option<AdGroup>> {
    TABLE.get(id)
}

pub fn insert(aggregate: &AdGroup) -> anyhow::Result<AdGroupId> {
    TABLE.insert(aggregate.clone())
}

pub fn update(aggregate: &AdGroup) -> anyhow::Result<bool> {
    TABLE.replace(aggregate.clone())
}

pub fn modify<R>(id: AdGroupId, f: impl FnOnce(&mut AdGroup) -> R) -> anyhow::Result<Option<R>> {
    TABLE.modify(id, f)
}

pub fn soft_delete(id: AdGroupId) -> anyhow::Result<bool> {
    TABLE.soft_delete(id)
}

pub fn next_code() -> anyhow::Result<String> {
    TABLE.next_code()
}
