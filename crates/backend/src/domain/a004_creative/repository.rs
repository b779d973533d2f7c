use contracts::domain::a003_ad_group::AdGroupId;
use contracts::domain::a004_creative::{Creative, CreativeId};
use once_cell::sync::Lazy;

use crate::shared::data::Table;

static TABLE: Lazy<Table<Creative>> = Lazy::new(Table::new);

/// Креативы группы или все креативы
pub fn list(ad_group_id: Option<AdGroupId>) -> anyhow::Result<Vec<Creative>> {
    TABLE.list(|c| ad_group_id.map_or(true, |id| c.ad_group_id == id))
}

pub fn get_by_id(id: CreativeId) -> anyhow::Result<Option<Creative>> {
    TABLE.get(id)
}

pub fn insert(aggregate: &Creative) -> anyhow::Result<CreativeId> {
    TABLE.insert(aggregate.clone())
}

pub fn update(aggregate: &Creative) -> anyhow::Result<bool> {
    TABLE.replace(aggregate.clone())
}

pub fn modify<R>(id: CreativeId, f: impl FnOnce(&mut Creative) -> R) -> anyhow::Result<Option<R>> {
    TABLE.modify(id, f)
}

pub fn soft_delete(id: CreativeId) -> anyhow::Result<bool> {
    TABLE.soft_delete(id)
}

pub fn next_code() -> anyhow::Result<String> {
    TABLE.next_code()
}
