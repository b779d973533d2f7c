use contracts::domain::a001_advertiser::{Advertiser, AdvertiserId};
use once_cell::sync::Lazy;

use crate::shared::data::Table;

static TABLE: Lazy<Table<Advertiser>> = Lazy::new(Table::new);

pub fn list_all() -> anyhow::Result<Vec<Advertiser>> {
    TABLE.list(|_| true)
}

pub fn get_by_id(id: AdvertiserId) -> anyhow::Result<Option<Advertiser>> {
    TABLE.get(id)
}

pub fn insert(aggregate: &Advertiser) -> anyhow::Result<AdvertiserId> {
    TABLE.insert(aggregate.clone())
}

pub fn update(aggregate: &Advertiser) -> anyhow::Result<bool> {
    TABLE.replace(aggregate.clone())
}

pub fn modify<R>(id: AdvertiserId, f: impl FnOnce(&mut Advertiser) -> R) -> anyhow::Result<Option<R>> {
    TABLE.modify(id, f)
}

pub fn soft_delete(id: AdvertiserId) -> anyhow::Result<bool> {
    TABLE.soft_delete(id)
}

pub fn next_code() -> anyhow::Result<String> {
    TABLE.next_code()
}
