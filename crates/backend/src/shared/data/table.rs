use contracts::domain::common::{AggregateId, AggregateRoot};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory таблица агрегатов
///
/// Записи не удаляются физически: `soft_delete` ставит флаг в метаданных,
/// а выборки его учитывают.
pub struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Table<T>
where
    T: AggregateRoot + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, Vec<T>>> {
        self.rows
            .read()
            .map_err(|_| anyhow::anyhow!("{}: table lock poisoned", T::collection_name()))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.rows
            .write()
            .map_err(|_| anyhow::anyhow!("{}: table lock poisoned", T::collection_name()))
    }

    /// Неудалённые записи, прошедшие фильтр, по наименованию
    pub fn list(&self, filter: impl Fn(&T) -> bool) -> anyhow::Result<Vec<T>> {
        let mut items: Vec<T> = self
            .read()?
            .iter()
            .filter(|item| item.is_visible() && filter(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.description()
                .to_lowercase()
                .cmp(&b.description().to_lowercase())
        });
        Ok(items)
    }

    pub fn get(&self, id: T::Id) -> anyhow::Result<Option<T>> {
        Ok(self
            .read()?
            .iter()
            .find(|item| item.id() == id && item.is_visible())
            .cloned())
    }

    pub fn insert(&self, item: T) -> anyhow::Result<T::Id> {
        let id = item.id();
        let mut rows = self.write()?;
        if rows.iter().any(|existing| existing.id() == id) {
            anyhow::bail!("{}: duplicate id {}", T::collection_name(), id.as_string());
        }
        rows.push(item);
        Ok(id)
    }

    /// Заменить запись целиком; `false`, если записи нет
    pub fn replace(&self, item: T) -> anyhow::Result<bool> {
        let id = item.id();
        let mut rows = self.write()?;
        match rows
            .iter_mut()
            .find(|existing| existing.id() == id && existing.is_visible())
        {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Изменить запись на месте под блокировкой записи
    pub fn modify<R>(&self, id: T::Id, f: impl FnOnce(&mut T) -> R) -> anyhow::Result<Option<R>> {
        let mut rows = self.write()?;
        Ok(rows
            .iter_mut()
            .find(|item| item.id() == id && item.is_visible())
            .map(f))
    }

    pub fn soft_delete(&self, id: T::Id) -> anyhow::Result<bool> {
        self.modify(id, |item| item.metadata_mut().mark_deleted())
            .map(|found| found.is_some())
    }

    /// Следующий бизнес-код: ADV-0001, ADV-0002, ...
    pub fn next_code(&self) -> anyhow::Result<String> {
        let count = self.read()?.len();
        Ok(format!("{}-{:04}", T::code_prefix(), count + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_advertiser::{Advertiser, AdvertiserDto, AdvertiserId};

    fn advertiser(table: &Table<Advertiser>, name: &str) -> Advertiser {
        let dto = AdvertiserDto {
            name: name.into(),
            ..Default::default()
        };
        Advertiser::new_for_insert(table.next_code().unwrap(), &dto)
    }

    #[test]
    fn test_list_is_sorted_and_skips_deleted() {
        let table = Table::new();
        let b = advertiser(&table, "бета");
        table.insert(b.clone()).unwrap();
        let a = advertiser(&table, "Альфа");
        table.insert(a.clone()).unwrap();
        let c = advertiser(&table, "Гамма");
        let c_id = table.insert(c).unwrap();

        assert!(table.soft_delete(c_id).unwrap());
        let names: Vec<String> = table
            .list(|_| true)
            .unwrap()
            .into_iter()
            .map(|x| x.base.description)
            .collect();
        assert_eq!(names, vec!["Альфа", "бета"]);
        assert!(table.get(c_id).unwrap().is_none());
        assert!(!table.soft_delete(c_id).unwrap());
    }

    #[test]
    fn test_codes_grow_with_table() {
        let table: Table<Advertiser> = Table::new();
        assert_eq!(table.next_code().unwrap(), "ADV-0001");
        table.insert(advertiser(&table, "Альфа")).unwrap();
        assert_eq!(table.next_code().unwrap(), "ADV-0002");
    }

    #[test]
    fn test_replace_and_modify_unknown_id() {
        let table: Table<Advertiser> = Table::new();
        let missing = AdvertiserId::new_v4();
        assert!(table.modify(missing, |_| ()).unwrap().is_none());
        assert!(!table.replace(advertiser(&table, "Альфа")).unwrap());
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let table = Table::new();
        let a = advertiser(&table, "Альфа");
        table.insert(a.clone()).unwrap();
        assert!(table.insert(a).is_err());
    }
}
