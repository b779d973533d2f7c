//! Кэш имён сущностей для хлебных крошек.
//!
//! Каждый запрос имени получает номер поколения. Ответ применяется только
//! если поколение слота не сменилось, поэтому поздний ответ на старый
//! маршрут не перезапишет имя для нового.

use super::resolver::EntityKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct NameSlot {
    id: String,
    generation: u64,
    name: Option<String>,
}

/// Запрос на загрузку имени
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub kind: EntityKind,
    pub id: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct EntityNameCache {
    slots: BTreeMap<EntityKind, NameSlot>,
    next_generation: u64,
}

impl EntityNameCache {
    /// Привести кэш к набору сущностей текущего пути.
    ///
    /// Слоты, которых больше нет в пути, удаляются. Для новых и сменивших id
    /// слотов заводится новое поколение и возвращается запрос на загрузку.
    pub fn sync(&mut self, refs: &[(EntityKind, String)]) -> Vec<LookupTicket> {
        self.slots
            .retain(|kind, _| refs.iter().any(|(k, _)| k == kind));

        let mut tickets = Vec::new();
        for (kind, id) in refs {
            if self.slots.get(kind).is_some_and(|slot| &slot.id == id) {
                continue;
            }

            self.next_generation += 1;
            let generation = self.next_generation;
            self.slots.insert(
                *kind,
                NameSlot {
                    id: id.clone(),
                    generation,
                    name: None,
                },
            );
            tickets.push(LookupTicket {
                kind: *kind,
                id: id.clone(),
                generation,
            });
        }
        tickets
    }

    /// Сохранить результат загрузки. Возвращает `false`, если запрос устарел.
    /// `None` (ошибка загрузки) оставляет подпись по умолчанию.
    pub fn apply(&mut self, ticket: &LookupTicket, name: Option<String>) -> bool {
        match self.slots.get_mut(&ticket.kind) {
            Some(slot) if slot.generation == ticket.generation && slot.id == ticket.id => {
                slot.name = name.filter(|n| !n.trim().is_empty());
                true
            }
            _ => false,
        }
    }

    pub fn name_or_fallback(&self, kind: EntityKind, id: &str) -> String {
        self.slots
            .get(&kind)
            .filter(|slot| slot.id == id)
            .and_then(|slot| slot.name.clone())
            .unwrap_or_else(|| kind.fallback_label().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(items: &[(EntityKind, &str)]) -> Vec<(EntityKind, String)> {
        items.iter().map(|(k, id)| (*k, id.to_string())).collect()
    }

    #[test]
    fn test_fallback_until_resolved() {
        let mut cache = EntityNameCache::default();
        let tickets = cache.sync(&refs(&[(EntityKind::Advertiser, "a1")]));
        assert_eq!(tickets.len(), 1);
        assert_eq!(cache.name_or_fallback(EntityKind::Advertiser, "a1"), "Рекламодатель");

        assert!(cache.apply(&tickets[0], Some("Ромашка".into())));
        assert_eq!(cache.name_or_fallback(EntityKind::Advertiser, "a1"), "Ромашка");
    }

    #[test]
    fn test_same_id_is_not_refetched() {
        let mut cache = EntityNameCache::default();
        let first = cache.sync(&refs(&[(EntityKind::Advertiser, "a1")]));
        cache.apply(&first[0], Some("Ромашка".into()));

        let again = cache.sync(&refs(&[
            (EntityKind::Advertiser, "a1"),
            (EntityKind::Campaign, "c1"),
        ]));
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].kind, EntityKind::Campaign);
        assert_eq!(cache.name_or_fallback(EntityKind::Advertiser, "a1"), "Ромашка");
    }

    #[test]
    fn test_stale_lookup_is_discarded() {
        let mut cache = EntityNameCache::default();
        let old = cache.sync(&refs(&[(EntityKind::Campaign, "c1")]));
        let new = cache.sync(&refs(&[(EntityKind::Campaign, "c2")]));

        // Новый ответ пришёл раньше старого
        assert!(cache.apply(&new[0], Some("Осень".into())));
        assert!(!cache.apply(&old[0], Some("Весна".into())));
        assert_eq!(cache.name_or_fallback(EntityKind::Campaign, "c2"), "Осень");
    }

    #[test]
    fn test_returning_to_same_id_starts_new_generation() {
        let mut cache = EntityNameCache::default();
        let first = cache.sync(&refs(&[(EntityKind::AdGroup, "g1")]));
        cache.sync(&[]);
        let second = cache.sync(&refs(&[(EntityKind::AdGroup, "g1")]));

        assert_ne!(first[0].generation, second[0].generation);
        assert!(!cache.apply(&first[0], Some("Старое имя".into())));
        assert_eq!(cache.name_or_fallback(EntityKind::AdGroup, "g1"), "Группа объявлений");
    }

    #[test]
    fn test_failed_lookup_keeps_fallback() {
        let mut cache = EntityNameCache::default();
        let tickets = cache.sync(&refs(&[(EntityKind::Creative, "x1")]));
        assert!(cache.apply(&tickets[0], None));
        assert_eq!(cache.name_or_fallback(EntityKind::Creative, "x1"), "Креатив");
    }

    #[test]
    fn test_name_checked_against_id() {
        let mut cache = EntityNameCache::default();
        let tickets = cache.sync(&refs(&[(EntityKind::Advertiser, "a1")]));
        cache.apply(&tickets[0], Some("Ромашка".into()));
        assert_eq!(cache.name_or_fallback(EntityKind::Advertiser, "a2"), "Рекламодатель");
    }
}
