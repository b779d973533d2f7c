use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Служебные поля записи: время создания и изменения, версия, признак удаления
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    /// Растёт при каждом сохранении; 0 у записи, которая ещё не сохранялась
    pub version: i32,
}

impl Default for EntityMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }
}

impl EntityMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.touch();
    }
}

/// Поля, общие для рекламодателя, кампании, группы и креатива.
/// В JSON разворачивается в корень объекта (`#[serde(flatten)]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// ADV-0001, CMP-0042, ...
    pub code: String,
    /// Наименование
    pub description: String,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_increments_version() {
        let mut base = BaseAggregate::new(1u32, "ADV-0001".to_string(), "Бренд".to_string());
        assert_eq!(base.metadata.version, 0);
        base.touch();
        base.touch();
        assert_eq!(base.metadata.version, 2);
        assert!(base.metadata.updated_at >= base.metadata.created_at);
    }

    #[test]
    fn test_mark_deleted() {
        let mut meta = EntityMetadata::new();
        meta.mark_deleted();
        assert!(meta.is_deleted);
        assert_eq!(meta.version, 1);
    }
}
