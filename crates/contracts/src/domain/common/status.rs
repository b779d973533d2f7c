use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Статус рекламной сущности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Archived,
}

impl EntityStatus {
    pub const ALL: [EntityStatus; 4] = [
        EntityStatus::Draft,
        EntityStatus::Active,
        EntityStatus::Paused,
        EntityStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Draft => "draft",
            EntityStatus::Active => "active",
            EntityStatus::Paused => "paused",
            EntityStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityStatus::Draft => "Черновик",
            EntityStatus::Active => "Активен",
            EntityStatus::Paused => "Приостановлен",
            EntityStatus::Archived => "В архиве",
        }
    }

    /// Статус, в который переводит кнопка "пауза/запуск" в списке
    pub fn toggled(&self) -> EntityStatus {
        match self {
            EntityStatus::Active => EntityStatus::Paused,
            _ => EntityStatus::Active,
        }
    }
}

impl FromStr for EntityStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("Unknown status: {}", s))
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Тело запроса смены статуса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: EntityStatus,
}

/// Тело запроса смены бюджета (сырое значение из поля ввода)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUpdateRequest {
    pub budget: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in EntityStatus::ALL {
            assert_eq!(status.as_str().parse::<EntityStatus>().unwrap(), status);
        }
        assert!("running".parse::<EntityStatus>().is_err());
    }

    #[test]
    fn test_toggled() {
        assert_eq!(EntityStatus::Active.toggled(), EntityStatus::Paused);
        assert_eq!(EntityStatus::Paused.toggled(), EntityStatus::Active);
        assert_eq!(EntityStatus::Draft.toggled(), EntityStatus::Active);
    }
}
