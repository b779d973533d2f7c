use super::repository;
use crate::domain::a002_campaign;
use crate::shared::error::ServiceError;
use crate::shared::export::to_csv;
use crate::shared::format::format_amount;
use contracts::domain::a002_campaign::CampaignId;
use contracts::domain::a003_ad_group::{AdGroup, AdGroupDto, AdGroupId, GEO_REGIONS};
use contracts::domain::common::{AggregateId, EntityStatus};
use contracts::shared::validation::{parse_positive_number, FormValidator, MSG_POSITIVE_NUMBER};
use serde::Serialize;

async fn validate(dto: &AdGroupDto) -> anyhow::Result<()> {
    let mut errors = dto.validate();
    if !errors.contains("campaign_id") {
        let exists = match CampaignId::from_string(&dto.campaign_id).ok() {
            Some(id) => a002_campaign::service::get_by_id(id).await?.is_some(),
            None => false,
        };
        if !exists {
            errors.set("campaign_id", "Кампания не найдена");
        }
    }
    if let Some(unknown) = dto
        .geo
        .iter()
        .find(|code| GEO_REGIONS.iter().all(|(known, _)| *known != code.as_str()))
    {
        errors.set("geo", format!("Неизвестный регион: {}", unknown));
    }
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }
    Ok(())
}

/// Создание группы объявлений
pub async fn create(dto: AdGroupDto) -> anyhow::Result<AdGroupId> {
    validate(&dto).await?;

    let mut aggregate = AdGroup::new_for_insert(repository::next_code()?, &dto)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate)?;
    tracing::info!(
        "Ad group created: {} {} (campaign {})",
        aggregate.base.code,
        id,
        aggregate.campaign_id
    );
    Ok(id)
}

/// Обновление группы объявлений
pub async fn update(dto: AdGroupDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| AdGroupId::from_string(s).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid ID".into()))?;

    validate(&dto).await?;

    let mut aggregate = repository::get_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("ad group {}", id)))?;
    aggregate.update(&dto)?;
    aggregate.before_write();
    repository::update(&aggregate)?;
    Ok(())
}

pub async fn delete(id: AdGroupId) -> anyhow::Result<bool> {
    repository::soft_delete(id)
}

pub async fn get_by_id(id: AdGroupId) -> anyhow::Result<Option<AdGroup>> {
    repository::get_by_id(id)
}

pub async fn list(campaign_id: Option<CampaignId>) -> anyhow::Result<Vec<AdGroup>> {
    repository::list(campaign_id)
}

pub async fn set_status(id: AdGroupId, status: EntityStatus) -> anyhow::Result<Option<AdGroup>> {
    repository::modify(id, |g| {
        g.status = status;
        g.before_write();
        g.clone()
    })
}

pub async fn set_budget(id: AdGroupId, raw_budget: &str) -> anyhow::Result<Option<AdGroup>> {
    let budget = parse_positive_number(raw_budget)
        .ok_or_else(|| ServiceError::field("budget", MSG_POSITIVE_NUMBER))?;
    repository::modify(id, |g| {
        g.budget = budget;
        g.before_write();
        g.clone()
    })
}

#[derive(Serialize)]
struct AdGroupCsvRow {
    #[serde(rename = "Код")]
    code: String,
    #[serde(rename = "Наименование")]
    name: String,
    #[serde(rename = "Начало")]
    start_date: String,
    #[serde(rename = "Окончание")]
    end_date: String,
    #[serde(rename = "Бюджет")]
    budget: String,
    #[serde(rename = "CPM")]
    cpm: String,
    #[serde(rename = "Регионы")]
    geo: String,
    #[serde(rename = "Устройства")]
    devices: String,
    #[serde(rename = "Статус")]
    status: &'static str,
}

pub async fn export_csv(campaign_id: Option<CampaignId>) -> anyhow::Result<String> {
    let rows: Vec<AdGroupCsvRow> = repository::list(campaign_id)?
        .into_iter()
        .map(|g| AdGroupCsvRow {
            code: g.base.code,
            name: g.base.description,
            start_date: g.start_date.format("%d.%m.%Y").to_string(),
            end_date: g.end_date.format("%d.%m.%Y").to_string(),
            budget: format_amount(g.budget),
            cpm: format_amount(g.cpm),
            geo: g.geo.into_iter().collect::<Vec<_>>().join(", "),
            devices: g
                .devices
                .iter()
                .map(|d| d.label())
                .collect::<Vec<_>>()
                .join(", "),
            status: g.status.label(),
        })
        .collect();
    to_csv(&rows)
}

#[cfg(test)]
pub(crate) fn sample_dto(campaign_id: CampaignId, name: &str) -> AdGroupDto {
    let mut dto = AdGroupDto::for_campaign(Some(campaign_id.as_string()));
    dto.name = name.into();
    dto.start_date = "2025-03-01".into();
    dto.end_date = "2025-03-15".into();
    dto.budget = "30000".into();
    dto.cpm = "120".into();
    dto.geo.insert("RU-MOW".into());
    dto
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_advertiser;

    async fn campaign() -> CampaignId {
        let advertiser = a001_advertiser::service::create(
            a001_advertiser::service::sample_dto("Группы теста"),
        )
        .await
        .unwrap();
        a002_campaign::service::create(a002_campaign::service::sample_dto(advertiser, "Кампания"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_under_campaign() {
        let campaign_id = campaign().await;
        let id = create(sample_dto(campaign_id, "Москва")).await.unwrap();
        let groups = list(Some(campaign_id)).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].base.id, id);
        assert!(groups[0].geo.contains("RU-MOW"));
    }

    #[tokio::test]
    async fn test_unknown_region_rejected() {
        let mut dto = sample_dto(campaign().await, "Марс");
        dto.geo.insert("MARS-01".into());
        match ServiceError::from(create(dto).await.unwrap_err()) {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.get("geo"), Some("Неизвестный регион: MARS-01"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_budget_and_status() {
        let id = create(sample_dto(campaign().await, "Бюджет")).await.unwrap();
        assert_eq!(set_budget(id, "45000,5").await.unwrap().unwrap().budget, 45000.5);
        assert!(set_budget(id, "ноль").await.is_err());
        let paused = set_status(id, EntityStatus::Paused).await.unwrap().unwrap();
        assert_eq!(paused.status, EntityStatus::Paused);
    }
}
