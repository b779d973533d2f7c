use super::repository;
use crate::domain::a001_advertiser;
use crate::shared::error::ServiceError;
use crate::shared::export::to_csv;
use crate::shared::format::format_amount;
use contracts::domain::a001_advertiser::AdvertiserId;
use contracts::domain::a002_campaign::{campaign_goal_label, Campaign, CampaignDto, CampaignId};
use contracts::domain::common::{AggregateId, EntityStatus};
use contracts::shared::validation::{parse_positive_number, FormValidator, MSG_POSITIVE_NUMBER};
use serde::Serialize;

/// Проверка формы и наличия рекламодателя
async fn validate(dto: &CampaignDto) -> anyhow::Result<()> {
    let mut errors = dto.validate();
    if !errors.contains("advertiser_id") {
        let parent = AdvertiserId::from_string(&dto.advertiser_id).ok();
        let exists = match parent {
            Some(id) => a001_advertiser::service::get_by_id(id).await?.is_some(),
            None => false,
        };
        if !exists {
            errors.set("advertiser_id", "Рекламодатель не найден");
        }
    }
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }
    Ok(())
}

/// Создание кампании
pub async fn create(dto: CampaignDto) -> anyhow::Result<CampaignId> {
    validate(&dto).await?;

    let mut aggregate = Campaign::new_for_insert(repository::next_code()?, &dto)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate)?;
    tracing::info!(
        "Campaign created: {} {} (advertiser {})",
        aggregate.base.code,
        id,
        aggregate.advertiser_id
    );
    Ok(id)
}

/// Обновление кампании
pub async fn update(dto: CampaignDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| CampaignId::from_string(s).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid ID".into()))?;

    validate(&dto).await?;

    let mut aggregate = repository::get_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("campaign {}", id)))?;
    aggregate.update(&dto)?;
    aggregate.before_write();
    repository::update(&aggregate)?;
    Ok(())
}

pub async fn delete(id: CampaignId) -> anyhow::Result<bool> {
    repository::soft_delete(id)
}

pub async fn get_by_id(id: CampaignId) -> anyhow::Result<Option<Campaign>> {
    repository::get_by_id(id)
}

pub async fn list(advertiser_id: Option<AdvertiserId>) -> anyhow::Result<Vec<Campaign>> {
    repository::list(advertiser_id)
}

pub async fn set_status(id: CampaignId, status: EntityStatus) -> anyhow::Result<Option<Campaign>> {
    repository::modify(id, |c| {
        c.status = status;
        c.before_write();
        c.clone()
    })
}

/// Смена общего бюджета из списка кампаний
///
/// Бюджет должен быть положительным и не меньше дневного.
pub async fn set_budget(id: CampaignId, raw_budget: &str) -> anyhow::Result<Option<Campaign>> {
    let budget = parse_positive_number(raw_budget)
        .ok_or_else(|| ServiceError::field("budget", MSG_POSITIVE_NUMBER))?;

    let result = repository::modify(id, |c| {
        if c.daily_budget.is_some_and(|daily| daily > budget) {
            return Err(ServiceError::field(
                "budget",
                "Общий бюджет не может быть меньше дневного",
            ));
        }
        c.budget = budget;
        c.before_write();
        Ok(c.clone())
    })?;

    match result {
        Some(Ok(campaign)) => Ok(Some(campaign)),
        Some(Err(e)) => Err(e.into()),
        None => Ok(None),
    }
}

#[derive(Serialize)]
struct CampaignCsvRow {
    #[serde(rename = "Код")]
    code: String,
    #[serde(rename = "Наименование")]
    name: String,
    #[serde(rename = "Цель")]
    goal: String,
    #[serde(rename = "Начало")]
    start_date: String,
    #[serde(rename = "Окончание")]
    end_date: String,
    #[serde(rename = "Бюджет")]
    budget: String,
    #[serde(rename = "Дневной бюджет")]
    daily_budget: String,
    #[serde(rename = "Статус")]
    status: &'static str,
}

pub async fn export_csv(advertiser_id: Option<AdvertiserId>) -> anyhow::Result<String> {
    let rows: Vec<CampaignCsvRow> = repository::list(advertiser_id)?
        .into_iter()
        .map(|c| CampaignCsvRow {
            code: c.base.code,
            name: c.base.description,
            goal: campaign_goal_label(&c.goal).to_string(),
            start_date: c.start_date.format("%d.%m.%Y").to_string(),
            end_date: c.end_date.format("%d.%m.%Y").to_string(),
            budget: format_amount(c.budget),
            daily_budget: c.daily_budget.map(format_amount).unwrap_or_default(),
            status: c.status.label(),
        })
        .collect();
    to_csv(&rows)
}

#[cfg(test)]
pub(crate) fn sample_dto(advertiser_id: AdvertiserId, name: &str) -> CampaignDto {
    CampaignDto {
        id: None,
        advertiser_id: advertiser_id.as_string(),
        name: name.into(),
        goal: "traffic".into(),
        start_date: "2025-03-01".into(),
        end_date: "2025-03-31".into(),
        budget: "150000".into(),
        daily_budget: "5000".into(),
        frequency_limit: String::new(),
        click_limit: String::new(),
        status: EntityStatus::Draft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_advertiser::service::sample_dto as advertiser_dto;

    async fn advertiser() -> AdvertiserId {
        a001_advertiser::service::create(advertiser_dto("Кампании теста"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_filters_by_advertiser() {
        let first = advertiser().await;
        let second = advertiser().await;
        let a = create(sample_dto(first, "Первая")).await.unwrap();
        let b = create(sample_dto(second, "Вторая")).await.unwrap();

        let only_first = list(Some(first)).await.unwrap();
        assert!(only_first.iter().any(|c| c.base.id == a));
        assert!(only_first.iter().all(|c| c.base.id != b));

        let all = list(None).await.unwrap();
        assert!(all.iter().any(|c| c.base.id == a));
        assert!(all.iter().any(|c| c.base.id == b));
    }

    #[tokio::test]
    async fn test_unknown_advertiser_rejected() {
        let dto = sample_dto(AdvertiserId::new_v4(), "Сирота");
        match ServiceError::from(create(dto).await.unwrap_err()) {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.get("advertiser_id"), Some("Рекламодатель не найден"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_budget() {
        let id = create(sample_dto(advertiser().await, "Бюджет")).await.unwrap();

        let updated = set_budget(id, "200 000").await.unwrap().unwrap();
        assert_eq!(updated.budget, 200000.0);

        let err = ServiceError::from(set_budget(id, "-1").await.unwrap_err());
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = ServiceError::from(set_budget(id, "100").await.unwrap_err());
        match err {
            ServiceError::Validation(errors) => assert!(errors.contains("budget")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(get_by_id(id).await.unwrap().unwrap().budget, 200000.0);

        assert!(set_budget(CampaignId::new_v4(), "100").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_export_filtered() {
        let parent = advertiser().await;
        create(sample_dto(parent, "Экспортная")).await.unwrap();
        let csv = export_csv(Some(parent)).await.unwrap();
        assert!(csv.contains(";Экспортная;Трафик на сайт;01.03.2025;31.03.2025;150000,00;5000,00;Черновик"));
    }
}
