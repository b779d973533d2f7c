use super::repository;
use crate::domain::a003_ad_group;
use crate::shared::error::ServiceError;
use crate::shared::export::to_csv;
use crate::shared::format::format_amount;
use contracts::domain::a003_ad_group::AdGroupId;
use contracts::domain::a004_creative::{placement_label, Creative, CreativeDto, CreativeId};
use contracts::domain::common::{AggregateId, EntityStatus};
use contracts::shared::validation::FormValidator;
use serde::Serialize;

async fn validate(dto: &CreativeDto) -> anyhow::Result<()> {
    let mut errors = dto.validate();
    if !errors.contains("ad_group_id") {
        let exists = match AdGroupId::from_string(&dto.ad_group_id).ok() {
            Some(id) => a003_ad_group::service::get_by_id(id).await?.is_some(),
            None => false,
        };
        if !exists {
            errors.set("ad_group_id", "Группа объявлений не найдена");
        }
    }
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }
    Ok(())
}

/// Создание креатива
pub async fn create(dto: CreativeDto) -> anyhow::Result<CreativeId> {
    validate(&dto).await?;

    let mut aggregate = Creative::new_for_insert(repository::next_code()?, &dto)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate)?;
    tracing::info!(
        "Creative created: {} {} ({:?}, ad group {})",
        aggregate.base.code,
        id,
        aggregate.format(),
        aggregate.ad_group_id
    );
    Ok(id)
}

/// Обновление креатива
pub async fn update(dto: CreativeDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| CreativeId::from_string(s).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid ID".into()))?;

    validate(&dto).await?;

    let mut aggregate = repository::get_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("creative {}", id)))?;
    aggregate.update(&dto)?;
    aggregate.before_write();
    repository::update(&aggregate)?;
    Ok(())
}

pub async fn delete(id: CreativeId) -> anyhow::Result<bool> {
    repository::soft_delete(id)
}

pub async fn get_by_id(id: CreativeId) -> anyhow::Result<Option<Creative>> {
    repository::get_by_id(id)
}

pub async fn list(ad_group_id: Option<AdGroupId>) -> anyhow::Result<Vec<Creative>> {
    repository::list(ad_group_id)
}

pub async fn set_status(id: CreativeId, status: EntityStatus) -> anyhow::Result<Option<Creative>> {
    repository::modify(id, |c| {
        c.status = status;
        c.before_write();
        c.clone()
    })
}

#[derive(Serialize)]
struct CreativeCsvRow {
    #[serde(rename = "Код")]
    code: String,
    #[serde(rename = "Наименование")]
    name: String,
    #[serde(rename = "Площадка")]
    placement: String,
    #[serde(rename = "Заголовок")]
    title: String,
    #[serde(rename = "Ссылка")]
    url: String,
    #[serde(rename = "Бюджет")]
    budget: String,
    #[serde(rename = "CPM")]
    cpm: String,
    #[serde(rename = "Статус")]
    status: &'static str,
}

pub async fn export_csv(ad_group_id: Option<AdGroupId>) -> anyhow::Result<String> {
    let rows: Vec<CreativeCsvRow> = repository::list(ad_group_id)?
        .into_iter()
        .map(|c| CreativeCsvRow {
            code: c.base.code,
            name: c.base.description,
            placement: placement_label(&c.placement).to_string(),
            title: c.title,
            url: c.url,
            budget: format_amount(c.budget),
            cpm: format_amount(c.cpm),
            status: c.status.label(),
        })
        .collect();
    to_csv(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_advertiser, a002_campaign};
    use contracts::domain::a004_creative::CreativeFormat;

    async fn ad_group() -> AdGroupId {
        let advertiser = a001_advertiser::service::create(
            a001_advertiser::service::sample_dto("Креативы теста"),
        )
        .await
        .unwrap();
        let campaign = a002_campaign::service::create(a002_campaign::service::sample_dto(
            advertiser, "Кампания",
        ))
        .await
        .unwrap();
        a003_ad_group::service::create(a003_ad_group::service::sample_dto(campaign, "Группа"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_big_creative_without_text_fields() {
        let group = ad_group().await;
        let dto = CreativeDto {
            ad_group_id: group.as_string(),
            placement: "4_big".into(),
            url: "https://example.com".into(),
            budget: "1000".into(),
            cpm: "50".into(),
            ..Default::default()
        };
        let id = create(dto).await.unwrap();
        let creative = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(creative.format(), CreativeFormat::Big);
        assert_eq!(creative.base.description, "Полноэкранный (большой формат)");
        assert!(list(Some(group)).await.unwrap().iter().any(|c| c.base.id == id));
    }

    #[tokio::test]
    async fn test_unknown_ad_group_rejected() {
        let dto = CreativeDto {
            ad_group_id: AdGroupId::new_v4().as_string(),
            placement: "4_big".into(),
            url: "https://example.com".into(),
            budget: "1000".into(),
            cpm: "50".into(),
            ..Default::default()
        };
        match ServiceError::from(create(dto).await.unwrap_err()) {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains("ad_group_id"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
