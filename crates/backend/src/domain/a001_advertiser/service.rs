use super::repository;
use crate::shared::error::ServiceError;
use crate::shared::export::to_csv;
use contracts::domain::a001_advertiser::{Advertiser, AdvertiserDto, AdvertiserId};
use contracts::domain::common::{AggregateId, EntityStatus};
use contracts::shared::validation::FormValidator;
use serde::Serialize;

/// Создание нового рекламодателя
pub async fn create(dto: AdvertiserDto) -> anyhow::Result<AdvertiserId> {
    let errors = dto.validate();
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }

    let mut aggregate = Advertiser::new_for_insert(repository::next_code()?, &dto);
    aggregate.before_write();

    let id = repository::insert(&aggregate)?;
    tracing::info!("Advertiser created: {} {}", aggregate.base.code, id);
    Ok(id)
}

/// Обновление существующего рекламодателя
pub async fn update(dto: AdvertiserDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| AdvertiserId::from_string(s).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid ID".into()))?;

    let errors = dto.validate();
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }

    let mut aggregate = repository::get_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("advertiser {}", id)))?;
    aggregate.update(&dto);
    aggregate.before_write();
    repository::update(&aggregate)?;
    Ok(())
}

/// Мягкое удаление рекламодателя
pub async fn delete(id: AdvertiserId) -> anyhow::Result<bool> {
    repository::soft_delete(id)
}

pub async fn get_by_id(id: AdvertiserId) -> anyhow::Result<Option<Advertiser>> {
    repository::get_by_id(id)
}

pub async fn list_all() -> anyhow::Result<Vec<Advertiser>> {
    repository::list_all()
}

/// Сменить статус; `None`, если рекламодателя нет
pub async fn set_status(id: AdvertiserId, status: EntityStatus) -> anyhow::Result<Option<Advertiser>> {
    repository::modify(id, |a| {
        a.status = status;
        a.before_write();
        a.clone()
    })
}

#[derive(Serialize)]
struct AdvertiserCsvRow {
    #[serde(rename = "Код")]
    code: String,
    #[serde(rename = "Наименование")]
    name: String,
    #[serde(rename = "Юридическое наименование")]
    legal_name: String,
    #[serde(rename = "ИНН")]
    inn: String,
    #[serde(rename = "КПП")]
    kpp: String,
    #[serde(rename = "Email")]
    contact_email: String,
    #[serde(rename = "Агентство")]
    is_agency: &'static str,
    #[serde(rename = "Статус")]
    status: &'static str,
}

/// Выгрузка списка рекламодателей в CSV
pub async fn export_csv() -> anyhow::Result<String> {
    let rows: Vec<AdvertiserCsvRow> = repository::list_all()?
        .into_iter()
        .map(|a| AdvertiserCsvRow {
            code: a.base.code,
            name: a.base.description,
            legal_name: a.legal_name,
            inn: a.inn,
            kpp: a.kpp,
            contact_email: a.contact_email,
            is_agency: if a.is_agency { "да" } else { "нет" },
            status: a.status.label(),
        })
        .collect();
    to_csv(&rows)
}

#[cfg(test)]
pub(crate) fn sample_dto(name: &str) -> AdvertiserDto {
    AdvertiserDto {
        id: None,
        name: name.into(),
        legal_name: format!("ООО \"{}\"", name),
        inn: "7701234567".into(),
        kpp: "770101001".into(),
        ogrn: "1027700132195".into(),
        legal_address: "г. Москва, ул. Тверская, д. 1".into(),
        contact_email: "ads@example.ru".into(),
        contact_phone: String::new(),
        website: String::new(),
        bank_name: "ПАО Сбербанк".into(),
        bik: "044525225".into(),
        account_number: "40702810938000012345".into(),
        is_agency: false,
        status: EntityStatus::Draft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_update() {
        let id = create(sample_dto("Тест создания")).await.unwrap();
        let created = get_by_id(id).await.unwrap().unwrap();
        assert!(created.base.code.starts_with("ADV-"));
        assert_eq!(created.base.metadata.version, 1);

        let mut dto = AdvertiserDto::from(created);
        dto.name = "Тест обновления".into();
        update(dto).await.unwrap();
        let updated = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(updated.base.description, "Тест обновления");
        assert_eq!(updated.base.metadata.version, 2);
    }

    #[tokio::test]
    async fn test_invalid_dto_is_validation_error() {
        let mut dto = sample_dto("Неверный ИНН");
        dto.inn = "12345".into();
        let err = ServiceError::from(create(dto).await.unwrap_err());
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.get("inn"), Some("ИНН должен содержать 10 или 12 цифр"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let mut dto = sample_dto("Призрак");
        dto.id = Some(AdvertiserId::new_v4().as_string());
        let err = ServiceError::from(update(dto).await.unwrap_err());
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_status_and_delete() {
        let id = create(sample_dto("Статусы")).await.unwrap();
        let a = set_status(id, EntityStatus::Active).await.unwrap().unwrap();
        assert_eq!(a.status, EntityStatus::Active);

        assert!(delete(id).await.unwrap());
        assert!(get_by_id(id).await.unwrap().is_none());
        assert!(set_status(id, EntityStatus::Paused).await.unwrap().is_none());
        assert!(list_all().await.unwrap().iter().all(|a| a.base.id != id));
    }

    #[tokio::test]
    async fn test_export_contains_created() {
        create(sample_dto("Выгрузка")).await.unwrap();
        let csv = export_csv().await.unwrap();
        assert!(csv.starts_with("\u{FEFF}Код;Наименование"));
        assert!(csv.contains(";Выгрузка;"));
    }
}
