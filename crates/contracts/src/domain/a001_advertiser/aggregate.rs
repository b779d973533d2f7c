use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EntityStatus,
};
use crate::shared::validation::{is_digits_of_len, FieldCheck, FieldErrors, FormValidator};
use crate::uuid_aggregate_id;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

uuid_aggregate_id!(
    /// Уникальный идентификатор рекламодателя
    AdvertiserId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Рекламодатель (юридическое лицо, ИП или агентство)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertiser {
    #[serde(flatten)]
    pub base: BaseAggregate<AdvertiserId>,

    #[serde(rename = "legalName")]
    pub legal_name: String,
    pub inn: String,
    pub kpp: String,
    pub ogrn: String,
    #[serde(rename = "legalAddress")]
    pub legal_address: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    #[serde(rename = "contactPhone")]
    pub contact_phone: String,
    pub website: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub bik: String,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "isAgency")]
    pub is_agency: bool,
    pub status: EntityStatus,
}

impl Advertiser {
    /// Создать нового рекламодателя из проверенной формы
    pub fn new_for_insert(code: String, dto: &AdvertiserDto) -> Self {
        let mut aggregate = Self {
            base: BaseAggregate::new(AdvertiserId::new_v4(), code, String::new()),
            legal_name: String::new(),
            inn: String::new(),
            kpp: String::new(),
            ogrn: String::new(),
            legal_address: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            website: String::new(),
            bank_name: String::new(),
            bik: String::new(),
            account_number: String::new(),
            is_agency: false,
            status: EntityStatus::Draft,
        };
        aggregate.update(dto);
        aggregate
    }

    /// Обновить данные из DTO (значения обрезаются по краям)
    pub fn update(&mut self, dto: &AdvertiserDto) {
        self.base.description = dto.name.trim().to_string();
        self.legal_name = dto.legal_name.trim().to_string();
        self.inn = dto.inn.trim().to_string();
        self.kpp = dto.kpp.trim().to_string();
        self.ogrn = dto.ogrn.trim().to_string();
        self.legal_address = dto.legal_address.trim().to_string();
        self.contact_email = dto.contact_email.trim().to_string();
        self.contact_phone = dto.contact_phone.trim().to_string();
        self.website = dto.website.trim().to_string();
        self.bank_name = dto.bank_name.trim().to_string();
        self.bik = dto.bik.trim().to_string();
        self.account_number = dto.account_number.trim().to_string();
        self.is_agency = dto.is_agency;
        self.status = dto.status;
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Advertiser {
    type Id = AdvertiserId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn collection_name() -> &'static str {
        "advertisers"
    }

    fn code_prefix() -> &'static str {
        "ADV"
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Форма рекламодателя (сырые значения полей ввода)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvertiserDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "legalName")]
    pub legal_name: String,
    pub inn: String,
    pub kpp: String,
    pub ogrn: String,
    #[serde(rename = "legalAddress")]
    pub legal_address: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    #[serde(rename = "contactPhone")]
    pub contact_phone: String,
    pub website: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub bik: String,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "isAgency")]
    pub is_agency: bool,
    pub status: EntityStatus,
}

impl From<Advertiser> for AdvertiserDto {
    fn from(a: Advertiser) -> Self {
        Self {
            id: Some(a.base.id.as_string()),
            name: a.base.description,
            legal_name: a.legal_name,
            inn: a.inn,
            kpp: a.kpp,
            ogrn: a.ogrn,
            legal_address: a.legal_address,
            contact_email: a.contact_email,
            contact_phone: a.contact_phone,
            website: a.website,
            bank_name: a.bank_name,
            bik: a.bik,
            account_number: a.account_number,
            is_agency: a.is_agency,
            status: a.status,
        }
    }
}

impl FormValidator for AdvertiserDto {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        FieldCheck::new(&mut errors, "name", &self.name)
            .required()
            .max_len(255);
        FieldCheck::new(&mut errors, "legal_name", &self.legal_name)
            .required()
            .max_len(255);
        FieldCheck::new(&mut errors, "inn", &self.inn)
            .required()
            .digits(&[10, 12], "ИНН должен содержать 10 или 12 цифр");

        // КПП есть только у юридических лиц (ИНН из 10 цифр)
        let is_legal_entity = is_digits_of_len(self.inn.trim(), &[10]);
        let kpp = FieldCheck::new(&mut errors, "kpp", &self.kpp);
        let kpp = if is_legal_entity {
            kpp.required_with("КПП обязателен для юридических лиц")
        } else {
            kpp.optional()
        };
        kpp.digits(&[9], "КПП должен содержать 9 цифр");

        FieldCheck::new(&mut errors, "ogrn", &self.ogrn)
            .required()
            .digits(&[13, 15], "ОГРН должен содержать 13 или 15 цифр");
        FieldCheck::new(&mut errors, "legal_address", &self.legal_address)
            .required()
            .max_len(500);
        FieldCheck::new(&mut errors, "contact_email", &self.contact_email)
            .required()
            .email("Некорректный email");
        FieldCheck::new(&mut errors, "contact_phone", &self.contact_phone)
            .optional()
            .phone("Некорректный номер телефона");
        FieldCheck::new(&mut errors, "website", &self.website)
            .optional()
            .url();
        FieldCheck::new(&mut errors, "bank_name", &self.bank_name)
            .required()
            .max_len(255);
        FieldCheck::new(&mut errors, "bik", &self.bik)
            .required()
            .digits(&[9], "БИК должен содержать 9 цифр");
        FieldCheck::new(&mut errors, "account_number", &self.account_number)
            .required()
            .digits(&[20], "Расчётный счёт должен содержать 20 цифр");

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::MSG_REQUIRED;

    fn valid_dto() -> AdvertiserDto {
        AdvertiserDto {
            id: None,
            name: "Ромашка".into(),
            legal_name: "ООО \"Ромашка\"".into(),
            inn: "7701234567".into(),
            kpp: "770101001".into(),
            ogrn: "1027700132195".into(),
            legal_address: "г. Москва, ул. Тверская, д. 1".into(),
            contact_email: "ads@romashka.ru".into(),
            contact_phone: "+7 (495) 123-45-67".into(),
            website: "https://romashka.ru".into(),
            bank_name: "ПАО Сбербанк".into(),
            bik: "044525225".into(),
            account_number: "40702810938000012345".into(),
            is_agency: false,
            status: EntityStatus::Active,
        }
    }

    #[test]
    fn test_valid_advertiser_has_no_errors() {
        assert!(valid_dto().validate().is_empty());
    }

    #[test]
    fn test_inn_length() {
        let mut dto = valid_dto();
        dto.inn = "12345".into();
        let errors = dto.validate();
        assert_eq!(errors.get("inn"), Some("ИНН должен содержать 10 или 12 цифр"));

        dto.inn = "1234567890".into();
        assert!(!dto.validate().contains("inn"));
    }

    #[test]
    fn test_whitespace_only_required_field() {
        let mut dto = valid_dto();
        dto.legal_name = "   ".into();
        let errors = dto.validate();
        assert_eq!(errors.get("legal_name"), Some(MSG_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_kpp_required_only_for_legal_entity() {
        let mut dto = valid_dto();
        dto.kpp = String::new();
        assert_eq!(
            dto.validate().get("kpp"),
            Some("КПП обязателен для юридических лиц")
        );

        // ИП: ИНН из 12 цифр, ОГРНИП из 15, КПП не нужен
        dto.inn = "771234567890".into();
        dto.ogrn = "304500116000157".into();
        assert!(dto.validate().is_empty());

        dto.kpp = "12".into();
        assert_eq!(dto.validate().get("kpp"), Some("КПП должен содержать 9 цифр"));
    }

    #[test]
    fn test_bank_details_patterns() {
        let mut dto = valid_dto();
        dto.bik = "04452522".into();
        dto.account_number = "4070281093800001234x".into();
        let errors = dto.validate();
        assert_eq!(errors.get("bik"), Some("БИК должен содержать 9 цифр"));
        assert_eq!(
            errors.get("account_number"),
            Some("Расчётный счёт должен содержать 20 цифр")
        );
    }

    #[test]
    fn test_optional_contacts() {
        let mut dto = valid_dto();
        dto.contact_phone = String::new();
        dto.website = String::new();
        assert!(dto.validate().is_empty());

        dto.website = "romashka".into();
        dto.contact_email = "ads@".into();
        let errors = dto.validate();
        assert!(errors.contains("website"));
        assert_eq!(errors.get("contact_email"), Some("Некорректный email"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut dto = valid_dto();
        dto.inn = "abc".into();
        dto.name = String::new();
        assert_eq!(dto.validate(), dto.validate());
    }

    #[test]
    fn test_update_trims_values() {
        let mut dto = valid_dto();
        dto.name = "  Ромашка  ".into();
        let a = Advertiser::new_for_insert("ADV-0001".into(), &dto);
        assert_eq!(a.base.description, "Ромашка");
        assert_eq!(AdvertiserDto::from(a).name, "Ромашка");
    }
}
