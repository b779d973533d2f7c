use crate::domain::a002_campaign::CampaignId;
use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EntityStatus,
};
use crate::shared::validation::{
    check_date_range, parse_date, parse_positive_integer, parse_positive_number, FieldCheck,
    FieldErrors, FormValidator,
};
use crate::uuid_aggregate_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

uuid_aggregate_id!(
    /// Уникальный идентификатор группы объявлений
    AdGroupId
);

/// Тип устройства для таргетинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
    SmartTv,
}

impl DeviceType {
    pub const ALL: [DeviceType; 4] = [
        DeviceType::Desktop,
        DeviceType::Mobile,
        DeviceType::Tablet,
        DeviceType::SmartTv,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "Компьютеры",
            DeviceType::Mobile => "Смартфоны",
            DeviceType::Tablet => "Планшеты",
            DeviceType::SmartTv => "Smart TV",
        }
    }
}

/// Регионы показа: (код, название)
pub const GEO_REGIONS: &[(&str, &str)] = &[
    ("RU-MOW", "Москва"),
    ("RU-SPE", "Санкт-Петербург"),
    ("RU-NVS", "Новосибирская область"),
    ("RU-SVE", "Свердловская область"),
    ("RU-TA", "Республика Татарстан"),
    ("RU-KDA", "Краснодарский край"),
];

/// Группа объявлений внутри кампании
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdGroup {
    #[serde(flatten)]
    pub base: BaseAggregate<AdGroupId>,

    #[serde(rename = "campaignId")]
    pub campaign_id: CampaignId,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    pub budget: f64,
    pub cpm: f64,
    #[serde(rename = "frequencyLimit")]
    pub frequency_limit: Option<u64>,
    #[serde(rename = "clickLimit")]
    pub click_limit: Option<u64>,
    pub geo: BTreeSet<String>,
    pub devices: BTreeSet<DeviceType>,
    pub status: EntityStatus,
}

impl AdGroup {
    /// Создать группу из формы. Форма должна пройти валидацию.
    pub fn new_for_insert(code: String, dto: &AdGroupDto) -> anyhow::Result<Self> {
        let campaign_id = CampaignId::from_string(&dto.campaign_id)
            .map_err(|e| anyhow::anyhow!("campaign_id: {}", e))?;
        let today = chrono::Utc::now().date_naive();
        let mut aggregate = Self {
            base: BaseAggregate::new(AdGroupId::new_v4(), code, String::new()),
            campaign_id,
            start_date: today,
            end_date: today,
            budget: 0.0,
            cpm: 0.0,
            frequency_limit: None,
            click_limit: None,
            geo: BTreeSet::new(),
            devices: BTreeSet::new(),
            status: EntityStatus::Draft,
        };
        aggregate.update(dto)?;
        Ok(aggregate)
    }

    pub fn update(&mut self, dto: &AdGroupDto) -> anyhow::Result<()> {
        self.campaign_id = CampaignId::from_string(&dto.campaign_id)
            .map_err(|e| anyhow::anyhow!("campaign_id: {}", e))?;
        self.base.description = dto.name.trim().to_string();
        self.start_date =
            parse_date(&dto.start_date).ok_or_else(|| anyhow::anyhow!("start_date"))?;
        self.end_date = parse_date(&dto.end_date).ok_or_else(|| anyhow::anyhow!("end_date"))?;
        self.budget =
            parse_positive_number(&dto.budget).ok_or_else(|| anyhow::anyhow!("budget"))?;
        self.cpm = parse_positive_number(&dto.cpm).ok_or_else(|| anyhow::anyhow!("cpm"))?;
        self.frequency_limit = parse_positive_integer(&dto.frequency_limit);
        self.click_limit = parse_positive_integer(&dto.click_limit);
        self.geo = dto.geo.clone();
        self.devices = dto.devices.clone();
        self.status = dto.status;
        Ok(())
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for AdGroup {
    type Id = AdGroupId;

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
        "ad_groups"
    }

    fn code_prefix() -> &'static str {
        "GRP"
    }
}

/// Форма группы объявлений
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdGroupDto {
    pub id: Option<String>,
    #[serde(rename = "campaignId")]
    pub campaign_id: String,
    pub name: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub budget: String,
    pub cpm: String,
    #[serde(rename = "frequencyLimit")]
    pub frequency_limit: String,
    #[serde(rename = "clickLimit")]
    pub click_limit: String,
    pub geo: BTreeSet<String>,
    pub devices: BTreeSet<DeviceType>,
    pub status: EntityStatus,
}

impl AdGroupDto {
    pub fn for_campaign(campaign_id: Option<String>) -> Self {
        Self {
            campaign_id: campaign_id.unwrap_or_default(),
            devices: DeviceType::ALL.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn toggle_geo(&mut self, code: &str) {
        if !self.geo.remove(code) {
            self.geo.insert(code.to_string());
        }
    }

    pub fn toggle_device(&mut self, device: DeviceType) {
        if !self.devices.remove(&device) {
            self.devices.insert(device);
        }
    }
}

impl From<AdGroup> for AdGroupDto {
    fn from(g: AdGroup) -> Self {
        Self {
            id: Some(g.base.id.as_string()),
            campaign_id: g.campaign_id.as_string(),
            name: g.base.description,
            start_date: g.start_date.format("%Y-%m-%d").to_string(),
            end_date: g.end_date.format("%Y-%m-%d").to_string(),
            budget: g.budget.to_string(),
            cpm: g.cpm.to_string(),
            frequency_limit: g.frequency_limit.map(|v| v.to_string()).unwrap_or_default(),
            click_limit: g.click_limit.map(|v| v.to_string()).unwrap_or_default(),
            geo: g.geo,
            devices: g.devices,
            status: g.status,
        }
    }
}

impl FormValidator for AdGroupDto {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        FieldCheck::new(&mut errors, "campaign_id", &self.campaign_id)
            .required_with("Выберите кампанию");
        FieldCheck::new(&mut errors, "name", &self.name)
            .required()
            .max_len(255);
        FieldCheck::new(&mut errors, "start_date", &self.start_date)
            .required()
            .date();
        FieldCheck::new(&mut errors, "end_date", &self.end_date)
            .required()
            .date();
        FieldCheck::new(&mut errors, "budget", &self.budget)
            .required()
            .positive_number();
        FieldCheck::new(&mut errors, "cpm", &self.cpm)
            .required()
            .positive_number();
        FieldCheck::new(&mut errors, "frequency_limit", &self.frequency_limit)
            .optional()
            .positive_integer();
        FieldCheck::new(&mut errors, "click_limit", &self.click_limit)
            .optional()
            .positive_integer();

        if self.geo.is_empty() {
            errors.set("geo", "Выберите хотя бы один регион");
        }
        if self.devices.is_empty() {
            errors.set("devices", "Выберите хотя бы один тип устройств");
        }

        check_date_range(&mut errors, &self.start_date, "end_date", &self.end_date);

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{MSG_DATE, MSG_DATE_RANGE, MSG_REQUIRED};

    fn valid_dto() -> AdGroupDto {
        let mut dto = AdGroupDto::for_campaign(Some(CampaignId::new_v4().as_string()));
        dto.name = "Москва, смартфоны".into();
        dto.start_date = "2025-04-01".into();
        dto.end_date = "2025-04-15".into();
        dto.budget = "30000".into();
        dto.cpm = "120,50".into();
        dto.geo.insert("RU-MOW".into());
        dto
    }

    #[test]
    fn test_valid_ad_group() {
        assert!(valid_dto().validate().is_empty());
    }

    #[test]
    fn test_empty_sets_are_reported() {
        let mut dto = valid_dto();
        dto.toggle_geo("RU-MOW");
        dto.devices.clear();
        let errors = dto.validate();
        assert_eq!(errors.get("geo"), Some("Выберите хотя бы один регион"));
        assert_eq!(errors.get("devices"), Some("Выберите хотя бы один тип устройств"));
    }

    #[test]
    fn test_date_rules() {
        let mut dto = valid_dto();
        dto.start_date = "2025-04-15".into();
        assert_eq!(dto.validate().get("end_date"), Some(MSG_DATE_RANGE));

        dto.end_date = "15.04.2025".into();
        assert_eq!(dto.validate().get("end_date"), Some(MSG_DATE));

        dto.end_date = " ".into();
        assert_eq!(dto.validate().get("end_date"), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_toggle_device() {
        let mut dto = AdGroupDto::default();
        dto.toggle_device(DeviceType::Mobile);
        assert!(dto.devices.contains(&DeviceType::Mobile));
        dto.toggle_device(DeviceType::Mobile);
        assert!(dto.devices.is_empty());
    }

    #[test]
    fn test_aggregate_parses_decimal_comma() {
        let group = AdGroup::new_for_insert("GRP-0001".into(), &valid_dto()).unwrap();
        assert_eq!(group.cpm, 120.5);
        assert_eq!(group.devices.len(), DeviceType::ALL.len());
    }
}
