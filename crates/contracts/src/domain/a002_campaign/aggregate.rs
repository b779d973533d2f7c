use crate::domain::a001_advertiser::AdvertiserId;
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

uuid_aggregate_id!(
    /// Уникальный идентификатор рекламной кампании
    CampaignId
);

/// Цели кампании: (код, подпись)
pub const CAMPAIGN_GOALS: &[(&str, &str)] = &[
    ("awareness", "Охват и узнаваемость"),
    ("traffic", "Трафик на сайт"),
    ("conversions", "Конверсии"),
    ("app_installs", "Установки приложения"),
];

pub fn campaign_goal_label(code: &str) -> &str {
    CAMPAIGN_GOALS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Рекламная кампания рекламодателя
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub base: BaseAggregate<CampaignId>,

    #[serde(rename = "advertiserId")]
    pub advertiser_id: AdvertiserId,
    pub goal: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    pub budget: f64,
    #[serde(rename = "dailyBudget")]
    pub daily_budget: Option<f64>,
    #[serde(rename = "frequencyLimit")]
    pub frequency_limit: Option<u64>,
    #[serde(rename = "clickLimit")]
    pub click_limit: Option<u64>,
    pub status: EntityStatus,
}

impl Campaign {
    /// Создать кампанию из формы. Форма должна пройти валидацию.
    pub fn new_for_insert(code: String, dto: &CampaignDto) -> anyhow::Result<Self> {
        let advertiser_id = AdvertiserId::from_string(&dto.advertiser_id)
            .map_err(|e| anyhow::anyhow!("advertiser_id: {}", e))?;
        let today = chrono::Utc::now().date_naive();
        let mut aggregate = Self {
            base: BaseAggregate::new(CampaignId::new_v4(), code, String::new()),
            advertiser_id,
            goal: String::new(),
            start_date: today,
            end_date: today,
            budget: 0.0,
            daily_budget: None,
            frequency_limit: None,
            click_limit: None,
            status: EntityStatus::Draft,
        };
        aggregate.update(dto)?;
        Ok(aggregate)
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CampaignDto) -> anyhow::Result<()> {
        self.advertiser_id = AdvertiserId::from_string(&dto.advertiser_id)
            .map_err(|e| anyhow::anyhow!("advertiser_id: {}", e))?;
        self.base.description = dto.name.trim().to_string();
        self.goal = dto.goal.trim().to_string();
        self.start_date =
            parse_date(&dto.start_date).ok_or_else(|| anyhow::anyhow!("start_date"))?;
        self.end_date = parse_date(&dto.end_date).ok_or_else(|| anyhow::anyhow!("end_date"))?;
        self.budget =
            parse_positive_number(&dto.budget).ok_or_else(|| anyhow::anyhow!("budget"))?;
        self.daily_budget = parse_positive_number(&dto.daily_budget);
        self.frequency_limit = parse_positive_integer(&dto.frequency_limit);
        self.click_limit = parse_positive_integer(&dto.click_limit);
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

impl AggregateRoot for Campaign {
    type Id = CampaignId;

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
        "campaigns"
    }

    fn code_prefix() -> &'static str {
        "CMP"
    }
}

/// Форма кампании
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignDto {
    pub id: Option<String>,
    #[serde(rename = "advertiserId")]
    pub advertiser_id: String,
    pub name: String,
    pub goal: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub budget: String,
    #[serde(rename = "dailyBudget")]
    pub daily_budget: String,
    #[serde(rename = "frequencyLimit")]
    pub frequency_limit: String,
    #[serde(rename = "clickLimit")]
    pub click_limit: String,
    pub status: EntityStatus,
}

impl CampaignDto {
    /// Пустая форма новой кампании внутри рекламодателя
    pub fn for_advertiser(advertiser_id: Option<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.unwrap_or_default(),
            goal: CAMPAIGN_GOALS[0].0.to_string(),
            ..Default::default()
        }
    }
}

impl From<Campaign> for CampaignDto {
    fn from(c: Campaign) -> Self {
        Self {
            id: Some(c.base.id.as_string()),
            advertiser_id: c.advertiser_id.as_string(),
            name: c.base.description,
            goal: c.goal,
            start_date: c.start_date.format("%Y-%m-%d").to_string(),
            end_date: c.end_date.format("%Y-%m-%d").to_string(),
            budget: c.budget.to_string(),
            daily_budget: c.daily_budget.map(|v| v.to_string()).unwrap_or_default(),
            frequency_limit: c.frequency_limit.map(|v| v.to_string()).unwrap_or_default(),
            click_limit: c.click_limit.map(|v| v.to_string()).unwrap_or_default(),
            status: c.status,
        }
    }
}

impl FormValidator for CampaignDto {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        FieldCheck::new(&mut errors, "advertiser_id", &self.advertiser_id)
            .required_with("Выберите рекламодателя");
        FieldCheck::new(&mut errors, "name", &self.name)
            .required()
            .max_len(255);
        FieldCheck::new(&mut errors, "goal", &self.goal)
            .required_with("Выберите цель кампании")
            .rule(
                |v| CAMPAIGN_GOALS.iter().any(|(c, _)| *c == v.trim()),
                "Выберите цель кампании",
            );
        FieldCheck::new(&mut errors, "start_date", &self.start_date)
            .required()
            .date();
        FieldCheck::new(&mut errors, "end_date", &self.end_date)
            .required()
            .date();
        FieldCheck::new(&mut errors, "budget", &self.budget)
            .required()
            .positive_number();
        FieldCheck::new(&mut errors, "daily_budget", &self.daily_budget)
            .optional()
            .positive_number();
        FieldCheck::new(&mut errors, "frequency_limit", &self.frequency_limit)
            .optional()
            .positive_integer();
        FieldCheck::new(&mut errors, "click_limit", &self.click_limit)
            .optional()
            .positive_integer();

        check_date_range(&mut errors, &self.start_date, "end_date", &self.end_date);

        if let (Some(daily), Some(total)) = (
            parse_positive_number(&self.daily_budget),
            parse_positive_number(&self.budget),
        ) {
            if daily > total {
                errors.set(
                    "daily_budget",
                    "Дневной бюджет не может превышать общий бюджет",
                );
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{MSG_DATE_RANGE, MSG_POSITIVE_INTEGER, MSG_POSITIVE_NUMBER};

    fn valid_dto() -> CampaignDto {
        CampaignDto {
            id: None,
            advertiser_id: AdvertiserId::new_v4().as_string(),
            name: "Весенняя распродажа".into(),
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

    #[test]
    fn test_valid_campaign() {
        assert!(valid_dto().validate().is_empty());
    }

    #[test]
    fn test_end_date_not_after_start() {
        let mut dto = valid_dto();
        dto.end_date = dto.start_date.clone();
        assert_eq!(dto.validate().get("end_date"), Some(MSG_DATE_RANGE));

        dto.end_date = "2025-02-01".into();
        let errors = dto.validate();
        assert_eq!(errors.get("end_date"), Some(MSG_DATE_RANGE));
        assert!(!errors.contains("start_date"));
    }

    #[test]
    fn test_date_range_independent_of_other_fields() {
        let mut dto = CampaignDto {
            start_date: "2025-05-10".into(),
            end_date: "2025-05-11".into(),
            ..Default::default()
        };
        assert!(!dto.validate().contains("end_date"));

        dto.end_date = "2025-05-09".into();
        assert_eq!(dto.validate().get("end_date"), Some(MSG_DATE_RANGE));
    }

    #[test]
    fn test_budget_must_be_positive_number() {
        let mut dto = valid_dto();
        dto.budget = "-10".into();
        assert_eq!(dto.validate().get("budget"), Some(MSG_POSITIVE_NUMBER));

        dto.budget = "сто".into();
        assert_eq!(dto.validate().get("budget"), Some(MSG_POSITIVE_NUMBER));
    }

    #[test]
    fn test_optional_limits() {
        let mut dto = valid_dto();
        dto.frequency_limit = "3".into();
        dto.click_limit = String::new();
        assert!(dto.validate().is_empty());

        dto.click_limit = "0".into();
        assert_eq!(dto.validate().get("click_limit"), Some(MSG_POSITIVE_INTEGER));
    }

    #[test]
    fn test_daily_budget_cannot_exceed_total() {
        let mut dto = valid_dto();
        dto.daily_budget = "200000".into();
        assert_eq!(
            dto.validate().get("daily_budget"),
            Some("Дневной бюджет не может превышать общий бюджет")
        );
    }

    #[test]
    fn test_aggregate_from_valid_dto() {
        let dto = valid_dto();
        let campaign = Campaign::new_for_insert("CMP-0001".into(), &dto).unwrap();
        assert_eq!(campaign.budget, 150000.0);
        assert_eq!(campaign.daily_budget, Some(5000.0));
        assert_eq!(campaign.frequency_limit, None);

        let back = CampaignDto::from(campaign);
        assert_eq!(back.start_date, "2025-03-01");
        assert!(back.validate().is_empty());
    }
}
