use crate::domain::a003_ad_group::AdGroupId;
use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EntityStatus,
};
use crate::shared::validation::{parse_positive_number, FieldCheck, FieldErrors, FormValidator};
use crate::uuid_aggregate_id;
use serde::{Deserialize, Serialize};

uuid_aggregate_id!(
    /// Уникальный идентификатор креатива
    CreativeId
);

/// Максимальный размер изображения креатива
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// Площадки размещения: (код, подпись). Суффикс `_big` означает большой формат.
pub const PLACEMENTS: &[(&str, &str)] = &[
    ("1_small", "Лента (малый формат)"),
    ("2_small", "Боковая колонка (малый формат)"),
    ("3_big", "Баннер (большой формат)"),
    ("4_big", "Полноэкранный (большой формат)"),
];

/// Формат креатива, определяется площадкой
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeFormat {
    /// Текстово-графическое объявление: название, заголовок, текст
    Small,
    /// Графический баннер: только изображение и ссылка
    Big,
}

impl CreativeFormat {
    pub fn from_placement(placement: &str) -> Self {
        if placement.trim().ends_with("_big") {
            CreativeFormat::Big
        } else {
            CreativeFormat::Small
        }
    }
}

pub fn placement_label(code: &str) -> &str {
    PLACEMENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Загруженное изображение креатива
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeImage {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
}

/// Креатив (рекламное объявление)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creative {
    #[serde(flatten)]
    pub base: BaseAggregate<CreativeId>,

    #[serde(rename = "adGroupId")]
    pub ad_group_id: AdGroupId,
    pub placement: String,
    pub title: String,
    pub text: String,
    pub url: String,
    pub budget: f64,
    pub cpm: f64,
    pub image: Option<CreativeImage>,
    pub status: EntityStatus,
}

impl Creative {
    pub fn new_for_insert(code: String, dto: &CreativeDto) -> anyhow::Result<Self> {
        let ad_group_id = AdGroupId::from_string(&dto.ad_group_id)
            .map_err(|e| anyhow::anyhow!("ad_group_id: {}", e))?;
        let mut aggregate = Self {
            base: BaseAggregate::new(CreativeId::new_v4(), code, String::new()),
            ad_group_id,
            placement: String::new(),
            title: String::new(),
            text: String::new(),
            url: String::new(),
            budget: 0.0,
            cpm: 0.0,
            image: None,
            status: EntityStatus::Draft,
        };
        aggregate.update(dto)?;
        Ok(aggregate)
    }

    pub fn update(&mut self, dto: &CreativeDto) -> anyhow::Result<()> {
        self.ad_group_id = AdGroupId::from_string(&dto.ad_group_id)
            .map_err(|e| anyhow::anyhow!("ad_group_id: {}", e))?;
        self.placement = dto.placement.trim().to_string();
        // У большого формата нет текстовых полей, название берём из файла
        match self.format() {
            CreativeFormat::Small => {
                self.base.description = dto.name.trim().to_string();
                self.title = dto.title.trim().to_string();
                self.text = dto.text.trim().to_string();
            }
            CreativeFormat::Big => {
                self.base.description = match (&dto.image, dto.name.trim()) {
                    (_, name) if !name.is_empty() => name.to_string(),
                    (Some(image), _) => image.file_name.clone(),
                    (None, _) => placement_label(&self.placement).to_string(),
                };
                self.title.clear();
                self.text.clear();
            }
        }
        self.url = dto.url.trim().to_string();
        self.budget =
            parse_positive_number(&dto.budget).ok_or_else(|| anyhow::anyhow!("budget"))?;
        self.cpm = parse_positive_number(&dto.cpm).ok_or_else(|| anyhow::anyhow!("cpm"))?;
        self.image = dto.image.clone();
        self.status = dto.status;
        Ok(())
    }

    pub fn format(&self) -> CreativeFormat {
        CreativeFormat::from_placement(&self.placement)
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Creative {
    type Id = CreativeId;

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
        "creatives"
    }

    fn code_prefix() -> &'static str {
        "CRV"
    }
}

/// Форма креатива
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreativeDto {
    pub id: Option<String>,
    #[serde(rename = "adGroupId")]
    pub ad_group_id: String,
    pub placement: String,
    pub name: String,
    pub title: String,
    pub text: String,
    pub url: String,
    pub budget: String,
    pub cpm: String,
    pub image: Option<CreativeImage>,
    pub status: EntityStatus,
}

impl CreativeDto {
    pub fn for_ad_group(ad_group_id: Option<String>) -> Self {
        Self {
            ad_group_id: ad_group_id.unwrap_or_default(),
            placement: PLACEMENTS[0].0.to_string(),
            ..Default::default()
        }
    }

    pub fn format(&self) -> CreativeFormat {
        CreativeFormat::from_placement(&self.placement)
    }
}

impl From<Creative> for CreativeDto {
    fn from(c: Creative) -> Self {
        Self {
            id: Some(c.base.id.as_string()),
            ad_group_id: c.ad_group_id.as_string(),
            placement: c.placement,
            name: c.base.description,
            title: c.title,
            text: c.text,
            url: c.url,
            budget: c.budget.to_string(),
            cpm: c.cpm.to_string(),
            image: c.image,
            status: c.status,
        }
    }
}

impl FormValidator for CreativeDto {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        FieldCheck::new(&mut errors, "ad_group_id", &self.ad_group_id)
            .required_with("Выберите группу объявлений");
        FieldCheck::new(&mut errors, "placement", &self.placement)
            .required_with("Выберите площадку размещения");

        if self.format() == CreativeFormat::Small {
            FieldCheck::new(&mut errors, "name", &self.name)
                .required()
                .max_len(255);
            FieldCheck::new(&mut errors, "title", &self.title)
                .required()
                .max_len(25);
            FieldCheck::new(&mut errors, "text", &self.text)
                .required()
                .max_len(90);
        }

        FieldCheck::new(&mut errors, "url", &self.url)
            .required()
            .url();
        FieldCheck::new(&mut errors, "budget", &self.budget)
            .required()
            .positive_number();
        FieldCheck::new(&mut errors, "cpm", &self.cpm)
            .required()
            .positive_number();

        if let Some(image) = &self.image {
            if !ALLOWED_IMAGE_TYPES.contains(&image.mime_type.as_str()) {
                errors.set("image", "Допустимые форматы изображения: JPEG, PNG, GIF");
            } else if image.size_bytes > MAX_IMAGE_BYTES {
                errors.set("image", "Размер изображения не должен превышать 5 МБ");
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{MSG_POSITIVE_NUMBER, MSG_REQUIRED, MSG_URL};

    fn small_dto() -> CreativeDto {
        CreativeDto {
            id: None,
            ad_group_id: AdGroupId::new_v4().as_string(),
            placement: "1_small".into(),
            name: "Скидки до 50%".into(),
            title: "Весенние скидки".into(),
            text: "Только до конца марта: скидки на всю коллекцию".into(),
            url: "https://shop.example.ru/sale".into(),
            budget: "10000".into(),
            cpm: "95".into(),
            image: None,
            status: EntityStatus::Draft,
        }
    }

    #[test]
    fn test_big_format_skips_text_fields() {
        let dto = CreativeDto {
            ad_group_id: AdGroupId::new_v4().as_string(),
            placement: "4_big".into(),
            budget: String::new(),
            url: "not-a-url".into(),
            cpm: String::new(),
            ..Default::default()
        };
        let errors = dto.validate();
        assert_eq!(errors.get("budget"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("url"), Some(MSG_URL));
        assert_eq!(errors.get("cpm"), Some(MSG_REQUIRED));
        assert!(!errors.contains("name"));
        assert!(!errors.contains("title"));
        assert!(!errors.contains("text"));
    }

    #[test]
    fn test_small_format_requires_text_fields() {
        let mut dto = small_dto();
        dto.name = String::new();
        dto.title = "Слишком длинный заголовок объявления".into();
        let errors = dto.validate();
        assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("title"), Some("Не более 25 символов"));
        assert!(!errors.contains("text"));
    }

    #[test]
    fn test_valid_small_creative() {
        assert!(small_dto().validate().is_empty());
    }

    #[test]
    fn test_cpm_must_be_positive() {
        let mut dto = small_dto();
        dto.cpm = "0".into();
        assert_eq!(dto.validate().get("cpm"), Some(MSG_POSITIVE_NUMBER));
    }

    #[test]
    fn test_image_checks() {
        let mut dto = small_dto();
        dto.image = Some(CreativeImage {
            file_name: "banner.bmp".into(),
            mime_type: "image/bmp".into(),
            size_bytes: 1024,
        });
        assert!(dto.validate().contains("image"));

        dto.image = Some(CreativeImage {
            file_name: "banner.png".into(),
            mime_type: "image/png".into(),
            size_bytes: MAX_IMAGE_BYTES + 1,
        });
        assert_eq!(
            dto.validate().get("image"),
            Some("Размер изображения не должен превышать 5 МБ")
        );
    }

    #[test]
    fn test_big_aggregate_takes_name_from_image() {
        let mut dto = small_dto();
        dto.placement = "3_big".into();
        dto.name = String::new();
        dto.image = Some(CreativeImage {
            file_name: "spring_728x90.png".into(),
            mime_type: "image/png".into(),
            size_bytes: 20_000,
        });
        let creative = Creative::new_for_insert("CRV-0001".into(), &dto).unwrap();
        assert_eq!(creative.format(), CreativeFormat::Big);
        assert_eq!(creative.base.description, "spring_728x90.png");
        assert!(creative.title.is_empty());
    }
}
