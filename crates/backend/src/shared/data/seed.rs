use contracts::domain::a001_advertiser::{AdvertiserDto, AdvertiserId};
use contracts::domain::a002_campaign::{CampaignDto, CampaignId};
use contracts::domain::a003_ad_group::{AdGroupDto, AdGroupId, DeviceType};
use contracts::domain::a004_creative::{CreativeDto, CreativeImage};
use contracts::domain::common::{AggregateId, EntityStatus};

use crate::domain::{a001_advertiser, a002_campaign, a003_ad_group, a004_creative};

fn advertiser(name: &str, legal_name: &str, inn: &str, kpp: &str, ogrn: &str, agency: bool) -> AdvertiserDto {
    AdvertiserDto {
        id: None,
        name: name.into(),
        legal_name: legal_name.into(),
        inn: inn.into(),
        kpp: kpp.into(),
        ogrn: ogrn.into(),
        legal_address: "г. Москва, Пресненская наб., д. 12".into(),
        contact_email: format!("ads@{}.ru", inn),
        contact_phone: "+7 (495) 000-00-00".into(),
        website: String::new(),
        bank_name: "АО \"Альфа-Банк\"".into(),
        bik: "044525593".into(),
        account_number: "40702810401300012345".into(),
        is_agency: agency,
        status: EntityStatus::Active,
    }
}

fn campaign(advertiser_id: AdvertiserId, name: &str, goal: &str, budget: &str) -> CampaignDto {
    CampaignDto {
        id: None,
        advertiser_id: advertiser_id.as_string(),
        name: name.into(),
        goal: goal.into(),
        start_date: "2025-03-01".into(),
        end_date: "2025-06-30".into(),
        budget: budget.into(),
        daily_budget: String::new(),
        frequency_limit: "5".into(),
        click_limit: String::new(),
        status: EntityStatus::Active,
    }
}

fn ad_group(campaign_id: CampaignId, name: &str, geo: &[&str], devices: &[DeviceType]) -> AdGroupDto {
    AdGroupDto {
        id: None,
        campaign_id: campaign_id.as_string(),
        name: name.into(),
        start_date: "2025-03-01".into(),
        end_date: "2025-04-30".into(),
        budget: "60000".into(),
        cpm: "150".into(),
        frequency_limit: String::new(),
        click_limit: String::new(),
        geo: geo.iter().map(|g| g.to_string()).collect(),
        devices: devices.iter().copied().collect(),
        status: EntityStatus::Active,
    }
}

fn small_creative(ad_group_id: AdGroupId, name: &str, title: &str, text: &str) -> CreativeDto {
    CreativeDto {
        id: None,
        ad_group_id: ad_group_id.as_string(),
        placement: "1_small".into(),
        name: name.into(),
        title: title.into(),
        text: text.into(),
        url: "https://shop.example.ru/spring".into(),
        budget: "15000".into(),
        cpm: "140".into(),
        image: None,
        status: EntityStatus::Active,
    }
}

fn big_creative(ad_group_id: AdGroupId, file_name: &str) -> CreativeDto {
    CreativeDto {
        id: None,
        ad_group_id: ad_group_id.as_string(),
        placement: "3_big".into(),
        url: "https://shop.example.ru/spring".into(),
        budget: "25000".into(),
        cpm: "180".into(),
        image: Some(CreativeImage {
            file_name: file_name.into(),
            mime_type: "image/png".into(),
            size_bytes: 48_000,
        }),
        status: EntityStatus::Draft,
        ..Default::default()
    }
}

/// Заполнить таблицы демонстрационными данными
pub async fn seed_demo_data() -> anyhow::Result<()> {
    let romashka = a001_advertiser::service::create(advertiser(
        "Ромашка",
        "ООО \"Ромашка\"",
        "7701234567",
        "770101001",
        "1027700132195",
        false,
    ))
    .await?;
    let ivanov = a001_advertiser::service::create(advertiser(
        "ИП Иванов",
        "Индивидуальный предприниматель Иванов Иван Иванович",
        "771234567890",
        "",
        "304500116000157",
        false,
    ))
    .await?;
    let agency = a001_advertiser::service::create(advertiser(
        "Медиа Агентство",
        "АО \"Медиа Агентство\"",
        "7702345678",
        "770201001",
        "1157746000012",
        true,
    ))
    .await?;

    let spring = a002_campaign::service::create(campaign(romashka, "Весенняя распродажа", "traffic", "450000")).await?;
    let brand = a002_campaign::service::create(campaign(romashka, "Охват бренда", "awareness", "900000")).await?;
    let app = a002_campaign::service::create(campaign(ivanov, "Установки приложения", "app_installs", "120000")).await?;
    a002_campaign::service::create(campaign(agency, "Клиент: конверсии", "conversions", "300000")).await?;

    let moscow = a003_ad_group::service::create(ad_group(
        spring,
        "Москва, смартфоны",
        &["RU-MOW"],
        &[DeviceType::Mobile],
    ))
    .await?;
    let regions = a003_ad_group::service::create(ad_group(
        spring,
        "Регионы, все устройства",
        &["RU-NVS", "RU-SVE", "RU-TA"],
        &DeviceType::ALL,
    ))
    .await?;
    let tv = a003_ad_group::service::create(ad_group(
        brand,
        "Smart TV, столицы",
        &["RU-MOW", "RU-SPE"],
        &[DeviceType::SmartTv],
    ))
    .await?;
    let app_group = a003_ad_group::service::create(ad_group(
        app,
        "Android, Краснодар",
        &["RU-KDA"],
        &[DeviceType::Mobile, DeviceType::Tablet],
    ))
    .await?;

    a004_creative::service::create(small_creative(
        moscow,
        "Скидки до 50%",
        "Весенние скидки",
        "Только до конца марта: скидки на всю коллекцию",
    ))
    .await?;
    a004_creative::service::create(big_creative(moscow, "spring_728x90.png")).await?;
    a004_creative::service::create(small_creative(
        regions,
        "Бесплатная доставка",
        "Доставка бесплатно",
        "Привезём заказ в любой город России за 3 дня",
    ))
    .await?;
    a004_creative::service::create(big_creative(tv, "brand_1920x1080.png")).await?;
    a004_creative::service::create(small_creative(
        app_group,
        "Установи приложение",
        "Приложение магазина",
        "Скидка 10% на первый заказ в приложении",
    ))
    .await?;

    tracing::info!("Demo data seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_data_passes_validation() {
        seed_demo_data().await.unwrap();
        let advertisers = a001_advertiser::service::list_all().await.unwrap();
        assert!(advertisers.iter().any(|a| a.base.description == "Медиа Агентство" && a.is_agency));
    }
}
