//! Адреса вложенных страниц для строк плоских списков.
//!
//! Группа объявлений знает только свою кампанию, креатив только свою группу.
//! Чтобы построить ссылку `/advertisers/{a}/campaigns/{c}/adgroups/{g}/...`,
//! плоские списки загружают родителей и собирают справочник.

use super::{a002_campaign, a003_ad_group};
use contracts::domain::a002_campaign::Campaign;
use contracts::domain::a003_ad_group::AdGroup;
use contracts::domain::common::AggregateId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct ParentRef {
    parent_id: String,
    name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParentPaths {
    campaigns: HashMap<String, ParentRef>,
    ad_groups: HashMap<String, ParentRef>,
}

impl ParentPaths {
    pub fn from_lists(campaigns: &[Campaign], ad_groups: &[AdGroup]) -> Self {
        let mut paths = Self::default();
        for c in campaigns {
            paths.add_campaign(
                c.base.id.as_string(),
                c.advertiser_id.as_string(),
                c.base.description.clone(),
            );
        }
        for g in ad_groups {
            paths.add_ad_group(
                g.base.id.as_string(),
                g.campaign_id.as_string(),
                g.base.description.clone(),
            );
        }
        paths
    }

    pub fn add_campaign(&mut self, id: String, advertiser_id: String, name: String) {
        self.campaigns.insert(
            id,
            ParentRef {
                parent_id: advertiser_id,
                name,
            },
        );
    }

    pub fn add_ad_group(&mut self, id: String, campaign_id: String, name: String) {
        self.ad_groups.insert(
            id,
            ParentRef {
                parent_id: campaign_id,
                name,
            },
        );
    }

    /// `/advertisers/{a}/campaigns/{c}`
    pub fn campaign_path(&self, campaign_id: &str) -> Option<String> {
        self.campaigns
            .get(campaign_id)
            .map(|c| format!("/advertisers/{}/campaigns/{}", c.parent_id, campaign_id))
    }

    /// `/advertisers/{a}/campaigns/{c}/adgroups/{g}`
    pub fn ad_group_path(&self, ad_group_id: &str) -> Option<String> {
        let group = self.ad_groups.get(ad_group_id)?;
        self.campaign_path(&group.parent_id)
            .map(|base| format!("{}/adgroups/{}", base, ad_group_id))
    }

    pub fn campaign_name(&self, campaign_id: &str) -> Option<&str> {
        self.campaigns.get(campaign_id).map(|c| c.name.as_str())
    }

    pub fn ad_group_name(&self, ad_group_id: &str) -> Option<&str> {
        self.ad_groups.get(ad_group_id).map(|g| g.name.as_str())
    }
}

/// Загрузить кампании и (при необходимости) группы объявлений
pub async fn load_parent_paths(with_ad_groups: bool) -> Result<ParentPaths, String> {
    let campaigns = a002_campaign::api::fetch_list(None).await?;
    let ad_groups = if with_ad_groups {
        a003_ad_group::api::fetch_list(None).await?
    } else {
        Vec::new()
    };
    Ok(ParentPaths::from_lists(&campaigns, &ad_groups))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ParentPaths {
        let mut p = ParentPaths::default();
        p.add_campaign("c1".into(), "a1".into(), "Весенняя распродажа".into());
        p.add_ad_group("g1".into(), "c1".into(), "Москва, мобильные".into());
        p.add_ad_group("g2".into(), "missing".into(), "Сирота".into());
        p
    }

    #[test]
    fn test_campaign_path() {
        assert_eq!(
            paths().campaign_path("c1").as_deref(),
            Some("/advertisers/a1/campaigns/c1")
        );
        assert_eq!(paths().campaign_path("c2"), None);
    }

    #[test]
    fn test_ad_group_path_goes_through_campaign() {
        assert_eq!(
            paths().ad_group_path("g1").as_deref(),
            Some("/advertisers/a1/campaigns/c1/adgroups/g1")
        );
        // Кампания группы не найдена
        assert_eq!(paths().ad_group_path("g2"), None);
    }

    #[test]
    fn test_names() {
        let p = paths();
        assert_eq!(p.campaign_name("c1"), Some("Весенняя распродажа"));
        assert_eq!(p.ad_group_name("g1"), Some("Москва, мобильные"));
        assert_eq!(p.ad_group_name("g3"), None);
    }
}
