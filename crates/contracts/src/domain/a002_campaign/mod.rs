pub mod aggregate;

pub use aggregate::{campaign_goal_label, Campaign, CampaignDto, CampaignId, CAMPAIGN_GOALS};
