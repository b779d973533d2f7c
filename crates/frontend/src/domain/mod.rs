pub mod a001_advertiser;
pub mod a002_campaign;
pub mod a003_ad_group;
pub mod a004_creative;
pub mod hierarchy;
