pub mod a001_advertiser;
pub mod a002_campaign;
pub mod a003_ad_group;
pub mod a004_creative;
pub mod d400_rtb_metrics;
pub mod d401_fraud_detection;
pub mod d402_audience_insights;
pub mod d403_device_breakdown;
pub mod d404_creative_performance;
