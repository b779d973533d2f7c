pub mod d400_rtb_metrics;
pub mod d401_fraud_detection;
pub mod d402_audience_insights;
pub mod d403_device_breakdown;
pub mod d404_creative_performance;
pub mod overview;

pub use d401_fraud_detection::ui::FraudDetectionDashboard;
pub use d402_audience_insights::ui::{AudienceInsightsDashboard, SegmentsList};
pub use d404_creative_performance::ui::CreativePerformanceDashboard;
pub use overview::AnalyticsOverview;
