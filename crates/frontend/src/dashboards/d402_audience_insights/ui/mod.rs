mod dashboard;
mod segments;

pub use dashboard::AudienceInsightsDashboard;
pub use segments::SegmentsList;
