mod dashboard;

pub use dashboard::RtbMetricsDashboard;
