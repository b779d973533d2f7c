mod dashboard;

pub use dashboard::CreativePerformanceDashboard;
