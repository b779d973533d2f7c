mod dashboard;

pub use dashboard::FraudDetectionDashboard;
