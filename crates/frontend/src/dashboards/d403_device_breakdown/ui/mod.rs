mod dashboard;

pub use dashboard::DeviceBreakdownDashboard;
