pub mod aggregate;

pub use aggregate::{AdGroup, AdGroupDto, AdGroupId, DeviceType, GEO_REGIONS};
