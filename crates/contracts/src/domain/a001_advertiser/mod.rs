pub mod aggregate;

pub use aggregate::{Advertiser, AdvertiserDto, AdvertiserId};
