//! Общие типы рекламных сущностей

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod status;

pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::{BaseAggregate, EntityMetadata};
pub use status::{BudgetUpdateRequest, EntityStatus, StatusUpdateRequest};
