mod component;
pub mod names;
pub mod resolver;

pub use component::{Breadcrumbs, EntityNameLookup, RestNameLookup};
