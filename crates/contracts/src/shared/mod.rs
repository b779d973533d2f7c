pub mod indicators;
pub mod validation;
