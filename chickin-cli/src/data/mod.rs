//! Dashboard data layer: models and the in-memory fixture set

pub mod fixtures;
pub mod models;

pub use fixtures::DashboardData;
