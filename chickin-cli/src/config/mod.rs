//! Application state persistence

pub mod store;

pub use store::Store;
