//! Command handlers

pub mod chat;
pub mod dashboard;
pub mod deal;
pub mod inventory;
pub mod lenders;
pub mod menu;
pub mod query;
pub mod rules;
