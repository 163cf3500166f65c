//! Lender list import and export

pub mod export;
pub mod import;

pub use export::export_lenders_csv;
pub use import::import_lenders;
