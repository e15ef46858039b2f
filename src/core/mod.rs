//! Core catalog logic

pub mod catalog;
pub mod stats;

pub use catalog::CatalogService;
