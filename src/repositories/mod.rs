pub mod catalog_repository;
pub mod menu_data;

pub use catalog_repository::{CatalogRepository, StaticCatalogRepository};
pub use menu_data::{food_valley_catalog, food_valley_info};
