use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::menu_data::{food_valley_catalog, food_valley_info};
use crate::models::{Catalog, CatalogResult, MenuItem, RestaurantInfo};

/// Read-only access to the menu catalog
pub trait CatalogRepository: Send + Sync {
    /// The full catalog, grouped by category in authored order
    fn list_all(&self) -> Arc<Catalog>;

    /// Items for an exact category key, `None` when the key is unknown
    fn list_by_category(&self, key: &str) -> Option<Vec<MenuItem>>;

    /// Find an item by id across every category
    fn find_by_id(&self, id: u32) -> Option<MenuItem>;

    /// Static restaurant metadata
    fn restaurant_info(&self) -> Arc<RestaurantInfo>;
}

/// In-memory catalog built once at startup and never mutated
#[derive(Debug, Clone)]
pub struct StaticCatalogRepository {
    catalog: Arc<Catalog>,
    info: Arc<RestaurantInfo>,
}

impl StaticCatalogRepository {
    pub fn new(catalog: Catalog, info: RestaurantInfo) -> Self {
        info!(
            categories = catalog.categories().len(),
            items = catalog.item_count(),
            "Catalog loaded"
        );
        Self {
            catalog: Arc::new(catalog),
            info: Arc::new(info),
        }
    }

    /// The Food Valley menu; fails if the authored data is inconsistent
    pub fn food_valley() -> CatalogResult<Self> {
        Ok(Self::new(food_valley_catalog()?, food_valley_info()))
    }
}

impl CatalogRepository for StaticCatalogRepository {
    fn list_all(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[instrument(skip(self))]
    fn list_by_category(&self, key: &str) -> Option<Vec<MenuItem>> {
        let items = self.catalog.category(key).map(<[MenuItem]>::to_vec);
        debug!(found = items.is_some(), "Category lookup");
        items
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: u32) -> Option<MenuItem> {
        let item = self.catalog.find_item(id).cloned();
        debug!(found = item.is_some(), "Item lookup");
        item
    }

    fn restaurant_info(&self) -> Arc<RestaurantInfo> {
        Arc::clone(&self.info)
    }
}
