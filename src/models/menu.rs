use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use super::{CatalogError, CatalogResult};

/// A single sellable dish or drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Display-formatted price, e.g. "Rs. 350"
    pub price: String,
    /// Static asset path; not checked for existence
    pub image: String,
    pub category: String,
    /// Restricted sale window, e.g. "Fajar to Zuhr"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: &str,
        description: &str,
        price: &str,
        image: &str,
        category: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            image: image.to_string(),
            category: category.to_string(),
            availability: None,
        }
    }

    pub fn with_availability(mut self, window: &str) -> Self {
        self.availability = Some(window.to_string());
        self
    }

    pub fn is_restricted(&self) -> bool {
        self.availability.is_some()
    }
}

/// One category key and its items in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub key: String,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(key: &str, items: Vec<MenuItem>) -> Self {
        Self {
            key: key.to_string(),
            items,
        }
    }
}

/// The complete menu, grouped by category in authored order.
///
/// Serializes as a JSON object keyed by category. The set of known category
/// keys is exactly the set of keys present here; there is no separate list to
/// keep in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids, duplicate keys and items
    /// whose `category` field disagrees with the key they are authored under.
    pub fn new(categories: Vec<MenuCategory>) -> CatalogResult<Self> {
        let mut seen_keys: Vec<&str> = Vec::with_capacity(categories.len());
        let mut seen_ids: HashMap<u32, &str> = HashMap::new();

        for category in &categories {
            if seen_keys.contains(&category.key.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    key: category.key.clone(),
                });
            }
            seen_keys.push(&category.key);

            for item in &category.items {
                if item.category != category.key {
                    return Err(CatalogError::CategoryMismatch {
                        id: item.id,
                        expected: category.key.clone(),
                        actual: item.category.clone(),
                    });
                }

                if let Some(first) = seen_ids.insert(item.id, &category.key) {
                    return Err(CatalogError::DuplicateItemId {
                        id: item.id,
                        first_category: first.to_string(),
                        second_category: category.key.clone(),
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    /// Items for an exact, case-sensitive category key
    pub fn category(&self, key: &str) -> Option<&[MenuItem]> {
        self.categories
            .iter()
            .find(|category| category.key == key)
            .map(|category| category.items.as_slice())
    }

    /// First item with the given id, scanning categories in authored order
    pub fn find_item(&self, id: u32) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.key.as_str())
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.key, &category.items)?;
        }
        map.end()
    }
}
