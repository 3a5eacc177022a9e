use std::sync::Arc;
use tracing::instrument;

use crate::models::{Catalog, MenuItem, RestaurantInfo, ServiceError, ServiceResult};
use crate::repositories::CatalogRepository;

/// Read operations over the menu catalog
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// The whole menu, verbatim
    pub fn get_full_menu(&self) -> Arc<Catalog> {
        self.repository.list_all()
    }

    /// Items of one category. An authored but empty category is `Ok(vec![])`.
    #[instrument(skip(self))]
    pub fn get_category(&self, key: &str) -> ServiceResult<Vec<MenuItem>> {
        match self.repository.list_by_category(key) {
            Some(items) => {
                crate::info_with_trace!("Found {} items in category", items.len());
                Ok(items)
            }
            None => {
                crate::warn_with_trace!("Category not found");
                Err(ServiceError::CategoryNotFound {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Look up an item from a raw path segment.
    ///
    /// The segment is coerced with [`parse_item_id`]; a segment that yields no
    /// id is reported as a plain lookup miss.
    #[instrument(skip(self))]
    pub fn get_item(&self, raw_id: &str) -> ServiceResult<MenuItem> {
        let item = parse_item_id(raw_id).and_then(|id| self.repository.find_by_id(id));

        match item {
            Some(item) => {
                crate::info_with_trace!("Item found: {}", item.name);
                Ok(item)
            }
            None => {
                crate::warn_with_trace!("Item not found");
                Err(ServiceError::ItemNotFound {
                    id: raw_id.to_string(),
                })
            }
        }
    }

    pub fn get_info(&self) -> Arc<RestaurantInfo> {
        self.repository.restaurant_info()
    }
}

/// Permissive integer coercion for item ids.
///
/// Skips leading whitespace, accepts an optional sign and an optional
/// `0x`/`0X` prefix, then reads the leading run of digits in that radix and
/// ignores whatever follows, so `"12abc"` is 12 and `"0x11"` is 17.
/// Returns `None` when there are no leading digits or the value cannot be a
/// catalog id (negative or out of range).
pub fn parse_item_id(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let value = u32::from_str_radix(&rest[..digits_len], radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
