use thiserror::Error;

/// Service-level errors surfaced to HTTP callers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Category not found: {key}")]
    CategoryNotFound { key: String },

    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    #[error("Processing error: {message}")]
    Processing { message: String },
}

impl ServiceError {
    /// True for lookup misses, which are expected client-input cases
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::CategoryNotFound { .. } | ServiceError::ItemNotFound { .. }
        )
    }
}

/// Errors raised while assembling the catalog at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate menu item id {id}: first in '{first_category}', again in '{second_category}'")]
    DuplicateItemId {
        id: u32,
        first_category: String,
        second_category: String,
    },

    #[error("Duplicate category key: {key}")]
    DuplicateCategory { key: String },

    #[error("Menu item {id} is authored under '{expected}' but declares category '{actual}'")]
    CategoryMismatch {
        id: u32,
        expected: String,
        actual: String,
    },
}

/// Errors raised by a submission recorder
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Recorder unavailable: {message}")]
    Unavailable { message: String },
}

impl From<RecorderError> for ServiceError {
    fn from(err: RecorderError) -> Self {
        ServiceError::Processing {
            message: err.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for catalog construction
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ServiceError::CategoryNotFound {
            key: "drinks".to_string(),
        };
        assert_eq!(error.to_string(), "Category not found: drinks");

        let error = CatalogError::DuplicateItemId {
            id: 3,
            first_category: "burgers".to_string(),
            second_category: "samosa".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate menu item id 3: first in 'burgers', again in 'samosa'"
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(ServiceError::ItemNotFound {
            id: "abc".to_string()
        }
        .is_not_found());
        assert!(!ServiceError::Processing {
            message: "boom".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_recorder_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let recorder_error: RecorderError = json_error.into();

        let service_error: ServiceError = recorder_error.into();
        match service_error {
            ServiceError::Processing { message } => {
                assert!(message.starts_with("Serialization error"));
            }
            _ => panic!("Expected Processing conversion"),
        }
    }
}
