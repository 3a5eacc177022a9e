use serde::{Deserialize, Serialize};

/// Static restaurant metadata served by `/api/info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub name: String,
    pub address: String,
    pub phones: Vec<String>,
    pub location: String,
    pub hours: OpeningHours,
    pub services: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub general: String,
    /// Hours for items sold only in a restricted window
    pub special: String,
}
