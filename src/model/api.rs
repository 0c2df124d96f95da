use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Time the failure was recorded.
    pub timestamp: DateTime<Utc>,
    /// One entry per failure; field validation may produce several.
    pub messages: Vec<String>,
    /// Request path that produced the failure.
    pub path: String,
}
