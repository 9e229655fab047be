use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Query strings arrive as strings; empty or non-numeric values are
/// treated as absent so callers fall back to the defaults instead of
/// getting a 400.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.parse::<i64>().ok()))
}

/// Offset-based pagination parameters shared by list endpoints.
///
/// Defaults to `limit=50, offset=0`; the limit is clamped to 1..=100.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub const DEFAULT_LIMIT: i64 = 50;

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}
