use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for recording a water sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaterQualityDto {
    /// Collection time (RFC 3339 or YYYY-MM-DD)
    pub date: DateTime<Utc>,
    pub ph: f64,
    /// Turbidity in NTU
    pub turbidity: f64,
    pub ecoli: i64,
}

/// Request DTO for updating a water sample; omitted fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWaterQualityDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecoli: Option<i64>,
}
