use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for recording a collection event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWasteManagementDto {
    pub date: DateTime<Utc>,
    pub organic_waste: f64,
    pub plastic_waste: f64,
    pub paper_waste: f64,
    pub metal_waste: f64,
}

/// Request DTO for updating a collection event; omitted fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWasteManagementDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_waste: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plastic_waste: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_waste: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal_waste: Option<f64>,
}
