use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for submitting a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Address or coordinate string
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    /// Defaults to "pending" when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
