use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core::repository::Entity;
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// Status given to reports submitted without one
pub const DEFAULT_REPORT_STATUS: &str = "pending";

pub const REPORT_SCHEMA: EntitySchema = EntitySchema {
    name: "Report",
    label: "Report",
    table: "reports",
    fields: &[
        FieldSpec::required("title", "title", FieldKind::Text),
        FieldSpec::required("description", "description", FieldKind::Text),
        FieldSpec::required("location", "location", FieldKind::Text),
        FieldSpec::with_default("status", "status", FieldKind::Text, DEFAULT_REPORT_STATUS),
    ],
};

/// Citizen sanitation report
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Address or coordinate string
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Report {
    const SCHEMA: &'static EntitySchema = &REPORT_SCHEMA;
}
