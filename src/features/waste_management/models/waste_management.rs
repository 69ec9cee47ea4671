use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core::repository::{Entity, MutableEntity};
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

pub const WASTE_MANAGEMENT_SCHEMA: EntitySchema = EntitySchema {
    name: "WasteManagement",
    label: "Waste management",
    table: "waste_managements",
    fields: &[
        FieldSpec::required("date", "date", FieldKind::Timestamp),
        FieldSpec::required("organicWaste", "organic_waste", FieldKind::Float),
        FieldSpec::required("plasticWaste", "plastic_waste", FieldKind::Float),
        FieldSpec::required("paperWaste", "paper_waste", FieldKind::Float),
        FieldSpec::required("metalWaste", "metal_waste", FieldKind::Float),
    ],
};

/// Quantities collected in one waste collection event
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteManagement {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub organic_waste: f64,
    pub plastic_waste: f64,
    pub paper_waste: f64,
    pub metal_waste: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for WasteManagement {
    const SCHEMA: &'static EntitySchema = &WASTE_MANAGEMENT_SCHEMA;
}

impl MutableEntity for WasteManagement {}
