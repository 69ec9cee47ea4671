use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core::repository::{Entity, MutableEntity};
use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

pub const WATER_QUALITY_SCHEMA: EntitySchema = EntitySchema {
    name: "WaterQuality",
    label: "Water quality",
    table: "water_qualities",
    fields: &[
        FieldSpec::required("date", "date", FieldKind::Timestamp),
        FieldSpec::required("ph", "ph", FieldKind::Float),
        FieldSpec::required("turbidity", "turbidity", FieldKind::Float),
        FieldSpec::required("ecoli", "ecoli", FieldKind::Integer),
    ],
};

/// Water sample taken at a collection point
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaterQuality {
    pub id: i64,
    /// When the sample was collected
    pub date: DateTime<Utc>,
    pub ph: f64,
    /// Turbidity in NTU
    pub turbidity: f64,
    /// E. coli count
    pub ecoli: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for WaterQuality {
    const SCHEMA: &'static EntitySchema = &WATER_QUALITY_SCHEMA;
}

impl MutableEntity for WaterQuality {}
