//! Explicit record schemas.
//!
//! Every persisted entity kind declares an [`EntitySchema`]: the JSON field
//! name, the storage column, the semantic type, whether the field is required
//! and an optional default. The persistence gateway consumes these to create
//! tables and to validate inbound payloads before they reach storage.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

/// Keys managed by the store itself. Payload values for them are ignored.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Semantic type of a stored field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Float,
    Integer,
    Timestamp,
}

impl FieldKind {
    fn sql_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "TEXT",
            FieldKind::Float => "REAL",
            FieldKind::Integer => "INTEGER",
            // Stored as RFC 3339 text; sqlx decodes it into DateTime<Utc>
            FieldKind::Timestamp => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key used in JSON payloads (camelCase)
    pub name: &'static str,
    /// Column name in the table (snake_case)
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Text default applied when the field is omitted or null
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            required: true,
            default: None,
        }
    }

    pub const fn with_default(
        name: &'static str,
        column: &'static str,
        kind: FieldKind,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            column,
            kind,
            required: false,
            default: Some(default),
        }
    }

    fn column_definition(&self) -> String {
        let mut definition = format!("{} {}", self.column, self.kind.sql_type());
        if self.required {
            definition.push_str(" NOT NULL");
        }
        if let Some(default) = self.default {
            definition.push_str(&format!(" DEFAULT '{}'", default.replace('\'', "''")));
        }
        definition
    }

    fn default_value(&self) -> Option<FieldValue> {
        self.default.map(|d| FieldValue::Text(d.to_string()))
    }
}

/// Shape of one entity kind's table
#[derive(Debug)]
pub struct EntitySchema {
    /// Entity name, e.g. `WaterQuality`
    pub name: &'static str,
    /// Human readable label used in response messages, e.g. `Water quality`
    pub label: &'static str,
    pub table: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// DDL creating the table if it does not exist yet
    pub fn create_table_sql(&self) -> String {
        let mut columns = vec!["id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];
        columns.extend(self.fields.iter().map(FieldSpec::column_definition));
        columns.push("created_at TEXT NOT NULL".to_string());
        columns.push("updated_at TEXT NOT NULL".to_string());

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.table,
            columns.join(", ")
        )
    }

    /// Comma separated list of every column, in declaration order
    pub fn select_columns(&self) -> String {
        let mut columns = vec!["id"];
        columns.extend(self.fields.iter().map(|f| f.column));
        columns.push("created_at");
        columns.push("updated_at");
        columns.join(", ")
    }

    pub fn not_found_message(&self) -> String {
        format!("{} record not found", self.label)
    }

    pub fn updated_message(&self) -> String {
        format!("{} record updated successfully", self.label)
    }

    pub fn deleted_message(&self) -> String {
        format!("{} record deleted successfully", self.label)
    }

    /// Validate a creation payload.
    ///
    /// Every required field must be present and non-null. Defaults fill
    /// omitted optional fields. Unknown and system keys are ignored.
    pub fn validate_create(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<Vec<BoundField>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut bound = Vec::with_capacity(self.fields.len());

        for field in self.fields {
            match payload.get(field.name) {
                None | Some(Value::Null) => {
                    if let Some(value) = field.default_value() {
                        bound.push(BoundField::new(field, value));
                    } else if field.required {
                        errors.add(field.name, cannot_be_null(self.name, field.name));
                    }
                }
                Some(raw) => match FieldValue::parse(field, raw) {
                    Ok(value) => bound.push(BoundField::new(field, value)),
                    Err(e) => errors.add(field.name, e),
                },
            }
        }

        log_ignored_keys(self, payload);

        if errors.is_empty() {
            Ok(bound)
        } else {
            Err(errors)
        }
    }

    /// Validate an update payload.
    ///
    /// Only supplied fields are returned. A null for a required field is
    /// rejected; a null for a defaulted field restores the default.
    pub fn validate_update(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<Vec<BoundField>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut bound = Vec::new();

        for field in self.fields {
            match payload.get(field.name) {
                None => {}
                Some(Value::Null) => match field.default_value() {
                    Some(value) => bound.push(BoundField::new(field, value)),
                    None => errors.add(field.name, cannot_be_null(self.name, field.name)),
                },
                Some(raw) => match FieldValue::parse(field, raw) {
                    Ok(value) => bound.push(BoundField::new(field, value)),
                    Err(e) => errors.add(field.name, e),
                },
            }
        }

        log_ignored_keys(self, payload);

        if errors.is_empty() {
            Ok(bound)
        } else {
            Err(errors)
        }
    }
}

fn log_ignored_keys(schema: &EntitySchema, payload: &Map<String, Value>) {
    for key in payload.keys() {
        let known = schema.fields.iter().any(|f| f.name == key);
        if !known && !SYSTEM_FIELDS.contains(&key.as_str()) {
            tracing::debug!("Ignoring unknown field '{}' for {}", key, schema.name);
        }
    }
}

fn validation_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn cannot_be_null(entity: &str, field: &str) -> ValidationError {
    validation_error("required", format!("{}.{} cannot be null", entity, field))
}

/// A validated value ready to be bound to a statement
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    fn parse(field: &FieldSpec, raw: &Value) -> Result<Self, ValidationError> {
        match field.kind {
            FieldKind::Text => match raw {
                Value::String(s) if field.required && s.trim().is_empty() => Err(
                    validation_error("length", format!("{} cannot be empty", field.name)),
                ),
                Value::String(s) => Ok(FieldValue::Text(s.clone())),
                _ => Err(validation_error(
                    "type",
                    format!("{} must be a string", field.name),
                )),
            },
            FieldKind::Float => {
                let parsed = match raw {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                };
                // "inf", "NaN" and overflowing literals cannot be stored as REAL
                parsed
                    .filter(|f| f.is_finite())
                    .map(FieldValue::Float)
                    .ok_or_else(|| {
                        validation_error("type", format!("{} must be a number", field.name))
                    })
            }
            FieldKind::Integer => {
                let parsed = match raw {
                    Value::Number(n) => n.as_i64().or_else(|| {
                        n.as_f64()
                            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                            .map(|f| f as i64)
                    }),
                    Value::String(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                };
                parsed.map(FieldValue::Integer).ok_or_else(|| {
                    validation_error("type", format!("{} must be an integer", field.name))
                })
            }
            FieldKind::Timestamp => {
                let parsed = match raw {
                    Value::String(s) => parse_timestamp(s),
                    Value::Number(n) => n
                        .as_i64()
                        .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
                    _ => None,
                };
                parsed.map(FieldValue::Timestamp).ok_or_else(|| {
                    validation_error("type", format!("{} must be a valid date", field.name))
                })
            }
        }
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD` and naive `YYYY-MM-DD[T ]HH:MM:SS` (as UTC)
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A schema field paired with its validated value
#[derive(Debug, Clone)]
pub struct BoundField {
    pub column: &'static str,
    pub value: FieldValue,
}

impl BoundField {
    fn new(field: &FieldSpec, value: FieldValue) -> Self {
        Self {
            column: field.column,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("title", "title", FieldKind::Text),
        FieldSpec::required("takenAt", "taken_at", FieldKind::Timestamp),
        FieldSpec::required("level", "level", FieldKind::Float),
        FieldSpec::required("count", "count", FieldKind::Integer),
        FieldSpec::with_default("state", "state", FieldKind::Text, "open"),
    ];

    const SAMPLE: EntitySchema = EntitySchema {
        name: "Sample",
        label: "Sample",
        table: "samples",
        fields: FIELDS,
    };

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn value_of<'a>(bound: &'a [BoundField], column: &str) -> Option<&'a FieldValue> {
        bound.iter().find(|b| b.column == column).map(|b| &b.value)
    }

    #[test]
    fn test_create_table_sql() {
        let sql = SAMPLE.create_table_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS samples ("));
        assert!(sql.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("taken_at TEXT NOT NULL"));
        assert!(sql.contains("level REAL NOT NULL"));
        assert!(sql.contains("count INTEGER NOT NULL"));
        assert!(sql.contains("state TEXT DEFAULT 'open'"));
        assert!(sql.contains("updated_at TEXT NOT NULL"));
    }

    #[test]
    fn test_select_columns_order() {
        assert_eq!(
            SAMPLE.select_columns(),
            "id, title, taken_at, level, count, state, created_at, updated_at"
        );
    }

    #[test]
    fn test_validate_create_applies_default_and_coerces() {
        let bound = SAMPLE
            .validate_create(&payload(json!({
                "title": "Pipa bocor",
                "takenAt": "2024-01-15",
                "level": "7.5",
                "count": 10.0,
                "unknown": true,
                "id": 42
            })))
            .unwrap();

        assert_eq!(bound.len(), 5);
        assert_eq!(value_of(&bound, "level"), Some(&FieldValue::Float(7.5)));
        assert_eq!(value_of(&bound, "count"), Some(&FieldValue::Integer(10)));
        assert_eq!(
            value_of(&bound, "state"),
            Some(&FieldValue::Text("open".to_string()))
        );
        assert_eq!(
            value_of(&bound, "taken_at"),
            Some(&FieldValue::Timestamp(
                Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_validate_create_reports_missing_and_null_fields() {
        let errors = SAMPLE
            .validate_create(&payload(json!({ "title": "x", "level": null })))
            .unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("takenAt"));
        assert!(fields.contains_key("level"));
        assert!(fields.contains_key("count"));
        assert!(!fields.contains_key("state"));
        assert!(errors.to_string().contains("Sample.level cannot be null"));
    }

    #[test]
    fn test_validate_create_rejects_blank_text_and_bad_types() {
        let errors = SAMPLE
            .validate_create(&payload(json!({
                "title": "   ",
                "takenAt": "yesterday",
                "level": [1],
                "count": 1.5
            })))
            .unwrap_err();

        let fields = errors.field_errors();
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_validate_update_only_returns_supplied_fields() {
        let bound = SAMPLE
            .validate_update(&payload(json!({ "level": 12.5, "state": null })))
            .unwrap();

        assert_eq!(bound.len(), 2);
        assert_eq!(value_of(&bound, "level"), Some(&FieldValue::Float(12.5)));
        assert_eq!(
            value_of(&bound, "state"),
            Some(&FieldValue::Text("open".to_string()))
        );

        assert!(SAMPLE
            .validate_update(&payload(json!({ "count": null })))
            .is_err());
        assert!(SAMPLE.validate_update(&Map::new()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-15T08:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T15:30:00+07:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 08:30:00"), Some(expected));
        assert!(parse_timestamp("15/01/2024").is_none());
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        let field = FieldSpec::required("level", "level", FieldKind::Float);

        for raw in [json!("inf"), json!("-Infinity"), json!("NaN"), json!("1e999")] {
            let err = FieldValue::parse(&field, &raw).unwrap_err();
            assert_eq!(err.code, "type", "accepted {}", raw);
        }
        assert_eq!(
            FieldValue::parse(&field, &json!(" 6.5 ")).unwrap(),
            FieldValue::Float(6.5)
        );
    }

    #[test]
    fn test_timestamp_from_epoch_millis() {
        let field = FieldSpec::required("date", "date", FieldKind::Timestamp);
        let value = FieldValue::parse(&field, &json!(1705276800000_i64)).unwrap();
        assert_eq!(
            value,
            FieldValue::Timestamp(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
    }
}
