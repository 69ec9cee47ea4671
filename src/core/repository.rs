//! Record repositories over the persistence gateway.
//!
//! Entity kinds declare their capabilities through two traits:
//! [`RecordRepository`] (list, create, get by id) is shared by all kinds,
//! while [`MutableRecordRepository`] (update, delete) is only implemented for
//! kinds marked with [`MutableEntity`].

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

use crate::core::database::PersistenceGateway;
use crate::core::error::{AppError, Result};
use crate::core::schema::{BoundField, EntitySchema, FieldValue};

/// A persisted entity kind, implemented by its row type
pub trait Entity:
    for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Sync + Unpin + 'static
{
    const SCHEMA: &'static EntitySchema;
}

/// Entity kinds whose records may be updated and deleted
pub trait MutableEntity: Entity {}

#[async_trait]
pub trait RecordRepository<R>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>>;
    async fn create(&self, fields: &Map<String, Value>) -> Result<R>;
    async fn get_by_id(&self, id: i64) -> Result<Option<R>>;
}

#[async_trait]
pub trait MutableRecordRepository<R>: RecordRepository<R> {
    /// Returns the number of rows affected (0 or 1)
    async fn update(&self, id: i64, fields: &Map<String, Value>) -> Result<u64>;
    /// Returns the number of rows affected (0 or 1)
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// SQLite backed repository for one entity kind
pub struct SqlRepository<E: Entity> {
    gateway: Arc<PersistenceGateway>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqlRepository<E> {
    pub fn new(gateway: Arc<PersistenceGateway>) -> Self {
        Self {
            gateway,
            _entity: PhantomData,
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        E::SCHEMA
    }
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: FieldValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        FieldValue::Text(v) => query.bind(v),
        FieldValue::Float(v) => query.bind(v),
        FieldValue::Integer(v) => query.bind(v),
        FieldValue::Timestamp(v) => query.bind(v),
    }
}

fn bind_value_as<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    value: FieldValue,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    match value {
        FieldValue::Text(v) => query.bind(v),
        FieldValue::Float(v) => query.bind(v),
        FieldValue::Integer(v) => query.bind(v),
        FieldValue::Timestamp(v) => query.bind(v),
    }
}

#[async_trait]
impl<E: Entity> RecordRepository<E> for SqlRepository<E> {
    async fn list(&self) -> Result<Vec<E>> {
        let schema = E::SCHEMA;
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            schema.select_columns(),
            schema.table
        );

        sqlx::query_as::<_, E>(&sql)
            .fetch_all(self.gateway.pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {} records: {:?}", schema.name, e);
                AppError::Database(e)
            })
    }

    async fn create(&self, fields: &Map<String, Value>) -> Result<E> {
        let schema = E::SCHEMA;
        let bound: Vec<BoundField> = schema.validate_create(fields)?;

        let mut columns: Vec<&str> = bound.iter().map(|b| b.column).collect();
        columns.push("created_at");
        columns.push("updated_at");
        let placeholders = vec!["?"; columns.len()].join(", ");

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            schema.table,
            columns.join(", "),
            placeholders,
            schema.select_columns()
        );

        let now = Utc::now();
        let mut query = sqlx::query_as::<_, E>(&sql);
        for field in bound {
            query = bind_value_as(query, field.value);
        }

        let record = query
            .bind(now)
            .bind(now)
            .fetch_one(self.gateway.pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to create {} record: {:?}", schema.name, e);
                AppError::Database(e)
            })?;

        tracing::info!("{} record created", schema.name);
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<E>> {
        let schema = E::SCHEMA;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            schema.select_columns(),
            schema.table
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.gateway.pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {} record {}: {:?}", schema.name, id, e);
                AppError::Database(e)
            })
    }
}

#[async_trait]
impl<E: MutableEntity> MutableRecordRepository<E> for SqlRepository<E> {
    async fn update(&self, id: i64, fields: &Map<String, Value>) -> Result<u64> {
        let schema = E::SCHEMA;
        let bound = schema.validate_update(fields)?;

        let mut assignments: Vec<String> =
            bound.iter().map(|b| format!("{} = ?", b.column)).collect();
        assignments.push("updated_at = ?".to_string());

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            schema.table,
            assignments.join(", ")
        );

        let mut query = sqlx::query(&sql);
        for field in bound {
            query = bind_value(query, field.value);
        }

        let result = query
            .bind(Utc::now())
            .bind(id)
            .execute(self.gateway.pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to update {} record {}: {:?}", schema.name, id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() > 0 {
            tracing::info!("{} record {} updated", schema.name, id);
        }
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let schema = E::SCHEMA;
        let sql = format!("DELETE FROM {} WHERE id = ?", schema.table);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.gateway.pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete {} record {}: {:?}", schema.name, id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() > 0 {
            tracing::info!("{} record {} deleted", schema.name, id);
        }
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    use crate::features::reports::models::Report;
    use crate::features::waste_management::models::WasteManagement;
    use crate::features::water_quality::models::WaterQuality;
    use crate::shared::test_helpers::{
        test_gateway, waste_management_payload, water_quality_payload,
    };

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let repo = SqlRepository::<WaterQuality>::new(test_gateway().await);

        let created = assert_ok!(repo.create(&object(water_quality_payload())).await);
        let fetched = assert_ok!(repo.get_by_id(created.id).await);

        assert_eq!(fetched, Some(created.clone()));
        assert_eq!(created.ph, 7.2);
        assert_eq!(created.turbidity, 5.0);
        assert_eq!(created.ecoli, 10);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_report_status_defaults_to_pending() {
        let repo = SqlRepository::<Report>::new(test_gateway().await);

        let report = assert_ok!(
            repo.create(&object(json!({
                "title": "Got mampet",
                "description": "Air meluap ke jalan",
                "location": "-6.2,106.8",
                "status": null
            })))
            .await
        );

        assert_eq!(report.status, "pending");
        assert_eq!(report.location, "-6.2,106.8");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_field() {
        let repo = SqlRepository::<WaterQuality>::new(test_gateway().await);
        let mut payload = object(water_quality_payload());
        payload.remove("ph");

        let err = assert_err!(repo.create(&payload).await);
        assert!(matches!(err, AppError::Validation(_)));
        assert!(assert_ok!(repo.list().await).is_empty());
    }

    #[tokio::test]
    async fn test_system_fields_in_payload_are_ignored() {
        let repo = SqlRepository::<WaterQuality>::new(test_gateway().await);
        let mut payload = object(water_quality_payload());
        payload.insert("id".to_string(), json!(500));
        payload.insert("createdAt".to_string(), json!("1999-01-01"));

        let created = assert_ok!(repo.create(&payload).await);
        assert_eq!(created.id, 1);
        assert_ne!(created.created_at.format("%Y").to_string(), "1999");

        let affected = assert_ok!(repo.update(created.id, &object(json!({ "id": 9 }))).await);
        assert_eq!(affected, 1);
        assert!(assert_ok!(repo.get_by_id(1).await).is_some());
        assert!(assert_ok!(repo.get_by_id(9).await).is_none());
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let repo = SqlRepository::<WasteManagement>::new(test_gateway().await);
        let created = assert_ok!(repo.create(&object(waste_management_payload())).await);

        let affected = assert_ok!(
            repo.update(created.id, &object(json!({ "paperWaste": 250.5 }))).await
        );
        assert_eq!(affected, 1);

        let updated = assert_ok!(repo.get_by_id(created.id).await).unwrap();
        assert_eq!(updated.paper_waste, 250.5);
        assert_eq!(updated.organic_waste, created.organic_waste);
        assert_eq!(updated.plastic_waste, created.plastic_waste);
        assert_eq!(updated.metal_waste, created.metal_waste);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_unknown_id_affects_no_rows() {
        let repo = SqlRepository::<WaterQuality>::new(test_gateway().await);

        assert_eq!(assert_ok!(repo.get_by_id(123).await), None);
        assert_eq!(
            assert_ok!(repo.update(123, &object(json!({ "ph": 6.9 }))).await),
            0
        );
        assert_eq!(assert_ok!(repo.delete(123).await), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_then_not_listed() {
        let repo = SqlRepository::<WaterQuality>::new(test_gateway().await);
        let kept = assert_ok!(repo.create(&object(water_quality_payload())).await);
        let removed = assert_ok!(repo.create(&object(water_quality_payload())).await);

        assert_eq!(assert_ok!(repo.delete(removed.id).await), 1);
        assert_eq!(assert_ok!(repo.delete(removed.id).await), 0);

        assert_eq!(assert_ok!(repo.get_by_id(removed.id).await), None);
        assert_eq!(assert_ok!(repo.list().await), vec![kept]);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_as_database_error() {
        let gateway = test_gateway().await;
        let repo = SqlRepository::<Report>::new(Arc::clone(&gateway));
        gateway.close().await;

        let err = assert_err!(repo.list().await);
        assert!(matches!(err, AppError::Database(_)));
    }
}
