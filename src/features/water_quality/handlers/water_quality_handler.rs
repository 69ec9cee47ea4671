use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RecordId};
use crate::core::repository::{MutableRecordRepository, RecordRepository};
use crate::features::water_quality::dtos::{CreateWaterQualityDto, UpdateWaterQualityDto};
use crate::features::water_quality::models::{WaterQuality, WATER_QUALITY_SCHEMA};
use crate::features::water_quality::WaterQualityRepository;
use crate::shared::types::MessageResponse;

/// List all water quality records
#[utoipa::path(
    get,
    path = "/api/water-quality",
    responses(
        (status = 200, description = "List of water quality records", body = Vec<WaterQuality>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "water-quality"
)]
pub async fn list_water_quality(
    State(repo): State<Arc<WaterQualityRepository>>,
) -> Result<Json<Vec<WaterQuality>>> {
    let records = repo.list().await?;
    Ok(Json(records))
}

/// Get a water quality record by ID
#[utoipa::path(
    get,
    path = "/api/water-quality/{id}",
    params(
        ("id" = i64, Path, description = "Water quality record ID")
    ),
    responses(
        (status = 200, description = "Record found", body = WaterQuality),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 404, description = "Record not found", body = MessageResponse)
    ),
    tag = "water-quality"
)]
pub async fn get_water_quality(
    State(repo): State<Arc<WaterQualityRepository>>,
    RecordId(id): RecordId,
) -> Result<Json<WaterQuality>> {
    repo.get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(WATER_QUALITY_SCHEMA.not_found_message()))
}

/// Record a new water sample
#[utoipa::path(
    post,
    path = "/api/water-quality",
    request_body = CreateWaterQualityDto,
    responses(
        (status = 201, description = "Record created", body = WaterQuality),
        (status = 400, description = "Validation or write failure", body = MessageResponse)
    ),
    tag = "water-quality"
)]
pub async fn create_water_quality(
    State(repo): State<Arc<WaterQualityRepository>>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<(StatusCode, Json<WaterQuality>)> {
    let record = repo.create(&payload).await.map_err(AppError::on_write)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update the supplied fields of a water quality record
#[utoipa::path(
    put,
    path = "/api/water-quality/{id}",
    params(
        ("id" = i64, Path, description = "Water quality record ID")
    ),
    request_body = UpdateWaterQualityDto,
    responses(
        (status = 200, description = "Record updated", body = MessageResponse),
        (status = 400, description = "Validation or write failure", body = MessageResponse),
        (status = 404, description = "Record not found", body = MessageResponse)
    ),
    tag = "water-quality"
)]
pub async fn update_water_quality(
    State(repo): State<Arc<WaterQualityRepository>>,
    RecordId(id): RecordId,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<Json<MessageResponse>> {
    let affected = repo
        .update(id, &payload)
        .await
        .map_err(AppError::on_write)?;

    if affected == 0 {
        return Err(AppError::NotFound(WATER_QUALITY_SCHEMA.not_found_message()));
    }
    Ok(Json(MessageResponse::new(
        WATER_QUALITY_SCHEMA.updated_message(),
    )))
}

/// Delete a water quality record
#[utoipa::path(
    delete,
    path = "/api/water-quality/{id}",
    params(
        ("id" = i64, Path, description = "Water quality record ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 404, description = "Record not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "water-quality"
)]
pub async fn delete_water_quality(
    State(repo): State<Arc<WaterQualityRepository>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>> {
    if repo.delete(id).await? == 0 {
        return Err(AppError::NotFound(WATER_QUALITY_SCHEMA.not_found_message()));
    }
    Ok(Json(MessageResponse::new(
        WATER_QUALITY_SCHEMA.deleted_message(),
    )))
}
