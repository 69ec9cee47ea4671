use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RecordId};
use crate::core::repository::{MutableRecordRepository, RecordRepository};
use crate::features::waste_management::dtos::{CreateWasteManagementDto, UpdateWasteManagementDto};
use crate::features::waste_management::models::{WasteManagement, WASTE_MANAGEMENT_SCHEMA};
use crate::features::waste_management::WasteManagementRepository;
use crate::shared::types::MessageResponse;

/// List all waste management records
#[utoipa::path(
    get,
    path = "/api/waste-management",
    responses(
        (status = 200, description = "List of waste management records", body = Vec<WasteManagement>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "waste-management"
)]
pub async fn list_waste_management(
    State(repo): State<Arc<WasteManagementRepository>>,
) -> Result<Json<Vec<WasteManagement>>> {
    let records = repo.list().await?;
    Ok(Json(records))
}

/// Get a waste management record by ID
#[utoipa::path(
    get,
    path = "/api/waste-management/{id}",
    params(
        ("id" = i64, Path, description = "Waste management record ID")
    ),
    responses(
        (status = 200, description = "Record found", body = WasteManagement),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 404, description = "Record not found", body = MessageResponse)
    ),
    tag = "waste-management"
)]
pub async fn get_waste_management(
    State(repo): State<Arc<WasteManagementRepository>>,
    RecordId(id): RecordId,
) -> Result<Json<WasteManagement>> {
    repo.get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(WASTE_MANAGEMENT_SCHEMA.not_found_message()))
}

/// Record a new waste collection event
#[utoipa::path(
    post,
    path = "/api/waste-management",
    request_body = CreateWasteManagementDto,
    responses(
        (status = 201, description = "Record created", body = WasteManagement),
        (status = 400, description = "Validation or write failure", body = MessageResponse)
    ),
    tag = "waste-management"
)]
pub async fn create_waste_management(
    State(repo): State<Arc<WasteManagementRepository>>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<(StatusCode, Json<WasteManagement>)> {
    let record = repo.create(&payload).await.map_err(AppError::on_write)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update the supplied fields of a waste management record
#[utoipa::path(
    put,
    path = "/api/waste-management/{id}",
    params(
        ("id" = i64, Path, description = "Waste management record ID")
    ),
    request_body = UpdateWasteManagementDto,
    responses(
        (status = 200, description = "Record updated", body = MessageResponse),
        (status = 400, description = "Validation or write failure", body = MessageResponse),
        (status = 404, description = "Record not found", body = MessageResponse)
    ),
    tag = "waste-management"
)]
pub async fn update_waste_management(
    State(repo): State<Arc<WasteManagementRepository>>,
    RecordId(id): RecordId,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<Json<MessageResponse>> {
    let affected = repo
        .update(id, &payload)
        .await
        .map_err(AppError::on_write)?;

    if affected == 0 {
        return Err(AppError::NotFound(WASTE_MANAGEMENT_SCHEMA.not_found_message()));
    }
    Ok(Json(MessageResponse::new(
        WASTE_MANAGEMENT_SCHEMA.updated_message(),
    )))
}

/// Delete a waste management record
#[utoipa::path(
    delete,
    path = "/api/waste-management/{id}",
    params(
        ("id" = i64, Path, description = "Waste management record ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 404, description = "Record not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "waste-management"
)]
pub async fn delete_waste_management(
    State(repo): State<Arc<WasteManagementRepository>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>> {
    if repo.delete(id).await? == 0 {
        return Err(AppError::NotFound(WASTE_MANAGEMENT_SCHEMA.not_found_message()));
    }
    Ok(Json(MessageResponse::new(
        WASTE_MANAGEMENT_SCHEMA.deleted_message(),
    )))
}
