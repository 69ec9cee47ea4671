use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RecordId};
use crate::core::repository::RecordRepository;
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::{Report, REPORT_SCHEMA};
use crate::features::reports::ReportRepository;
use crate::shared::types::MessageResponse;

/// List all citizen reports
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "List of reports", body = Vec<Report>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "reports"
)]
pub async fn list_reports(State(repo): State<Arc<ReportRepository>>) -> Result<Json<Vec<Report>>> {
    let reports = repo.list().await?;
    Ok(Json(reports))
}

/// Submit a new citizen report
///
/// `status` defaults to "pending" when omitted.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report created", body = Report),
        (status = 400, description = "Validation or write failure", body = MessageResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(repo): State<Arc<ReportRepository>>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<(StatusCode, Json<Report>)> {
    let report = repo.create(&payload).await.map_err(AppError::on_write)?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Get a report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = Report),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 404, description = "Report not found", body = MessageResponse)
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(repo): State<Arc<ReportRepository>>,
    RecordId(id): RecordId,
) -> Result<Json<Report>> {
    repo.get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(REPORT_SCHEMA.not_found_message()))
}
