use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reports::handlers;
use crate::features::reports::ReportRepository;

/// Create routes for the reports feature
///
/// Only list, create and get are exposed for reports.
pub fn routes(repository: Arc<ReportRepository>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(repository)
}
