//! Resource features, one per persisted entity kind.

pub mod reports;
pub mod waste_management;
pub mod water_quality;

use std::sync::Arc;

use axum::Router;

use crate::core::database::PersistenceGateway;
use crate::core::repository::Entity;
use crate::core::schema::EntitySchema;
use crate::features::reports::models::Report;
use crate::features::reports::ReportRepository;
use crate::features::waste_management::models::WasteManagement;
use crate::features::waste_management::WasteManagementRepository;
use crate::features::water_quality::models::WaterQuality;
use crate::features::water_quality::WaterQualityRepository;

/// Schemas of every entity kind, registered with the gateway at startup
pub fn schemas() -> Vec<&'static EntitySchema> {
    vec![Report::SCHEMA, WaterQuality::SCHEMA, WasteManagement::SCHEMA]
}

/// Resource routes for all entity kinds over one shared gateway
pub fn routes(gateway: Arc<PersistenceGateway>) -> Router {
    let report_repository = Arc::new(ReportRepository::new(Arc::clone(&gateway)));
    let water_quality_repository = Arc::new(WaterQualityRepository::new(Arc::clone(&gateway)));
    let waste_management_repository = Arc::new(WasteManagementRepository::new(gateway));

    Router::new()
        .merge(reports::routes::routes(report_repository))
        .merge(water_quality::routes::routes(water_quality_repository))
        .merge(waste_management::routes::routes(waste_management_repository))
}
