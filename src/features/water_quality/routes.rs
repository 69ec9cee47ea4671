use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::water_quality::handlers;
use crate::features::water_quality::WaterQualityRepository;

/// Create routes for the water quality feature
pub fn routes(repository: Arc<WaterQualityRepository>) -> Router {
    Router::new()
        .route(
            "/api/water-quality",
            get(handlers::list_water_quality).post(handlers::create_water_quality),
        )
        .route(
            "/api/water-quality/{id}",
            get(handlers::get_water_quality)
                .put(handlers::update_water_quality)
                .delete(handlers::delete_water_quality),
        )
        .with_state(repository)
}
