use utoipa::{Modify, OpenApi};

use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::waste_management::{
    dtos as waste_dtos, handlers as waste_handlers, models as waste_models,
};
use crate::features::water_quality::{
    dtos as water_dtos, handlers as water_handlers, models as water_models,
};
use crate::shared::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::list_reports,
        reports_handlers::create_report,
        reports_handlers::get_report,
        // Water quality
        water_handlers::list_water_quality,
        water_handlers::get_water_quality,
        water_handlers::create_water_quality,
        water_handlers::update_water_quality,
        water_handlers::delete_water_quality,
        // Waste management
        waste_handlers::list_waste_management,
        waste_handlers::get_waste_management,
        waste_handlers::create_waste_management,
        waste_handlers::update_waste_management,
        waste_handlers::delete_waste_management,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            // Reports
            reports_models::Report,
            reports_dtos::CreateReportDto,
            // Water quality
            water_models::WaterQuality,
            water_dtos::CreateWaterQualityDto,
            water_dtos::UpdateWaterQualityDto,
            // Waste management
            waste_models::WasteManagement,
            waste_dtos::CreateWasteManagementDto,
            waste_dtos::UpdateWasteManagementDto,
        )
    ),
    tags(
        (name = "reports", description = "Citizen sanitation reports"),
        (name = "water-quality", description = "Water quality samples"),
        (name = "waste-management", description = "Waste collection records"),
    ),
    info(
        title = "Sanitasi Pintar API",
        version = "0.1.0",
        description = "Sanitation monitoring API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
