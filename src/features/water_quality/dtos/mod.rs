mod water_quality_dto;

pub use water_quality_dto::{CreateWaterQualityDto, UpdateWaterQualityDto};
