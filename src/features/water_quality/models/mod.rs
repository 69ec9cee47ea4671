mod water_quality;

pub use water_quality::{WaterQuality, WATER_QUALITY_SCHEMA};
