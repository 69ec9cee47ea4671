mod waste_management;

pub use waste_management::{WasteManagement, WASTE_MANAGEMENT_SCHEMA};
